pub mod integer_ids;
pub mod string_ids;
