use shared_kernel::{integer_key, string_key};

integer_key!(RegionId);
integer_key!(CenterId);
string_key!(SessionId);

/// A monitored district.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
}

/// One bookable time window at one center on one date.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    pub id: SessionId,
    pub date: String,
    pub available_capacity: u32,
    pub min_age_limit: u32,
    pub vaccine: String,
    pub slots: Vec<String>,
    pub fee_type: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Session {
    pub fn has_capacity(&self) -> bool {
        self.available_capacity > 0
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaccineFee {
    pub vaccine: String,
    pub fee: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Center {
    pub id: CenterId,
    pub name: String,
    pub address: String,
    pub block_name: String,
    pub pincode: u32,
    pub fee_type: String,
    pub vaccine_fees: Vec<VaccineFee>,
    pub sessions: Vec<Session>,
}

impl Center {
    /// A center is available when at least one of its sessions has capacity left.
    pub fn is_available(&self) -> bool {
        self.sessions.iter().any(Session::has_capacity)
    }
}
