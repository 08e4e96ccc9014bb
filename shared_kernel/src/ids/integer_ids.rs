#[macro_export]
macro_rules! integer_key {
    ($TypeName: ident) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $TypeName(u64);

        impl $TypeName {
            pub fn inner(&self) -> u64 {
                self.0
            }
        }

        impl PartialEq<u64> for $TypeName {
            fn eq(&self, other: &u64) -> bool {
                self.inner() == *other
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<u64> for $TypeName {
            fn from(id: u64) -> Self {
                $TypeName(id)
            }
        }

        impl From<$TypeName> for u64 {
            fn from(id: $TypeName) -> Self {
                id.inner()
            }
        }
    };
}
