//! Payload shapes of the slot API.

use serde::{Deserialize, Serialize};

/// Integer fields are delivered as json numbers by some deployments and as
/// strings holding a decimal number by others.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum WireInteger {
    Number(u64),
    Text(String),
}

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct DistrictsResponse {
    pub districts: Vec<District>,
}

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct District {
    pub district_id: WireInteger,
    pub district_name: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct CentersResponse {
    pub centers: Vec<CenterPayload>,
}

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct VaccineFeePayload {
    pub vaccine: String,
    pub fee: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct SessionPayload {
    pub session_id: String,
    pub date: String,
    pub available_capacity: WireInteger,
    pub min_age_limit: WireInteger,
    pub vaccine: String,
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct CenterPayload {
    pub center_id: WireInteger,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub block_name: String,
    pub pincode: WireInteger,
    pub fee_type: String,
    #[serde(default)]
    pub vaccine_fees: Vec<VaccineFeePayload>,
    #[serde(default)]
    pub sessions: Vec<SessionPayload>,
}
