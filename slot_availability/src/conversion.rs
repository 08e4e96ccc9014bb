use crate::data_transfer::{Center, Region, Session, VaccineFee};
use crate::wire::{CenterPayload, District, SessionPayload, VaccineFeePayload, WireInteger};
use itertools::Itertools;

impl WireInteger {
    fn to_u64(&self, field: &str) -> Result<u64, String> {
        match self {
            WireInteger::Number(value) => Ok(*value),
            WireInteger::Text(text) => text
                .trim()
                .parse::<u64>()
                .map_err(|err| format!("{field}: expected an integer, found {text:?} ({err})")),
        }
    }

    fn to_u32(&self, field: &str) -> Result<u32, String> {
        let value = self.to_u64(field)?;
        u32::try_from(value).map_err(|_| format!("{field}: {value} is out of range"))
    }
}

impl TryFrom<District> for Region {
    type Error = String;

    fn try_from(value: District) -> Result<Self, Self::Error> {
        Ok(Region {
            id: value.district_id.to_u64("district_id")?.into(),
            name: value.district_name,
        })
    }
}

impl From<VaccineFeePayload> for VaccineFee {
    fn from(value: VaccineFeePayload) -> Self {
        VaccineFee {
            vaccine: value.vaccine,
            fee: value.fee,
        }
    }
}

fn session_from_payload(value: SessionPayload, center_fee_type: &str) -> Result<Session, String> {
    Ok(Session {
        available_capacity: value.available_capacity.to_u32("available_capacity")?,
        min_age_limit: value.min_age_limit.to_u32("min_age_limit")?,
        id: value.session_id.into(),
        date: value.date,
        vaccine: value.vaccine,
        slots: value.slots,
        fee_type: value
            .fee_type
            .unwrap_or_else(|| center_fee_type.to_string()),
        from: value.from,
        to: value.to,
    })
}

impl TryFrom<CenterPayload> for Center {
    type Error = String;

    fn try_from(value: CenterPayload) -> Result<Self, Self::Error> {
        let id = value.center_id.to_u64("center_id")?;
        let sessions = value
            .sessions
            .into_iter()
            .map(|session| session_from_payload(session, &value.fee_type))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("center {id}: {err}"))?;
        Ok(Center {
            id: id.into(),
            pincode: value
                .pincode
                .to_u32("pincode")
                .map_err(|err| format!("center {id}: {err}"))?,
            name: value.name,
            address: value.address,
            block_name: value.block_name,
            fee_type: value.fee_type,
            vaccine_fees: value.vaccine_fees.into_iter().map(Into::into).collect_vec(),
            sessions,
        })
    }
}

impl From<Region> for District {
    fn from(value: Region) -> Self {
        District {
            district_id: WireInteger::Number(value.id.inner()),
            district_name: value.name,
        }
    }
}

impl From<Session> for SessionPayload {
    fn from(value: Session) -> Self {
        SessionPayload {
            session_id: value.id.inner(),
            date: value.date,
            available_capacity: WireInteger::Number(value.available_capacity.into()),
            min_age_limit: WireInteger::Number(value.min_age_limit.into()),
            vaccine: value.vaccine,
            slots: value.slots,
            fee_type: Some(value.fee_type),
            from: value.from,
            to: value.to,
        }
    }
}

impl From<Center> for CenterPayload {
    fn from(value: Center) -> Self {
        CenterPayload {
            center_id: WireInteger::Number(value.id.inner()),
            name: value.name,
            address: value.address,
            block_name: value.block_name,
            pincode: WireInteger::Number(value.pincode.into()),
            fee_type: value.fee_type,
            vaccine_fees: value
                .vaccine_fees
                .into_iter()
                .map(|fee| VaccineFeePayload {
                    vaccine: fee.vaccine,
                    fee: fee.fee,
                })
                .collect_vec(),
            sessions: value.sessions.into_iter().map(Into::into).collect_vec(),
        }
    }
}
