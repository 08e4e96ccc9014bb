pub mod telegram;

use slot_availability::data_transfer::{Center, Region};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum NotifyError {
    #[error("network error: {0:#}")]
    Network(anyhow::Error),
}

/// The alert text for a region, listing every center with open slots.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlotsOpenedMessage(String);

impl SlotsOpenedMessage {
    pub fn new(region: &Region, centers: &[Center]) -> Self {
        let mut message = format!("Slots opened for district {}[", region.name);
        for center in centers {
            message.push_str("  ");
            message.push_str(&center.name);
            message.push_str(", ");
        }
        message.push(']');
        SlotsOpenedMessage(message)
    }
}

impl AsRef<str> for SlotsOpenedMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::SlotsOpenedMessage;
    use slot_availability::data_transfer::{Center, Region};

    pub(crate) fn center(name: &str) -> Center {
        Center {
            id: 1.into(),
            name: name.to_string(),
            address: "Aluva".to_string(),
            block_name: "Aluva".to_string(),
            pincode: 683101,
            fee_type: "Free".to_string(),
            vaccine_fees: vec![],
            sessions: vec![],
        }
    }

    pub(crate) fn ernakulam() -> Region {
        Region {
            id: 307.into(),
            name: "Ernakulam".to_string(),
        }
    }

    #[test]
    fn test_message_lists_region_and_every_center() {
        let message = SlotsOpenedMessage::new(
            &ernakulam(),
            &[center("GH Ernakulam"), center("PHC Kalady")],
        );

        assert_eq!(
            message.as_ref(),
            "Slots opened for district Ernakulam[  GH Ernakulam,   PHC Kalady, ]"
        );
    }

    #[test]
    fn test_message_without_centers_still_names_the_region() {
        let message = SlotsOpenedMessage::new(&ernakulam(), &[]);
        assert_eq!(message.as_ref(), "Slots opened for district Ernakulam[]");
    }
}
