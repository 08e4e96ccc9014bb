use notifications::config::TelegramConfig;
use serde::Deserialize;
use shared_kernel::http_client::HttpSettings;
use slot_availability::config::{AvailabilityConfig, LocationsConfig};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub http: HttpSettings,
    pub locations: LocationsConfig,
    pub availability: AvailabilityConfig,
    pub telegram: TelegramConfig,
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use shared_kernel::configuration::config_from_directory;
    use shared_kernel::kolkata_date::DateFormat;
    use std::path::Path;

    #[test]
    fn test_shipped_configuration_is_complete() {
        let directory = Path::new(env!("CARGO_MANIFEST_DIR")).join("../configuration");

        let settings = config_from_directory::<Settings>(&directory).unwrap();

        assert_eq!(settings.locations.state_id, 17);
        assert_eq!(settings.availability.date_format, DateFormat::DayMonthYear);
        assert!(settings.http.user_agent.starts_with("Mozilla/5.0"));
        assert!(settings.availability.target_date().is_ok());
    }
}
