use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct TelegramConfig {
    pub host: String,
    pub bot_token: Secret<String>,
    /// Channel the alerts are posted to, e.g. `@cowinalertskerala2021`.
    pub chat_id: String,
}
