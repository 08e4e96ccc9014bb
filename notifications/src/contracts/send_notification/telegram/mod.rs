use crate::config::TelegramConfig;
use crate::contracts::send_notification::{NotifyError, SlotsOpenedMessage};
use anyhow::Context;
use secrecy::ExposeSecret;
use shared_kernel::http_client::{HttpClient, HttpClientError};
use slot_availability::data_transfer::{Center, Region};
use url::Url;

/// Posts alerts to a Telegram channel through the bot `sendMessage` method.
pub struct TelegramNotifier {
    client: HttpClient,
    settings: TelegramConfig,
}

impl TelegramNotifier {
    pub fn new(client: HttpClient, settings: TelegramConfig) -> Self {
        Self { client, settings }
    }

    /// The message travels url-encoded in the `text` query parameter.
    /// The returned url embeds the bot token and must not be logged.
    fn send_message_url(&self, message: &SlotsOpenedMessage) -> Result<Url, NotifyError> {
        let host = self.settings.host.trim_end_matches('/');
        let send_message = format!(
            "{host}/bot{}/sendMessage",
            self.settings.bot_token.expose_secret()
        );
        Url::parse_with_params(
            &send_message,
            &[
                ("chat_id", self.settings.chat_id.as_str()),
                ("text", message.as_ref()),
            ],
        )
        .with_context(|| format!("Invalid telegram host {host}"))
        .map_err(NotifyError::Network)
    }

    #[tracing::instrument(skip(self, region, centers), fields(region = %region.name, centers = centers.len()), level = "debug")]
    pub async fn notify(&self, region: &Region, centers: &[Center]) -> Result<(), NotifyError> {
        let message = SlotsOpenedMessage::new(region, centers);
        let url = self.send_message_url(&message)?;

        let response = self
            .client
            .get_text(url)
            .await
            .map_err(|err| match err {
                HttpClientError::Network(err) | HttpClientError::Decode(err) => {
                    NotifyError::Network(err)
                }
                HttpClientError::HTTPBuilderError(err) => {
                    NotifyError::Network(anyhow::anyhow!(err))
                }
            })?;
        tracing::info!(%response, chat_id = %self.settings.chat_id, "Telegram API");
        Ok(())
    }
}
