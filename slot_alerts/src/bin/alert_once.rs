use shared_kernel::configuration::config;
use slot_alerts::config::Settings;
use slot_alerts::run::SlotAlerts;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("slot_alerts")?;
    let result = start().await;
    shared_kernel::tracing::shutdown_global_tracer_provider();
    result
}

async fn start() -> anyhow::Result<()> {
    let settings = config::<Settings>()?;
    let date = settings.availability.target_date()?;
    let alerts = SlotAlerts::from_settings(settings)?;

    info!(%date, "Slot alerts started");
    let report = alerts.run(date).await;
    info!(
        regions = report.regions.len(),
        notified = report.notified().count(),
        "Slot alerts finished"
    );
    Ok(())
}
