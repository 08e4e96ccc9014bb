//! The seams between the orchestrator and the components it drives.

use async_trait::async_trait;
use notifications::contracts::send_notification::telegram::TelegramNotifier;
use notifications::contracts::send_notification::NotifyError;
use shared_kernel::kolkata_date::KolkataDate;
use slot_availability::contracts::get_available_centers::AvailableCentersFinder;
use slot_availability::contracts::list_regions::RegionsLister;
use slot_availability::contracts::FetchError;
use slot_availability::data_transfer::{Center, Region};

#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn fetch_regions(&self) -> Result<Vec<Region>, FetchError>;
}

#[async_trait]
pub trait AvailabilityFetcher: Send + Sync {
    /// Centers of `region` with at least one open session on `date`.
    async fn fetch_availability(
        &self,
        region: &Region,
        date: KolkataDate,
    ) -> Result<Vec<Center>, FetchError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, region: &Region, centers: &[Center]) -> Result<(), NotifyError>;
}

#[async_trait]
impl LocationSource for RegionsLister {
    async fn fetch_regions(&self) -> Result<Vec<Region>, FetchError> {
        RegionsLister::fetch_regions(self).await
    }
}

#[async_trait]
impl AvailabilityFetcher for AvailableCentersFinder {
    async fn fetch_availability(
        &self,
        region: &Region,
        date: KolkataDate,
    ) -> Result<Vec<Center>, FetchError> {
        AvailableCentersFinder::fetch_availability(self, region, date).await
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, region: &Region, centers: &[Center]) -> Result<(), NotifyError> {
        TelegramNotifier::notify(self, region, centers).await
    }
}
