use crate::config::Settings;
use crate::sources::{AvailabilityFetcher, LocationSource, Notifier};
use notifications::contracts::send_notification::telegram::TelegramNotifier;
use notifications::contracts::send_notification::NotifyError;
use shared_kernel::http_client::HttpClient;
use shared_kernel::kolkata_date::KolkataDate;
use slot_availability::contracts::get_available_centers::AvailableCentersFinder;
use slot_availability::contracts::list_regions::RegionsLister;
use slot_availability::contracts::FetchError;
use slot_availability::data_transfer::{Center, Region};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum RegionOutcome {
    Notified { centers: Vec<Center> },
    NoAvailability,
    AvailabilityFailed(FetchError),
    NotificationFailed(NotifyError),
}

#[derive(Debug)]
pub struct RegionReport {
    pub region: Region,
    pub outcome: RegionOutcome,
}

/// What a single pass did, one entry per region in the order processed.
#[derive(Debug, Default)]
pub struct RunReport {
    pub regions_error: Option<FetchError>,
    pub regions: Vec<RegionReport>,
}

impl RunReport {
    pub fn notified(&self) -> impl Iterator<Item = &RegionReport> {
        self.regions
            .iter()
            .filter(|report| matches!(report.outcome, RegionOutcome::Notified { .. }))
    }
}

/// Polls every region once and alerts for those with open slots.
/// Failures are logged and the pass moves on to the next region.
pub struct SlotAlerts {
    location_source: Arc<dyn LocationSource>,
    availability_fetcher: Arc<dyn AvailabilityFetcher>,
    notifier: Arc<dyn Notifier>,
}

impl SlotAlerts {
    pub fn new(
        location_source: Arc<dyn LocationSource>,
        availability_fetcher: Arc<dyn AvailabilityFetcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            location_source,
            availability_fetcher,
            notifier,
        }
    }

    pub fn from_settings(settings: Settings) -> anyhow::Result<Self> {
        let client = HttpClient::new(&settings.http)?;
        Ok(Self::new(
            Arc::new(RegionsLister::new(client.clone(), settings.locations)),
            Arc::new(AvailableCentersFinder::new(
                client.clone(),
                settings.availability,
            )),
            Arc::new(TelegramNotifier::new(client, settings.telegram)),
        ))
    }

    #[tracing::instrument(skip(self, date), fields(%date), level = "info")]
    pub async fn run(&self, date: KolkataDate) -> RunReport {
        let regions = match self.location_source.fetch_regions().await {
            Ok(regions) => regions,
            Err(err) => {
                error!("Failed to fetch regions: {err}");
                return RunReport {
                    regions_error: Some(err),
                    regions: vec![],
                };
            }
        };

        let mut reports = Vec::with_capacity(regions.len());
        for region in regions {
            let outcome = self.check_region(&region, date).await;
            reports.push(RegionReport { region, outcome });
        }
        RunReport {
            regions_error: None,
            regions: reports,
        }
    }

    async fn check_region(&self, region: &Region, date: KolkataDate) -> RegionOutcome {
        let centers = match self
            .availability_fetcher
            .fetch_availability(region, date)
            .await
        {
            Ok(centers) => centers,
            Err(err) => {
                warn!(region = %region.name, "Skipping region: {err}");
                return RegionOutcome::AvailabilityFailed(err);
            }
        };

        if centers.is_empty() {
            info!(region = %region.name, "There are no centers available");
            return RegionOutcome::NoAvailability;
        }

        info!(region = %region.name, centers = centers.len(), "Notifying channel");
        match self.notifier.notify(region, &centers).await {
            Ok(()) => RegionOutcome::Notified { centers },
            Err(err) => {
                error!(region = %region.name, "Failed to notify channel: {err}");
                RegionOutcome::NotificationFailed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RegionOutcome, SlotAlerts};
    use crate::sources::{AvailabilityFetcher, LocationSource, Notifier};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use notifications::contracts::send_notification::NotifyError;
    use shared_kernel::kolkata_date::KolkataDate;
    use slot_availability::contracts::FetchError;
    use slot_availability::data_transfer::{Center, Region, Session};
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    struct FixedRegions(Vec<Region>);

    #[async_trait]
    impl LocationSource for FixedRegions {
        async fn fetch_regions(&self) -> Result<Vec<Region>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct UnreachableRegions;

    #[async_trait]
    impl LocationSource for UnreachableRegions {
        async fn fetch_regions(&self) -> Result<Vec<Region>, FetchError> {
            Err(FetchError::Network(anyhow!("connection refused")))
        }
    }

    #[derive(Default)]
    struct FakeAvailability {
        centers: HashMap<u64, Vec<Center>>,
        unreachable: HashSet<u64>,
        requested: Mutex<Vec<u64>>,
    }

    #[async_trait]
    impl AvailabilityFetcher for FakeAvailability {
        async fn fetch_availability(
            &self,
            region: &Region,
            _date: KolkataDate,
        ) -> Result<Vec<Center>, FetchError> {
            let id = region.id.inner();
            self.requested.lock().unwrap().push(id);
            if self.unreachable.contains(&id) {
                return Err(FetchError::Network(anyhow!("operation timed out")));
            }
            Ok(self.centers.get(&id).cloned().unwrap_or_default())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        calls: Mutex<Vec<(Region, Vec<Center>)>>,
        failing: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, region: &Region, centers: &[Center]) -> Result<(), NotifyError> {
            self.calls
                .lock()
                .unwrap()
                .push((region.clone(), centers.to_vec()));
            if self.failing {
                return Err(NotifyError::Network(anyhow!("chat not found")));
            }
            Ok(())
        }
    }

    fn region(id: u64, name: &str) -> Region {
        Region {
            id: id.into(),
            name: name.to_string(),
        }
    }

    fn center_with_capacity(name: &str, available_capacity: u32) -> Center {
        Center {
            id: 603425.into(),
            name: name.to_string(),
            address: "Vengola P O".to_string(),
            block_name: "Vengola".to_string(),
            pincode: 683556,
            fee_type: "Free".to_string(),
            vaccine_fees: vec![],
            sessions: vec![Session {
                id: "3b4cf1e9".into(),
                date: "09-05-2021".to_string(),
                available_capacity,
                min_age_limit: 18,
                vaccine: "COVISHIELD".to_string(),
                slots: vec!["09:00AM-11:00AM".to_string()],
                fee_type: "Free".to_string(),
                from: None,
                to: None,
            }],
        }
    }

    fn date() -> KolkataDate {
        "2021-05-09".parse().unwrap()
    }

    fn alerts(
        regions: Vec<Region>,
        availability: Arc<FakeAvailability>,
        notifier: Arc<RecordingNotifier>,
    ) -> SlotAlerts {
        SlotAlerts::new(Arc::new(FixedRegions(regions)), availability, notifier)
    }

    #[tokio::test]
    async fn test_region_without_availability_is_not_notified() {
        let notifier = Arc::new(RecordingNotifier::default());
        let availability = Arc::new(FakeAvailability::default());

        let report = alerts(
            vec![region(17, "Ernakulam")],
            availability.clone(),
            notifier.clone(),
        )
        .run(date())
        .await;

        assert!(notifier.calls.lock().unwrap().is_empty());
        assert_eq!(*availability.requested.lock().unwrap(), vec![17]);
        assert!(matches!(
            report.regions[0].outcome,
            RegionOutcome::NoAvailability
        ));
    }

    #[tokio::test]
    async fn test_region_with_availability_is_notified_once_with_its_centers() {
        let notifier = Arc::new(RecordingNotifier::default());
        let center = center_with_capacity("FHC Vengola", 5);
        let availability = Arc::new(FakeAvailability {
            centers: HashMap::from([(307, vec![center.clone()])]),
            ..Default::default()
        });

        let report = alerts(
            vec![region(307, "Ernakulam")],
            availability,
            notifier.clone(),
        )
        .run(date())
        .await;

        let calls = notifier.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (region(307, "Ernakulam"), vec![center]));
        assert_eq!(report.notified().count(), 1);
    }

    #[tokio::test]
    async fn test_failed_region_is_skipped_and_the_next_one_is_processed() {
        let notifier = Arc::new(RecordingNotifier::default());
        let availability = Arc::new(FakeAvailability {
            centers: HashMap::from([(296, vec![center_with_capacity("GH Thrissur", 3)])]),
            unreachable: HashSet::from([307]),
            ..Default::default()
        });

        let report = alerts(
            vec![region(307, "Ernakulam"), region(296, "Thrissur")],
            availability.clone(),
            notifier.clone(),
        )
        .run(date())
        .await;

        assert_eq!(*availability.requested.lock().unwrap(), vec![307, 296]);
        assert!(matches!(
            report.regions[0].outcome,
            RegionOutcome::AvailabilityFailed(FetchError::Network(_))
        ));
        let calls = notifier.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, region(296, "Thrissur"));
    }

    #[tokio::test]
    async fn test_every_region_with_availability_gets_its_own_notification() {
        let notifier = Arc::new(RecordingNotifier::default());
        let availability = Arc::new(FakeAvailability {
            centers: HashMap::from([
                (301, vec![center_with_capacity("GH Alappuzha", 1)]),
                (307, vec![center_with_capacity("FHC Vengola", 5)]),
            ]),
            ..Default::default()
        });

        alerts(
            vec![
                region(301, "Alappuzha"),
                region(303, "Idukki"),
                region(307, "Ernakulam"),
            ],
            availability,
            notifier.clone(),
        )
        .run(date())
        .await;

        let notified = notifier
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|(region, _)| region.id.inner())
            .collect::<Vec<_>>();
        assert_eq!(notified, vec![301, 307]);
    }

    #[tokio::test]
    async fn test_delivery_failure_does_not_stop_the_run() {
        let notifier = Arc::new(RecordingNotifier {
            failing: true,
            ..Default::default()
        });
        let availability = Arc::new(FakeAvailability {
            centers: HashMap::from([
                (301, vec![center_with_capacity("GH Alappuzha", 1)]),
                (307, vec![center_with_capacity("FHC Vengola", 5)]),
            ]),
            ..Default::default()
        });

        let report = alerts(
            vec![region(301, "Alappuzha"), region(307, "Ernakulam")],
            availability,
            notifier.clone(),
        )
        .run(date())
        .await;

        assert_eq!(notifier.calls.lock().unwrap().len(), 2);
        assert!(report
            .regions
            .iter()
            .all(|report| matches!(report.outcome, RegionOutcome::NotificationFailed(_))));
    }

    #[tokio::test]
    async fn test_failure_to_list_regions_ends_the_run_quietly() {
        let notifier = Arc::new(RecordingNotifier::default());
        let availability = Arc::new(FakeAvailability::default());

        let report = SlotAlerts::new(
            Arc::new(UnreachableRegions),
            availability.clone(),
            notifier.clone(),
        )
        .run(date())
        .await;

        assert!(report.regions.is_empty());
        assert!(matches!(report.regions_error, Some(FetchError::Network(_))));
        assert!(availability.requested.lock().unwrap().is_empty());
        assert!(notifier.calls.lock().unwrap().is_empty());
    }
}
