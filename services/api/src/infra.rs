use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talent_center::config::AppConfig;
use talent_center::error::AppError;
use talent_center::workflows::hiring::{FileStateStorage, HiringFlowService, LoadOutcome};
use talent_center::workflows::talent::AvailabilityFilter;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type FileFlowService = HiringFlowService<FileStateStorage>;

/// Opens the persisted flow under `state_dir`, logging how the snapshot was restored.
pub(crate) fn open_flow_service(state_dir: &Path) -> FileFlowService {
    let service = HiringFlowService::open(Arc::new(FileStateStorage::new(state_dir)));
    match service.snapshot().map(|snapshot| snapshot.load) {
        Ok(LoadOutcome::Restored) => info!(dir = %state_dir.display(), "restored hiring flow"),
        Ok(LoadOutcome::Empty) => info!(dir = %state_dir.display(), "starting a new hiring flow"),
        Ok(LoadOutcome::Discarded { reason }) => {
            warn!(dir = %state_dir.display(), %reason, "discarded unreadable hiring flow")
        }
        Err(err) => warn!(error = %err, "hiring flow unavailable"),
    }
    service
}

/// Loads configuration for one-shot CLI commands, honoring a `--state-dir` override.
pub(crate) fn cli_flow_service(state_dir: Option<&Path>) -> Result<FileFlowService, AppError> {
    match state_dir {
        Some(dir) => Ok(open_flow_service(dir)),
        None => {
            let config = AppConfig::load()?;
            Ok(open_flow_service(&config.storage.state_dir))
        }
    }
}

pub(crate) fn parse_availability(raw: &str) -> Result<AvailabilityFilter, String> {
    AvailabilityFilter::try_from(raw.trim().to_string())
}

pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("<unserializable: {err}>"))
}
