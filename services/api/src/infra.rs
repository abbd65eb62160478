use jobguard::company::{CompanyDirectory, CompanyLookup};
use jobguard::config::CompanyConfig;
use jobguard::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured company table, falling back to the built-in one.
pub(crate) fn build_company_lookup(config: &CompanyConfig) -> Result<CompanyLookup, AppError> {
    let directory = match &config.stats_csv {
        Some(path) => {
            let directory = CompanyDirectory::from_path(path)?;
            info!(path = %path.display(), companies = directory.len(), "loaded company table");
            directory
        }
        None => CompanyDirectory::builtin(),
    };

    Ok(CompanyLookup::new(Arc::new(directory)))
}
