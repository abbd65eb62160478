use crate::cli::ServeArgs;
use crate::infra::{build_company_lookup, AppState};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jobguard::analysis::lexicon;
use jobguard::config::AppConfig;
use jobguard::error::AppError;
use jobguard::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if let Err(err) = lexicon::verify() {
        error!(%err, "lexicon failed integrity check");
        return Err(err.into());
    }

    let lookup = Arc::new(build_company_lookup(&config.company)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_operational_routes(lookup)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job posting screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
