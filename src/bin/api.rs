use trendbrief::api::handler;
use trendbrief::core::config::AppConfig;
use trendbrief::dashboard::Dashboard;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    trendbrief::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    let dashboard = Dashboard::from_config(&config)?;
    let dashboard = &dashboard;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        handler(dashboard, event).await
    }))
    .await
}
