use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use userflow::{BasicAuthValidator, ServiceSettings, UserFlowService};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Reads .env, then APPLICATION__ADDRESS and BASIC_AUTH__* from the environment
    let settings = ServiceSettings::load()?;

    let validator = BasicAuthValidator::new(settings.basic_auth.credentials());
    let service = UserFlowService::new(validator);

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting user flow webhook service...");

    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
