use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use super::StartupError;

pub fn init_logging() -> Result<(), StartupError> {
    let subscriber = Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_level(true)
                .with_target(true)
                .compact(),
        );

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
