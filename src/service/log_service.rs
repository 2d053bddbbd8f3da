use crate::prelude::*;
use crate::service::var_service::get_log_level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn set_logging() -> Result<()> {
    let level = get_log_level()?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .try_init()?;

    tracing::debug!("Logging at {}", level);
    Ok(())
}
