use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use vimeo_gateway_core::config::LogFormat;

/// Filter used when `RUST_LOG` is unset: the configured level for our crates,
/// with chatty HTTP internals held at `warn`.
fn default_filter(log_level: &str) -> String {
    format!("{},hyper=warn,hyper_util=warn,reqwest=warn,h2=warn", log_level)
}

/// Install the global tracing subscriber.
pub fn init_telemetry(log_level: &str, format: LogFormat) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(log_level)))
        .map_err(|e| anyhow::anyhow!("Invalid log filter: {}", e))?;

    match format {
        LogFormat::Compact => {
            let console_fmt = tracing_subscriber::fmt::layer()
                .event_format(Format::default().compact().with_target(false));
            tracing_subscriber::registry()
                .with(filter)
                .with(console_fmt)
                .try_init()?;
        }
        LogFormat::Json => {
            let json_fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .flatten_event(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_fmt)
                .try_init()?;
        }
    }

    tracing::debug!(log_level, format = ?format, "Tracing initialized");
    Ok(())
}
