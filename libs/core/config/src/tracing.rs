use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

const PRODUCTION_FILTER: &str = "info,h2=warn,tower=warn,sqlx=warn,sea_orm=warn";
const DEVELOPMENT_FILTER: &str = "debug,h2=info,tower=info,hyper=info,sqlx=info";

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default filter directives for an environment, used when `RUST_LOG` is unset.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_development() {
        DEVELOPMENT_FILTER
    } else {
        PRODUCTION_FILTER
    }
}

/// Initialize tracing with environment-aware output and span trace capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events, no module targets.
/// - **Development** (default): pretty-printed, human-readable events.
///
/// Both install `tracing_error::ErrorLayer` so `eyre` reports carry the active span trace.
/// `RUST_LOG` overrides the default directives.
///
/// Calling this more than once is a no-op after the first successful call.
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(environment = ?environment, "Tracing initialized");
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}
