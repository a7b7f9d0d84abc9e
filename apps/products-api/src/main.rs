use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use eyre::WrapErr;
use products_api::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(&config.environment);

    products_api::run(config).await
}
