//! Attendances: lists attendance records, most recent first.
//! Used by: binary entrypoint.

use attendances::config::Config;
use attendances::{console, server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let state = state::build_state(&config)?;
    tracing::info!("starting attendances on {}", config.bind_addr);

    console::print_banner();
    console::print_startup(&config.bind_addr, &config.db_path);
    server::run(state, &config.bind_addr).await?;
    Ok(())
}
