use std::error::Error;

use groq_llm_service::telemetry;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file, if one is present.
    dotenvy::dotenv().ok();

    let debug = std::env::var("DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let (default, level) = if debug {
        ("debug", Level::DEBUG)
    } else {
        ("info", Level::INFO)
    };

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level(default, level))
        .with(telemetry::fmt_layer())
        .init();

    api::start().await?;

    Ok(())
}
