use anyhow::Context;
use chai_translator::core::{hexagram, WordProvider};
use chai_translator::utils::{logger, validation::Validate};
use chai_translator::HexagramConfig;
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    let config = HexagramConfig::parse();

    // Init logging
    logger::init_cli_logger().context("Failed to initialize logging")?;

    tracing::info!("☯️ Starting hexagram view");
    tracing::debug!("CLI config: {:?}", config);

    // Validate config
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // Draw
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = hexagram::run(config.word(), &mut out) {
        tracing::error!("❌ Hexagram view failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
