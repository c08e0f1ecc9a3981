use anyhow::Context;
use chai_translator::core::WordProvider;
use chai_translator::utils::logger;
use chai_translator::TranslatorConfig;
use std::io;

fn main() -> anyhow::Result<()> {
    // Parse arguments
    let config = TranslatorConfig::from_args(std::env::args_os());

    // Init logging
    logger::init_cli_logger().context("Failed to initialize logging")?;

    tracing::info!("Starting chai-translator");
    tracing::debug!("CLI config: {:?}", config);
    if !config.ignored.is_empty() {
        tracing::debug!("Ignoring extra arguments: {:?}", config.ignored);
    }

    // Translate
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = chai_translator::run(config.word(), &mut out) {
        tracing::error!("❌ Translation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
