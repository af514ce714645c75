use anyhow::Context;
use clap::Parser;
use wuxing_qingyang::core::report::render_text;
use wuxing_qingyang::core::Storage;
use wuxing_qingyang::utils::{logger, validation::Validate};
use wuxing_qingyang::{CliConfig, LocalStorage, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting wuxing-qingyang assessment");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證輸入
    if let Err(e) = config.validate() {
        tracing::error!("❌ Input validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let assessment = match config.to_request().assess() {
        Ok(assessment) => assessment,
        Err(e) => {
            tracing::error!(
                "❌ Assessment failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let json = serde_json::to_string_pretty(&assessment).context("serializing assessment")?;

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&assessment)),
        OutputFormat::Json => println!("{}", json),
    }

    if let Some(output_path) = &config.output_path {
        let storage = LocalStorage::new(output_path.clone());
        if let Err(e) = storage.write_file("assessment.json", json.as_bytes()) {
            tracing::error!("❌ Failed to save assessment: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
        tracing::info!("📁 Assessment saved to: {}/assessment.json", output_path);
    }

    Ok(())
}
