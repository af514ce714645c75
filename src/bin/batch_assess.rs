use clap::Parser;
use wuxing_qingyang::utils::{logger, validation::Validate};
use wuxing_qingyang::{BatchRunner, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "batch-assess")]
#[command(about = "Batch five-elements assessment driven by a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "assessments.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override output directory from config
    #[arg(long)]
    output_path: Option<String>,

    /// Dry run - validate inputs without writing any files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting batch assessment");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let (Some(path), Some(output)) = (&args.output_path, config.output.as_mut()) {
        output.output_path = path.clone();
        tracing::info!("🔧 Output path overridden to: {}", path);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let runner = BatchRunner::new(storage, config);

    match runner.run() {
        Ok(summary) => {
            println!("✅ Batch assessment completed: {} assessed", summary.succeeded);
            if !summary.skipped.is_empty() {
                println!("⚠️ Skipped: {}", summary.skipped.join(", "));
            }
            for file in &summary.written {
                println!("📁 Output saved to: {}", file);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch assessment failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        tracing::info!("   {}", description);
    }
    tracing::info!("   Subjects: {}", config.subjects.len());
    tracing::info!("   Output: {}", config.output_path());
    tracing::info!(
        "   On invalid input: {}",
        if config.skip_invalid_input() { "skip" } else { "fail" }
    );
}

fn perform_dry_run(config: &TomlConfig) {
    for subject in &config.subjects {
        match subject.to_request().validate() {
            Ok(()) => println!("✓ {} ({} {})", subject.id, subject.birth_date, subject.birth_time),
            Err(e) => println!("✗ {}: {}", subject.id, e.user_friendly_message()),
        }
    }
}
