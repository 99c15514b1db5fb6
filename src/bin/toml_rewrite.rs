use clap::Parser;
use gamedata_etl::config::toml_config::{SettingsConfig, TomlConfig};
use gamedata_etl::utils::{logger, validation::Validate};
use gamedata_etl::{DataDirStorage, RewriteEngine, RewritePipeline};

#[derive(Parser)]
#[command(name = "toml-rewrite")]
#[command(about = "Game-data rewrite tool with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "rewrite-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override strict setting from config
    #[arg(long)]
    strict: Option<bool>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based rewrite tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(strict) = args.strict {
        config
            .settings
            .get_or_insert_with(|| SettingsConfig {
                data_dir: None,
                strict: None,
            })
            .strict = Some(strict);
        tracing::info!("🔧 Strict mode overridden to: {}", strict);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    for spec in config.transform_specs() {
        tracing::info!("🔄 Rewriting dataset '{}'", spec.name);

        let storage = DataDirStorage::new(config.data_dir().to_string());
        let pipeline = RewritePipeline::new(storage, config.clone(), spec);
        let engine = RewriteEngine::new(pipeline);

        match engine.run().await {
            Ok(output_path) => {
                tracing::info!("✅ Dataset rewritten successfully!");
                println!("✅ Dataset rewritten successfully!");
                println!("📁 Output saved to: {}", output_path);
            }
            Err(e) => {
                tracing::error!(
                    "❌ Rewrite failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 建議: {}", e.recovery_suggestion());

                let exit_code = match e.severity() {
                    gamedata_etl::utils::error::ErrorSeverity::Low => 0,
                    gamedata_etl::utils::error::ErrorSeverity::Medium => 2,
                    gamedata_etl::utils::error::ErrorSeverity::High => 1,
                    gamedata_etl::utils::error::ErrorSeverity::Critical => 3,
                };

                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Data directory: {}", config.data_dir());
    println!("  Datasets: {}", config.datasets.len());
    println!("  Strict default: {}", config.strict_default());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    for spec in config.transform_specs() {
        println!("🔄 Dataset: {}", spec.name);
        println!("  Input: {}", spec.input_file);
        println!("  Output: {}", spec.output_file);
        println!("  Identifier field: {}", spec.identifier_field);

        if !spec.boolean_fields.is_empty() {
            println!("  Boolean fields: {}", spec.boolean_fields.join(", "));
        }

        if !spec.integer_fields.is_empty() {
            println!("  Integer fields: {}", spec.integer_fields.join(", "));
        }

        if spec.strict {
            println!("  ⚠️ Strict mode: duplicate identifiers will fail");
        }

        println!();
    }

    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
