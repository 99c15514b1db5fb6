use clap::Parser;
use gamedata_etl::utils::{logger, validation::Validate};
use gamedata_etl::{CliConfig, DataDirStorage, RewriteEngine, RewritePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gamedata-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let specs = config.selected_specs()?;

    for spec in specs {
        tracing::info!("🔄 Rewriting dataset '{}'", spec.name);

        let storage = DataDirStorage::new(config.data_dir.clone());
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

                // 根據錯誤嚴重程度決定退出碼
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
