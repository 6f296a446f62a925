use clap::Parser;
use posture_check::utils::error::ErrorSeverity;
use posture_check::utils::{logger, validation::Validate};
use posture_check::{
    AnalysisResponse, CliConfig, JsonLandmarkEstimator, PostureConfigStore, PostureService,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.json_logging() {
        let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting posture-check");
    tracing::debug!("Effective config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let store = Arc::new(PostureConfigStore::new(config.posture_config())?);

    if cli.show_config {
        println!("{}", serde_json::to_string_pretty(&store.get_config())?);
        return Ok(());
    }

    if cli.landmarks.is_none() {
        eprintln!("❌ No landmark input given");
        eprintln!("💡 Pass --landmarks <FILE>, or --landmarks - to read stdin");
        std::process::exit(1);
    }

    let frame = match cli.read_frame() {
        Ok(frame) => frame,
        Err(e) => {
            tracing::error!("❌ Failed to read landmark input: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    let service = PostureService::new(JsonLandmarkEstimator::new(), store);

    let result = service.analyze_frame(&frame).await;
    let exit_code = match &result {
        Ok(analysis) => {
            tracing::info!("{}", analysis.status.message());
            0
        }
        Err(e) => {
            tracing::warn!(
                "Frame not classified: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::warn!("💡 {}", e.recovery_suggestion());
            match e.severity() {
                ErrorSeverity::Low => 0, // person not visible, input itself was fine
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            }
        }
    };

    let response = AnalysisResponse::from(result);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
