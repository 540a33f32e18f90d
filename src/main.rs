use clap::Parser;
use cv_build_selector::utils::{logger, validation::Validate};
use cv_build_selector::{BuildRunner, CliConfig, ProcessBuildTool, SelectorError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let tool_config = match config.validate().and_then(|_| config.tool_config()) {
        Ok(tool_config) => tool_config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code().unwrap_or(1));
        }
    };

    let tool = ProcessBuildTool::from_settings(&tool_config);
    let runner = BuildRunner::new(tool).with_dry_run(config.dry_run);

    match runner.run(config.target_path()).await {
        Ok(target) => {
            tracing::debug!("✅ Build of {} completed", target);
            Ok(())
        }
        Err(e @ SelectorError::ToolFailed { .. }) => {
            // the tool already reported its own failure
            tracing::debug!("{}: {}", e.user_friendly_message(), e);
            std::process::exit(e.exit_code().unwrap_or(1));
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            Err(e.into())
        }
    }
}
