use clap::Parser;
use jettip::core::Renderer;
use jettip::utils::logger;
use jettip::{
    CliConfig, FormState, JsonRenderer, LineEventSource, SessionEngine, SessionSettings,
    TextRenderer, TipError,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code().max(1));
        }
    };

    if settings.json_logging {
        logger::init_json_logger(cli.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting jettip");
    tracing::debug!("Resolved settings: {:?}", settings);

    let result = if settings.json_output {
        run_session(JsonRenderer::new(std::io::stdout()), &settings).await
    } else {
        let renderer = TextRenderer::new(std::io::stdout(), settings.money.clone());
        run_session(renderer, &settings).await
    };

    if let Err(e) = result {
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run_session<R: Renderer>(renderer: R, settings: &SessionSettings) -> Result<(), TipError> {
    let form = FormState::with_settings(&settings.form)?;
    let mut engine = SessionEngine::with_form(LineEventSource::stdin(), renderer, form);
    let summary = engine.run().await?;
    tracing::debug!(
        "Session summary: {}",
        serde_json::to_string(&summary).unwrap_or_default()
    );
    Ok(())
}
