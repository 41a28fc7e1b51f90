use std::process::ExitCode;

use clap::Parser;
use podlang::cli::{commands, Cli, Commands};
use podlang::types::config::Config;
use podlang::PodlangResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&cli, &config);
    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> PodlangResult<()> {
    let heuristics = cli.heuristics_path(&config);

    match cli.command {
        None => commands::inspect(None, None, &config, &heuristics).await,
        Some(Commands::Inspect { image, namespace }) => {
            commands::inspect(image, namespace, &config, &heuristics).await
        }
        Some(Commands::AddToHeuristic { language, command }) => {
            commands::add_to_heuristic(&language, &command, &heuristics)
        }
        Some(Commands::ListHeuristics) => commands::list_heuristics(&heuristics),
        Some(Commands::Init { path, force }) => commands::init(path, force),
        Some(Commands::Version) => {
            commands::version();
            Ok(())
        }
    }
}

fn init_logging(cli: &Cli, config: &Config) {
    // CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        config.general.log_level.as_str()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("podlang={}", log_level)
            .parse()
            .unwrap_or_else(|_| "podlang=warn".parse().expect("fallback directive is valid")),
    );

    let json = config.general.log_format == "json";

    tracing_subscriber::registry()
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .with(filter)
        .init();
}
