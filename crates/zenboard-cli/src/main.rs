//! CLI entry point.
//!
//! Sets up logging and environment, builds the [`CliContext`] via
//! bootstrap and dispatches to handlers. Errors surface here as `anyhow`
//! and are turned into sysexits-style exit codes.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use zenboard_cli::handlers::breathe::BreatheArgs;
use zenboard_cli::handlers::simulate::SimulateArgs;
use zenboard_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Exercises => handlers::exercises::execute(),
        Commands::Scenarios => handlers::scenarios::execute(),
        Commands::Breathe {
            exercise,
            cycles,
            mute,
        } => {
            let ctx = bootstrap(CliConfig::from_cli(&cli))?;
            let args = BreatheArgs {
                exercise: *exercise,
                cycles: *cycles,
                mute: *mute,
            };
            handlers::breathe::execute(&ctx, args).await?;
        }
        Commands::Simulate {
            scenario,
            response,
            tags,
        } => {
            let ctx = bootstrap(CliConfig::from_cli(&cli))?;
            let args = SimulateArgs {
                scenario: scenario.clone(),
                response: response.clone(),
                tags: tags.clone(),
            };
            handlers::simulate::execute(&ctx, args).await?;
        }
        Commands::Coach => {
            let ctx = bootstrap(CliConfig::from_cli(&cli))?;
            handlers::coach::execute(&ctx).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        eprintln!("Error: {err:#}");
        std::process::exit(code);
    }
    Ok(())
}
