mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_codec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            mapping,
            input,
            output,
            no_progress,
            verify,
        } => {
            cli::encode(&mapping, &input, &output, !no_progress, verify)?;
        }
        Commands::Decode {
            mapping,
            input,
            output,
            no_progress,
            strict,
        } => {
            cli::decode(&mapping, &input, &output, !no_progress, strict)?;
        }
        Commands::Stats { mapping, format } => {
            cli::stats(&mapping, &format)?;
        }
        Commands::Menu => {
            cli::run_menu(&cli.settings)?;
        }
    }

    Ok(())
}
