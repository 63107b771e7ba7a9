use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{
    build::BuildArgs, extract::ExtractArgs, generate::GenerateSubcommands, solve::SolveArgs,
};

mod build;
mod extract;
mod generate;
mod params;
mod parsers;
mod process_solver;
mod render;
mod solve;
mod timeout_solver;

#[cfg(test)]
mod test_utils;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Writes the solver data model built from a routing request
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },
    /// Replays a recorded solver answer and prints the report
    Extract {
        #[command(flatten)]
        args: ExtractArgs,
    },
    /// Runs an external solver process and prints the report
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Build { args }) => build::run(args)?,
        Some(Commands::Extract { args }) => extract::run(args).await?,
        Some(Commands::Solve { args }) => solve::run(args).await?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
