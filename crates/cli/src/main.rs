mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clay-blog")]
#[command(version, about = "Personal blog: static build and local preview", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a starter site.toml containing the sample content
    Init {
        /// Directory to create site.toml in
        path: PathBuf,
    },

    /// Validate a site.toml
    Validate {
        /// Path to site.toml
        path: PathBuf,
    },

    /// Preview site locally with hot reload
    Preview {
        /// Path to site.toml (built-in sample content when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Render every page to static HTML
    Build {
        /// Path to site.toml (built-in sample content when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clay_blog=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init { path } => commands::init::run(path).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { config, port } => commands::preview::run(config, port).await,
        Command::Build { config, output } => commands::build::run(config, output).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "clay-blog", &mut io::stdout());
            Ok(())
        }
    }
}
