use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use opuscli::{cli, config, error, types::PkceToken};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Build the works catalog and emit the runner script and guide
    Generate(GenerateOptions),

    /// Show the deduplicated works catalog
    Catalog(CatalogOptions),

    #[clap(about = "Build a Spotify playlist from a works catalog")]
    Playlist(PlaylistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Works resource to build from instead of the built-in table
    #[clap(long)]
    pub input: Option<String>,

    /// Directory the catalog, script, and guide are written to
    #[clap(long, default_value = ".")]
    pub output_dir: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CatalogOptions {
    /// Works resource to show instead of the built-in table
    #[clap(long)]
    pub input: Option<String>,

    /// Filter rows by composer or work title
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Path to the catalog file (composer,work)
    #[clap(long, default_value = "works.csv")]
    csv: String,

    /// Name of the playlist to create
    #[clap(long, default_value = "A-Level Classical Survey")]
    name: String,

    /// Make the playlist public (default is private)
    #[clap(long)]
    public: bool,

    /// Market code biasing search results (e.g., GB, US)
    #[clap(long, default_value = "GB")]
    market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Generate(opt) => cli::generate(opt.input, opt.output_dir).await,
        Command::Catalog(opt) => cli::catalog(opt.input, opt.search).await,
        Command::Playlist(opt) => cli::playlist(opt.csv, opt.name, opt.public, opt.market).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
