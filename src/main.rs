use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;

use teslavia_site::SiteConfig;

#[derive(Parser)]
#[command(name = "teslavia-site", version, about = "Markdown-only rendition of the teslavia blog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the markdown index over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:4321")]
        addr: SocketAddr,
        /// Site config (TOML); built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the markdown index to stdout
    Render {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the index outline (headings and links) as JSON
    Outline {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading site config {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teslavia_site=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { addr, config } => {
            let config = load_config(config.as_deref())?;
            let markdown = config.index_markdown();
            tracing::info!(site = %config.name, bytes = markdown.len(), "rendered index");

            let app = teslavia_site::serve::router(markdown).layer(TraceLayer::new_for_http());
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {addr}"))?;
            tracing::info!("listening on http://{addr}/index.md");
            axum::serve(listener, app).await?;
        }
        Command::Render { config } => {
            let config = load_config(config.as_deref())?;
            println!("{}", config.index_markdown());
        }
        Command::Outline { config } => {
            let config = load_config(config.as_deref())?;
            let outline = config.index_document().outline();
            println!("{}", serde_json::to_string_pretty(&outline)?);
        }
    }

    Ok(())
}
