use std::path::PathBuf;

use clap::Parser;

use ontoview::app::{self, AppContext};
use ontoview::config::Settings;

#[derive(Parser)]
#[command(name = "ontoview", about = "Upload and visually explore ontology documents")]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ontoview::Result<()> {
    app::init_tracing();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    let ctx = AppContext::new(settings)?;
    app::run(ctx).await
}
