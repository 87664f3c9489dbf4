use std::sync::Arc;

use clap::Parser;

use rhymebot::config::Config;
use rhymebot::generator::SentenceGenerator;
use rhymebot::publisher::facebook::FacebookPublisher;
use rhymebot::rhyme::datamuse::DatamuseClient;
use rhymebot::server::{self, AppState};

#[derive(Parser)]
#[command(name = "rhymebot", version, about = "Posts rhyming sentences on demand.")]
struct Cli {
    /// Listen address (overrides BIND_ADDR)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    let generator = SentenceGenerator::new(Arc::new(DatamuseClient::new()));
    let publisher = Arc::new(FacebookPublisher::new());

    let state = AppState {
        config,
        generator,
        publisher,
    };

    server::run(state).await?;
    Ok(())
}
