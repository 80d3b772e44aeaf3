use config::GameConfig;
use tracing_subscriber::EnvFilter;

mod config;
mod game;
mod headless;
mod tui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let config = GameConfig::from_env()?;
  tracing::info!(
    speed = config.speed,
    starting_length = config.starting_length,
    frame_ms = config.frame_ms,
    seed = ?config.seed,
    "starting voxel snake"
  );

  if let Some(ticks) = config.headless_ticks {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    headless::run_headless(&config, ticks, &mut out)?;
    return Ok(());
  }

  tui::run_terminal(&config).await
}
