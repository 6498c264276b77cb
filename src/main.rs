use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::{error, info};

use bogotui::terminal::CrosstermTerminal;
use bogotui::{listener, run, Config, Error, Renderer, Session};

fn main() -> Result<()> {
    let started = Instant::now();
    init_tracing();

    let config = Config::selected();
    info!(
        len = config.len,
        height = config.height,
        render_every = config.render_every,
        "starting bogosort"
    );

    let mut renderer = Renderer::new(config.clone(), Box::new(CrosstermTerminal::new()));
    if let Err(err) = renderer.start() {
        renderer.stop();
        error!(%err, "terminal unavailable");
        return Err(Error::TerminalInit(err).into());
    }

    let (tx, mut signals) = mpsc::unbounded_channel();
    if let Err(err) = listener::spawn(tx) {
        renderer.stop();
        return Err(err).context("input listener");
    }

    let mut session = Session::new(config, SmallRng::from_os_rng());
    run(&mut session, &mut renderer, &mut signals, started);

    renderer.stop();
    info!(
        iterations = session.iterations(),
        state = ?session.state(),
        "terminal released"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
