//! LED matrix demo.
//!
//! Draws the banner once, then redraws the update line every ten seconds
//! until ctrl-c, on an in-memory panel echoed to the terminal.

use std::error::Error;

use station_board::display::{DemoConfig, DemoScreen, FrameBuffer};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

/// Panel geometry, matching the 64x31 hub75 wiring the demo targets.
const WIDTH: u32 = 64;
const HEIGHT: u32 = 31;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matrix = FrameBuffer::new(WIDTH, HEIGHT).with_echo();
    let screen = DemoScreen::new(matrix, DemoConfig::default());

    let (stop_tx, stop_rx) = watch::channel(false);
    let demo = tokio::spawn(screen.run(stop_rx));

    tokio::signal::ctrl_c().await?;
    stop_tx.send(true).ok();
    demo.await??;

    println!("\nShutting down cleanly.");
    Ok(())
}
