//! Periodic demo screen.
//!
//! The original demo drew a banner line, then redrew an update line forever
//! with a fixed sleep between refreshes. Here that loop is a scheduled task
//! on the tokio clock with an explicit stop signal, so tests can drive it
//! on virtual time instead of sleeping for real.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::driver::MatrixDisplay;

/// What the demo draws and how often.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Static line drawn once at the top of the panel.
    pub banner: String,
    /// Line redrawn on every tick.
    pub update: String,
    /// Row the update line is drawn at.
    pub update_row: u32,
    /// Time between refreshes. Must be non-zero.
    pub period: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            banner: "Hello".to_string(),
            update: "Updated!".to_string(),
            update_row: 8,
            period: Duration::from_secs(10),
        }
    }
}

/// The demo screen: a banner drawn once, an update line refreshed on a
/// fixed period until stopped.
#[derive(Debug)]
pub struct DemoScreen<M> {
    matrix: M,
    config: DemoConfig,
}

impl<M: MatrixDisplay> DemoScreen<M> {
    pub fn new(matrix: M, config: DemoConfig) -> Self {
        DemoScreen { matrix, config }
    }

    /// The matrix being drawn on.
    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    /// Clear the panel and draw the banner line.
    pub fn draw_banner(&mut self) -> Result<(), M::Error> {
        let black = self.matrix.color(0, 0, 0);
        self.matrix.fill(black);

        let red = self.matrix.color(255, 0, 0);
        self.matrix.text(&self.config.banner, 0, 0, red);
        self.matrix.refresh()
    }

    /// Draw the update line and push the frame.
    pub fn draw_update(&mut self) -> Result<(), M::Error> {
        let green = self.matrix.color(0, 255, 0);
        self.matrix.text(&self.config.update, 0, self.config.update_row, green);
        self.matrix.refresh()
    }

    /// Run the demo until `stop` flips to true (or its sender is dropped).
    ///
    /// Draws the banner once, then one update per period. Each refresh
    /// completes before the next wait begins. A refresh failure ends the
    /// run with the error; on a clean stop the matrix is handed back.
    pub async fn run(mut self, mut stop: watch::Receiver<bool>) -> Result<M, M::Error> {
        self.draw_banner()?;

        let mut ticker = tokio::time::interval(self.config.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await; // First tick is immediate, skip it

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.draw_update()?;
                }
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        debug!("demo stopped");
                        return Ok(self.matrix);
                    }
                }
            }
        }
    }
}
