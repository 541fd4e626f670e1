//! In-memory matrix driver.
//!
//! Stands in for panel hardware so drawing logic can run and be tested on
//! the host, and so the demo binary has something to draw on without a
//! physical matrix attached.

use std::convert::Infallible;
use std::fmt;

use super::driver::MatrixDisplay;

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A text line placed on the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOp {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub color: Rgb,
}

/// A matrix driver backed by plain memory.
///
/// Tracks the background color and the text lines currently drawn, plus how
/// many frames have been pushed. Drawing text at an occupied position
/// replaces what was there, the way pixels would be overwritten on a real
/// panel.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    background: Rgb,
    texts: Vec<TextOp>,
    frames: u64,
    echo: bool,
}

impl FrameBuffer {
    /// Create a buffer for a panel of the given geometry.
    pub fn new(width: u32, height: u32) -> Self {
        FrameBuffer {
            width,
            height,
            background: Rgb::BLACK,
            texts: Vec::new(),
            frames: 0,
            echo: false,
        }
    }

    /// Print each refreshed frame to stdout.
    pub fn with_echo(mut self) -> Self {
        self.echo = true;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames pushed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Current background color.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Text lines currently on the buffer, in draw order.
    pub fn texts(&self) -> &[TextOp] {
        &self.texts
    }
}

impl MatrixDisplay for FrameBuffer {
    type Color = Rgb;
    type Error = Infallible;

    fn color(&self, r: u8, g: u8, b: u8) -> Rgb {
        Rgb::new(r, g, b)
    }

    fn fill(&mut self, color: Rgb) {
        self.background = color;
        self.texts.clear();
    }

    fn text(&mut self, s: &str, x: u32, y: u32, color: Rgb) {
        // Clip lines that start off-panel
        if x >= self.width || y >= self.height {
            return;
        }

        if let Some(op) = self.texts.iter_mut().find(|t| t.x == x && t.y == y) {
            op.text = s.to_string();
            op.color = color;
        } else {
            self.texts.push(TextOp {
                text: s.to_string(),
                x,
                y,
                color,
            });
        }
    }

    fn refresh(&mut self) -> Result<(), Infallible> {
        self.frames += 1;

        if self.echo {
            let lines: Vec<String> = self
                .texts
                .iter()
                .map(|t| format!("{:?} at ({},{}) in {}", t.text, t.x, t.y, t.color))
                .collect();
            println!("[frame {}] {}", self.frames, lines.join("; "));
        }

        Ok(())
    }
}
