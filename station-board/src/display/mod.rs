//! LED matrix demo.
//!
//! Panel hardware sits behind the [`MatrixDisplay`] trait; [`DemoScreen`]
//! owns the drawing logic as a stoppable periodic task, and [`FrameBuffer`]
//! is the in-memory driver used on the host.

mod demo;
mod driver;
mod frame;

pub use demo::{DemoConfig, DemoScreen};
pub use driver::MatrixDisplay;
pub use frame::{FrameBuffer, Rgb, TextOp};
