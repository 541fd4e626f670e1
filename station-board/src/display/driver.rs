//! Matrix display contract.

/// Hardware abstraction for an RGB LED matrix panel.
///
/// Mirrors the driver surface the demo needs: pack a color, fill the
/// buffer, place text, push the buffer to the panel. Construction (panel
/// geometry, wiring) is driver-specific and happens outside this trait.
pub trait MatrixDisplay {
    /// Driver-specific packed color value.
    type Color: Copy;

    /// Error raised when pushing a frame to the panel fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Pack an RGB triple into the driver's color representation.
    fn color(&self, r: u8, g: u8, b: u8) -> Self::Color;

    /// Fill the whole buffer with one color.
    fn fill(&mut self, color: Self::Color);

    /// Draw a text string with its top-left corner at `(x, y)`.
    fn text(&mut self, s: &str, x: u32, y: u32, color: Self::Color);

    /// Push the buffer to the panel.
    ///
    /// A refresh failure is fatal to whatever loop is driving the panel;
    /// callers propagate it rather than retrying.
    fn refresh(&mut self) -> Result<(), Self::Error>;
}
