use std::io;

/// Output the spinner loop draws on.
///
/// `write_glyph` and `erase` may buffer; nothing is guaranteed visible until
/// `flush` returns.
#[cfg_attr(test, mockall::automock)]
pub trait GlyphSink {
    fn write_glyph(&mut self, glyph: char) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Removes the most recently written glyph.
    fn erase(&mut self) -> io::Result<()>;
}
