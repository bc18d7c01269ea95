pub mod glyph_sink;

pub use glyph_sink::GlyphSink;
