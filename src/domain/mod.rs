pub mod frame;
pub mod glyph;

pub use frame::FrameCounter;
pub use glyph::{GLYPHS, GlyphSequence, glyph_at};
