use std::iter::FusedIterator;

/// Spinner frames in display order.
pub const GLYPHS: [char; 4] = ['|', '/', '-', '\\'];

/// Returns the glyph shown on the given zero-based frame.
pub fn glyph_at(index: usize) -> char {
    GLYPHS[index % GLYPHS.len()]
}

/// Endless round-robin cursor over [`GLYPHS`].
///
/// The cursor wraps every `GLYPHS.len()` requests, so the sequence restarts
/// from `|` on its own. There is no external reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSequence {
    cursor: usize,
}

impl GlyphSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_glyph(&mut self) -> char {
        let glyph = glyph_at(self.cursor);
        self.cursor = (self.cursor + 1) % GLYPHS.len();
        glyph
    }
}

impl Iterator for GlyphSequence {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        Some(self.next_glyph())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for GlyphSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod glyph_at {
        use super::*;

        #[rstest]
        #[case(0, '|')]
        #[case(1, '/')]
        #[case(2, '-')]
        #[case(3, '\\')]
        #[case(4, '|')] // wraps
        #[case(49, '/')] // last frame of a 50-frame run
        #[case(usize::MAX, '\\')]
        fn returns_round_robin_glyph(#[case] index: usize, #[case] expected: char) {
            assert_eq!(glyph_at(index), expected);
        }
    }

    mod glyph_sequence {
        use super::*;

        #[test]
        fn starts_with_pipe() {
            let mut sequence = GlyphSequence::new();

            assert_eq!(sequence.next_glyph(), '|');
        }

        #[test]
        fn first_four_glyphs_follow_declared_order() {
            let glyphs: Vec<char> = GlyphSequence::new().take(4).collect();

            assert_eq!(glyphs, vec!['|', '/', '-', '\\']);
        }

        #[test]
        fn cycle_repeats_every_four_glyphs() {
            let glyphs: Vec<char> = GlyphSequence::new().take(12).collect();

            assert_eq!(glyphs[0..4], glyphs[4..8]);
            assert_eq!(glyphs[4..8], glyphs[8..12]);
        }

        #[test]
        fn wraps_back_to_a_fresh_sequence_after_four() {
            let mut sequence = GlyphSequence::new();

            for _ in 0..4 {
                sequence.next_glyph();
            }

            assert_eq!(sequence, GlyphSequence::new());
        }

        #[test]
        fn matches_stateless_lookup_for_fifty_frames() {
            let sequence = GlyphSequence::new();

            for (index, glyph) in sequence.take(50).enumerate() {
                assert_eq!(glyph, glyph_at(index), "frame {}", index);
            }
        }

        #[test]
        fn never_ends() {
            let mut sequence = GlyphSequence::new();

            assert!(sequence.nth(10_000).is_some());
            assert_eq!(sequence.size_hint(), (usize::MAX, None));
        }
    }
}
