//! ASCII digit glyphs - the demo's stand-in for image assets
//!
//! The atlas registers ids 0..=9 in digit order, so an image id doubles
//! as an index into the glyph table.

use glyphclock_core::{DigitAtlas, DigitImageId};

/// Rows per glyph.
pub const GLYPH_ROWS: usize = 5;

#[rustfmt::skip]
const GLYPHS: [[&str; GLYPH_ROWS]; 10] = [
    ["###", "# #", "# #", "# #", "###"], // 0
    [" # ", "## ", " # ", " # ", "###"], // 1
    ["###", "  #", "###", "#  ", "###"], // 2
    ["###", "  #", "###", "  #", "###"], // 3
    ["# #", "# #", "###", "  #", "  #"], // 4
    ["###", "#  ", "###", "  #", "###"], // 5
    ["###", "#  ", "###", "# #", "###"], // 6
    ["###", "  #", "  #", "  #", "  #"], // 7
    ["###", "# #", "###", "# #", "###"], // 8
    ["###", "# #", "###", "  #", "###"], // 9
];

/// Atlas over the glyph table.
pub fn atlas() -> DigitAtlas {
    DigitAtlas::sequential(0)
}

/// Art rows for an image id. Ids outside the table draw as "0",
/// matching the resolver's own fallback.
pub fn glyph_for(image: DigitImageId) -> &'static [&'static str; GLYPH_ROWS] {
    GLYPHS.get(image.value() as usize).unwrap_or(&GLYPHS[0])
}
