//! Derived four-digit view of a wall-clock time
//!
//! The quad is always recomputed from the owning clock state; it is a
//! read-only projection and is never stored independently, so it cannot
//! drift from the time it was derived from.

use crate::{DigitAtlas, DigitImageId};

/// The four displayed digit images: hour tens/units, minute tens/units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitQuad {
    pub hour_tens: DigitImageId,
    pub hour_units: DigitImageId,
    pub minute_tens: DigitImageId,
    pub minute_units: DigitImageId,
}

impl DigitQuad {
    /// Derive the quad for a zone-local hour (0-23) and minute (0-59).
    ///
    /// Digit extraction is plain integer div/mod; values outside the
    /// expected range pass through the atlas clamping and draw as "0".
    pub fn derive(atlas: &DigitAtlas, hour: u32, minute: u32) -> Self {
        let h = hour as i32;
        let m = minute as i32;
        DigitQuad {
            hour_tens: atlas.resolve(h / 10),
            hour_units: atlas.resolve(h % 10),
            minute_tens: atlas.resolve(m / 10),
            minute_units: atlas.resolve(m % 10),
        }
    }

    /// The quad in draw order: hour tens, hour units, minute tens, minute units.
    #[inline]
    pub fn as_array(self) -> [DigitImageId; 4] {
        [
            self.hour_tens,
            self.hour_units,
            self.minute_tens,
            self.minute_units,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_morning() {
        let atlas = DigitAtlas::sequential(0);
        let quad = DigitQuad::derive(&atlas, 9, 5);

        assert_eq!(quad.hour_tens, atlas.id_for(0));
        assert_eq!(quad.hour_units, atlas.id_for(9));
        assert_eq!(quad.minute_tens, atlas.id_for(0));
        assert_eq!(quad.minute_units, atlas.id_for(5));
    }

    #[test]
    fn test_derive_day_end() {
        let atlas = DigitAtlas::sequential(0);
        let quad = DigitQuad::derive(&atlas, 23, 59);

        assert_eq!(
            quad.as_array(),
            [
                atlas.id_for(2),
                atlas.id_for(3),
                atlas.id_for(5),
                atlas.id_for(9),
            ]
        );
    }

    #[test]
    fn test_derive_midnight() {
        let atlas = DigitAtlas::sequential(40);
        let quad = DigitQuad::derive(&atlas, 0, 0);

        assert_eq!(quad.as_array(), [atlas.id_for(0); 4]);
    }
}
