//! Digit image atlas - the fixed table of per-digit image assets

use std::fmt;

/// Number of images in a digit atlas (one per decimal digit).
pub const ATLAS_SIZE: usize = 10;

/// Opaque handle to one of the ten pre-supplied digit images.
///
/// The value is assigned by the embedder's resource system (drawable id,
/// texture slot, sprite index); glyphclock never interprets it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitImageId(pub u32);

impl DigitImageId {
    #[inline]
    pub fn new(id: u32) -> Self {
        DigitImageId(id)
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DigitImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Img({:08x})", self.0)
    }
}

impl fmt::Display for DigitImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Fixed table mapping decimal digits 0-9 to image identifiers.
///
/// Built once at startup from the embedder's asset registry and treated
/// as a process-wide constant afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitAtlas {
    ids: [DigitImageId; ATLAS_SIZE],
}

impl DigitAtlas {
    /// Create an atlas from ten image ids, indexed by digit.
    pub fn new(ids: [DigitImageId; ATLAS_SIZE]) -> Self {
        DigitAtlas { ids }
    }

    /// Atlas whose ids are `base`, `base + 1`, ... in digit order.
    /// Convenient when assets are registered contiguously.
    pub fn sequential(base: u32) -> Self {
        let mut ids = [DigitImageId::default(); ATLAS_SIZE];
        for (digit, id) in ids.iter_mut().enumerate() {
            *id = DigitImageId(base.wrapping_add(digit as u32));
        }
        DigitAtlas { ids }
    }

    /// Resolve a digit to its image id.
    ///
    /// Any input outside 0..=9 (negative values included) resolves to the
    /// image for digit 0. Silent clamping, never an error: an impossible
    /// digit draws as "0" instead of tearing down the face.
    #[inline]
    pub fn resolve(&self, digit: i32) -> DigitImageId {
        if (0..ATLAS_SIZE as i32).contains(&digit) {
            self.ids[digit as usize]
        } else {
            self.ids[0]
        }
    }

    /// Image id registered for a digit, without the clamping path.
    /// Panics if `digit >= 10`; intended for iterating the atlas itself,
    /// not for resolving clock digits.
    #[inline]
    pub fn id_for(&self, digit: usize) -> DigitImageId {
        self.ids[digit]
    }
}
