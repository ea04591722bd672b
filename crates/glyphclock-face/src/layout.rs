//! Fixed-slot layout and the draw seam
//!
//! The face never draws. A rendering collaborator implements
//! `DigitRenderer` and receives the four image ids at fixed offsets:
//! hour tens, hour units, minute tens, minute units, at a constant
//! horizontal stride.

use glyphclock_core::DigitImageId;

use crate::ClockFace;

/// Number of digit slots on the face.
pub const SLOT_COUNT: usize = 4;

/// Default horizontal stride between digit slots, in pixels.
pub const SLOT_STRIDE: i32 = 100;

/// Screen placement of the four digit slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotLayout {
    origin: (i32, i32),
    stride: i32,
}

impl Default for SlotLayout {
    fn default() -> Self {
        SlotLayout {
            origin: (0, 0),
            stride: SLOT_STRIDE,
        }
    }
}

impl SlotLayout {
    pub fn new(origin: (i32, i32), stride: i32) -> Self {
        SlotLayout { origin, stride }
    }

    /// Offsets for the four slots, in draw order.
    pub fn offsets(&self) -> [(i32, i32); SLOT_COUNT] {
        let mut offsets = [(0, 0); SLOT_COUNT];
        for (slot, offset) in offsets.iter_mut().enumerate() {
            *offset = (self.origin.0 + self.stride * slot as i32, self.origin.1);
        }
        offsets
    }

    /// Which slot an x offset belongs to, if any.
    pub fn slot_at(&self, x: i32) -> Option<usize> {
        let rel = x - self.origin.0;
        if rel < 0 || self.stride <= 0 {
            return None;
        }
        let slot = (rel / self.stride) as usize;
        (rel % self.stride == 0 && slot < SLOT_COUNT).then_some(slot)
    }
}

/// Draw primitive supplied by the rendering collaborator.
pub trait DigitRenderer {
    fn draw_digit(&mut self, image: DigitImageId, offset: (i32, i32));
}

/// Draw the face's current digits through a renderer.
pub fn render_face(face: &ClockFace, layout: &SlotLayout, renderer: &mut dyn DigitRenderer) {
    for (image, offset) in face.digits().as_array().into_iter().zip(layout.offsets()) {
        renderer.draw_digit(image, offset);
    }
}
