//! Audio sample handoff between the capture task and the render loop
//!
//! The capture side publishes a normalized level; the render side reads
//! whatever was published last. There is no queue: a newer sample simply
//! replaces an older one.

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;

/// Latest normalized audio sample in `[0, 1]`
pub struct SoundLevel {
    sample: Mutex<Cell<f32>>,
}

impl SoundLevel {
    pub const fn new() -> Self {
        Self {
            sample: Mutex::new(Cell::new(0.0)),
        }
    }

    /// Publish a new sample, clamped to `[0, 1]`
    ///
    /// NaN is stored as silence.
    pub fn set(&self, sample: f32) {
        let sample = if sample.is_nan() {
            0.0
        } else {
            sample.clamp(0.0, 1.0)
        };
        critical_section::with(|cs| self.sample.borrow(cs).set(sample));
    }

    /// Most recently published sample
    pub fn get(&self) -> f32 {
        critical_section::with(|cs| self.sample.borrow(cs).get())
    }
}

impl Default for SoundLevel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SoundLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundLevel")
            .field("sample", &self.get())
            .finish()
    }
}
