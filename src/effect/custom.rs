//! Placeholder for externally driven pixels

use super::{Effect, EffectKind};
use crate::{color::Rgb, geometry::Geometry};

/// Custom effect - an upstream controller writes pixels directly
///
/// The effect never paints; it only tracks where the next externally
/// supplied pixel goes.
#[derive(Debug, Clone, Default)]
pub struct CustomEffect {
    cursor: usize,
}

impl CustomEffect {
    pub const fn new() -> Self {
        Self { cursor: 0 }
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn cursor_mut(&mut self) -> &mut usize {
        &mut self.cursor
    }

    pub const fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Write `color` at the cursor and advance it
    ///
    /// Returns `false`, leaving the cursor in place, once it is past the end.
    pub fn write(&mut self, leds: &mut [Rgb], color: Rgb) -> bool {
        let Some(led) = leds.get_mut(self.cursor) else {
            return false;
        };
        *led = color;
        self.cursor += 1;
        true
    }
}

impl Effect for CustomEffect {
    const KIND: EffectKind = EffectKind::Custom;

    fn update<G: Geometry>(&mut self, _light: &mut G, _delta_ms: u32) -> bool {
        true
    }
}
