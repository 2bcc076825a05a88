//! Moving rainbow gradient

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::{
    color::{Hsv, fill_rainbow, hsv2rgb_rainbow},
    document::Document,
    geometry::{Geometry, Layout},
};

/// Hue difference between neighbouring pixels (or rings)
pub const STREAM_HUE_STEP: u8 = 5;

/// Saturation `fill_rainbow` paints strips with, reused for disc rings
const SATURATION: u8 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamParams {
    /// Persisted for the remote UI; the gradient does not branch on it yet
    pub direction: u8,
    /// Hue shift per tick
    pub delta: i8,
}

/// Stream effect - a rainbow gradient flowing along the strip or across rings
#[derive(Debug, Clone)]
pub struct StreamEffect {
    params: StreamParams,
    hue: u8,
}

impl StreamEffect {
    pub const fn new(direction: u8, delta: i8) -> Self {
        Self::from_params(StreamParams { direction, delta })
    }

    pub const fn from_params(params: StreamParams) -> Self {
        Self { params, hue: 0 }
    }

    pub const fn params(&self) -> &StreamParams {
        &self.params
    }
}

impl Effect for StreamEffect {
    const KIND: EffectKind = EffectKind::Stream;

    fn update<G: Geometry>(&mut self, light: &mut G, _delta_ms: u32) -> bool {
        match light.layout() {
            Layout::Strip(mut strip) => {
                fill_rainbow(strip.data(), self.hue, STREAM_HUE_STEP);
            }
            Layout::Disc(mut disc) => {
                let mut hue = self.hue;
                for ring in 0..disc.r() {
                    let color = hsv2rgb_rainbow(Hsv {
                        hue,
                        sat: SATURATION,
                        val: 255,
                    });
                    disc.ring(ring).fill(color);
                    hue = hue.wrapping_add(STREAM_HUE_STEP);
                }
            }
        }

        self.hue = self.hue.wrapping_add_signed(self.params.delta);
        true
    }

    fn write_fields(&self, doc: &mut Document) {
        doc.write_fields(&self.params);
    }
}
