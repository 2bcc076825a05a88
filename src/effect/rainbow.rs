//! Whole-buffer hue cycling

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::{
    color::{Hsv, hsv2rgb_rainbow},
    document::Document,
    geometry::Geometry,
};

const SATURATION: u8 = 255;
const VALUE: u8 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainbowParams {
    /// Hue step per tick, negative values cycle backwards
    pub delta: i8,
}

/// Rainbow effect - every LED shows the same hue, shifted every tick
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    params: RainbowParams,
    hue: u8,
}

impl RainbowEffect {
    pub const fn new(delta: i8) -> Self {
        Self::from_params(RainbowParams { delta })
    }

    pub const fn from_params(params: RainbowParams) -> Self {
        Self { params, hue: 0 }
    }

    pub const fn params(&self) -> &RainbowParams {
        &self.params
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl Effect for RainbowEffect {
    const KIND: EffectKind = EffectKind::Rainbow;

    fn update<G: Geometry>(&mut self, light: &mut G, _delta_ms: u32) -> bool {
        let color = hsv2rgb_rainbow(Hsv {
            hue: self.hue,
            sat: SATURATION,
            val: VALUE,
        });
        light.data().fill(color);
        self.hue = self.hue.wrapping_add_signed(self.params.delta);
        true
    }

    fn write_fields(&self, doc: &mut Document) {
        doc.write_fields(&self.params);
    }
}
