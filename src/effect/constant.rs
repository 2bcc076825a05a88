//! Solid color fill, drawn once

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::{color::Rgb, document::Document, geometry::Geometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantParams {
    #[serde(with = "crate::color::packed")]
    pub color: Rgb,
}

/// Constant effect - fills all LEDs with one color
///
/// The buffer is painted on the first tick only; later ticks report no change
/// so the driver skips redundant flushes.
#[derive(Debug, Clone)]
pub struct ConstantEffect {
    params: ConstantParams,
    drawn: bool,
}

impl ConstantEffect {
    pub const fn new(color: Rgb) -> Self {
        Self::from_params(ConstantParams { color })
    }

    pub const fn from_params(params: ConstantParams) -> Self {
        Self {
            params,
            drawn: false,
        }
    }

    pub const fn params(&self) -> &ConstantParams {
        &self.params
    }
}

impl Effect for ConstantEffect {
    const KIND: EffectKind = EffectKind::Constant;

    fn update<G: Geometry>(&mut self, light: &mut G, _delta_ms: u32) -> bool {
        if self.drawn {
            return false;
        }
        light.data().fill(self.params.color);
        self.drawn = true;
        true
    }

    fn write_fields(&self, doc: &mut Document) {
        doc.write_fields(&self.params);
    }
}
