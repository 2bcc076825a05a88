//! On/off blinking

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, seconds_to_frames};
use crate::{
    color::{BLACK, Rgb},
    document::Document,
    geometry::Geometry,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlinkParams {
    #[serde(with = "crate::color::packed")]
    pub color: Rgb,
    /// Seconds the color stays on
    pub last_time: f32,
    /// Seconds of darkness between flashes
    pub interval: f32,
}

/// Blink effect - solid color for `last_time`, black for `interval`
#[derive(Debug, Clone)]
pub struct BlinkEffect {
    params: BlinkParams,
    on_frames: u32,
    period: u32,
    frame: u32,
}

impl BlinkEffect {
    pub fn new(color: Rgb, last_time: f32, interval: f32, fps: u16) -> Self {
        Self::from_params(
            BlinkParams {
                color,
                last_time,
                interval,
            },
            fps,
        )
    }

    pub fn from_params(params: BlinkParams, fps: u16) -> Self {
        let on_frames = seconds_to_frames(params.last_time, fps);
        let off_frames = seconds_to_frames(params.interval, fps);
        Self {
            params,
            on_frames,
            period: on_frames.saturating_add(off_frames),
            frame: 0,
        }
    }

    pub const fn params(&self) -> &BlinkParams {
        &self.params
    }
}

impl Effect for BlinkEffect {
    const KIND: EffectKind = EffectKind::Blink;

    fn update<G: Geometry>(&mut self, light: &mut G, _delta_ms: u32) -> bool {
        let changed = if self.frame == 0 {
            light.data().fill(self.params.color);
            true
        } else if self.frame == self.on_frames {
            light.data().fill(BLACK);
            true
        } else {
            false
        };

        self.frame += 1;
        if self.frame >= self.period {
            self.frame = 0;
        }
        changed
    }

    fn write_fields(&self, doc: &mut Document) {
        doc.write_fields(&self.params);
    }
}
