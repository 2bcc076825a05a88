//! Parabolic fade in and out

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, seconds_to_frames};
use crate::{color::Rgb, document::Document, geometry::Geometry, math8::nscale8};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathParams {
    #[serde(with = "crate::color::packed")]
    pub color: Rgb,
    /// Seconds of one breath (fade in and out)
    pub last_time: f32,
    /// Seconds of darkness between breaths
    pub interval: f32,
}

/// Brightness scale at breath progress `x` in `[0, 1]`
///
/// `round(-1010x² + 1010x)`: zero at both ends, peaking at `x = 0.5`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn breath_scale(x: f64) -> u8 {
    let scale = libm::round(-1010.0 * x * x + 1010.0 * x);
    scale.clamp(0.0, 255.0) as u8
}

/// Breath effect - fades the color up and back down, then rests
#[derive(Debug, Clone)]
pub struct BreathEffect {
    params: BreathParams,
    on_frames: u32,
    period: u32,
    frame: u32,
}

impl BreathEffect {
    pub fn new(color: Rgb, last_time: f32, interval: f32, fps: u16) -> Self {
        Self::from_params(
            BreathParams {
                color,
                last_time,
                interval,
            },
            fps,
        )
    }

    pub fn from_params(params: BreathParams, fps: u16) -> Self {
        let on_frames = seconds_to_frames(params.last_time, fps);
        let off_frames = seconds_to_frames(params.interval, fps);
        Self {
            params,
            on_frames,
            period: on_frames.saturating_add(off_frames),
            frame: 0,
        }
    }

    pub const fn params(&self) -> &BreathParams {
        &self.params
    }
}

impl Effect for BreathEffect {
    const KIND: EffectKind = EffectKind::Breath;

    fn update<G: Geometry>(&mut self, light: &mut G, _delta_ms: u32) -> bool {
        let mut changed = false;
        if self.frame <= self.on_frames {
            let x = if self.on_frames == 0 {
                0.0
            } else {
                f64::from(self.frame) / f64::from(self.on_frames)
            };
            light
                .data()
                .fill(nscale8(self.params.color, breath_scale(x)));
            changed = true;
        }

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
