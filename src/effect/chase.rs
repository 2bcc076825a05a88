//! Ping-pong sweep of a single pixel (strip) or a single ring (disc)

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind, seconds_to_frames};
use crate::{
    color::{BLACK, Rgb},
    document::Document,
    geometry::{Geometry, Layout},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaseParams {
    #[serde(with = "crate::color::packed")]
    pub color: Rgb,
    /// Persisted for the remote UI; the sweep does not branch on it yet
    pub direction: u8,
    /// Seconds spent on each position
    pub last_time: f32,
}

/// Chase effect - lights one position at a time, sweeping out and back
///
/// Over `2L - 1` steps the positions run `0, 1, .., L-1, L-2, .., 0`, with
/// `L` the strip length or ring count, then the sweep restarts.
#[derive(Debug, Clone)]
pub struct ChaseEffect {
    params: ChaseParams,
    step_frames: u32,
    frame: u32,
}

impl ChaseEffect {
    pub fn new(color: Rgb, direction: u8, last_time: f32, fps: u16) -> Self {
        Self::from_params(
            ChaseParams {
                color,
                direction,
                last_time,
            },
            fps,
        )
    }

    pub fn from_params(params: ChaseParams, fps: u16) -> Self {
        Self {
            params,
            step_frames: seconds_to_frames(params.last_time, fps).max(1),
            frame: 0,
        }
    }

    pub const fn params(&self) -> &ChaseParams {
        &self.params
    }

    /// Position to light on a step boundary, or `None` between steps
    ///
    /// Restarts the sweep once the return leg is complete.
    fn next_position(&mut self, len: usize) -> Option<usize> {
        if self.frame % self.step_frames != 0 {
            return None;
        }

        let period = 2 * len - 1;
        let mut index = (self.frame / self.step_frames) as usize;
        if index >= period {
            self.frame = 0;
            index = 0;
        }
        if index >= len {
            index = period - 1 - index;
        }
        Some(index)
    }
}

impl Effect for ChaseEffect {
    const KIND: EffectKind = EffectKind::Chase;

    fn update<G: Geometry>(&mut self, light: &mut G, _delta_ms: u32) -> bool {
        let color = self.params.color;
        let changed = match light.layout() {
            Layout::Strip(mut strip) => {
                if strip.l() == 0 {
                    return false;
                }
                match self.next_position(strip.l()) {
                    Some(index) => {
                        strip.data().fill(BLACK);
                        *strip.at(index) = color;
                        true
                    }
                    None => false,
                }
            }
            Layout::Disc(mut disc) => {
                if disc.r() == 0 {
                    return false;
                }
                match self.next_position(disc.r()) {
                    Some(ring) => {
                        disc.data().fill(BLACK);
                        disc.ring(ring).fill(color);
                        true
                    }
                    None => false,
                }
            }
        };

        self.frame += 1;
        changed
    }

    fn write_fields(&self, doc: &mut Document) {
        doc.write_fields(&self.params);
    }
}
