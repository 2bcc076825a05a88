//! Audio-reactive level meter and spectrum block

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Effect, EffectKind};
use crate::{
    color::{BLACK, GREEN, Hsv, RED, Rgb, hsv2rgb_rainbow},
    document::Document,
    geometry::{Geometry, Layout},
    sound::SoundLevel,
};

const SATURATION: u8 = 255;
const VALUE: u8 = 240;

/// How the sound level is visualised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SoundMode {
    /// Green bar from the start with a red peak pixel
    #[default]
    Level,
    /// Hue-cycling block, centered on strips and from the outside in on discs
    Spectrum,
}

impl From<u8> for SoundMode {
    fn from(raw: u8) -> Self {
        if raw == 0 { Self::Level } else { Self::Spectrum }
    }
}

impl From<SoundMode> for u8 {
    fn from(mode: SoundMode) -> Self {
        match mode {
            SoundMode::Level => 0,
            SoundMode::Spectrum => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicParams {
    pub sound_mode: SoundMode,
}

/// Music effect - renders the latest published sound level every tick
#[derive(Debug, Clone)]
pub struct MusicEffect {
    params: MusicParams,
    sound: Arc<SoundLevel>,
    hue: u8,
}

/// Number of units lit for a level in `[0, 1]`, rounded down
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn lit_floor(len: usize, level: f32) -> usize {
    ((len as f32 * level) as usize).min(len)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn lit_round(len: usize, level: f32) -> usize {
    (libm::roundf(len as f32 * level) as usize).min(len)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn lit_ceil(len: usize, level: f32) -> usize {
    (libm::ceilf(len as f32 * level) as usize).min(len)
}

impl MusicEffect {
    pub fn new(sound_mode: SoundMode, sound: Arc<SoundLevel>) -> Self {
        Self::from_params(MusicParams { sound_mode }, sound)
    }

    pub fn from_params(params: MusicParams, sound: Arc<SoundLevel>) -> Self {
        Self {
            params,
            sound,
            hue: 0,
        }
    }

    pub const fn params(&self) -> &MusicParams {
        &self.params
    }

    /// Publish a new sample, same as writing to the shared [`SoundLevel`]
    pub fn set_volume(&self, volume: f32) {
        self.sound.set(volume);
    }

    pub fn sound(&self) -> &Arc<SoundLevel> {
        &self.sound
    }

    fn next_hue_color(&mut self) -> Rgb {
        let color = hsv2rgb_rainbow(Hsv {
            hue: self.hue,
            sat: SATURATION,
            val: VALUE,
        });
        self.hue = self.hue.wrapping_add(1);
        color
    }
}

impl Effect for MusicEffect {
    const KIND: EffectKind = EffectKind::Music;

    fn update<G: Geometry>(&mut self, light: &mut G, _delta_ms: u32) -> bool {
        let level = self.sound.get();
        match (self.params.sound_mode, light.layout()) {
            (SoundMode::Level, Layout::Strip(mut strip)) => {
                let lit = lit_floor(strip.l(), level);
                strip.data().fill(BLACK);
                if lit > 0 {
                    for index in 0..lit - 1 {
                        *strip.at(index) = GREEN;
                    }
                    *strip.at(lit - 1) = RED;
                }
            }
            (SoundMode::Level, Layout::Disc(mut disc)) => {
                let lit = lit_floor(disc.r(), level);
                disc.data().fill(BLACK);
                if lit > 0 {
                    for ring in 0..lit - 1 {
                        disc.ring(ring).fill(GREEN);
                    }
                    disc.ring(lit - 1).fill(RED);
                }
            }
            (SoundMode::Spectrum, Layout::Strip(mut strip)) => {
                let color = self.next_hue_color();
                let count = strip.count();
                let lit = lit_round(count, level);
                let start = (count - lit) / 2;
                let leds = strip.data();
                leds.fill(BLACK);
                leds[start..start + lit].fill(color);
            }
            (SoundMode::Spectrum, Layout::Disc(mut disc)) => {
                let color = self.next_hue_color();
                let rings = disc.r();
                let lit = lit_ceil(rings, level);
                disc.data().fill(BLACK);
                for ring in rings - lit..rings {
                    disc.ring(ring).fill(color);
                }
            }
        }
        true
    }

    fn write_fields(&self, doc: &mut Document) {
        doc.write_fields(&self.params);
    }
}
