//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod animation;
mod blink;
mod breath;
mod chase;
mod constant;
mod custom;
mod music;
mod rainbow;
mod stream;

use core::{fmt, str::FromStr};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

pub use animation::{AnimationEffect, AnimationFile, AnimationParams};
pub use blink::{BlinkEffect, BlinkParams};
pub use breath::{BreathEffect, BreathParams, breath_scale};
pub use chase::{ChaseEffect, ChaseParams};
pub use constant::{ConstantEffect, ConstantParams};
pub use custom::CustomEffect;
pub use music::{MusicEffect, MusicParams, SoundMode};
pub use rainbow::{RainbowEffect, RainbowParams};
pub use stream::{StreamEffect, StreamParams};

use crate::{
    color::{Rgb, rgb_from_u32},
    document::Document,
    error::DocumentError,
    geometry::Geometry,
    sound::SoundLevel,
};

/// Color of the fallback constant effect
pub const DEFAULT_COLOR: Rgb = rgb_from_u32(0xFF_8C_1A);

/// Default frame rate used to convert seconds into ticks
pub const DEFAULT_FPS: u16 = 60;

const EFFECT_NAME_CONSTANT: &str = "constant";
const EFFECT_NAME_BLINK: &str = "blink";
const EFFECT_NAME_BREATH: &str = "breath";
const EFFECT_NAME_CHASE: &str = "chase";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_STREAM: &str = "stream";
const EFFECT_NAME_ANIMATION: &str = "animation";
const EFFECT_NAME_MUSIC: &str = "music";
const EFFECT_NAME_CUSTOM: &str = "custom";

// Shared with the remote command protocol, do not renumber
const EFFECT_ID_CONSTANT: u8 = 0;
const EFFECT_ID_BLINK: u8 = 1;
const EFFECT_ID_BREATH: u8 = 2;
const EFFECT_ID_CHASE: u8 = 3;
const EFFECT_ID_RAINBOW: u8 = 4;
const EFFECT_ID_STREAM: u8 = 5;
const EFFECT_ID_ANIMATION: u8 = 6;
const EFFECT_ID_MUSIC: u8 = 7;
const EFFECT_ID_CUSTOM: u8 = 8;

pub trait Effect {
    /// Kind tag written to documents
    const KIND: EffectKind;

    /// Advance one tick, returning whether the buffer changed
    fn update<G: Geometry>(&mut self, light: &mut G, delta_ms: u32) -> bool;

    /// Write the persisted fields (everything but `mode`)
    fn write_fields(&self, _doc: &mut Document) {}
}

/// Known effect kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EffectKind {
    Constant = EFFECT_ID_CONSTANT,
    Blink = EFFECT_ID_BLINK,
    Breath = EFFECT_ID_BREATH,
    Chase = EFFECT_ID_CHASE,
    Rainbow = EFFECT_ID_RAINBOW,
    Stream = EFFECT_ID_STREAM,
    Animation = EFFECT_ID_ANIMATION,
    Music = EFFECT_ID_MUSIC,
    Custom = EFFECT_ID_CUSTOM,
}

impl EffectKind {
    pub const ALL: [Self; 9] = [
        Self::Constant,
        Self::Blink,
        Self::Breath,
        Self::Chase,
        Self::Rainbow,
        Self::Stream,
        Self::Animation,
        Self::Music,
        Self::Custom,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_CONSTANT => Self::Constant,
            EFFECT_ID_BLINK => Self::Blink,
            EFFECT_ID_BREATH => Self::Breath,
            EFFECT_ID_CHASE => Self::Chase,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_STREAM => Self::Stream,
            EFFECT_ID_ANIMATION => Self::Animation,
            EFFECT_ID_MUSIC => Self::Music,
            EFFECT_ID_CUSTOM => Self::Custom,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constant => EFFECT_NAME_CONSTANT,
            Self::Blink => EFFECT_NAME_BLINK,
            Self::Breath => EFFECT_NAME_BREATH,
            Self::Chase => EFFECT_NAME_CHASE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Stream => EFFECT_NAME_STREAM,
            Self::Animation => EFFECT_NAME_ANIMATION,
            Self::Music => EFFECT_NAME_MUSIC,
            Self::Custom => EFFECT_NAME_CUSTOM,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_CONSTANT => Some(Self::Constant),
            EFFECT_NAME_BLINK => Some(Self::Blink),
            EFFECT_NAME_BREATH => Some(Self::Breath),
            EFFECT_NAME_CHASE => Some(Self::Chase),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_STREAM => Some(Self::Stream),
            EFFECT_NAME_ANIMATION => Some(Self::Animation),
            EFFECT_NAME_MUSIC => Some(Self::Music),
            EFFECT_NAME_CUSTOM => Some(Self::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = crate::error::CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from_str(s).ok_or_else(|| Self::Err::UnknownEffect(s.into()))
    }
}

/// Process-wide inputs effects are built with
///
/// Cloning shares the same sound level.
#[derive(Debug, Clone)]
pub struct EffectContext {
    fps: u16,
    animation_dir: PathBuf,
    sound: Arc<SoundLevel>,
}

impl Default for EffectContext {
    fn default() -> Self {
        Self::new(DEFAULT_FPS, "animations")
    }
}

impl EffectContext {
    pub fn new(fps: u16, animation_dir: impl Into<PathBuf>) -> Self {
        Self {
            fps,
            animation_dir: animation_dir.into(),
            sound: Arc::new(SoundLevel::new()),
        }
    }

    /// Share an existing sound level instead of a fresh one
    #[must_use]
    pub fn with_sound(mut self, sound: Arc<SoundLevel>) -> Self {
        self.sound = sound;
        self
    }

    pub const fn fps(&self) -> u16 {
        self.fps
    }

    pub fn animation_dir(&self) -> &Path {
        &self.animation_dir
    }

    /// Handle for the audio capture side
    pub fn sound(&self) -> &Arc<SoundLevel> {
        &self.sound
    }
}

/// Convert a duration in seconds to whole ticks
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn seconds_to_frames(seconds: f32, fps: u16) -> u32 {
    (f32::from(fps) * seconds) as u32
}

/// Effect slot - enum containing the active effect
///
/// Assigning a new slot drops the previous effect together with any
/// resources it holds.
#[derive(Debug)]
pub enum EffectSlot {
    Constant(ConstantEffect),
    Blink(BlinkEffect),
    Breath(BreathEffect),
    Chase(ChaseEffect),
    Rainbow(RainbowEffect),
    Stream(StreamEffect),
    Animation(AnimationEffect),
    Music(MusicEffect),
    Custom(CustomEffect),
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Constant(ConstantEffect::new(DEFAULT_COLOR))
    }
}

impl EffectSlot {
    /// Get the effect kind for external observation
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Constant(_) => ConstantEffect::KIND,
            Self::Blink(_) => BlinkEffect::KIND,
            Self::Breath(_) => BreathEffect::KIND,
            Self::Chase(_) => ChaseEffect::KIND,
            Self::Rainbow(_) => RainbowEffect::KIND,
            Self::Stream(_) => StreamEffect::KIND,
            Self::Animation(_) => <AnimationEffect>::KIND,
            Self::Music(_) => MusicEffect::KIND,
            Self::Custom(_) => CustomEffect::KIND,
        }
    }

    /// Advance the active effect by one tick
    ///
    /// Returns `true` when the pixel buffer changed and should be flushed.
    pub fn update<G: Geometry>(&mut self, light: &mut G, delta_ms: u32) -> bool {
        match self {
            Self::Constant(effect) => effect.update(light, delta_ms),
            Self::Blink(effect) => effect.update(light, delta_ms),
            Self::Breath(effect) => effect.update(light, delta_ms),
            Self::Chase(effect) => effect.update(light, delta_ms),
            Self::Rainbow(effect) => effect.update(light, delta_ms),
            Self::Stream(effect) => effect.update(light, delta_ms),
            Self::Animation(effect) => effect.update(light, delta_ms),
            Self::Music(effect) => effect.update(light, delta_ms),
            Self::Custom(effect) => effect.update(light, delta_ms),
        }
    }

    /// Write `mode` and the effect's persisted fields
    pub fn write_document(&self, doc: &mut Document) {
        doc.set(crate::document::MODE_KEY, self.kind().as_raw());
        match self {
            Self::Constant(effect) => effect.write_fields(doc),
            Self::Blink(effect) => effect.write_fields(doc),
            Self::Breath(effect) => effect.write_fields(doc),
            Self::Chase(effect) => effect.write_fields(doc),
            Self::Rainbow(effect) => effect.write_fields(doc),
            Self::Stream(effect) => effect.write_fields(doc),
            Self::Animation(effect) => effect.write_fields(doc),
            Self::Music(effect) => effect.write_fields(doc),
            Self::Custom(effect) => effect.write_fields(doc),
        }
    }

    /// Fresh document holding only this effect
    pub fn snapshot(&self) -> Document {
        let mut doc = Document::new();
        self.write_document(&mut doc);
        doc
    }

    /// Rebuild an effect from a document
    ///
    /// A missing or unknown `mode` yields the default constant effect.
    /// A known mode whose fields are missing or ill-typed is an error.
    pub fn from_document(doc: &Document, ctx: &EffectContext) -> Result<Self, DocumentError> {
        let Some(kind) = doc
            .mode()
            .and_then(|raw| u8::try_from(raw).ok())
            .and_then(EffectKind::from_raw)
        else {
            log::warn!("Document has no known mode, using constant effect");
            return Ok(Self::default());
        };

        let fields = |source: serde_json::Error| DocumentError::Fields { kind, source };
        Ok(match kind {
            EffectKind::Constant => {
                Self::Constant(ConstantEffect::from_params(doc.read_fields().map_err(fields)?))
            }
            EffectKind::Blink => Self::Blink(BlinkEffect::from_params(
                doc.read_fields().map_err(fields)?,
                ctx.fps(),
            )),
            EffectKind::Breath => Self::Breath(BreathEffect::from_params(
                doc.read_fields().map_err(fields)?,
                ctx.fps(),
            )),
            EffectKind::Chase => Self::Chase(ChaseEffect::from_params(
                doc.read_fields().map_err(fields)?,
                ctx.fps(),
            )),
            EffectKind::Rainbow => {
                Self::Rainbow(RainbowEffect::from_params(doc.read_fields().map_err(fields)?))
            }
            EffectKind::Stream => {
                Self::Stream(StreamEffect::from_params(doc.read_fields().map_err(fields)?))
            }
            EffectKind::Animation => Self::Animation(AnimationEffect::from_params(
                doc.read_fields().map_err(fields)?,
                ctx.animation_dir(),
            )),
            EffectKind::Music => Self::Music(MusicEffect::from_params(
                doc.read_fields().map_err(fields)?,
                Arc::clone(ctx.sound()),
            )),
            EffectKind::Custom => Self::Custom(CustomEffect::new()),
        })
    }

    /// Rebuild an effect from a document, falling back to the default
    /// constant effect on any error
    pub fn from_document_or_default(doc: &Document, ctx: &EffectContext) -> Self {
        Self::from_document(doc, ctx).unwrap_or_else(|err| {
            log::warn!("Failed to restore effect: {err}");
            Self::default()
        })
    }

    /// Music effect, if active, for publishing samples
    pub fn as_music(&self) -> Option<&MusicEffect> {
        match self {
            Self::Music(effect) => Some(effect),
            _ => None,
        }
    }

    /// Write cursor of the custom effect, if active
    pub fn custom_cursor_mut(&mut self) -> Option<&mut usize> {
        match self {
            Self::Custom(effect) => Some(effect.cursor_mut()),
            _ => None,
        }
    }

    pub fn as_custom_mut(&mut self) -> Option<&mut CustomEffect> {
        match self {
            Self::Custom(effect) => Some(effect),
            _ => None,
        }
    }
}

macro_rules! impl_from_effect {
    ($($variant:ident($effect:ty)),* $(,)?) => {
        $(
            impl From<$effect> for EffectSlot {
                fn from(effect: $effect) -> Self {
                    Self::$variant(effect)
                }
            }
        )*
    };
}

impl_from_effect!(
    Constant(ConstantEffect),
    Blink(BlinkEffect),
    Breath(BreathEffect),
    Chase(ChaseEffect),
    Rainbow(RainbowEffect),
    Stream(StreamEffect),
    Animation(AnimationEffect),
    Music(MusicEffect),
    Custom(CustomEffect),
);
