pub mod animation;
pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod effect;
pub mod error;
pub mod frame_scheduler;
pub mod geometry;
pub mod math8;
pub mod sound;

pub use command::parse_mode_command;
pub use config::EngineConfig;
pub use document::Document;
pub use effect::{DEFAULT_COLOR, Effect, EffectContext, EffectKind, EffectSlot};
pub use error::{CommandError, ConfigError, DocumentError, GeometryError};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use geometry::{Geometry, Layout, LightDisc, LightStrip};
pub use sound::SoundLevel;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
