mod rainbow;
mod utils;

pub use rainbow::{fill_rainbow, hsv2rgb_rainbow};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{parse_hex_token, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
/// `FastLED` `CRGB::Green` (`0x008000`)
pub const GREEN: Rgb = Rgb { r: 0, g: 128, b: 0 };

/// Serde adapter persisting a color as a packed `0xRRGGBB` integer
pub mod packed {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Rgb, rgb_from_u32, rgb_to_u32};

    pub fn serialize<S: Serializer>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error> {
        rgb_to_u32(*color).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb, D::Error> {
        u32::deserialize(deserializer).map(rgb_from_u32)
    }
}
