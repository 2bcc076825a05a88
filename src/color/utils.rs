use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Parse a `#RRGGBB` token, accepting either hex case
///
/// Returns `None` for anything that is not exactly seven bytes with a leading `#`.
pub fn parse_hex_token(token: &[u8]) -> Option<Rgb> {
    let [b'#', digits @ ..] = token else {
        return None;
    };
    if digits.len() != 6 {
        return None;
    }

    let mut packed = 0u32;
    for &digit in digits {
        let nibble = char::from(digit).to_digit(16)?;
        packed = (packed << 4) | nibble;
    }
    Some(rgb_from_u32(packed))
}
