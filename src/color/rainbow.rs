//! Rainbow hue mapping (ported from `FastLED` `hsv2rgb_rainbow`)
//!
//! Unlike the plain HSV spectrum, the rainbow mapping widens the yellow band
//! and gives each of the eight hue sections roughly equal perceived weight.

use crate::{
    color::{Hsv, Rgb},
    math8::{scale8, scale8_video},
};

/// Saturation used by [`fill_rainbow`]
const FILL_SATURATION: u8 = 240;

/// Convert a hue-based color to RGB using the rainbow mapping
pub fn hsv2rgb_rainbow(hsv: Hsv) -> Rgb {
    let hue = hsv.hue;
    let offset8 = (hue & 0x1F) << 3;
    let third = scale8(offset8, 85);
    let two_thirds = scale8(offset8, 170);

    // Eight 32-step sections: R-O, O-Y, Y-G, G-A, A-B, B-P, P-K, K-R
    let (mut r, mut g, mut b) = match hue >> 5 {
        0 => (255 - third, third, 0),
        1 => (171, 85 + third, 0),
        2 => (171 - two_thirds, 170 + third, 0),
        3 => (0, 255 - third, third),
        4 => (0, 171 - two_thirds, 85 + two_thirds),
        5 => (third, 0, 255 - third),
        6 => (85 + third, 0, 171 - third),
        _ => (170 + third, 0, 85 - third),
    };

    if hsv.sat != 255 {
        if hsv.sat == 0 {
            (r, g, b) = (255, 255, 255);
        } else {
            let desat = scale8_video(255 - hsv.sat, 255 - hsv.sat);
            let sat_scale = 255 - desat;
            r = scale8(r, sat_scale) + desat;
            g = scale8(g, sat_scale) + desat;
            b = scale8(b, sat_scale) + desat;
        }
    }

    if hsv.val != 255 {
        let val = scale8_video(hsv.val, hsv.val);
        if val == 0 {
            (r, g, b) = (0, 0, 0);
        } else {
            r = scale8(r, val);
            g = scale8(g, val);
            b = scale8(b, val);
        }
    }

    Rgb { r, g, b }
}

/// Fill LEDs with a rainbow starting at `initial_hue`, advancing `delta_hue` per LED
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, delta_hue: u8) {
    let mut hsv = Hsv {
        hue: initial_hue,
        sat: FILL_SATURATION,
        val: 255,
    };
    for led in leds {
        *led = hsv2rgb_rainbow(hsv);
        hsv.hue = hsv.hue.wrapping_add(delta_hue);
    }
}
