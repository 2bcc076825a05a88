//! Parsing of `mode,<kind>[,args...]` command lines
//!
//! Arguments follow each effect's constructor order:
//!
//! | kind | arguments |
//! |---|---|
//! | `constant` | `color` |
//! | `blink`, `breath` | `color,lastTime,interval` |
//! | `chase` | `color,direction,lastTime` |
//! | `rainbow` | `delta` |
//! | `stream` | `direction,delta` |
//! | `animation` | `name` |
//! | `music` | `soundMode` |
//! | `custom` | none |
//!
//! Colors may be written as `#RRGGBB`, `0xRRGGBB` or a decimal integer.

use core::str::{FromStr, Split};
use std::sync::Arc;

use crate::{
    color::{Rgb, parse_hex_token, rgb_from_u32},
    effect::{
        AnimationEffect, BlinkEffect, BreathEffect, ChaseEffect, ConstantEffect, CustomEffect,
        EffectContext, EffectKind, EffectSlot, MusicEffect, RainbowEffect, SoundMode,
        StreamEffect,
    },
    error::CommandError,
};

const COMMAND_MODE: &str = "mode";

/// Cursor over the comma separated arguments of one command
struct Args<'a> {
    kind: EffectKind,
    parts: Split<'a, char>,
}

impl<'a> Args<'a> {
    fn next(&mut self, name: &'static str) -> Result<&'a str, CommandError> {
        self.parts
            .next()
            .map(str::trim)
            .ok_or(CommandError::MissingArgument {
                kind: self.kind,
                name,
            })
    }

    fn parse<T: FromStr>(&mut self, name: &'static str) -> Result<T, CommandError> {
        let value = self.next(name)?;
        value.parse().map_err(|_| CommandError::InvalidArgument {
            name,
            value: value.into(),
        })
    }

    fn color(&mut self, name: &'static str) -> Result<Rgb, CommandError> {
        let value = self.next(name)?;
        parse_color(value).ok_or_else(|| CommandError::InvalidArgument {
            name,
            value: value.into(),
        })
    }
}

/// Parse a command color argument
pub fn parse_color(value: &str) -> Option<Rgb> {
    if value.starts_with('#') {
        return parse_hex_token(value.as_bytes());
    }
    let packed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };
    (packed <= 0xFF_FF_FF).then(|| rgb_from_u32(packed))
}

/// Resolve an effect name or its numeric code
fn parse_kind(value: &str) -> Result<EffectKind, CommandError> {
    EffectKind::parse_from_str(value)
        .or_else(|| value.parse().ok().and_then(EffectKind::from_raw))
        .ok_or_else(|| CommandError::UnknownEffect(value.into()))
}

/// Build an effect from a `mode,...` command line
pub fn parse_mode_command(line: &str, ctx: &EffectContext) -> Result<EffectSlot, CommandError> {
    let line = line.trim();
    let mut parts = line.split(',');
    if parts.next().map(str::trim) != Some(COMMAND_MODE) {
        return Err(CommandError::NotAModeCommand(line.into()));
    }
    let kind_name = parts
        .next()
        .map(str::trim)
        .ok_or_else(|| CommandError::NotAModeCommand(line.into()))?;
    let kind = parse_kind(kind_name)?;
    let mut args = Args { kind, parts };
    let fps = ctx.fps();

    Ok(match kind {
        EffectKind::Constant => ConstantEffect::new(args.color("color")?).into(),
        EffectKind::Blink => BlinkEffect::new(
            args.color("color")?,
            args.parse("lastTime")?,
            args.parse("interval")?,
            fps,
        )
        .into(),
        EffectKind::Breath => BreathEffect::new(
            args.color("color")?,
            args.parse("lastTime")?,
            args.parse("interval")?,
            fps,
        )
        .into(),
        EffectKind::Chase => ChaseEffect::new(
            args.color("color")?,
            args.parse("direction")?,
            args.parse("lastTime")?,
            fps,
        )
        .into(),
        EffectKind::Rainbow => RainbowEffect::new(args.parse("delta")?).into(),
        EffectKind::Stream => {
            StreamEffect::new(args.parse("direction")?, args.parse("delta")?).into()
        }
        EffectKind::Animation => {
            AnimationEffect::open(args.next("name")?, ctx.animation_dir()).into()
        }
        EffectKind::Music => MusicEffect::new(
            SoundMode::from(args.parse::<u8>("soundMode")?),
            Arc::clone(ctx.sound()),
        )
        .into(),
        EffectKind::Custom => CustomEffect::new().into(),
    })
}
