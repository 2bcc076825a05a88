//! Streaming decoder for pre-rendered animation files
//!
//! The format is plain text, one frame per line:
//!
//! ```text
//! #FF0000,#00FF00,#0000FF
//! #00FF00,#0000FF,#FF0000
//! ```
//!
//! Each token colors the next pixel in wiring order. Carriage returns are
//! ignored. Malformed tokens are logged and skipped without moving the write
//! cursor, so the pixel they would have covered keeps its previous color.

use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

use heapless::Vec;

use crate::color::{Rgb, parse_hex_token};

/// Length of a `#RRGGBB` token
const TOKEN_LEN: usize = 7;

/// Reads animation frames one line at a time, looping at end of input
#[derive(Debug)]
pub struct FrameReader<R> {
    source: R,
    frame: u32,
}

/// Token being accumulated between separators
#[derive(Default)]
struct Token {
    bytes: Vec<u8, TOKEN_LEN>,
    overflow: bool,
}

impl Token {
    fn push(&mut self, byte: u8) {
        if self.bytes.push(byte).is_err() {
            self.overflow = true;
        }
    }

    fn is_empty(&self) -> bool {
        self.bytes.is_empty() && !self.overflow
    }

    /// Write the token at `index` and return the next write position
    fn commit(&mut self, leds: &mut [Rgb], index: usize) -> usize {
        let parsed = if self.overflow {
            None
        } else {
            parse_hex_token(&self.bytes)
        };

        let next = match parsed {
            Some(color) => {
                if let Some(led) = leds.get_mut(index) {
                    *led = color;
                } else {
                    log::trace!("Animation token past pixel {index} dropped");
                }
                index + 1
            }
            None if self.is_empty() => index,
            None => {
                log::warn!(
                    "Invalid animation token: {}{}",
                    core::str::from_utf8(&self.bytes).unwrap_or("<non-utf8>"),
                    if self.overflow { "..." } else { "" }
                );
                index
            }
        };

        self.bytes.clear();
        self.overflow = false;
        next
    }
}

impl<R: Read + Seek> FrameReader<R> {
    pub const fn new(source: R) -> Self {
        Self { source, frame: 0 }
    }

    /// Number of frames played since the last rewind
    pub const fn frame(&self) -> u32 {
        self.frame
    }

    /// Decode the next frame line into `leds`
    ///
    /// Returns `Ok(false)` only when the input holds no data at all.
    /// Reaching the end of input rewinds to the first frame; if that happens
    /// before any byte of the current frame was read, decoding continues from
    /// the start so playback loops without an empty frame.
    pub fn read_frame(&mut self, leds: &mut [Rgb]) -> io::Result<bool> {
        let mut token = Token::default();
        let mut index = 0;
        let mut consumed = false;
        let mut rewound = false;

        loop {
            let mut byte = [0u8; 1];
            match self.source.read(&mut byte) {
                Ok(0) => {
                    log::debug!("End of animation, replay");
                    self.rewind()?;
                    if consumed {
                        token.commit(leds, index);
                        return Ok(true);
                    }
                    if rewound {
                        return Ok(false);
                    }
                    rewound = true;
                    continue;
                }
                Ok(_) => consumed = true,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }

            match byte[0] {
                b'\r' => {}
                b',' => index = token.commit(leds, index),
                b'\n' => {
                    token.commit(leds, index);
                    self.frame = self.frame.wrapping_add(1);
                    log::trace!("Played animation frame {}", self.frame);
                    return Ok(true);
                }
                other => token.push(other),
            }
        }
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.source.seek(SeekFrom::Start(0))?;
        self.frame = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn reader(text: &'static str) -> FrameReader<Cursor<&'static [u8]>> {
        FrameReader::new(Cursor::new(text.as_bytes()))
    }

    #[test]
    fn test_reads_one_line_per_call() {
        let mut frames = reader("#ff0000,#00FF00\r\n#0000ff,#FF0000\r\n");
        let mut leds = [BLACK; 2];

        assert!(frames.read_frame(&mut leds).unwrap());
        assert_eq!(leds, [RED, GREEN]);
        assert_eq!(frames.frame(), 1);

        assert!(frames.read_frame(&mut leds).unwrap());
        assert_eq!(leds, [BLUE, RED]);
        assert_eq!(frames.frame(), 2);
    }

    #[test]
    fn test_loops_without_empty_frame() {
        let mut frames = reader("#FF0000\n#00FF00\n");
        let mut leds = [BLACK; 1];

        for expected in [RED, GREEN, RED, GREEN, RED] {
            assert!(frames.read_frame(&mut leds).unwrap());
            assert_eq!(leds[0], expected);
        }
    }

    #[test]
    fn test_malformed_token_keeps_cursor() {
        let mut frames = reader("FF0000,#GG0000,#0000FF,#00FF001\n");
        let mut leds = [RED, RED, RED];

        assert!(frames.read_frame(&mut leds).unwrap());
        assert_eq!(leds, [BLUE, RED, RED]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut frames = reader("#FF0000\n#0000FF");
        let mut leds = [BLACK; 1];

        frames.read_frame(&mut leds).unwrap();
        frames.read_frame(&mut leds).unwrap();
        assert_eq!(leds[0], BLUE);
        assert_eq!(frames.frame(), 0);

        frames.read_frame(&mut leds).unwrap();
        assert_eq!(leds[0], RED);
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let mut frames = reader(",#FF0000,,#00FF00,\n");
        let mut leds = [BLACK; 2];

        assert!(frames.read_frame(&mut leds).unwrap());
        assert_eq!(leds, [RED, GREEN]);
    }

    #[test]
    fn test_extra_tokens_are_dropped() {
        let mut frames = reader("#FF0000,#00FF00,#0000FF\n");
        let mut leds = [BLACK; 2];

        assert!(frames.read_frame(&mut leds).unwrap());
        assert_eq!(leds, [RED, GREEN]);
    }

    #[test]
    fn test_empty_input() {
        let mut frames = reader("");
        let mut leds = [BLACK; 1];

        assert!(!frames.read_frame(&mut leds).unwrap());
        assert_eq!(leds[0], BLACK);
    }
}
