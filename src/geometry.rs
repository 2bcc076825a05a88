//! Pixel layouts effects render into
//!
//! A geometry owns the flat pixel buffer and knows how logical positions map
//! onto it. Two layouts exist: a linear strip and a disc made of concentric
//! rings. Effects that only fill the whole buffer use [`Geometry::data`];
//! shape-aware effects match on [`Geometry::layout`] and run one algorithm
//! per shape.
//!
//! Addressing is the caller's responsibility. Out-of-range positions are a
//! programming error and trip a debug assertion (or the slice bounds check).

use crate::{color::Rgb, error::GeometryError};

/// Uniform access to a pixel layout
pub trait Geometry {
    /// Flat pixel buffer in wiring order
    fn data(&mut self) -> &mut [Rgb];

    /// Total number of pixels
    fn count(&self) -> usize;

    /// Shape-specific addressing
    fn layout(&mut self) -> Layout<'_>;
}

/// Borrowed, shape-specific view of a geometry
pub enum Layout<'a> {
    Strip(StripView<'a>),
    Disc(DiscView<'a>),
}

impl Layout<'_> {
    /// Flat pixel buffer in wiring order
    pub fn data(&mut self) -> &mut [Rgb] {
        match self {
            Self::Strip(strip) => strip.data(),
            Self::Disc(disc) => disc.data(),
        }
    }
}

/// Linear addressing over a strip
pub struct StripView<'a> {
    leds: &'a mut [Rgb],
    reversed: bool,
}

impl StripView<'_> {
    /// Strip length
    pub fn l(&self) -> usize {
        self.leds.len()
    }

    pub fn count(&self) -> usize {
        self.leds.len()
    }

    pub fn data(&mut self) -> &mut [Rgb] {
        self.leds
    }

    /// Pixel at logical position `index`, honoring strip reversal
    pub fn at(&mut self, index: usize) -> &mut Rgb {
        debug_assert!(index < self.leds.len(), "strip index {index} out of range");
        let index = if self.reversed {
            self.leds.len() - 1 - index
        } else {
            index
        };
        &mut self.leds[index]
    }
}

/// Ring/offset addressing over a disc
pub struct DiscView<'a> {
    leds: &'a mut [Rgb],
    rings: &'a [usize],
    starts: &'a [usize],
}

impl DiscView<'_> {
    /// Number of rings
    pub fn r(&self) -> usize {
        self.rings.len()
    }

    /// Number of pixels in `ring`
    pub fn l(&self, ring: usize) -> usize {
        self.rings[ring]
    }

    pub fn count(&self) -> usize {
        self.leds.len()
    }

    pub fn data(&mut self) -> &mut [Rgb] {
        self.leds
    }

    /// Pixel at `offset` within `ring`
    pub fn at(&mut self, ring: usize, offset: usize) -> &mut Rgb {
        debug_assert!(ring < self.rings.len(), "ring {ring} out of range");
        debug_assert!(
            offset < self.rings[ring],
            "offset {offset} out of range for ring {ring}"
        );
        &mut self.leds[self.starts[ring] + offset]
    }

    /// All pixels of `ring`
    pub fn ring(&mut self, ring: usize) -> &mut [Rgb] {
        let start = self.starts[ring];
        &mut self.leds[start..start + self.rings[ring]]
    }
}

/// Linear strip of `N` pixels
#[derive(Debug, Clone)]
pub struct LightStrip<const N: usize> {
    leds: [Rgb; N],
    reversed: bool,
}

impl<const N: usize> Default for LightStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LightStrip<N> {
    pub const fn new() -> Self {
        Self {
            leds: [Rgb { r: 0, g: 0, b: 0 }; N],
            reversed: false,
        }
    }

    /// Strip wired from its far end
    #[must_use]
    pub const fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.leds
    }
}

impl<const N: usize> Geometry for LightStrip<N> {
    fn data(&mut self) -> &mut [Rgb] {
        &mut self.leds
    }

    fn count(&self) -> usize {
        N
    }

    fn layout(&mut self) -> Layout<'_> {
        Layout::Strip(StripView {
            leds: &mut self.leds,
            reversed: self.reversed,
        })
    }
}

/// Disc of `R` concentric rings holding `N` pixels in total
///
/// Ring 0 is wired first; ring pixels are contiguous in the buffer.
#[derive(Debug, Clone)]
pub struct LightDisc<const N: usize, const R: usize> {
    leds: [Rgb; N],
    rings: [usize; R],
    starts: [usize; R],
}

impl<const N: usize, const R: usize> LightDisc<N, R> {
    /// Create a disc from per-ring pixel counts
    ///
    /// The counts must add up to `N`.
    pub fn new(rings: [usize; R]) -> Result<Self, GeometryError> {
        let mut starts = [0; R];
        let mut total = 0;
        for (start, &len) in starts.iter_mut().zip(&rings) {
            *start = total;
            total += len;
        }
        if total != N {
            return Err(GeometryError::RingMismatch {
                expected: N,
                actual: total,
            });
        }

        Ok(Self {
            leds: [Rgb { r: 0, g: 0, b: 0 }; N],
            rings,
            starts,
        })
    }

    pub const fn rings(&self) -> &[usize; R] {
        &self.rings
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.leds
    }
}

impl<const N: usize, const R: usize> Geometry for LightDisc<N, R> {
    fn data(&mut self) -> &mut [Rgb] {
        &mut self.leds
    }

    fn count(&self) -> usize {
        N
    }

    fn layout(&mut self) -> Layout<'_> {
        Layout::Disc(DiscView {
            leds: &mut self.leds,
            rings: &self.rings,
            starts: &self.starts,
        })
    }
}
