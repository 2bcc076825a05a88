//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, effect::EffectSlot, geometry::Geometry};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether the frame was pushed to the output.
    pub flushed: bool,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Advances the active effect once per tick
/// - Writes to the output driver only when the effect reports a change
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(strip, driver, config.frame_duration());
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<G: Geometry, O: OutputDriver> {
    output: O,
    light: G,
    effect: EffectSlot,
    next_frame: Instant,
    last_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<G: Geometry, O: OutputDriver> FrameScheduler<G, O> {
    /// Create a new frame scheduler running the default effect.
    pub fn new(light: G, driver: O, frame_duration: Duration) -> Self {
        Self {
            output: driver,
            light,
            effect: EffectSlot::default(),
            next_frame: Instant::from_millis(0),
            last_frame: None,
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Updates the active effect
    /// 3. Writes to the output driver if the frame changed
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let delta_ms = self.last_frame.map_or(0, |last| {
            u32::try_from(now.as_millis().saturating_sub(last.as_millis())).unwrap_or(u32::MAX)
        });
        self.last_frame = Some(now);

        let flushed = self.effect.update(&mut self.light, delta_ms);
        if flushed {
            self.output.write(self.light.data());
        }

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            flushed,
        }
    }

    /// Replace the active effect, releasing the previous one.
    pub fn set_effect(&mut self, effect: impl Into<EffectSlot>) {
        self.effect = effect.into();
    }

    pub fn effect(&self) -> &EffectSlot {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut EffectSlot {
        &mut self.effect
    }

    /// Get a mutable reference to the geometry, e.g. for custom-mode writes.
    pub fn light_mut(&mut self) -> &mut G {
        &mut self.light
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
