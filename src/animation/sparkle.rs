//! Random sparkle animations
//!
//! `SparkleAnimation` lights one random pixel per tick and never cleans up.
//! `SparklerAnimation` runs a one-dimensional diffusion over an intensity
//! field: random seeds flare up, spread toward their left neighbor, and
//! decay back to black.

use super::{Animation, FrameContext};
use crate::{
    StripDriver,
    color::{Rgb, wheel},
};

/// Uncleared random color noise.
#[derive(Debug, Clone, Default)]
pub struct SparkleAnimation;

impl SparkleAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for SparkleAnimation {
    const FRAME_DELAY_MS: u32 = 3;

    #[allow(clippy::cast_possible_truncation)]
    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let count = strip.num_pixels();
        if count == 0 {
            return;
        }

        let index = ctx.rng.next_below(count as u32) as usize;
        let pos = ctx.rng.next_below(u32::from(ctx.depth.wheel_range())) as u16;
        strip.set_pixel(index, wheel(ctx.depth, pos));
        strip.show();
    }
}

/// Intensity lost per pixel per tick.
const DECAY: u8 = 15;

/// Intensities above this render as a wheel color, below as off.
const LIT_THRESHOLD: u8 = 50;

/// Diffusing sparkler.
///
/// `N` is the strip's pixel count; the two buffers hold the previous and
/// next intensity field so a tick never reads values it already wrote.
#[derive(Debug, Clone)]
pub struct SparklerAnimation<const N: usize> {
    current: [u8; N],
    next: [u8; N],
}

impl<const N: usize> SparklerAnimation<N> {
    pub const fn new() -> Self {
        Self {
            current: [0; N],
            next: [0; N],
        }
    }
}

impl<const N: usize> Default for SparklerAnimation<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Animation for SparklerAnimation<N> {
    const FRAME_DELAY_MS: u32 = 10;

    #[allow(clippy::cast_possible_truncation)]
    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let count = strip.num_pixels().min(N);
        if count == 0 {
            return;
        }

        // Seed one random pixel with a random intensity.
        let seed = ctx.rng.next_below(count as u32) as usize;
        self.current[seed] = (ctx.rng.next_u32() & 0xff) as u8;

        let range = ctx.depth.wheel_range();
        for x in 0..count {
            // Average with the right neighbor (the last pixel diffuses
            // against the dark edge), then decay.
            let right = if x + 1 < count { self.current[x + 1] } else { 0 };
            let mixed = ((u16::from(self.current[x]) + u16::from(right)) / 2) as u8;
            let value = mixed.saturating_sub(DECAY);
            self.next[x] = value;

            if value > LIT_THRESHOLD {
                let pos = (u16::from(value) / 5 + ctx.animation_step) % range;
                strip.set_pixel(x, wheel(ctx.depth, pos));
            } else {
                strip.set_pixel(x, Rgb { r: 0, g: 0, b: 0 });
            }
        }
        strip.show();

        self.current = self.next;
    }
}
