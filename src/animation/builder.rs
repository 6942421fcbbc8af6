//! Color-history animations
//!
//! `SplitColorAnimation` feeds a slowly breathing wheel color into a
//! per-pixel history ring and renders the ring mirrored outward from the
//! strip center, so colors appear to grow from the middle.
//! `SmoothColorsAnimation` is the degenerate single-slot version: the whole
//! strip shows the head color.

use core::f32::consts::PI;

use libm::sinf;

use super::{Animation, FrameContext, set_guarded};
use crate::{
    StripDriver,
    color::{Rgb, wheel},
};

/// Mirrored center-out color builder.
///
/// `N` is the strip's pixel count and sizes the history ring.
#[derive(Debug, Clone)]
pub struct SplitColorAnimation<const N: usize> {
    /// One color per frame of history; slot 0 is the newest.
    ring: [Rgb; N],
}

impl<const N: usize> SplitColorAnimation<N> {
    pub const fn new() -> Self {
        Self {
            ring: [Rgb { r: 0, g: 0, b: 0 }; N],
        }
    }
}

impl<const N: usize> Default for SplitColorAnimation<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Animation for SplitColorAnimation<N> {
    const FRAME_DELAY_MS: u32 = 5;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let count = strip.num_pixels().min(N);
        if count == 0 {
            return;
        }

        let head = wheel(ctx.depth, ctx.animation_step);
        // Slow sine pull toward white; y sweeps 0..2 over the wheel cycle.
        let y = sinf(PI * f32::from(ctx.animation_step) / (count as f32 * 4.0)) + 1.0;
        let max = i32::from(ctx.depth.channel_max());
        let pull = |channel: u8| -> u8 {
            let pulled = max - ((max - i32::from(channel)) as f32 * y) as i32;
            #[allow(clippy::cast_sign_loss)]
            {
                pulled.clamp(0, max) as u8
            }
        };
        self.ring[0] = Rgb {
            r: pull(head.r),
            g: pull(head.g),
            b: pull(head.b),
        };

        let half = (count / 2) as i32;
        for i in 0..=count / 2 {
            set_guarded(strip, half - i as i32, self.ring[i]);
            set_guarded(strip, half + i as i32, self.ring[i]);
        }
        strip.show();

        // Shift history one slot; the oldest color falls off the end.
        for k in (1..count).rev() {
            self.ring[k] = self.ring[k - 1];
        }
    }
}

/// Whole-strip wheel color cycle.
#[derive(Debug, Clone, Default)]
pub struct SmoothColorsAnimation;

impl SmoothColorsAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for SmoothColorsAnimation {
    const FRAME_DELAY_MS: u32 = 5;

    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let color = wheel(ctx.depth, ctx.animation_step);
        for i in 0..strip.num_pixels() {
            strip.set_pixel(i, color);
        }
        strip.show();
    }
}
