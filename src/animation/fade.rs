//! Fade animation: the cycle color fades in, then back out.
//!
//! Each tick computes a channel threshold `y` from the animation step;
//! channels above the threshold render gamma-corrected at `channel - y`,
//! channels below render as black. The two color-depth conventions use
//! different threshold formulas and both are kept.

use super::{Animation, FrameContext};
use crate::{StripDriver, color::Rgb, config::ColorDepth, gamma};

#[derive(Debug, Clone, Default)]
pub struct FadeAnimation;

impl FadeAnimation {
    pub const fn new() -> Self {
        Self
    }

    /// Threshold for the rising half of the cycle.
    #[allow(clippy::cast_possible_truncation)]
    fn threshold_in(depth: ColorDepth, step: u16, color: Rgb) -> i32 {
        let step = f32::from(step);
        match depth {
            ColorDepth::SevenBit => {
                let high = f32::from(color.r.max(color.g).max(color.b));
                (high - high * (step / 192.0)) as i32
            }
            ColorDepth::EightBit => {
                let low = f32::from(color.r.min(color.g).min(color.b));
                let half = f32::from(depth.wheel_range() / 2);
                (low - low * (step / half)) as i32
            }
        }
    }

    /// Threshold for the falling half of the cycle.
    #[allow(clippy::cast_possible_truncation)]
    fn threshold_out(depth: ColorDepth, step: u16, color: Rgb) -> i32 {
        let step = f32::from(step);
        match depth {
            ColorDepth::SevenBit => {
                let high = f32::from(color.r.max(color.g).max(color.b));
                (high - high * (2.0 - 0.005 * step)) as i32
            }
            ColorDepth::EightBit => {
                let low = f32::from(color.r.min(color.g).min(color.b));
                let half = f32::from(depth.wheel_range() / 2);
                (low * (step / half)) as i32
            }
        }
    }

    /// Clamp a thresholded channel into the gamma table's domain.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn corrected(channel: u8, threshold: i32) -> u8 {
        if i32::from(channel) > threshold {
            gamma::correct((i32::from(channel) - threshold).clamp(0, 255) as u8)
        } else {
            gamma::correct(0)
        }
    }
}

impl Animation for FadeAnimation {
    const FRAME_DELAY_MS: u32 = 5;

    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let half = ctx.depth.wheel_range() / 2;
        let y = if ctx.animation_step < half {
            Self::threshold_in(ctx.depth, ctx.animation_step, ctx.color)
        } else {
            Self::threshold_out(ctx.depth, ctx.animation_step, ctx.color)
        };

        let color = Rgb {
            r: Self::corrected(ctx.color.r, y),
            g: Self::corrected(ctx.color.g, y),
            b: Self::corrected(ctx.color.b, y),
        };
        for i in 0..strip.num_pixels() {
            strip.set_pixel(i, color);
        }
        strip.show();
    }
}
