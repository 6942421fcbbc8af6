//! Rainbow animations
//!
//! `RainbowAnimation` scrolls the full hue wheel along the strip;
//! `BreathingAnimation` holds the wheel still and ramps the strip-wide
//! brightness up and down instead.

use super::{Animation, FrameContext};
use crate::{StripDriver, color::wheel, math::map_range};

/// Smoothly scrolling spatial rainbow.
#[derive(Debug, Clone, Default)]
pub struct RainbowAnimation;

impl RainbowAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for RainbowAnimation {
    const FRAME_DELAY_MS: u32 = 1;

    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let count = strip.num_pixels();
        if count == 0 {
            return;
        }

        let range = u32::from(ctx.depth.wheel_range());
        for i in 0..count {
            let pos =
                (i as u32 * range / count as u32 + u32::from(ctx.animation_step)) % range;
            #[allow(clippy::cast_possible_truncation)]
            strip.set_pixel(i, wheel(ctx.depth, pos as u16));
        }
        strip.show();
    }
}

/// Static spatial rainbow with a triangular strip-wide brightness ramp.
///
/// The ramp peaks at the brightness ceiling of the currently selected level,
/// so breathing never outshines the other modes.
#[derive(Debug, Clone, Default)]
pub struct BreathingAnimation;

impl BreathingAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for BreathingAnimation {
    const FRAME_DELAY_MS: u32 = 1;

    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let count = strip.num_pixels();
        if count == 0 {
            return;
        }

        let range = i32::from(ctx.depth.wheel_range());
        let half = range / 2;
        let step = i32::from(ctx.animation_step);
        let ceiling = i32::from(ctx.ceiling);

        // Rising half, then falling half.
        let level = if step < half {
            map_range(step, 0, half, 0, ceiling)
        } else {
            ceiling - map_range(step, half, range, 0, ceiling)
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        for i in 0..count {
            let pos = (i as i32 * (range / count as i32)) % range;
            strip.set_pixel(i, wheel(ctx.depth, pos as u16));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        strip.set_brightness(level.clamp(0, 255) as u8);
        strip.show();
    }
}
