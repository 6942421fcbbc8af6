//! Plasma animation
//!
//! Classic demo-scene plasma collapsed to one dimension: each pixel sums
//! four sine waves of distances to moving reference points, and the sum
//! picks a hue off the wheel.

use libm::sinf;

use super::{Animation, FrameContext};
use crate::{StripDriver, color::wheel, math::dist};

#[derive(Debug, Clone, Default)]
pub struct PlasmaAnimation;

impl PlasmaAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for PlasmaAnimation {
    const FRAME_DELAY_MS: u32 = 10;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let time = f32::from(ctx.animation_step);
        let frame = f32::from(ctx.frame_step);
        let range = i32::from(ctx.depth.wheel_range());

        for y in 0..strip.num_pixels() {
            let yf = y as f32;
            let value = sinf(dist(frame + time, yf, 64.0, 64.0) / 4.0)
                + sinf(dist(frame, yf, 32.0, 32.0) / 4.0)
                + sinf(dist(frame, yf + time / 7.0, 95.0, 32.0) / 3.5)
                + sinf(dist(frame, yf, 95.0, 50.0) / 4.0);

            let hue = (((4.0 + value) * range as f32) as i32).rem_euclid(range);
            #[allow(clippy::cast_sign_loss)]
            strip.set_pixel(y, wheel(ctx.depth, hue as u16));
        }
        strip.show();
    }
}
