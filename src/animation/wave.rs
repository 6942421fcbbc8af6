//! Wave animation: a traveling luminance sine over a fixed hue.
//!
//! Peaks of the sine blend the cycle color toward white, troughs toward
//! black. The wavelength self-calibrates to the strip length.

use core::f32::consts::PI;

use libm::sinf;

use super::{Animation, FrameContext};
use crate::{StripDriver, color::Rgb};

#[derive(Debug, Clone, Default)]
pub struct WaveAnimation;

impl WaveAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for WaveAnimation {
    const FRAME_DELAY_MS: u32 = 5;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let count = strip.num_pixels();
        if count == 0 {
            return;
        }

        let max = f32::from(ctx.depth.channel_max());
        let r = f32::from(ctx.color.r);
        let g = f32::from(ctx.color.g);
        let b = f32::from(ctx.color.b);

        #[allow(clippy::cast_sign_loss)]
        for i in 0..count {
            let y = sinf(PI * (f32::from(ctx.animation_step) + i as f32) / count as f32);
            let color = if y >= 0.0 {
                // Peak: blend toward white. Translate y to 0.0 (top) to
                // 1.0 (center).
                let y = 1.0 - y;
                Rgb {
                    r: (max - (max - r) * y) as u8,
                    g: (max - (max - g) * y) as u8,
                    b: (max - (max - b) * y) as u8,
                }
            } else {
                // Trough: blend toward black. Translate y to 0.0 (bottom)
                // to 1.0 (center).
                let y = y + 1.0;
                Rgb {
                    r: (r * y) as u8,
                    g: (g * y) as u8,
                    b: (b * y) as u8,
                }
            };
            strip.set_pixel(i, color);
        }
        strip.show();
    }
}
