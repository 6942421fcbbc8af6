//! Sequential reveal animations: a single chasing dot and a full wipe.

use super::{Animation, FrameContext, set_guarded};
use crate::{StripDriver, color::Rgb};

/// Single dot chasing down the strip, erasing its own trail.
#[derive(Debug, Clone, Default)]
pub struct ChaseAnimation;

impl ChaseAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for ChaseAnimation {
    const FRAME_DELAY_MS: u32 = 5;

    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let pos = i32::from(ctx.frame_step);
        set_guarded(strip, pos - 1, Rgb { r: 0, g: 0, b: 0 });
        set_guarded(strip, pos, ctx.color);
        strip.show();
    }
}

/// Pixel-by-pixel wipe up to the current frame step.
#[derive(Debug, Clone, Default)]
pub struct WipeAnimation;

impl WipeAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for WipeAnimation {
    const FRAME_DELAY_MS: u32 = 5;

    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let revealed = usize::from(ctx.frame_step).min(strip.num_pixels());
        for i in 0..revealed {
            strip.set_pixel(i, ctx.color);
        }
        strip.show();
    }
}
