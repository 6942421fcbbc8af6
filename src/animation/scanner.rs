//! Scanner animation: a tapered head bouncing across the strip.
//!
//! Draws two sub-frames per tick at adjacent positions to double the motion
//! resolution, erasing the taper after each latch so the next tick starts
//! from a clean strip.

use super::{Animation, FrameContext, set_guarded};
use crate::{
    StripDriver,
    color::{Rgb, dampen},
};

/// Scanner head position for a given frame step.
///
/// Even pixels on the way up, odd pixels on the way back, so a full
/// `frame_step` cycle touches the whole strip in both directions. The
/// result is always within `0..pixel_count`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn scan_position(frame_step: u16, pixel_count: usize) -> usize {
    if pixel_count == 0 {
        return 0;
    }
    let count = pixel_count as i32;
    let doubled = i32::from(frame_step) * 2;
    let pos = if doubled < count {
        doubled
    } else {
        (2 * count - 1) - doubled
    };
    pos.clamp(0, count - 1) as usize
}

#[derive(Debug, Clone, Default)]
pub struct ScannerAnimation;

impl ScannerAnimation {
    pub const fn new() -> Self {
        Self
    }

    /// Five-pixel taper: full at the center, half then quarter to each side.
    fn draw_head<D: StripDriver>(strip: &mut D, center: i32, color: Rgb) {
        set_guarded(strip, center - 2, dampen(color, 4));
        set_guarded(strip, center - 1, dampen(color, 2));
        set_guarded(strip, center, color);
        set_guarded(strip, center + 1, dampen(color, 2));
        set_guarded(strip, center + 2, dampen(color, 4));
    }

    fn erase_head<D: StripDriver>(strip: &mut D, center: i32) {
        for offset in -2..=2 {
            set_guarded(strip, center + offset, Rgb { r: 0, g: 0, b: 0 });
        }
    }
}

impl Animation for ScannerAnimation {
    const FRAME_DELAY_MS: u32 = 5;

    #[allow(clippy::cast_possible_wrap)]
    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D) {
        let count = strip.num_pixels();
        if count == 0 {
            return;
        }

        let pos = scan_position(ctx.frame_step, count) as i32;

        Self::draw_head(strip, pos, ctx.color);
        strip.show();
        Self::erase_head(strip, pos);

        // Second sub-frame one pixel along.
        Self::draw_head(strip, pos + 1, ctx.color);
        strip.show();
        Self::erase_head(strip, pos + 1);
    }
}
