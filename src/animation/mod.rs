//! Animation catalog with compile-time known variants
//!
//! Every animation is a struct stored in an enum slot to avoid heap
//! allocations, dispatched by pattern match. Each call renders exactly one
//! frame and returns; nothing here blocks or sleeps. Animations that need
//! cross-frame scratch state (the sparkler's diffusion buffers, the split
//! builder's color ring, the dither cursor) carry it in their own struct, so
//! switching modes discards it naturally.

mod builder;
mod chase;
mod dither;
mod fade;
mod plasma;
mod rainbow;
mod scanner;
mod sparkle;
mod wave;

pub use builder::{SmoothColorsAnimation, SplitColorAnimation};
pub use chase::{ChaseAnimation, WipeAnimation};
pub use dither::DitherAnimation;
pub use fade::FadeAnimation;
pub use plasma::PlasmaAnimation;
pub use rainbow::{BreathingAnimation, RainbowAnimation};
pub use scanner::{ScannerAnimation, scan_position};
pub use sparkle::{SparkleAnimation, SparklerAnimation};
pub use wave::WaveAnimation;

use crate::{StripDriver, color::Rgb, config::ColorDepth, rng::Rng};

/// Per-frame inputs shared by every animation.
pub struct FrameContext<'a> {
    /// Cyclic step driving time-varying math, `0..=wheel_range`.
    pub animation_step: u16,
    /// Cyclic per-pixel sequencing counter, `0..=pixel_count`.
    pub frame_step: u16,
    /// Target color for color-cycle animations, refreshed once per cycle.
    pub color: Rgb,
    /// Channel depth of the attached strip.
    pub depth: ColorDepth,
    /// Brightness ceiling for the current brightness level (0-255).
    pub ceiling: u8,
    /// Randomness for sparkle-style animations.
    pub rng: &'a mut Rng,
}

pub trait Animation {
    /// Base pacing delay in milliseconds. The scheduler multiplies this by
    /// the current speed setting to form the frame gate.
    const FRAME_DELAY_MS: u32;

    /// Render exactly one frame through the strip driver.
    fn render<D: StripDriver>(&mut self, ctx: &mut FrameContext<'_>, strip: &mut D);
}

/// When the engine draws a fresh random target color for an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorRefresh {
    /// The animation generates its own colors.
    Never,
    /// New color each time `frame_step` wraps to zero.
    FrameCycle,
    /// New color each time `animation_step` wraps to zero.
    WheelCycle,
}

const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_RAINBOW_BREATHING: &str = "rainbow_breathing";
const ANIMATION_NAME_PLASMA: &str = "plasma";
const ANIMATION_NAME_SPLIT_COLOR_BUILDER: &str = "split_color_builder";
const ANIMATION_NAME_SMOOTH_COLORS: &str = "smooth_colors";
const ANIMATION_NAME_COLOR_CHASE: &str = "color_chase";
const ANIMATION_NAME_COLOR_WIPE: &str = "color_wipe";
const ANIMATION_NAME_DITHER: &str = "dither";
const ANIMATION_NAME_SCANNER: &str = "scanner";
const ANIMATION_NAME_WAVE: &str = "wave";
const ANIMATION_NAME_RANDOM_SPARKLE: &str = "random_sparkle";
const ANIMATION_NAME_FADE: &str = "fade";
const ANIMATION_NAME_SPARKLER: &str = "sparkler";

/// Known animation ids. The numeric order is the mode button's cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Rainbow = 0,
    RainbowBreathing = 1,
    Plasma = 2,
    SplitColorBuilder = 3,
    SmoothColors = 4,
    ColorChase = 5,
    ColorWipe = 6,
    Dither = 7,
    Scanner = 8,
    Wave = 9,
    RandomSparkle = 10,
    Fade = 11,
    Sparkler = 12,
}

impl AnimationId {
    /// Number of animations in the catalog.
    pub const COUNT: u8 = 13;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Rainbow,
            1 => Self::RainbowBreathing,
            2 => Self::Plasma,
            3 => Self::SplitColorBuilder,
            4 => Self::SmoothColors,
            5 => Self::ColorChase,
            6 => Self::ColorWipe,
            7 => Self::Dither,
            8 => Self::Scanner,
            9 => Self::Wave,
            10 => Self::RandomSparkle,
            11 => Self::Fade,
            12 => Self::Sparkler,
            _ => return None,
        })
    }

    /// The next animation in catalog order, wrapping back to the first.
    pub fn next(self) -> Self {
        Self::from_raw(self as u8 + 1).unwrap_or(Self::Rainbow)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::RainbowBreathing => ANIMATION_NAME_RAINBOW_BREATHING,
            Self::Plasma => ANIMATION_NAME_PLASMA,
            Self::SplitColorBuilder => ANIMATION_NAME_SPLIT_COLOR_BUILDER,
            Self::SmoothColors => ANIMATION_NAME_SMOOTH_COLORS,
            Self::ColorChase => ANIMATION_NAME_COLOR_CHASE,
            Self::ColorWipe => ANIMATION_NAME_COLOR_WIPE,
            Self::Dither => ANIMATION_NAME_DITHER,
            Self::Scanner => ANIMATION_NAME_SCANNER,
            Self::Wave => ANIMATION_NAME_WAVE,
            Self::RandomSparkle => ANIMATION_NAME_RANDOM_SPARKLE,
            Self::Fade => ANIMATION_NAME_FADE,
            Self::Sparkler => ANIMATION_NAME_SPARKLER,
        }
    }

    /// Build the animation slot for this id, with fresh scratch state.
    pub fn to_slot<const N: usize>(self) -> AnimationSlot<N> {
        match self {
            Self::Rainbow => AnimationSlot::Rainbow(RainbowAnimation::new()),
            Self::RainbowBreathing => {
                AnimationSlot::RainbowBreathing(BreathingAnimation::new())
            }
            Self::Plasma => AnimationSlot::Plasma(PlasmaAnimation::new()),
            Self::SplitColorBuilder => {
                AnimationSlot::SplitColorBuilder(SplitColorAnimation::new())
            }
            Self::SmoothColors => AnimationSlot::SmoothColors(SmoothColorsAnimation::new()),
            Self::ColorChase => AnimationSlot::ColorChase(ChaseAnimation::new()),
            Self::ColorWipe => AnimationSlot::ColorWipe(WipeAnimation::new()),
            Self::Dither => AnimationSlot::Dither(DitherAnimation::new()),
            Self::Scanner => AnimationSlot::Scanner(ScannerAnimation::new()),
            Self::Wave => AnimationSlot::Wave(WaveAnimation::new()),
            Self::RandomSparkle => AnimationSlot::RandomSparkle(SparkleAnimation::new()),
            Self::Fade => AnimationSlot::Fade(FadeAnimation::new()),
            Self::Sparkler => AnimationSlot::Sparkler(SparklerAnimation::new()),
        }
    }
}

/// Animation slot - enum containing all catalog animations
///
/// `N` is the strip's pixel count; it sizes the scratch buffers of the
/// animations that keep per-pixel history.
pub enum AnimationSlot<const N: usize> {
    Rainbow(RainbowAnimation),
    RainbowBreathing(BreathingAnimation),
    Plasma(PlasmaAnimation),
    SplitColorBuilder(SplitColorAnimation<N>),
    SmoothColors(SmoothColorsAnimation),
    ColorChase(ChaseAnimation),
    ColorWipe(WipeAnimation),
    Dither(DitherAnimation),
    Scanner(ScannerAnimation),
    Wave(WaveAnimation),
    RandomSparkle(SparkleAnimation),
    Fade(FadeAnimation),
    Sparkler(SparklerAnimation<N>),
}

impl<const N: usize> AnimationSlot<N> {
    /// Render the current animation.
    pub(crate) fn render<D: StripDriver>(
        &mut self,
        ctx: &mut FrameContext<'_>,
        strip: &mut D,
    ) {
        match self {
            Self::Rainbow(animation) => animation.render(ctx, strip),
            Self::RainbowBreathing(animation) => animation.render(ctx, strip),
            Self::Plasma(animation) => animation.render(ctx, strip),
            Self::SplitColorBuilder(animation) => animation.render(ctx, strip),
            Self::SmoothColors(animation) => animation.render(ctx, strip),
            Self::ColorChase(animation) => animation.render(ctx, strip),
            Self::ColorWipe(animation) => animation.render(ctx, strip),
            Self::Dither(animation) => animation.render(ctx, strip),
            Self::Scanner(animation) => animation.render(ctx, strip),
            Self::Wave(animation) => animation.render(ctx, strip),
            Self::RandomSparkle(animation) => animation.render(ctx, strip),
            Self::Fade(animation) => animation.render(ctx, strip),
            Self::Sparkler(animation) => animation.render(ctx, strip),
        }
    }

    /// Base pacing delay of the current animation.
    pub(crate) const fn frame_delay_ms(&self) -> u32 {
        match self {
            Self::Rainbow(_) => RainbowAnimation::FRAME_DELAY_MS,
            Self::RainbowBreathing(_) => BreathingAnimation::FRAME_DELAY_MS,
            Self::Plasma(_) => PlasmaAnimation::FRAME_DELAY_MS,
            Self::SplitColorBuilder(_) => SplitColorAnimation::<N>::FRAME_DELAY_MS,
            Self::SmoothColors(_) => SmoothColorsAnimation::FRAME_DELAY_MS,
            Self::ColorChase(_) => ChaseAnimation::FRAME_DELAY_MS,
            Self::ColorWipe(_) => WipeAnimation::FRAME_DELAY_MS,
            Self::Dither(_) => DitherAnimation::FRAME_DELAY_MS,
            Self::Scanner(_) => ScannerAnimation::FRAME_DELAY_MS,
            Self::Wave(_) => WaveAnimation::FRAME_DELAY_MS,
            Self::RandomSparkle(_) => SparkleAnimation::FRAME_DELAY_MS,
            Self::Fade(_) => FadeAnimation::FRAME_DELAY_MS,
            Self::Sparkler(_) => SparklerAnimation::<N>::FRAME_DELAY_MS,
        }
    }

    /// When the engine should refresh the one-shot random target color.
    pub(crate) const fn color_refresh(&self) -> ColorRefresh {
        match self {
            Self::ColorChase(_)
            | Self::ColorWipe(_)
            | Self::Dither(_)
            | Self::Scanner(_)
            | Self::Fade(_) => ColorRefresh::FrameCycle,
            Self::Wave(_) => ColorRefresh::WheelCycle,
            Self::Rainbow(_)
            | Self::RainbowBreathing(_)
            | Self::Plasma(_)
            | Self::SplitColorBuilder(_)
            | Self::SmoothColors(_)
            | Self::RandomSparkle(_)
            | Self::Sparkler(_) => ColorRefresh::Never,
        }
    }

    /// Id of the animation in this slot.
    pub const fn id(&self) -> AnimationId {
        match self {
            Self::Rainbow(_) => AnimationId::Rainbow,
            Self::RainbowBreathing(_) => AnimationId::RainbowBreathing,
            Self::Plasma(_) => AnimationId::Plasma,
            Self::SplitColorBuilder(_) => AnimationId::SplitColorBuilder,
            Self::SmoothColors(_) => AnimationId::SmoothColors,
            Self::ColorChase(_) => AnimationId::ColorChase,
            Self::ColorWipe(_) => AnimationId::ColorWipe,
            Self::Dither(_) => AnimationId::Dither,
            Self::Scanner(_) => AnimationId::Scanner,
            Self::Wave(_) => AnimationId::Wave,
            Self::RandomSparkle(_) => AnimationId::RandomSparkle,
            Self::Fade(_) => AnimationId::Fade,
            Self::Sparkler(_) => AnimationId::Sparkler,
        }
    }
}

impl<const N: usize> Default for AnimationSlot<N> {
    fn default() -> Self {
        Self::Rainbow(RainbowAnimation::new())
    }
}

/// Write a pixel only when the index actually lands on the strip.
///
/// Taper and trail animations aim one or two pixels past either end; those
/// writes fall off the edge instead of wrapping.
pub(crate) fn set_guarded<D: StripDriver>(strip: &mut D, index: i32, color: Rgb) {
    if index >= 0 && (index as usize) < strip.num_pixels() {
        strip.set_pixel(index as usize, color);
    }
}
