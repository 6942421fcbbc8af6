//! Engine configuration and the strip color-depth convention.

/// Default number of speed settings; the maximum setting pauses animation.
pub const DEFAULT_SPEED_SETTINGS: u8 = 5;

/// Default number of brightness levels.
pub const DEFAULT_BRIGHTNESS_LEVELS: u8 = 4;

/// Default debounce threshold in polling ticks.
pub const DEFAULT_DEBOUNCE_THRESHOLD: u8 = 10;

/// Bits-per-channel convention of the attached strip.
///
/// This is a construction-time choice; the two conventions use different hue
/// wheel geometries and fade thresholds, and are never switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// 7 bits per channel. The hue wheel spans three 128-wide bands.
    SevenBit,
    /// 8 bits per channel. The hue wheel spans three 85-wide bands.
    EightBit,
}

impl ColorDepth {
    /// Number of positions on the cyclic hue wheel for this depth.
    pub const fn wheel_range(self) -> u16 {
        match self {
            Self::SevenBit => 384,
            Self::EightBit => 255,
        }
    }

    /// Maximum value a single color channel can take.
    pub const fn channel_max(self) -> u8 {
        match self {
            Self::SevenBit => 127,
            Self::EightBit => 255,
        }
    }
}

/// Configuration for the light engine
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Channel depth of the attached strip.
    pub color_depth: ColorDepth,
    /// Number of speed settings. `speed == speed_settings` pauses animation.
    pub speed_settings: u8,
    /// Number of brightness levels cycled by the brightness button.
    pub brightness_levels: u8,
    /// Consecutive asserted polls required before a button action commits.
    pub debounce_threshold: u8,
    /// Seed for the sparkle/color randomizer.
    pub rng_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            color_depth: ColorDepth::SevenBit,
            speed_settings: DEFAULT_SPEED_SETTINGS,
            brightness_levels: DEFAULT_BRIGHTNESS_LEVELS,
            debounce_threshold: DEFAULT_DEBOUNCE_THRESHOLD,
            rng_seed: 0x4245_4c54_f00d,
        }
    }
}
