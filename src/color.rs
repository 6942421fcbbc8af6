//! Color types and the cyclic hue wheel.

use smart_leds::RGB8;

use crate::config::ColorDepth;

pub type Rgb = RGB8;

/// Map a position on the cyclic hue range to an RGB color.
///
/// Sweeps through the red/green/blue cross-fade bands of the selected depth.
/// Positions at or past the wheel range wrap around, so
/// `wheel(depth, 0) == wheel(depth, depth.wheel_range())`.
pub fn wheel(depth: ColorDepth, pos: u16) -> Rgb {
    let pos = pos % depth.wheel_range();
    match depth {
        ColorDepth::SevenBit => wheel_seven_bit(pos),
        #[allow(clippy::cast_possible_truncation)]
        ColorDepth::EightBit => wheel_eight_bit(pos as u8),
    }
}

/// Three 128-wide bands over positions 0-383, channels 0-127.
#[allow(clippy::cast_possible_truncation)]
fn wheel_seven_bit(pos: u16) -> Rgb {
    let step = (pos % 128) as u8;
    match pos / 128 {
        0 => Rgb {
            r: 127 - step, // red down
            g: step,       // green up
            b: 0,          // blue off
        },
        1 => Rgb {
            r: 0,          // red off
            g: 127 - step, // green down
            b: step,       // blue up
        },
        _ => Rgb {
            r: step,       // red up
            g: 0,          // green off
            b: 127 - step, // blue down
        },
    }
}

/// Three 85-wide bands over positions 0-254, channels 0-255.
fn wheel_eight_bit(pos: u8) -> Rgb {
    if pos < 85 {
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    }
}

/// Divide every channel of a color by `divisor`.
///
/// Used for the dimmed tails of taper-style animations. `divisor` must be
/// non-zero.
pub const fn dampen(color: Rgb, divisor: u8) -> Rgb {
    Rgb {
        r: color.r / divisor,
        g: color.g / divisor,
        b: color.b / divisor,
    }
}
