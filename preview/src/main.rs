//! Terminal preview for belt-light-engine animations.
//!
//! Renders the simulated strip as truecolor blocks on one terminal line and
//! walks the whole catalog by pressing the virtual mode button every few
//! seconds. Speed and brightness presses are sprinkled in so the debounce
//! path gets exercised too.

use std::cell::Cell;
use std::io::{Write as _, stdout};
use std::thread::sleep;
use std::time::Duration as StdDuration;

use belt_light_engine::{
    AnimationId, ButtonLevels, ButtonSignals, EngineConfig, Instant, LightEngine, Rgb,
    StripDriver,
};

/// Simulated strip length.
const PIXEL_COUNT: usize = 32;

/// Synthetic milliseconds per host loop iteration.
const TICK_MS: u64 = 2;

/// How long each animation stays on screen.
const MODE_DWELL_MS: u64 = 4_000;

/// Polls a qualifying press is held for (debounce threshold + 1).
const PRESS_POLLS: u32 = 11;

static SIGNALS: ButtonSignals = ButtonSignals::new();

/// Strip driver that draws to the terminal on every latch.
struct TerminalStrip {
    pixels: [Rgb; PIXEL_COUNT],
    brightness: u8,
    enabled: bool,
}

impl TerminalStrip {
    const fn new() -> Self {
        Self {
            pixels: [Rgb { r: 0, g: 0, b: 0 }; PIXEL_COUNT],
            brightness: 255,
            enabled: true,
        }
    }

    /// Scale a 7-bit channel to the terminal's 8-bit range, applying the
    /// strip-wide brightness.
    fn displayed(&self, channel: u8) -> u8 {
        let widened = u16::from(channel.min(127)) * 2;
        ((widened * u16::from(self.brightness)) / 255) as u8
    }
}

impl StripDriver for TerminalStrip {
    fn num_pixels(&self) -> usize {
        PIXEL_COUNT
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if index < PIXEL_COUNT {
            self.pixels[index] = color;
        }
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn show(&mut self) {
        let mut line = String::with_capacity(PIXEL_COUNT * 24);
        for pixel in &self.pixels {
            let (r, g, b) = (
                self.displayed(pixel.r),
                self.displayed(pixel.g),
                self.displayed(pixel.b),
            );
            line.push_str(&format!("\x1b[38;2;{r};{g};{b}m\u{2588}\u{2588}"));
        }
        line.push_str("\x1b[0m");
        print!("\r{line}");
        let _ = stdout().flush();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Virtual button levels toggled by the preview loop.
#[derive(Default)]
struct VirtualButtons {
    mode: Cell<bool>,
    speed: Cell<bool>,
    brightness: Cell<bool>,
}

impl ButtonLevels for VirtualButtons {
    fn mode_level(&self) -> bool {
        self.mode.get()
    }

    fn speed_level(&self) -> bool {
        self.speed.get()
    }

    fn brightness_level(&self) -> bool {
        self.brightness.get()
    }
}

fn main() {
    let buttons = VirtualButtons::default();
    let mut engine = LightEngine::<_, _, PIXEL_COUNT>::new(
        TerminalStrip::new(),
        &buttons,
        &SIGNALS,
        EngineConfig::default(),
    );

    println!(
        "belt-light-preview: {} animations, {} px strip\n",
        AnimationId::COUNT,
        PIXEL_COUNT
    );

    let mut t_ms: u64 = 0;
    let mut next_mode_press = MODE_DWELL_MS;
    let mut mode_hold: u32 = 0;
    let mut modes_seen: u32 = 0;

    loop {
        if mode_hold > 0 {
            mode_hold -= 1;
            if mode_hold == 0 {
                buttons.mode.set(false);
                modes_seen += 1;
                print!("\x1b[2K\r{:>20}  ", engine.state().animation().as_str());
                // One pass through the whole catalog is enough for a demo.
                if modes_seen >= u32::from(AnimationId::COUNT) {
                    break;
                }
            }
        } else if t_ms >= next_mode_press {
            SIGNALS.mode.raise();
            buttons.mode.set(true);
            mode_hold = PRESS_POLLS;
            next_mode_press += MODE_DWELL_MS;
        }

        engine.tick(Instant::from_millis(t_ms));

        t_ms += TICK_MS;
        sleep(StdDuration::from_millis(TICK_MS));
    }

    println!("\ndone");
}
