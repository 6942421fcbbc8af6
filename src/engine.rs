//! The cooperative scheduler: debounce, frame pacing, dispatch.
//!
//! [`LightEngine::tick`] is the single entry point; the host loop calls it
//! as fast as it likes and the engine decides on each call whether enough
//! time has passed to render. It never blocks, so a host without an
//! executor can busy-poll it.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    StripDriver,
    animation::{AnimationId, AnimationSlot, ColorRefresh, FrameContext},
    color::{Rgb, wheel},
    config::EngineConfig,
    input::{ButtonLevels, ButtonSignals, Debouncer},
    rng::Rng,
};

/// Mutable system state carried across ticks.
///
/// Only the engine tick and the button commits mutate this; there is a
/// single cooperative thread of control.
#[derive(Debug, Clone)]
pub struct SystemState {
    animation: AnimationId,
    speed: u8,
    brightness: u8,
    animation_step: u16,
    frame_step: u16,
    last_frame_ms: u32,
    frame_delay_ms: u32,
    draw_single_frame: bool,
}

impl SystemState {
    const fn new() -> Self {
        Self {
            animation: AnimationId::Rainbow,
            speed: 0,
            brightness: 0,
            animation_step: 0,
            frame_step: 0,
            last_frame_ms: 0,
            frame_delay_ms: 5,
            draw_single_frame: false,
        }
    }

    /// Currently selected animation.
    pub const fn animation(&self) -> AnimationId {
        self.animation
    }

    /// Current speed setting. The maximum setting pauses animation.
    pub const fn speed(&self) -> u8 {
        self.speed
    }

    /// Current brightness level index.
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Cyclic step driving time-varying animation math.
    pub const fn animation_step(&self) -> u16 {
        self.animation_step
    }

    /// Cyclic per-pixel sequencing counter.
    pub const fn frame_step(&self) -> u16 {
        self.frame_step
    }
}

/// Light engine - the main orchestrator
///
/// `N` is the strip's pixel count; it sizes the scratch buffers of the
/// animations that keep per-pixel history. The button signals live outside
/// the engine (typically in a `static`) so interrupt handlers can raise
/// them.
pub struct LightEngine<'a, D, B, const N: usize> {
    strip: D,
    buttons: B,
    config: EngineConfig,
    state: SystemState,
    slot: AnimationSlot<N>,
    color: Rgb,
    rng: Rng,
    mode_button: Debouncer<'a>,
    speed_button: Debouncer<'a>,
    brightness_button: Debouncer<'a>,
}

impl<'a, D: StripDriver, B: ButtonLevels, const N: usize> LightEngine<'a, D, B, N> {
    /// Create a new engine with zeroed state.
    pub fn new(strip: D, buttons: B, signals: &'a ButtonSignals, config: EngineConfig) -> Self {
        Self {
            strip,
            buttons,
            state: SystemState::new(),
            slot: AnimationId::Rainbow.to_slot(),
            color: Rgb { r: 0, g: 0, b: 0 },
            rng: Rng::new(config.rng_seed),
            mode_button: Debouncer::new(&signals.mode, config.debounce_threshold),
            speed_button: Debouncer::new(&signals.speed, config.debounce_threshold),
            brightness_button: Debouncer::new(&signals.brightness, config.debounce_threshold),
            config,
        }
    }

    /// Advance the engine by one cooperative tick.
    ///
    /// Polls the debouncers, then renders at most one frame if the pacing
    /// gate allows it. Returns immediately otherwise; the host loop should
    /// simply call again.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now: Instant) {
        self.poll_buttons();

        // The truncated millisecond clock wraps after ~49 days; wrapping
        // subtraction keeps the elapsed delta small across the rollover.
        let now_ms = now.as_millis() as u32;
        let elapsed = now_ms.wrapping_sub(self.state.last_frame_ms);
        if elapsed < self.state.frame_delay_ms * u32::from(self.state.speed) {
            return;
        }

        // The highest speed setting pauses animation; a raised single-frame
        // flag buys exactly one frame through the pause.
        if self.state.speed == self.config.speed_settings && !self.state.draw_single_frame {
            return;
        }
        self.state.draw_single_frame = false;
        self.state.last_frame_ms = now_ms;

        self.refresh_cycle_color();

        let mut ctx = FrameContext {
            animation_step: self.state.animation_step,
            frame_step: self.state.frame_step,
            color: self.color,
            depth: self.config.color_depth,
            ceiling: self.brightness_ceiling(),
            rng: &mut self.rng,
        };
        self.slot.render(&mut ctx, &mut self.strip);

        // Takes effect at the next gate evaluation, so the first frame after
        // a mode switch still runs on the previous animation's delay.
        self.state.frame_delay_ms = self.slot.frame_delay_ms();

        self.state.animation_step += 1;
        if self.state.animation_step > self.config.color_depth.wheel_range() {
            self.state.animation_step = 0;
        }
        self.state.frame_step += 1;
        if usize::from(self.state.frame_step) > N {
            self.state.frame_step = 0;
        }
    }

    /// Poll all three debounce channels and apply committed actions.
    fn poll_buttons(&mut self) {
        if self.brightness_button.poll(self.buttons.brightness_level()) {
            self.step_brightness();
        }
        if self.speed_button.poll(self.buttons.speed_level()) {
            self.step_speed();
        }
        if self.mode_button.poll(self.buttons.mode_level()) {
            self.step_mode();
        }
    }

    fn step_mode(&mut self) {
        self.state.animation = self.state.animation.next();
        self.slot = self.state.animation.to_slot();

        // Reflect the new mode immediately even while paused.
        if self.state.speed == self.config.speed_settings {
            self.state.draw_single_frame = true;
        }
        self.state.frame_step = 0;
        self.state.animation_step = 0;

        #[cfg(feature = "esp32-log")]
        println!("[engine] mode -> {}", self.state.animation.as_str());
    }

    fn step_speed(&mut self) {
        self.state.speed += 1;
        if self.state.speed > self.config.speed_settings {
            self.state.speed = 0;
        }

        #[cfg(feature = "esp32-log")]
        println!("[engine] speed -> {}", self.state.speed);
    }

    fn step_brightness(&mut self) {
        self.state.brightness += 1;
        if self.state.brightness > self.config.brightness_levels - 1 {
            self.state.brightness = 0;
        }

        if self.state.brightness == 0 {
            self.strip.set_brightness(255);
            if self.state.speed == self.config.speed_settings {
                self.state.draw_single_frame = true;
            }
        } else {
            self.strip.set_brightness(self.brightness_ceiling());
        }
        self.strip.show();

        #[cfg(feature = "esp32-log")]
        println!("[engine] brightness -> {}", self.state.brightness);
    }

    /// Strip brightness for the current level: full range divided evenly,
    /// level 0 brightest.
    fn brightness_ceiling(&self) -> u8 {
        let levels = self.config.brightness_levels;
        (255 / levels) * (levels - self.state.brightness)
    }

    /// Draw a fresh random wheel color when the current animation's cycle
    /// restarts.
    fn refresh_cycle_color(&mut self) {
        let due = match self.slot.color_refresh() {
            ColorRefresh::Never => false,
            ColorRefresh::FrameCycle => self.state.frame_step == 0,
            ColorRefresh::WheelCycle => self.state.animation_step == 0,
        };
        if due {
            let range = u32::from(self.config.color_depth.wheel_range());
            #[allow(clippy::cast_possible_truncation)]
            let pos = self.rng.next_below(range) as u16;
            self.color = wheel(self.config.color_depth, pos);
        }
    }

    /// Engine state snapshot.
    pub const fn state(&self) -> &SystemState {
        &self.state
    }

    /// Whether the speed setting currently pauses animation.
    pub const fn is_paused(&self) -> bool {
        self.state.speed == self.config.speed_settings
    }

    /// Get a reference to the strip driver.
    pub const fn strip(&self) -> &D {
        &self.strip
    }

    /// Get a mutable reference to the strip driver.
    pub const fn strip_mut(&mut self) -> &mut D {
        &mut self.strip
    }

    /// Enable the strip output stage.
    pub fn enable(&mut self) {
        self.strip.set_enabled(true);
    }

    /// Disable the strip output stage.
    pub fn disable(&mut self) {
        self.strip.set_enabled(false);
    }

    pub fn is_enabled(&self) -> bool {
        self.strip.is_enabled()
    }

    pub fn is_disabled(&self) -> bool {
        !self.strip.is_enabled()
    }

    /// Fill the whole strip with one color and latch it. Bring-up helper.
    pub fn solid_color(&mut self, color: Rgb) {
        for i in 0..self.strip.num_pixels() {
            self.strip.set_pixel(i, color);
        }
        self.strip.show();
    }

    /// Drive every pixel at full white. Bring-up helper for checking the
    /// power budget.
    pub fn full_white_test(&mut self) {
        self.solid_color(Rgb {
            r: 255,
            g: 255,
            b: 255,
        });
    }
}
