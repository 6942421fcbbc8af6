//! Button semaphores and the press debouncer.
//!
//! Interrupt handlers do exactly one thing here: raise a [`ButtonSignal`].
//! The engine's tick consumes the signal, samples the raw input level, and
//! commits an action only once the level has stayed asserted past the
//! debounce threshold. A press released earlier is discarded as bounce.

use core::cell::Cell;

use critical_section::Mutex;

/// Boolean semaphore set from interrupt context and cleared by the tick.
///
/// The interrupt side only ever sets it and the polling side only ever
/// clears it, so a raised signal cannot be lost between ticks and no lock is
/// held across any other work.
pub struct ButtonSignal {
    raised: Mutex<Cell<bool>>,
}

impl ButtonSignal {
    pub const fn new() -> Self {
        Self {
            raised: Mutex::new(Cell::new(false)),
        }
    }

    /// Raise the signal. Safe to call from an interrupt handler.
    pub fn raise(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(true));
    }

    /// Whether the signal is currently raised.
    pub fn is_raised(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).get())
    }

    /// Clear the signal.
    pub fn clear(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(false));
    }
}

impl Default for ButtonSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// The three per-button semaphores, suitable for `static` placement.
#[derive(Default)]
pub struct ButtonSignals {
    pub mode: ButtonSignal,
    pub speed: ButtonSignal,
    pub brightness: ButtonSignal,
}

impl ButtonSignals {
    pub const fn new() -> Self {
        Self {
            mode: ButtonSignal::new(),
            speed: ButtonSignal::new(),
            brightness: ButtonSignal::new(),
        }
    }
}

/// Raw digital level reads for the three buttons.
///
/// `true` means the input reads asserted (button held down). Pin assignment
/// and polarity are the implementor's concern.
pub trait ButtonLevels {
    fn mode_level(&self) -> bool;
    fn speed_level(&self) -> bool;
    fn brightness_level(&self) -> bool;
}

impl<T: ButtonLevels> ButtonLevels for &T {
    fn mode_level(&self) -> bool {
        (*self).mode_level()
    }

    fn speed_level(&self) -> bool {
        (*self).speed_level()
    }

    fn brightness_level(&self) -> bool {
        (*self).brightness_level()
    }
}

/// Debounce state machine for a single button channel.
///
/// Runs entirely inside the non-blocking tick: one level sample per poll, no
/// sleeping. A channel is only polled while its signal is raised.
pub struct Debouncer<'a> {
    signal: &'a ButtonSignal,
    hold: u8,
    threshold: u8,
}

impl<'a> Debouncer<'a> {
    pub const fn new(signal: &'a ButtonSignal, threshold: u8) -> Self {
        Self {
            signal,
            hold: 0,
            threshold,
        }
    }

    /// Poll once with the current raw level.
    ///
    /// Returns `true` exactly once per qualifying press: when the level has
    /// stayed asserted for more polls than the threshold. The hold counter
    /// is back at zero whenever this returns.
    pub fn poll(&mut self, level_asserted: bool) -> bool {
        if !self.signal.is_raised() {
            return false;
        }

        if level_asserted {
            self.hold = self.hold.saturating_add(1);
        } else {
            // Released before the threshold: disarm and forget the press.
            self.signal.clear();
            self.hold = 0;
            return false;
        }

        if self.hold > self.threshold {
            self.signal.clear();
            self.hold = 0;
            return true;
        }
        false
    }

    /// Consecutive asserted polls seen for the current candidate press.
    pub const fn hold(&self) -> u8 {
        self.hold
    }
}
