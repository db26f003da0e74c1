//! LED color cycling over three discrete output lines.
//!
//! Provides [`LedCycler`] which owns the currently lit color and advances it
//! one step per timer notification, and the [`LedDriver`] trait for the
//! hardware outputs.

/// One of the three LED lines, doubling as the color currently lit.
///
/// Exactly one line is asserted at any time; the cycle order is
/// Green → Blue → Red → Green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    Green,
    Blue,
    Red,
}

impl LedColor {
    /// Returns the next color in the cycle.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            LedColor::Green => LedColor::Blue,
            LedColor::Blue => LedColor::Red,
            LedColor::Red => LedColor::Green,
        }
    }
}

/// Trait for abstracting the three digital LED outputs.
///
/// Implement this for your board's GPIO lines. Writes are assumed infallible;
/// handle any hardware errors internally.
pub trait LedDriver {
    /// Asserts (`true`) or deasserts (`false`) the output line for `line`.
    fn set(&mut self, line: LedColor, lit: bool);
}

/// Advances a single lit LED along the fixed three-color cycle.
///
/// Owned by timer-notification context; each [`advance`](LedCycler::advance)
/// call performs exactly one transition and is bounded and non-blocking, so it
/// is safe to run inside an interrupt handler.
#[derive(Debug)]
pub struct LedCycler {
    current: LedColor,
}

impl LedCycler {
    /// Creates a cycler starting at `Green`.
    ///
    /// Call [`light_initial`](LedCycler::light_initial) before the timer is
    /// started so the outputs match the state machine.
    pub const fn new() -> Self {
        Self {
            current: LedColor::Green,
        }
    }

    /// Drives the outputs to the initial state: current color lit, others off.
    pub fn light_initial<D: LedDriver>(&self, driver: &mut D) {
        driver.set(self.current, true);
        driver.set(self.current.next(), false);
        driver.set(self.current.next().next(), false);
    }

    /// Advances to the next color and updates the outputs.
    ///
    /// Asserts the new line first, then deasserts the previous one, so the
    /// transition never leaves all three lines dark.
    pub fn advance<D: LedDriver>(&mut self, driver: &mut D) -> LedColor {
        let next = self.current.next();
        driver.set(next, true);
        driver.set(self.current, false);
        self.current = next;
        next
    }

    /// Returns the currently lit color.
    pub fn current(&self) -> LedColor {
        self.current
    }
}

impl Default for LedCycler {
    fn default() -> Self {
        Self::new()
    }
}
