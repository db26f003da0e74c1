//! Blink frequency stepping and periodic timer reprogramming.
//!
//! Provides [`StepController`] which owns the current [`FrequencyStep`] and
//! advances it one step per button edge, reprogramming the timer through the
//! [`CycleTimer`] trait.

/// The blink rate, one of four discrete steps.
///
/// Each step maps to a 16-bit timer period value for a 90 MHz timer input
/// clock and a free-running 16-bit counter:
///
/// ```text
/// f = 90e6 / (65536 * period)
/// ```
///
/// Integer rounding puts the actual frequencies within a few tenths of a
/// percent of nominal; the table values below are the contract, not the
/// exact rational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrequencyStep {
    F1Hz,
    F2Hz,
    F4Hz,
    F8Hz,
}

impl FrequencyStep {
    /// Returns the next step in the cycle (wraps from 8 Hz back to 1 Hz).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            FrequencyStep::F1Hz => FrequencyStep::F2Hz,
            FrequencyStep::F2Hz => FrequencyStep::F4Hz,
            FrequencyStep::F4Hz => FrequencyStep::F8Hz,
            FrequencyStep::F8Hz => FrequencyStep::F1Hz,
        }
    }

    /// Returns the timer period value programmed for this step.
    #[inline]
    pub const fn period(self) -> u16 {
        match self {
            FrequencyStep::F1Hz => 1372,
            FrequencyStep::F2Hz => 685,
            FrequencyStep::F4Hz => 342,
            FrequencyStep::F8Hz => 171,
        }
    }

    /// Returns the nominal blink frequency in hertz.
    #[inline]
    pub const fn hertz(self) -> u32 {
        match self {
            FrequencyStep::F1Hz => 1,
            FrequencyStep::F2Hz => 2,
            FrequencyStep::F4Hz => 4,
            FrequencyStep::F8Hz => 8,
        }
    }
}

/// Trait for abstracting the periodic notification timer.
///
/// Implement this for your board's hardware timer. Each method is fallible
/// because timer configuration can fail at setup time; once the timer is
/// running the operations are expected to always succeed.
pub trait CycleTimer {
    /// Hardware-specific error type.
    type Error;

    /// Starts the timer; one notification is raised per elapsed period.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Stops the timer; no further notifications are raised.
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Programs a new period value.
    ///
    /// Only called while the timer is stopped, so the new period takes effect
    /// immediately on restart rather than after the in-flight period.
    fn set_period(&mut self, period: u16) -> Result<(), Self::Error>;
}

/// Advances the blink frequency along the fixed four-step cycle.
///
/// Owned by edge-notification context; each [`advance`](StepController::advance)
/// call performs one stop → reprogram → restart sequence and is non-blocking.
/// Stopping first serializes the period update against the timer's own
/// notification source and avoids the counter briefly running with a stale
/// period.
#[derive(Debug)]
pub struct StepController {
    step: FrequencyStep,
}

impl StepController {
    /// Creates a controller starting at 1 Hz.
    pub const fn new() -> Self {
        Self {
            step: FrequencyStep::F1Hz,
        }
    }

    /// Programs the timer with the current step's period without advancing.
    ///
    /// Used once during setup, before the timer is first started.
    pub fn program_initial<T: CycleTimer>(&self, timer: &mut T) -> Result<(), T::Error> {
        timer.set_period(self.step.period())
    }

    /// Advances to the next step and reprograms the timer.
    pub fn advance<T: CycleTimer>(&mut self, timer: &mut T) -> Result<FrequencyStep, T::Error> {
        let next = self.step.next();
        timer.stop()?;
        timer.set_period(next.period())?;
        timer.start()?;
        self.step = next;
        Ok(next)
    }

    /// Returns the current frequency step.
    pub fn current(&self) -> FrequencyStep {
        self.step
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}
