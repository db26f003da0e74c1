//! The blink station: shared state, notification entry points, and the
//! dispatch loop.
//!
//! Provides [`BlinkStation`] which couples the LED cycler and the frequency
//! step controller to one inbound event queue, and the [`Transport`] trait
//! for the serial link the status messages go out on.

use heapless::Deque;

use crate::event::StationEvent;
use crate::frequency::{CycleTimer, FrequencyStep, StepController};
use crate::led::{LedColor, LedCycler, LedDriver};

/// Trait for abstracting the byte-oriented status message transport.
///
/// Implement this for your serial link (USART, RTT, USB CDC, etc.). No
/// line-ending normalization is expected; the station's messages carry their
/// own framing bytes.
pub trait Transport {
    /// Hardware-specific error type.
    type Error;

    /// Transmits the whole buffer, blocking until it is accepted.
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// A fatal subsystem failure.
///
/// Every fault is terminal: the platform's error handler reports which
/// subsystem failed (if reporting still works) and halts permanently. Masking
/// a hardware or configuration failure and continuing would risk driving the
/// outputs from an inconsistent state, so there is no retry path.
///
/// `Init`, `ClockInit` and `TransportInit` are raised by platform bring-up
/// code outside this crate; they are enumerated here so one terminal handler
/// covers every subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Generic low-level initialization failed.
    Init,
    /// System clock configuration failed.
    ClockInit,
    /// Transport initialization failed.
    TransportInit,
    /// Timer configuration failed.
    TimerInit,
    /// A status message transmission failed.
    Transmit,
}

impl core::fmt::Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Fault::Init => write!(f, "low-level initialization failed"),
            Fault::ClockInit => write!(f, "system clock configuration failed"),
            Fault::TransportInit => write!(f, "transport initialization failed"),
            Fault::TimerInit => write!(f, "timer configuration failed"),
            Fault::Transmit => write!(f, "status message transmission failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Fault {}

/// The shared context coupling the two notification handlers to the dispatch
/// loop.
///
/// One `BlinkStation` is the whole application state; the platform passes it
/// by reference to both interrupt handlers and the main loop (on single-core
/// interrupt-driven targets, typically through a
/// `critical_section::Mutex<RefCell<...>>` static).
///
/// Field ownership by execution context:
/// - `cycler`, `leds` — written only from timer-notification context
///   ([`on_timer_tick`](BlinkStation::on_timer_tick)).
/// - `stepper`, `timer` — written only from edge-notification context
///   ([`on_button_press`](BlinkStation::on_button_press)).
/// - `events` — pushed by both notification contexts, drained only by the
///   dispatch loop ([`service`](BlinkStation::service)).
/// - `transport` — used only by the dispatch loop.
///
/// # Type Parameters
/// * `D` - LED driver implementation
/// * `T` - Periodic timer implementation
/// * `U` - Message transport implementation
/// * `N` - Event queue capacity
pub struct BlinkStation<D: LedDriver, T: CycleTimer, U: Transport, const N: usize> {
    cycler: LedCycler,
    stepper: StepController,
    leds: D,
    timer: T,
    transport: U,
    events: Deque<StationEvent, N>,
    dropped_events: u32,
}

impl<D: LedDriver, T: CycleTimer, U: Transport, const N: usize> BlinkStation<D, T, U, N> {
    /// Creates the station and brings up its portion of setup: lights the
    /// initial green LED, programs the 1 Hz period, and starts the timer.
    ///
    /// Clock and pin configuration must already be done by the platform.
    ///
    /// # Errors
    /// [`Fault::TimerInit`] if programming or starting the timer fails.
    pub fn new(leds: D, timer: T, transport: U) -> Result<Self, Fault> {
        let cycler = LedCycler::new();
        let stepper = StepController::new();

        let mut station = Self {
            cycler,
            stepper,
            leds,
            timer,
            transport,
            events: Deque::new(),
            dropped_events: 0,
        };

        station.cycler.light_initial(&mut station.leds);
        station
            .stepper
            .program_initial(&mut station.timer)
            .map_err(|_| Fault::TimerInit)?;
        station.timer.start().map_err(|_| Fault::TimerInit)?;

        Ok(station)
    }

    /// Handles one periodic timer notification.
    ///
    /// Advances the LED cycle, drives the outputs, and queues the
    /// corresponding [`StationEvent::LedLit`] for the dispatch loop. Bounded
    /// and non-blocking; call this from the timer interrupt handler.
    pub fn on_timer_tick(&mut self) {
        let color = self.cycler.advance(&mut self.leds);
        self.push_event(StationEvent::LedLit(color));
    }

    /// Handles one qualifying button edge.
    ///
    /// Advances the frequency step, reprograms the timer with the
    /// stop → reprogram → restart sequence, and queues
    /// [`StationEvent::ButtonPressed`]. Non-blocking; call this from the edge
    /// interrupt handler.
    ///
    /// # Errors
    /// [`Fault::TimerInit`] if reprogramming fails. The timer operations are
    /// expected to always succeed once the timer is running; a failure here
    /// is treated the same as a setup-time configuration failure.
    pub fn on_button_press(&mut self) -> Result<FrequencyStep, Fault> {
        let step = self
            .stepper
            .advance(&mut self.timer)
            .map_err(|_| Fault::TimerInit)?;
        self.push_event(StationEvent::ButtonPressed);
        Ok(step)
    }

    /// Performs one dispatch pass: drains the event queue in arrival order,
    /// transmitting each event's status message.
    ///
    /// Returns the number of events dispatched; zero means nothing was
    /// pending and the caller should yield before polling again.
    ///
    /// # Errors
    /// [`Fault::Transmit`] if the transport rejects a message. The fault is
    /// fatal; the station makes no attempt to retry or resynchronize.
    pub fn service(&mut self) -> Result<usize, Fault> {
        let mut dispatched = 0;

        while let Some(event) = self.events.pop_front() {
            self.transport
                .transmit(event.message())
                .map_err(|_| Fault::Transmit)?;
            dispatched += 1;
        }

        Ok(dispatched)
    }

    /// Runs the dispatch loop forever, returning only on a fatal fault.
    ///
    /// Cooperative single-threaded dispatch: each pass drains whatever the
    /// notification handlers queued since the last pass, then calls `idle`
    /// when nothing was pending so the caller can yield (typically `wfi` on a
    /// bare-metal target). The loop never blocks waiting for events.
    ///
    /// The returned fault is meant for the platform's terminal handler, which
    /// reports it and halts.
    pub fn run<F: FnMut()>(&mut self, mut idle: F) -> Fault {
        loop {
            match self.service() {
                Ok(0) => idle(),
                Ok(_) => {}
                Err(fault) => return fault,
            }
        }
    }

    /// Returns the currently lit LED color.
    pub fn led_color(&self) -> LedColor {
        self.cycler.current()
    }

    /// Returns the current frequency step.
    pub fn frequency_step(&self) -> FrequencyStep {
        self.stepper.current()
    }

    /// Returns the number of events queued and not yet dispatched.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Returns how many events were dropped because the queue was full.
    ///
    /// Nonzero means the dispatch loop is not keeping pace with the event
    /// rate; the count saturates rather than wrapping.
    pub fn dropped_events(&self) -> u32 {
        self.dropped_events
    }

    /// Returns a reference to the LED driver.
    pub fn leds(&self) -> &D {
        &self.leds
    }

    /// Returns a reference to the timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Returns a reference to the transport.
    pub fn transport(&self) -> &U {
        &self.transport
    }

    fn push_event(&mut self, event: StationEvent) {
        if self.events.push_back(event).is_err() {
            self.dropped_events = self.dropped_events.saturating_add(1);
        }
    }
}
