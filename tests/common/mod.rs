//! Shared test infrastructure for blink-station integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use blink_station::LedColor;

// Re-export the hardware traits so test files get them with `use common::*`
pub use blink_station::{CycleTimer, LedDriver, Transport};

// ============================================================================
// Mock LED Driver
// ============================================================================

/// Mock LED driver that tracks line levels and records every write
pub struct MockLeds {
    levels: [bool; 3],
    write_history: heapless::Vec<(LedColor, bool), 64>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            levels: [false; 3],
            write_history: heapless::Vec::new(),
        }
    }

    pub fn is_lit(&self, line: LedColor) -> bool {
        self.levels[Self::index(line)]
    }

    /// Number of lines currently asserted
    pub fn lit_count(&self) -> usize {
        self.levels.iter().filter(|&&lit| lit).count()
    }

    /// The single lit line, if exactly one is asserted
    pub fn lit_line(&self) -> Option<LedColor> {
        if self.lit_count() != 1 {
            return None;
        }
        [LedColor::Green, LedColor::Blue, LedColor::Red]
            .into_iter()
            .find(|&line| self.is_lit(line))
    }

    pub fn write_history(&self) -> &[(LedColor, bool)] {
        &self.write_history
    }

    fn index(line: LedColor) -> usize {
        match line {
            LedColor::Green => 0,
            LedColor::Blue => 1,
            LedColor::Red => 2,
        }
    }
}

impl LedDriver for MockLeds {
    fn set(&mut self, line: LedColor, lit: bool) {
        self.levels[Self::index(line)] = lit;
        let _ = self.write_history.push((line, lit));
    }
}

// ============================================================================
// Mock Cycle Timer
// ============================================================================

/// One operation applied to the mock timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOp {
    Start,
    Stop,
    SetPeriod(u16),
}

/// Error type returned by the mock timer when a failure is injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFailure;

/// Mock timer that records its operation sequence and supports failure
/// injection per operation kind
pub struct MockTimer {
    running: bool,
    period: Option<u16>,
    op_history: heapless::Vec<TimerOp, 64>,
    fail_start: bool,
    fail_stop: bool,
    fail_set_period: bool,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            running: false,
            period: None,
            op_history: heapless::Vec::new(),
            fail_start: false,
            fail_stop: false,
            fail_set_period: false,
        }
    }

    pub fn failing_start() -> Self {
        Self {
            fail_start: true,
            ..Self::new()
        }
    }

    pub fn failing_stop() -> Self {
        Self {
            fail_stop: true,
            ..Self::new()
        }
    }

    pub fn failing_set_period() -> Self {
        Self {
            fail_set_period: true,
            ..Self::new()
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The period currently in effect (last successfully programmed)
    pub fn period(&self) -> Option<u16> {
        self.period
    }

    pub fn op_history(&self) -> &[TimerOp] {
        &self.op_history
    }
}

impl CycleTimer for MockTimer {
    type Error = TimerFailure;

    fn start(&mut self) -> Result<(), TimerFailure> {
        if self.fail_start {
            return Err(TimerFailure);
        }
        let _ = self.op_history.push(TimerOp::Start);
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), TimerFailure> {
        if self.fail_stop {
            return Err(TimerFailure);
        }
        let _ = self.op_history.push(TimerOp::Stop);
        self.running = false;
        Ok(())
    }

    fn set_period(&mut self, period: u16) -> Result<(), TimerFailure> {
        if self.fail_set_period {
            return Err(TimerFailure);
        }
        let _ = self.op_history.push(TimerOp::SetPeriod(period));
        self.period = Some(period);
        Ok(())
    }
}

// ============================================================================
// Mock Transport
// ============================================================================

/// Error type returned by the mock transport when a failure is injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitFailure;

/// Mock transport that records every transmitted message and can be made to
/// fail after a given number of successful transmissions
pub struct MockTransport {
    messages: heapless::Vec<heapless::Vec<u8, 40>, 32>,
    fail_after: Option<usize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            messages: heapless::Vec::new(),
            fail_after: None,
        }
    }

    /// Transport that fails on the first transmission
    pub fn failing() -> Self {
        Self::failing_after(0)
    }

    /// Transport that succeeds `count` times, then fails
    pub fn failing_after(count: usize) -> Self {
        Self {
            messages: heapless::Vec::new(),
            fail_after: Some(count),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.messages.len()
    }

    pub fn sent(&self, index: usize) -> &[u8] {
        &self.messages[index]
    }

    pub fn last_sent(&self) -> Option<&[u8]> {
        self.messages.last().map(|msg| msg.as_slice())
    }
}

impl Transport for MockTransport {
    type Error = TransmitFailure;

    fn transmit(&mut self, bytes: &[u8]) -> Result<(), TransmitFailure> {
        if let Some(limit) = self.fail_after {
            if self.messages.len() >= limit {
                return Err(TransmitFailure);
            }
        }
        let mut message = heapless::Vec::new();
        message.extend_from_slice(bytes).unwrap();
        let _ = self.messages.push(message);
        Ok(())
    }
}
