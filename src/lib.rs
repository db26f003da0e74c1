#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LedColor`**: Which of the three LED lines is currently lit (Green → Blue → Red cycle)
//! - **`FrequencyStep`**: The current blink rate (1 Hz → 2 Hz → 4 Hz → 8 Hz cycle)
//! - **`StationEvent`**: Tagged event handed from notification context to the dispatch loop
//! - **`BlinkStation`**: The shared context tying handlers, state, and dispatch together
//! - **`LedDriver`**: Trait to implement for your three LED output lines
//! - **`CycleTimer`**: Trait to implement for your periodic hardware timer
//! - **`Transport`**: Trait to implement for your serial status link
//! - **`Fault`**: The fatal failure taxonomy for the platform's terminal handler
//!
//! Status messages are raw byte slices; their exact contents (including
//! framing bytes) are part of the contract with the host console and must be
//! transmitted unmodified.

pub mod event;
pub mod frequency;
pub mod led;
pub mod station;

pub use event::{MSG_BLUE_LIT, MSG_BUTTON_PRESSED, MSG_GREEN_LIT, MSG_RED_LIT, StationEvent};
pub use frequency::{CycleTimer, FrequencyStep, StepController};
pub use led::{LedColor, LedCycler, LedDriver};
pub use station::{BlinkStation, Fault, Transport};
