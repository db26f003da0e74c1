//! Tagged events handed off from notification context to the dispatch loop.

use crate::led::LedColor;

/// Status message sent when the button is pressed.
pub const MSG_BUTTON_PRESSED: &[u8] = b"\rPulsacion del boton\n";

/// Status message sent when the green LED turns on.
pub const MSG_GREEN_LIT: &[u8] = b"\rSe ha encencido el LED verde \n";

/// Status message sent when the blue LED turns on.
pub const MSG_BLUE_LIT: &[u8] = b"\rSe ha encencido el LED azul \n";

/// Status message sent when the red LED turns on.
pub const MSG_RED_LIT: &[u8] = b"\rSe ha encencido el LED rojo \n";

/// An event produced in notification context and consumed by the dispatch
/// loop.
///
/// Events are queued in arrival order, so the dispatch loop reports them in
/// the order they actually occurred even when a button edge and a timer tick
/// land close together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StationEvent {
    /// A qualifying edge was seen on the button line.
    ButtonPressed,
    /// The timer elapsed and this color's LED is now lit.
    LedLit(LedColor),
}

impl StationEvent {
    /// Returns the fixed status message for this event.
    ///
    /// The messages are carriage-return-prefixed, newline-terminated ASCII
    /// text; their exact bytes are part of the contract with any host console
    /// consuming the serial output.
    pub const fn message(&self) -> &'static [u8] {
        match self {
            StationEvent::ButtonPressed => MSG_BUTTON_PRESSED,
            StationEvent::LedLit(LedColor::Green) => MSG_GREEN_LIT,
            StationEvent::LedLit(LedColor::Blue) => MSG_BLUE_LIT,
            StationEvent::LedLit(LedColor::Red) => MSG_RED_LIT,
        }
    }
}
