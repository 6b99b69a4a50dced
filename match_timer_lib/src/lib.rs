#![no_std]

//! Shared vocabulary and timer display logic for the match nodes.
//!
//! Everything in here is `no_std` and allocation free so that the same types
//! can be embedded in node firmware and in host tools.

pub mod countdown;
pub mod face;
pub mod match_state;
pub mod node;
pub mod system_state;
pub mod system_timer;

pub use countdown::Countdown;
pub use face::{ClockFace, TimerColor};
pub use match_state::MatchState;
pub use node::{Display, Reaction, StateSource, TimerConfig, TimerNode};
pub use system_state::{SystemState, TimerAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// State code outside of the known system states.
    InvalidState(u8),
    /// A countdown needs at least one second to count.
    ZeroLength,
    /// Symbolic name that does not belong to the enum being parsed.
    UnknownName,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidState(code) => write!(f, "invalid system state code {}", code),
            Error::ZeroLength => write!(f, "timer length must be at least one second"),
            Error::UnknownName => write!(f, "unknown state name"),
        }
    }
}
