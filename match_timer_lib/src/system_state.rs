//! Numbered system states broadcast to the timer node.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    Idle,
    LoadIn,
    ReadyForBattle,
    Countdown,
    Match,
    OneMinuteRemaining,
    TenSecondsRemaining,
    MatchEnd,
    KoConfirm,
    KoTapOut,
    EStop,
    Pause,
}

/// What the countdown does when a state is received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerAction {
    Reset,
    Start,
    Pause,
    Hold,
}

impl SystemState {
    /// Every state, ordered by code.
    pub const ALL: [SystemState; 12] = [
        SystemState::Idle,
        SystemState::LoadIn,
        SystemState::ReadyForBattle,
        SystemState::Countdown,
        SystemState::Match,
        SystemState::OneMinuteRemaining,
        SystemState::TenSecondsRemaining,
        SystemState::MatchEnd,
        SystemState::KoConfirm,
        SystemState::KoTapOut,
        SystemState::EStop,
        SystemState::Pause,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn action(self) -> TimerAction {
        match self {
            SystemState::Idle => TimerAction::Reset,
            SystemState::Match => TimerAction::Start,
            SystemState::MatchEnd
            | SystemState::KoTapOut
            | SystemState::EStop
            | SystemState::Pause => TimerAction::Pause,
            SystemState::LoadIn
            | SystemState::ReadyForBattle
            | SystemState::Countdown
            | SystemState::OneMinuteRemaining
            | SystemState::TenSecondsRemaining
            | SystemState::KoConfirm => TimerAction::Hold,
        }
    }

    /// Short name accepted by the host tools, e.g. `ready-for-battle`.
    pub fn slug(self) -> &'static str {
        match self {
            SystemState::Idle => "idle",
            SystemState::LoadIn => "load-in",
            SystemState::ReadyForBattle => "ready-for-battle",
            SystemState::Countdown => "countdown",
            SystemState::Match => "match",
            SystemState::OneMinuteRemaining => "one-minute",
            SystemState::TenSecondsRemaining => "ten-seconds",
            SystemState::MatchEnd => "match-end",
            SystemState::KoConfirm => "ko-confirm",
            SystemState::KoTapOut => "ko-tap-out",
            SystemState::EStop => "e-stop",
            SystemState::Pause => "pause",
        }
    }
}

impl TryFrom<u8> for SystemState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        SystemState::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(Error::InvalidState(code))
    }
}

impl From<SystemState> for u8 {
    fn from(state: SystemState) -> u8 {
        state.code()
    }
}

/// Accepts either the numeric code or the slug.
impl FromStr for SystemState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return SystemState::try_from(code);
        }
        SystemState::ALL
            .iter()
            .copied()
            .find(|state| state.slug().eq_ignore_ascii_case(s))
            .ok_or(Error::UnknownName)
    }
}

impl core::fmt::Display for SystemState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            SystemState::Idle => "idle",
            SystemState::LoadIn => "load-in",
            SystemState::ReadyForBattle => "ready for battle",
            SystemState::Countdown => "countdown",
            SystemState::Match => "match",
            SystemState::OneMinuteRemaining => "one minute remaining",
            SystemState::TenSecondsRemaining => "10 seconds remaining",
            SystemState::MatchEnd => "match end",
            SystemState::KoConfirm => "ko confirm",
            SystemState::KoTapOut => "ko + tap out",
            SystemState::EStop => "e-stop",
            SystemState::Pause => "pause",
        };
        f.write_str(label)
    }
}
