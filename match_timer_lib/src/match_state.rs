//! Match state exchanged between the electrical system nodes.
//!
//! The two values are placeholders: they name a state without giving it any
//! meaning, and nothing else in this crate interprets them.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchState {
    /// `EXAMPLE_ONE_ST`
    ExampleOne,
    /// `EXAMPLE_TWO_ST`
    ExampleTwo,
}

impl MatchState {
    /// Every value, in declaration order.
    pub const ALL: [MatchState; 2] = [MatchState::ExampleOne, MatchState::ExampleTwo];

    /// Identifier the value is known by on the other nodes.
    pub fn name(self) -> &'static str {
        match self {
            MatchState::ExampleOne => "EXAMPLE_ONE_ST",
            MatchState::ExampleTwo => "EXAMPLE_TWO_ST",
        }
    }
}

impl core::fmt::Display for MatchState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchState::ALL
            .iter()
            .copied()
            .find(|state| state.name() == s)
            .ok_or(Error::UnknownName)
    }
}
