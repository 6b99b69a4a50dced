use crate::Error;

pub const DEFAULT_LENGTH_S: u16 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    length_s: u16,
    remaining_s: u16,
    running: bool,
}

impl Countdown {
    pub fn new(length_s: u16) -> Result<Self, Error> {
        if length_s == 0 {
            return Err(Error::ZeroLength);
        }
        Ok(Self {
            length_s,
            remaining_s: length_s,
            running: false,
        })
    }

    pub fn length_s(&self) -> u16 {
        self.length_s
    }

    pub fn remaining_s(&self) -> u16 {
        self.remaining_s
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stops the countdown and restores the full length.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_s = self.length_s;
    }

    /// Advances one second.
    ///
    /// Returns the value to show for the second that just started, or `None`
    /// while paused. The shown value is taken before decrementing, and the
    /// countdown wraps back to its full length once it has shown zero.
    pub fn tick(&mut self) -> Option<u16> {
        if !self.running {
            return None;
        }
        let shown = self.remaining_s;
        self.remaining_s = match shown.checked_sub(1) {
            Some(next) => next,
            None => self.length_s,
        };
        Some(shown)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            length_s: DEFAULT_LENGTH_S,
            remaining_s: DEFAULT_LENGTH_S,
            running: false,
        }
    }
}
