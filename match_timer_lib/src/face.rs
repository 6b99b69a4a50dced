//! Clock face rendering for the timer display.

use core::fmt::Write;

use heapless::String;

/// Longest face is `MMMM:SS`, reached at `u16::MAX` seconds.
pub const FACE_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerColor {
    Black,
    Red,
    Yellow,
    Green,
}

impl TimerColor {
    /// `[red, green, blue]` channels.
    pub fn channels(self) -> [u8; 3] {
        match self {
            TimerColor::Black => [0x00, 0x00, 0x00],
            TimerColor::Red => [0xFF, 0x00, 0x00],
            TimerColor::Yellow => [0xFF, 0x8C, 0x00],
            TimerColor::Green => [0x3D, 0xEB, 0x34],
        }
    }

    /// 24-bit `0xRRGGBB` value.
    pub fn rgb(self) -> u32 {
        let [r, g, b] = self.channels();
        u32::from_be_bytes([0, r, g, b])
    }

    /// Color for the given remaining time. Exactly one minute has no color of
    /// its own and returns `None`; the face keeps whatever it showed before.
    pub fn for_remaining(remaining_s: u16) -> Option<TimerColor> {
        if remaining_s < 11 {
            Some(TimerColor::Red)
        } else if remaining_s < 60 {
            Some(TimerColor::Yellow)
        } else if remaining_s > 60 {
            Some(TimerColor::Green)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockFace {
    text: String<FACE_LEN>,
    color: TimerColor,
}

impl ClockFace {
    pub fn render(remaining_s: u16, blink: bool, previous: TimerColor) -> Self {
        let minutes = remaining_s / 60;
        let seconds = remaining_s % 60;
        let colon = if blink && remaining_s % 2 == 0 {
            ' '
        } else {
            ':'
        };

        let mut text = String::new();
        // u16 seconds never need more than four minute digits
        let written = write!(text, "{:02}{}{:02}", minutes, colon, seconds);
        debug_assert!(written.is_ok());

        Self {
            text,
            color: TimerColor::for_remaining(remaining_s).unwrap_or(previous),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn color(&self) -> TimerColor {
        self.color
    }
}
