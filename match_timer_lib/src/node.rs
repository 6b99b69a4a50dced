//! Timer display node.
//!
//! The node reads the latest system state code from a [`StateSource`], starts,
//! pauses or resets its countdown accordingly, and once per second pushes a
//! fresh [`ClockFace`] to a [`Display`].

use serde::{Deserialize, Serialize};

use crate::countdown::{Countdown, DEFAULT_LENGTH_S};
use crate::face::{ClockFace, TimerColor};
use crate::system_state::{SystemState, TimerAction};
use crate::system_timer::{self, Instant, ONE_SECOND};
use crate::Error;

/// Where state codes come from. Returns the code carried by the most recent
/// packet, or `None` when nothing new has arrived.
pub trait StateSource {
    fn read_state(&mut self) -> Option<u8>;
}

pub trait Display {
    fn show(&mut self, face: &ClockFace);
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct TimerConfig {
    /// Match length in seconds.
    pub length_s: u16,
    /// Blink the colon once per second.
    pub blink: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            length_s: DEFAULT_LENGTH_S,
            blink: true,
        }
    }
}

/// Outcome of one state poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reaction {
    /// No packet was received.
    Idle,
    /// A packet carried a code that is not a known state. Nothing changed.
    Invalid(u8),
    Applied(SystemState, TimerAction),
}

pub struct TimerNode {
    config: TimerConfig,
    countdown: Countdown,
    color: TimerColor,
    last_tick: Option<Instant>,
}

impl TimerNode {
    /// Creates the node and shows the full match length.
    pub fn new<D: Display>(config: TimerConfig, display: &mut D) -> Result<Self, Error> {
        let mut node = Self {
            config,
            countdown: Countdown::new(config.length_s)?,
            color: TimerColor::Green,
            last_tick: None,
        };
        node.show(config.length_s, display);
        Ok(node)
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn poll_state<S: StateSource, D: Display>(
        &mut self,
        source: &mut S,
        display: &mut D,
    ) -> Reaction {
        let code = match source.read_state() {
            Some(code) => code,
            None => return Reaction::Idle,
        };
        let state = match SystemState::try_from(code) {
            Ok(state) => state,
            Err(_) => return Reaction::Invalid(code),
        };

        let action = state.action();
        self.apply(action, display);
        Reaction::Applied(state, action)
    }

    pub fn apply<D: Display>(&mut self, action: TimerAction, display: &mut D) {
        match action {
            TimerAction::Reset => {
                self.countdown.reset();
                self.show(self.countdown.remaining_s(), display);
            }
            TimerAction::Start => self.countdown.start(),
            TimerAction::Pause => self.countdown.pause(),
            TimerAction::Hold => {}
        }
    }

    /// Counts down one second and refreshes the display. Returns the shown
    /// value, or `None` while the countdown is paused.
    pub fn tick_second<D: Display>(&mut self, display: &mut D) -> Option<u16> {
        let shown = self.countdown.tick()?;
        self.show(shown, display);
        Some(shown)
    }

    /// One pass of the node main loop: handle the latest state, then tick if
    /// a second has passed since the previous tick.
    pub fn service<S: StateSource, D: Display>(
        &mut self,
        source: &mut S,
        display: &mut D,
        now: Instant,
    ) -> Reaction {
        let reaction = self.poll_state(source, display);

        match self.last_tick {
            None => self.last_tick = Some(now),
            Some(last) if system_timer::elapsed_since(now, last) >= ONE_SECOND => {
                self.last_tick = Some(now);
                self.tick_second(display);
            }
            Some(_) => {}
        }

        reaction
    }

    fn show<D: Display>(&mut self, remaining_s: u16, display: &mut D) {
        let face = ClockFace::render(remaining_s, self.config.blink, self.color);
        self.color = face.color();
        display.show(&face);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use heapless::{Deque, String, Vec};

    struct Script(Deque<Option<u8>, 16>);

    impl Script {
        fn new(codes: &[Option<u8>]) -> Self {
            let mut queue = Deque::new();
            for code in codes {
                queue.push_back(*code).unwrap();
            }
            Script(queue)
        }
    }

    impl StateSource for Script {
        fn read_state(&mut self) -> Option<u8> {
            self.0.pop_front().flatten()
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<(String<8>, TimerColor), 32>);

    impl Display for Recorder {
        fn show(&mut self, face: &ClockFace) {
            self.0
                .push((String::from(face.text()), face.color()))
                .unwrap();
        }
    }

    impl Recorder {
        fn last_text(&self) -> &str {
            self.0.last().unwrap().0.as_str()
        }
    }

    fn config(length_s: u16) -> TimerConfig {
        TimerConfig {
            length_s,
            blink: false,
        }
    }

    #[test]
    fn shows_full_length_on_start() {
        let mut display = Recorder::default();
        let node = TimerNode::new(TimerConfig::default(), &mut display).unwrap();
        assert_eq!(display.0.len(), 1);
        assert_eq!(display.last_text(), "03 00");
        assert_eq!(display.0[0].1, TimerColor::Green);
        assert!(!node.countdown().is_running());
    }

    #[test]
    fn zero_length_config_fails() {
        let mut display = Recorder::default();
        assert!(matches!(
            TimerNode::new(config(0), &mut display),
            Err(Error::ZeroLength)
        ));
    }

    #[test]
    fn match_starts_and_pause_states_stop() {
        let mut display = Recorder::default();
        let mut node = TimerNode::new(config(120), &mut display).unwrap();
        let mut source = Script::new(&[Some(4)]);

        assert_eq!(
            node.poll_state(&mut source, &mut display),
            Reaction::Applied(SystemState::Match, TimerAction::Start)
        );
        assert_eq!(node.tick_second(&mut display), Some(120));
        assert_eq!(node.tick_second(&mut display), Some(119));
        assert_eq!(display.last_text(), "01:59");

        for code in [7, 9, 10, 11] {
            node.apply(TimerAction::Start, &mut display);
            let mut source = Script::new(&[Some(code)]);
            node.poll_state(&mut source, &mut display);
            assert!(!node.countdown().is_running(), "code {} should pause", code);
        }
        assert_eq!(node.tick_second(&mut display), None);
    }

    #[test]
    fn idle_resets_and_redraws() {
        let mut display = Recorder::default();
        let mut node = TimerNode::new(config(90), &mut display).unwrap();
        node.apply(TimerAction::Start, &mut display);
        node.tick_second(&mut display);
        node.tick_second(&mut display);

        let mut source = Script::new(&[Some(0)]);
        node.poll_state(&mut source, &mut display);
        assert_eq!(node.countdown().remaining_s(), 90);
        assert!(!node.countdown().is_running());
        assert_eq!(display.last_text(), "01:30");
    }

    #[test]
    fn hold_states_and_bad_codes_change_nothing() {
        let mut display = Recorder::default();
        let mut node = TimerNode::new(config(30), &mut display).unwrap();
        node.apply(TimerAction::Start, &mut display);
        let mut source = Script::new(&[Some(1), Some(5), Some(8), Some(12), Some(200), None]);

        assert_eq!(
            node.poll_state(&mut source, &mut display),
            Reaction::Applied(SystemState::LoadIn, TimerAction::Hold)
        );
        node.poll_state(&mut source, &mut display);
        node.poll_state(&mut source, &mut display);
        assert_eq!(node.poll_state(&mut source, &mut display), Reaction::Invalid(12));
        assert_eq!(node.poll_state(&mut source, &mut display), Reaction::Invalid(200));
        assert_eq!(node.poll_state(&mut source, &mut display), Reaction::Idle);
        assert!(node.countdown().is_running());
        assert_eq!(node.countdown().remaining_s(), 30);
        assert_eq!(display.0.len(), 1);
    }

    #[test]
    fn service_ticks_once_per_second() {
        let mut display = Recorder::default();
        let mut node = TimerNode::new(config(12), &mut display).unwrap();
        let mut source = Script::new(&[Some(4)]);

        node.service(&mut source, &mut display, Instant::from_ms(0));
        node.service(&mut source, &mut display, Instant::from_ms(400));
        node.service(&mut source, &mut display, Instant::from_ms(999));
        assert_eq!(node.countdown().remaining_s(), 12);

        node.service(&mut source, &mut display, Instant::from_ms(1000));
        assert_eq!(display.last_text(), "00:12");
        assert_eq!(node.countdown().remaining_s(), 11);

        node.service(&mut source, &mut display, Instant::from_ms(1500));
        node.service(&mut source, &mut display, Instant::from_ms(2000));
        assert_eq!(display.last_text(), "00:11");
        assert_eq!(display.0.last().unwrap().1, TimerColor::Yellow);

        node.service(&mut source, &mut display, Instant::from_ms(3000));
        assert_eq!(display.last_text(), "00:10");
        assert_eq!(display.0.last().unwrap().1, TimerColor::Red);
    }
}
