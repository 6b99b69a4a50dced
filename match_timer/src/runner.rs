use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use match_timer_lib::system_timer::Instant;
use match_timer_lib::{Display, Reaction, TimerNode};

use crate::source::LineSource;

pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Millisecond counter for the node, counted from the start of the run. Wraps
/// like a hardware tick counter would.
struct Clock(std::time::Instant);

impl Clock {
    fn now(&self) -> Instant {
        Instant::from_ms(self.0.elapsed().as_millis() as u32)
    }
}

/// Drives the node until `running` is cleared, or until the input ends when
/// `exit_on_eof` is set.
pub fn run<D: Display>(
    node: &mut TimerNode,
    source: &mut LineSource,
    display: &mut D,
    running: &AtomicBool,
    exit_on_eof: bool,
) {
    let clock = Clock(std::time::Instant::now());

    while running.load(Ordering::SeqCst) {
        match node.service(source, display, clock.now()) {
            Reaction::Idle => {}
            Reaction::Invalid(code) => log::warn!("ignoring unknown state code {}", code),
            Reaction::Applied(state, action) => {
                log::info!("state {} ({}): {:?}", state.code(), state, action)
            }
        }

        if exit_on_eof && source.is_closed() {
            log::info!("input ended, stopping");
            break;
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
