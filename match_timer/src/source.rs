//! Line based state input for running the timer node on a host.
//!
//! Each line carries one state, either as its numeric code or as its slug
//! (`match`, `e-stop`, ...). Blank lines and `#` comments are ignored.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use match_timer_lib::{StateSource, SystemState};

use crate::Error;

/// Parses one input line into a state code.
///
/// Numbers are passed through untouched, including codes no state uses, so the
/// node sees exactly what a misbehaving controller would send.
pub fn parse_line(line: &str) -> Result<Option<u8>, Error> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    if let Ok(code) = line.parse::<u8>() {
        return Ok(Some(code));
    }
    line.parse::<SystemState>()
        .map(|state| Some(state.code()))
        .map_err(|_| Error::UnknownState(line.to_string()))
}

pub struct LineSource {
    receiver: Receiver<u8>,
    reader: Option<JoinHandle<()>>,
    closed: bool,
}

impl LineSource {
    /// Spawns a reader thread over `input`.
    pub fn spawn<R>(input: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let reader = thread::spawn(move || {
            for (number, line) in input.lines().enumerate() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::error!("reading state input failed: {}", e);
                        break;
                    }
                };
                match parse_line(&line) {
                    Ok(Some(code)) => {
                        if sender.send(code).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => log::warn!("line {}: {}", number + 1, e),
                }
            }
            log::info!("state input closed");
        });

        Self {
            receiver,
            reader: Some(reader),
            closed: false,
        }
    }

    /// True once the input has ended and every queued state was read.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl StateSource for LineSource {
    fn read_state(&mut self) -> Option<u8> {
        match self.receiver.try_recv() {
            Ok(code) => Some(code),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.closed {
                    self.closed = true;
                    if let Some(reader) = self.reader.take() {
                        let _ = reader.join();
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::time::{Duration, Instant};

    #[test]
    fn parses_codes_slugs_and_comments() {
        assert_eq!(parse_line("4").unwrap(), Some(4));
        assert_eq!(parse_line("  match  ").unwrap(), Some(4));
        assert_eq!(parse_line("e-stop # big red button").unwrap(), Some(10));
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("# comment only").unwrap(), None);
    }

    #[test]
    fn unused_codes_pass_through() {
        assert_eq!(parse_line("12").unwrap(), Some(12));
        assert_eq!(parse_line("255").unwrap(), Some(255));
    }

    #[test]
    fn unknown_words_are_errors() {
        match parse_line("overtime") {
            Err(Error::UnknownState(word)) => assert_eq!(word, "overtime"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_line("256").is_err());
    }

    fn drain(source: &mut LineSource) -> Vec<u8> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut codes = Vec::new();
        while !source.is_closed() && Instant::now() < deadline {
            match source.read_state() {
                Some(code) => codes.push(code),
                None => std::thread::sleep(Duration::from_millis(1)),
            }
        }
        codes
    }

    #[test]
    fn forwards_lines_in_order_then_closes() {
        let input = Cursor::new("# match script\nload-in\n4\nbogus\n\n11\n0\n");
        let mut source = LineSource::spawn(input);
        assert_eq!(drain(&mut source), vec![1, 4, 11, 0]);
        assert!(source.is_closed());
        assert_eq!(source.read_state(), None);
    }
}
