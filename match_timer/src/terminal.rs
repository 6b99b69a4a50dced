use std::io::Write;

use termion::{clear, color, style};

use match_timer_lib::{ClockFace, Display, TimerColor};

/// How faces are drawn on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Redraw a single colored line in place.
    Color,
    /// One plain line per face, with the color spelled out. Suits logs and pipes.
    Plain,
}

pub struct Terminal<W: Write> {
    out: W,
    style: Style,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, style: Style) -> Self {
        Self { out, style }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, face: &ClockFace) -> std::io::Result<()> {
        match self.style {
            Style::Color => {
                write!(
                    self.out,
                    "\r{clear}{bold}{fg}{text}{reset}",
                    clear = clear::CurrentLine,
                    bold = style::Bold,
                    fg = color::Fg(rgb(face.color())),
                    text = face.text(),
                    reset = style::Reset,
                )?;
            }
            Style::Plain => {
                writeln!(self.out, "{} {:?}", face.text(), face.color())?;
            }
        }
        self.out.flush()
    }
}

fn rgb(timer_color: TimerColor) -> color::Rgb {
    let [r, g, b] = timer_color.channels();
    color::Rgb(r, g, b)
}

impl<W: Write> Display for Terminal<W> {
    fn show(&mut self, face: &ClockFace) {
        if let Err(e) = self.draw(face) {
            log::warn!("failed to draw clock face: {}", e);
        }
    }
}
