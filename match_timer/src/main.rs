mod config;
mod logger;
mod runner;
mod source;
mod terminal;

use std::io::BufReader;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use structopt::StructOpt;

use match_timer_lib::{ClockFace, MatchState, SystemState, TimerColor, TimerNode};

use source::LineSource;
use terminal::{Style, Terminal};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    #[error("Failed to open script {path}: {source}")]
    ScriptOpen {
        path: String,
        source: std::io::Error,
    },
    #[error("Unknown state {0:?}")]
    UnknownState(String),
    #[error("{0}")]
    Timer(match_timer_lib::Error),
}

impl From<match_timer_lib::Error> for Error {
    fn from(error: match_timer_lib::Error) -> Self {
        Error::Timer(error)
    }
}

#[derive(Debug, StructOpt)]
#[structopt(author, about = "Match countdown timer display node")]
struct Options {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences), global = true)]
    verbose: u8,
    #[structopt(subcommand)]
    command: Commands,
}

#[derive(Debug, StructOpt)]
enum Commands {
    #[structopt(
        name = "run",
        about = "Runs the timer, reading one state per line from stdin or a script"
    )]
    Run {
        #[structopt(short = "c", long = "config", parse(from_os_str))]
        config: Option<PathBuf>,
        /// Match length in seconds
        #[structopt(short = "l", long = "length")]
        length: Option<u16>,
        #[structopt(long = "no-blink")]
        no_blink: bool,
        /// Read states from this file instead of stdin
        #[structopt(short = "s", long = "script", parse(from_os_str))]
        script: Option<PathBuf>,
        /// Print one plain line per second instead of redrawing a colored face
        #[structopt(long = "plain")]
        plain: bool,
        /// Stop once the input has ended
        #[structopt(long = "exit-on-eof")]
        exit_on_eof: bool,
    },
    #[structopt(name = "states", about = "Lists the system state codes")]
    States,
    #[structopt(name = "match-states", about = "Lists the match state identifiers")]
    MatchStates,
    #[structopt(name = "render", about = "Prints the clock face for a remaining time")]
    Render {
        seconds: u16,
        #[structopt(long = "no-blink")]
        no_blink: bool,
    },
}

fn open_input(script: Option<PathBuf>) -> Result<LineSource, Error> {
    match script {
        Some(path) => {
            let file = std::fs::File::open(&path).map_err(|source| Error::ScriptOpen {
                path: path.display().to_string(),
                source,
            })?;
            log::info!("reading states from {}", path.display());
            Ok(LineSource::spawn(BufReader::new(file)))
        }
        None => {
            log::info!("reading states from stdin");
            Ok(LineSource::spawn(BufReader::new(std::io::stdin())))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_args();
    logger::init(options.verbose)?;

    match options.command {
        Commands::Run {
            config: config_path,
            length,
            no_blink,
            script,
            plain,
            exit_on_eof,
        } => {
            let overrides = config::Overrides {
                length_s: length,
                no_blink,
            };
            let config = config::load(config_path.as_deref(), overrides)?;
            let mut source = open_input(script)?;

            let running = Arc::new(AtomicBool::new(true));
            let handler_flag = running.clone();
            ctrlc::set_handler(move || {
                handler_flag.store(false, Ordering::SeqCst);
            })?;

            let style = if plain { Style::Plain } else { Style::Color };
            let mut display = Terminal::new(std::io::stdout(), style);
            let mut node = TimerNode::new(config, &mut display).map_err(Error::from)?;

            runner::run(&mut node, &mut source, &mut display, &running, exit_on_eof);
            if style == Style::Color {
                println!();
            }
        }
        Commands::States => {
            for state in SystemState::ALL.iter() {
                println!(
                    "{:>2}  {:<17} {:?}",
                    state.code(),
                    state.slug(),
                    state.action()
                );
            }
        }
        Commands::MatchStates => {
            for state in MatchState::ALL.iter() {
                println!("{}", state);
            }
        }
        Commands::Render { seconds, no_blink } => {
            let face = ClockFace::render(seconds, !no_blink, TimerColor::Green);
            println!("{} {:?}", face.text(), face.color());
        }
    }

    Ok(())
}
