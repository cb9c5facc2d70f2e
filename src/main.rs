mod app;
mod cell;
mod day;
mod grid;
mod help;
mod keymap;
mod theme;
use crate::app::App;
use crate::cell::{locale_from_env, SizeClass};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::{Path, PathBuf};
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        size_class: Option<SizeClass>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut size_class = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('s') | Arg::Long("size-class") => {
                    size_class = Some(parser.value()?.parse::<SizeClass>()?);
                }
                Arg::Short('l') | Arg::Long("log-file") => {
                    log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            size_class,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                size_class,
                log_file,
            } => {
                if let Some(path) = log_file {
                    init_logging(&path)?;
                }
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                log::debug!(
                    "starting with today = {today}, selection = {date:?}, size class = {size_class:?}"
                );
                let locale = locale_from_env();
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let app = App::new(today)
                        .selected(date.unwrap_or(today))
                        .size_class(size_class)
                        .locale(locale);
                    app.run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: datecell [-s|--size-class compact|regular] [-l|--log-file <path>] [YYYY-MM-DD]");
                println!();
                println!("Terminal date picker built from recyclable day cells");
                println!();
                println!("Options:");
                println!("  -s, --size-class <compact|regular>");
                println!("                    Force a horizontal size class instead of");
                println!("                    deriving it from the terminal width");
                println!("  -l, --log-file <path>");
                println!("                    Write log messages to the given file; RUST_LOG");
                println!("                    sets the level (default: debug)");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                println!();
                println!("Weekday & month names follow LC_ALL, LC_TIME, or LANG.");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

/// Send log messages to the file at `path`.  Without a log file, nothing is
/// logged: stderr is the terminal the picker is drawn on.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")?;
    Ok(())
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            Command::Run {
                date: None,
                size_class: None,
                log_file: None,
            }
        );
    }

    #[test]
    fn test_date_and_size_class() {
        assert_eq!(
            parse(&["--size-class", "compact", "2025-04-07"]).unwrap(),
            Command::Run {
                date: Some(date!(2025 - 04 - 07)),
                size_class: Some(SizeClass::Compact),
                log_file: None,
            }
        );
        assert_eq!(
            parse(&["-s", "regular"]).unwrap(),
            Command::Run {
                date: None,
                size_class: Some(SizeClass::Regular),
                log_file: None,
            }
        );
    }

    #[test]
    fn test_log_file() {
        assert_eq!(
            parse(&["--log-file", "datecell.log", "2025-04-07"]).unwrap(),
            Command::Run {
                date: Some(date!(2025 - 04 - 07)),
                size_class: None,
                log_file: Some(PathBuf::from("datecell.log")),
            }
        );
        assert_eq!(
            parse(&["-l", "/tmp/x.log"]).unwrap(),
            Command::Run {
                date: None,
                size_class: None,
                log_file: Some(PathBuf::from("/tmp/x.log")),
            }
        );
        assert!(parse(&["--log-file"]).is_err());
    }

    #[test]
    fn test_bad_args() {
        assert!(parse(&["--size-class", "huge"]).is_err());
        assert!(parse(&["2025-13-01"]).is_err());
        assert!(parse(&["2025-04-07", "2025-04-08"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn test_help_version() {
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Command::Version);
    }
}
