//! `lyricboard` - count lyric vocabulary per artist from the command line.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lyricboard::app::App;
use lyricboard::config::Config;
use lyricboard::error::Result;
use lyricboard::input::{parse_line, Command, HELP};
use lyricboard::services::ingest::Published;
use lyricboard::services::report::{format_card, format_chart, format_top_words};

/// Words listed by `:show`.
const TOP_WORDS: usize = 5;

/// Install the stderr log subscriber.
///
/// `LYRICBOARD_LOG` wins over `RUST_LOG`; without either, `-v` selects
/// `debug` and the default is `warn`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = std::env::var("LYRICBOARD_LOG")
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    let stderr_is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(stderr_is_tty)
        .with_target(false);

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

/// What the read loop should do after a line.
enum Flow {
    Continue,
    Quit,
}

struct Session {
    app: App,
    json: bool,
}

impl Session {
    fn handle_line(&mut self, line: &str) -> Flow {
        match parse_line(line) {
            Command::Submit { artist, song } => {
                if let Err(e) = self.app.submit(&artist, &song) {
                    eprintln!("rejected: {e}");
                }
            }
            Command::Reset => {
                self.app.reset();
                println!("statistics cleared");
            }
            Command::Chart => {
                print!("{}", format_chart(self.app.aggregator().ranking().entries(), self.app.config.chart_limit));
            }
            Command::Show(artist) => match self.app.aggregator().get(&artist) {
                Ok(record) => {
                    print!("{}", format_card(&record.snapshot()));
                    print!("{}", format_top_words(&record.top_words(TOP_WORDS)));
                }
                Err(e) => eprintln!("{e}"),
            },
            Command::ToggleJson => {
                self.json = !self.json;
                println!("json output {}", if self.json { "on" } else { "off" });
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Flow::Quit,
            Command::Empty => {}
            Command::Invalid(message) => eprintln!("{message}"),
        }
        Flow::Continue
    }

    fn print_outcome(&self, outcome: Result<Published>) {
        match outcome {
            Ok(published) if self.json => match published.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("{e}"),
            },
            Ok(published) => {
                print!("{}", format_card(&published.record));
                print!("{}", format_chart(&published.ranking, self.app.config.chart_limit));
            }
            Err(e) => eprintln!("rejected: {e}"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let verbose = std::env::args().skip(1).any(|a| a == "-v" || a == "--verbose");
    init_tracing(verbose);

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(
        "{} {} using {}",
        config.app_name(),
        config.app_version(),
        config.lyrics_api_url
    );

    let mut session = Session { app: App::new(config), json: false };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("failed to read stdin")? {
                    Some(line) => {
                        if matches!(session.handle_line(&line), Flow::Quit) {
                            break;
                        }
                    }
                    None => {
                        // Input closed: let every outstanding lookup land before exiting.
                        while let Some(outcome) = session.app.next_update().await {
                            session.print_outcome(outcome);
                        }
                        break;
                    }
                }
            }
            Some(outcome) = session.app.next_update(), if session.app.is_loading() => {
                session.print_outcome(outcome);
            }
        }
    }

    Ok(())
}
