//! Command-line input parsing.
//!
//! One line of stdin is one command: `<artist> | <song>` submits a song,
//! lines starting with `:` are session commands.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a song for an artist.
    Submit {
        /// Artist as typed.
        artist: String,
        /// Song as typed.
        song: String,
    },
    /// Clear all statistics.
    Reset,
    /// Print the ranking.
    Chart,
    /// Print one artist's card.
    Show(String),
    /// Toggle JSON output of published snapshots.
    ToggleJson,
    /// Print usage.
    Help,
    /// Leave the session.
    Quit,
    /// Blank line.
    Empty,
    /// Anything that did not parse (message to display).
    Invalid(String),
}

/// Usage text printed for `:help`.
pub const HELP: &str = "\
<artist> | <song>   count the words of a song
:show <artist>      print an artist's card
:chart              print the uniqueness ranking
:json               toggle JSON output
:reset              clear all statistics
:quit               leave";

/// Parse one input line.
pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    if let Some(rest) = line.strip_prefix(':') {
        let (name, arg) = rest
            .split_once(char::is_whitespace)
            .map_or((rest, ""), |(n, a)| (n, a.trim()));
        return match name.to_lowercase().as_str() {
            "reset" => Command::Reset,
            "chart" => Command::Chart,
            "json" => Command::ToggleJson,
            "help" | "h" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "show" if !arg.is_empty() => Command::Show(arg.to_string()),
            "show" => Command::Invalid("usage: :show <artist>".to_string()),
            other => Command::Invalid(format!("unknown command :{other} (try :help)")),
        };
    }

    // Blank halves are passed through so validation reports which one is missing.
    match line.split_once('|') {
        Some((artist, song)) => Command::Submit {
            artist: artist.trim().to_string(),
            song: song.trim().to_string(),
        },
        None => Command::Invalid("expected `<artist> | <song>` (try :help)".to_string()),
    }
}
