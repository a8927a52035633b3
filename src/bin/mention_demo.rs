//! `mention_demo`: headless driver for the mention editor.
//!
//! Reads one command per line from stdin, applies it to an
//! [`EditController`] running on a manual clock, and prints the rendered
//! surface after every command.
//!
//! # Usage
//!
//! ```bash
//! printf 'caret 5\nblur\nwait 200\ninsert Alice\n' | cargo run --bin mention_demo -- --text "Hello world"
//! cargo run --bin mention_demo -- --help
//! ```

use mention_input::ansi::{self, ColorMode};
use mention_input::timer::ManualClock;
use mention_input::{EditController, EditorOptions, KnownNames, LogLevel, Result, set_log_callback};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::time::Duration;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "mention_demo - headless mention editor driver

USAGE:
    mention_demo [OPTIONS] < commands

OPTIONS:
    -h, --help              Print this help message and exit
    --no-color              Print plain text without escape sequences
    --names <A,B,C>         Known names (default: Alice,Bob,Charlie)
    --text <TEXT>           Initial text
    --verbose               Print controller logs to stderr

COMMANDS (one per line):
    type <text>             Type text at the caret
    backspace | delete      Delete before / after the caret
    left | right            Move the caret one character
    home | end              Move the caret to the start / end
    caret <N>               Place the caret at index N
    focus | blur            Focus or blur the editable surface
    wait <MS>               Advance the clock by MS milliseconds
    insert <NAME>           Activate the insert trigger for NAME
    names                   List insert triggers
    text                    Print the logical text
    show                    Print the rendered surface
";

/// Parsed command line.
#[derive(Clone, Debug, Default)]
struct Config {
    color: bool,
    names: Option<KnownNames>,
    text: Option<String>,
    verbose: bool,
}

enum ParseResult {
    Config(Config),
    Help,
    Error(String),
}

impl Config {
    fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self {
            color: true,
            ..Self::default()
        };
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            let arg = arg.to_string_lossy().to_string();
            match arg.as_str() {
                "-h" | "--help" => return ParseResult::Help,
                "--no-color" => config.color = false,
                "--verbose" => config.verbose = true,
                "--names" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--names requires a value".to_string());
                    };
                    match KnownNames::parse_list(&value.to_string_lossy()) {
                        Ok(names) => config.names = Some(names),
                        Err(e) => return ParseResult::Error(format!("Invalid --names: {e}")),
                    }
                }
                "--text" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--text requires a value".to_string());
                    };
                    config.text = Some(value.to_string_lossy().to_string());
                }
                other => return ParseResult::Error(format!("Unknown argument: {other}")),
            }
        }

        ParseResult::Config(config)
    }

    fn editor_options(&self) -> EditorOptions {
        let mut options = EditorOptions::default();
        if let Some(names) = &self.names {
            options = options.with_known_names(names.clone());
        }
        if let Some(text) = &self.text {
            options = options.with_initial_text(text.clone());
        }
        options
    }

    fn color_mode(&self) -> ColorMode {
        if self.color {
            ColorMode::TrueColor
        } else {
            ColorMode::NoColor
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => run(&config),
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(2);
        }
    }
}

// ============================================================================
// Command Loop
// ============================================================================

fn run(config: &Config) -> Result<()> {
    if config.verbose {
        set_log_callback(|level, msg| {
            let tag = match level {
                LogLevel::Debug => "debug",
                LogLevel::Info => "info",
                LogLevel::Warn => "warn",
                LogLevel::Error => "error",
            };
            eprintln!("[{tag}] {msg}");
        });
    }

    let clock = ManualClock::new();
    let mut editor = EditController::with_clock(config.editor_options(), clock.clone());
    let mode = config.color_mode();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    show(&mut out, &editor, mode)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "type" => editor.type_text(arg),
            "backspace" => {
                editor.backspace();
            }
            "delete" => {
                editor.delete_forward();
            }
            "left" => editor.move_left(),
            "right" => editor.move_right(),
            "home" => editor.move_to_start(),
            "end" => editor.move_to_end(),
            "caret" => match arg.trim().parse::<usize>() {
                Ok(n) => editor.set_caret_index(n),
                Err(_) => {
                    writeln!(out, "error: caret expects a number, got {arg:?}")?;
                    continue;
                }
            },
            "focus" => editor.on_focus(),
            "blur" => {
                let cached = editor.on_blur();
                writeln!(out, "cached caret {cached}")?;
            }
            "wait" => match arg.trim().parse::<u64>() {
                Ok(ms) => {
                    clock.advance(Duration::from_millis(ms));
                    if editor.poll_timers() {
                        writeln!(out, "cached caret expired")?;
                    }
                }
                Err(_) => {
                    writeln!(out, "error: wait expects milliseconds, got {arg:?}")?;
                    continue;
                }
            },
            "insert" => {
                let at = editor.insert_name(arg.trim());
                writeln!(out, "inserted at {at}")?;
            }
            "names" => {
                let names = editor.names().sorted().join(", ");
                writeln!(out, "{names}")?;
                continue;
            }
            "text" => {
                writeln!(out, "{}", editor.text())?;
                continue;
            }
            "show" => {}
            other => {
                writeln!(out, "error: unknown command {other:?}")?;
                continue;
            }
        }
        show(&mut out, &editor, mode)?;
    }
    out.flush()?;
    Ok(())
}

fn show(out: &mut impl Write, editor: &EditController<ManualClock>, mode: ColorMode) -> Result<()> {
    ansi::write_surface(out, editor.surface(), mode, Some(ansi::DEFAULT_CARET_MARKER))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let ParseResult::Config(config) = Config::from_args(args(&["mention_demo"])) else {
            panic!("expected config");
        };
        assert!(config.color);
        assert_eq!(config.color_mode(), ColorMode::TrueColor);
        assert!(config.names.is_none());
    }

    #[test]
    fn test_parse_options() {
        let parsed = Config::from_args(args(&[
            "mention_demo",
            "--no-color",
            "--names",
            "Ann,Ben",
            "--text",
            "hi [Ann]",
        ]));
        let ParseResult::Config(config) = parsed else {
            panic!("expected config");
        };
        let options = config.editor_options();
        assert_eq!(config.color_mode(), ColorMode::NoColor);
        assert!(options.known_names.is_recognized("Ben"));
        assert_eq!(options.initial_text, "hi [Ann]");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Config::from_args(args(&["mention_demo", "--names"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["mention_demo", "--names", "a]b"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["mention_demo", "--bogus"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["mention_demo", "--help"])),
            ParseResult::Help
        ));
    }
}
