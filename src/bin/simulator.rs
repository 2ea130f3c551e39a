//! Line-oriented bridge between a host form and the engine.
//!
//! Commands arrive one per line on stdin and every command gets exactly one
//! reply line on stdout. Logs go to a file since stdout is the channel.
use lipi_core::calendar::CalendarSystem;
use lipi_core::config::HostConfig;
use lipi_core::logging::init_file_tracing;
use lipi_core::LocalizationEngine;
use std::io::{self, BufRead, Write};

#[derive(Debug, PartialEq)]
enum Reply {
    Text(String),
    Date(String),
    Format(CalendarSystem),
    Error(String),
}

fn main() -> io::Result<()> {
    let config = match HostConfig::load(std::env::args_os().nth(1).as_deref().map(std::path::Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {e}; using defaults");
            HostConfig::default()
        }
    };
    let _log_guard = match init_file_tracing(&config.log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("[ERROR] Could not open log directory {}: {e}", config.log_dir.display());
            None
        }
    };
    tracing::info!(?config, "bridge starting");

    let mut engine = LocalizationEngine::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!(command = %input, "<- host");
        let Some(reply) = handle_command(&input, &mut engine) else {
            break;
        };
        let out = render(&reply);
        tracing::debug!(reply = %out, "-> host");
        writeln!(stdout, "{out}")?;
        stdout.flush()?;
    }
    tracing::info!("bridge shutting down");
    Ok(())
}

/// Returns `None` on `EXIT`.
fn handle_command(input: &str, engine: &mut LocalizationEngine) -> Option<Reply> {
    let (command, arg) = input.split_once(' ').unwrap_or((input, ""));
    let reply = match command {
        "TRANSLITERATE" => Reply::Text(engine.transliterate(arg)),
        "COMMIT_WORD" => Reply::Text(engine.commit_word(arg)),
        "SET_DATE" => {
            engine.set_date(arg);
            Reply::Format(engine.date_field().format())
        }
        "SET_FORMAT" => match arg.trim().parse::<CalendarSystem>() {
            Ok(target) => Reply::Format(engine.switch_format(target)),
            Err(e) => Reply::Error(e.to_string()),
        },
        "TOGGLE_FORMAT" => Reply::Format(engine.toggle_format()),
        "DATE_VIEW" => match serde_json::to_string(&engine.date_view()) {
            Ok(json) => Reply::Date(json),
            Err(e) => Reply::Error(e.to_string()),
        },
        "EXIT" => return None,
        other => {
            tracing::warn!(command = other, "unknown command");
            Reply::Error(format!("unknown command {other:?}"))
        }
    };
    Some(reply)
}

fn render(reply: &Reply) -> String {
    match reply {
        Reply::Text(text) => format!("TEXT {text}"),
        Reply::Date(json) => format!("DATE {json}"),
        Reply::Format(format) => format!("FORMAT {format}"),
        Reply::Error(message) => format!("ERROR {message}"),
    }
}
