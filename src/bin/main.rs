use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use lipi_core::config::HostConfig;
use lipi_core::logging::init_tracing;
use lipi_core::LocalizationEngine;
use std::io::{self, stdin, stdout, Write};

fn main() -> io::Result<()> {
    init_tracing();
    let config = HostConfig::load(None).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to the default configuration");
        HostConfig::default()
    });
    let mut engine = LocalizationEngine::from_config(&config);
    let mut preedit = String::new();
    let mut committed = String::new();

    loop {
        print_ui(&preedit, &committed, &engine)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match cmd {
            ":exit" => break,
            ":toggle" => {
                engine.toggle_format();
            }
            ":clear" => {
                preedit.clear();
                committed.clear();
            }
            "" => {
                // Enter stands in for the space key: commit the word.
                committed.push_str(&engine.commit_word(&preedit));
                preedit.clear();
            }
            s if s.starts_with(":date ") => {
                engine.set_date(&s[":date ".len()..]);
            }
            s => {
                preedit.push_str(s);
            }
        }
    }

    println!("\nFinal text: {}", committed.trim_end());
    Ok(())
}

fn print_ui(preedit: &str, committed: &str, engine: &LocalizationEngine) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Nepali Lipi Simulator".bold());
    println!("---------------------------------------------------------------");
    println!("Type roman text and press [Enter] to commit it as Devanagari.");
    println!("':date YYYY-MM-DD' sets the date, ':toggle' switches BS/AD,");
    println!("':clear' resets the text, ':exit' quits.\n");

    println!("Text:     {}", committed.green());
    println!("Pre-edit: [{}]", preedit);
    println!("Preview -> {}", engine.transliterate(preedit).cyan());

    let field = engine.date_field();
    let view = engine.date_view();
    println!("\nDate ({}): {}", field.format().to_string().bold(), field.value());
    if let Some(error) = &view.error {
        println!("  {}", error.as_str().red());
    } else if let (Some(converted), Some(display)) = (&view.converted, &view.display) {
        println!("  {}: {} ({})", view.converted_format, display, converted);
        if let Some(age) = view.age {
            println!("  Age: {} years old", age);
        }
    }
    print!("\n> ");
    out.flush()
}
