mod cli;
mod config;
mod conversion;
mod error;
mod lexicon;
mod logging;
mod models;

use std::env;
use std::io::{self, BufRead, Write};

use config::constants::MAX_PHRASE_LENGTH;
use conversion::{format_currency, words_to_number};
use error::{ConvertError, Result};
use lexicon::ScaleSystem;
use models::ConversionRecord;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    logging::init_logging(&logging::LogConfig::from_env());

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        cli::print_help();
        return Ok(());
    }
    if args.contains(&"--version".to_string()) || args.contains(&"-v".to_string()) {
        cli::print_version();
        return Ok(());
    }

    let system = match flag_value(&args, "--system") {
        Some(name) => name.parse()?,
        None => default_scale_system(),
    };
    let json_path = flag_value(&args, "--json");

    if let Some(raw) = flag_value(&args, "--number") {
        run_number_to_words(&raw, system, json_path.as_deref())
    } else if let Some(phrase) = flag_value(&args, "--words") {
        run_words_to_number(&phrase, json_path.as_deref())
    } else {
        run_menu()
    }
}

/// One-shot number -> currency phrase conversion
fn run_number_to_words(raw: &str, system: ScaleSystem, json_path: Option<&str>) -> Result<()> {
    let phrase = format_currency(raw, system)?;
    tracing::info!(%system, "converted number to words");
    println!("{}", phrase);

    if let Some(path) = json_path {
        write_record(path, &ConversionRecord::number_to_words(raw, &phrase, system))?;
    }
    Ok(())
}

/// One-shot word phrase -> number conversion
fn run_words_to_number(phrase: &str, json_path: Option<&str>) -> Result<()> {
    check_phrase_length(phrase)?;
    let value = words_to_number(phrase);
    tracing::info!(value, "decoded word phrase");
    println!("{}", value);

    if let Some(path) = json_path {
        write_record(path, &ConversionRecord::words_to_number(phrase, value))?;
    }
    Ok(())
}

fn write_record(path: &str, record: &ConversionRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json)?;
    tracing::info!(path, "conversion record written");
    Ok(())
}

/// Interactive menu loop: 1 = number to words, 2 = words to number, 3 = exit.
///
/// A failed request prints its error and the loop continues; nothing is
/// carried over between requests.
fn run_menu() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("--- Main Menu ---");
        println!("1. Number to Words");
        println!("2. Words to Number");
        println!("3. Exit");

        let line = match prompt_line(&mut lines, "Your choice: ") {
            Ok(line) => line,
            Err(_) => break, // stdin closed
        };
        let choice: u32 = match line.trim().parse() {
            Ok(choice) => choice,
            Err(_) => {
                println!("Invalid input. Please enter a number.");
                continue;
            }
        };

        match choice {
            1 => {
                if let Err(e) = menu_number_to_words(&mut lines) {
                    println!("{}", e);
                }
            }
            2 => {
                if let Err(e) = menu_words_to_number(&mut lines) {
                    println!("{}", e);
                }
            }
            3 => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please select 1, 2, or 3."),
        }
    }

    Ok(())
}

fn menu_number_to_words(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    let selection = prompt_line(
        lines,
        "Select system:\n1. International (Million, Billion)\n2. Indian (Lakh, Crore)\nChoice: ",
    )?;
    let system = match selection.trim() {
        "1" => ScaleSystem::International,
        "2" => ScaleSystem::Indian,
        other => {
            return Err(ConvertError::InvalidFormat(format!(
                "invalid system selection: {:?}",
                other
            )))
        }
    };

    let raw = prompt_line(lines, "Enter a number (e.g., 152.45 or 45789): ")?;
    let phrase = format_currency(&raw, system)?;
    println!("\nOutput: {}", phrase);
    Ok(())
}

fn menu_words_to_number(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    let phrase = prompt_line(
        lines,
        "Enter words (e.g., forty-five thousand seven hundred rupees): ",
    )?;
    check_phrase_length(&phrase)?;
    println!("\nOutput: {}", words_to_number(&phrase));
    Ok(())
}

fn prompt_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(ConvertError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ))),
    }
}

/// The decoder never fails, so oversized input is rejected here instead
fn check_phrase_length(phrase: &str) -> Result<()> {
    if phrase.chars().count() > MAX_PHRASE_LENGTH {
        return Err(ConvertError::InvalidFormat(format!(
            "phrase exceeds {} characters",
            MAX_PHRASE_LENGTH
        )));
    }
    Ok(())
}

/// Default scale system from the environment, falling back to International
fn default_scale_system() -> ScaleSystem {
    env::var("SANKHYA_SCALE_SYSTEM")
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(ScaleSystem::International)
}

/// Value following a `--flag` argument, if both are present
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}
