use std::cell::Cell;
use std::rc::Rc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use money_input::{
    AmountField, AmountFieldConfig, AmountValue, LocaleFormatter, MemoryField, DEFAULT_LOCALE,
};
use serde::Serialize;

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(about = "Show how an amount field reformats, validates and converts typed amounts.")]
struct Args {
    /// Locale tag selecting the decimal and grouping separators.
    #[arg(long, global = true, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reformat text the way the field does on change.
    Reformat { text: String },
    /// Render an amount given in cents.
    Display { cents: String },
    /// Replay typing, one character at a time, with the caret at the end.
    Type { keystrokes: String },
}

#[derive(Debug, Serialize)]
struct ReformatReport<'a> {
    locale: &'a str,
    input: &'a str,
    reformatted: String,
    valid: bool,
    /// `None` when the text is not a number.
    cents: Option<f64>,
}

#[derive(Debug, Serialize)]
struct DisplayReport<'a> {
    locale: &'a str,
    cents: &'a str,
    display: String,
}

#[derive(Debug, Serialize)]
struct Frame {
    keystroke: char,
    typed: String,
    display: String,
    caret: Option<usize>,
    error: bool,
    cents: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.locale.trim().is_empty() {
        bail!("--locale must not be empty");
    }

    match &args.command {
        Command::Reformat { text } => {
            let formatter = LocaleFormatter::new(&args.locale);
            let reformatted = formatter.reformat_to_locale(text);
            let report = ReformatReport {
                locale: &args.locale,
                input: text,
                valid: formatter.is_valid_format(Some(&reformatted)),
                cents: non_nan(formatter.cents(&reformatted)),
                reformatted,
            };
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => println!(
                    "{:?} -> {:?}  valid={}  cents={}",
                    report.input,
                    report.reformatted,
                    report.valid,
                    describe_cents(report.cents)
                ),
            }
        }
        Command::Display { cents } => {
            let formatter = LocaleFormatter::new(&args.locale);
            let report = DisplayReport {
                locale: &args.locale,
                cents,
                display: formatter.cents_to_display(&AmountValue::from(cents.as_str())),
            };
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => println!("{}", report.display),
            }
        }
        Command::Type { keystrokes } => {
            let frames = replay(&args.locale, keystrokes);
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&frames)?),
                OutputFormat::Text => {
                    for frame in &frames {
                        let caret = frame
                            .caret
                            .map_or_else(|| "end".to_string(), |caret| caret.to_string());
                        println!(
                            "{:?} {:?} -> {:?}  caret={caret}  error={}  cents={}",
                            frame.keystroke,
                            frame.typed,
                            frame.display,
                            frame.error,
                            describe_cents(frame.cents)
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn replay(locale: &str, keystrokes: &str) -> Vec<Frame> {
    let reported = Rc::new(Cell::new(f64::NAN));
    let sink = Rc::clone(&reported);
    let mut field = AmountField::mount(
        AmountFieldConfig::new().with_locale(locale),
        MemoryField::new(),
    )
    .on_change(move |cents, _| sink.set(cents));

    let mut frames = Vec::with_capacity(keystrokes.chars().count());
    for keystroke in keystrokes.chars() {
        let event = field.host_mut().append(&keystroke.to_string());
        field.handle_change(&event);
        frames.push(Frame {
            keystroke,
            typed: event.value,
            display: field.display_text().to_string(),
            caret: field.caret(),
            error: field.has_error(),
            cents: non_nan(reported.get()),
        });
    }
    frames
}

fn non_nan(cents: f64) -> Option<f64> {
    (!cents.is_nan()).then_some(cents)
}

fn describe_cents(cents: Option<f64>) -> String {
    cents.map_or_else(|| "NaN".to_string(), |cents| cents.to_string())
}
