// Sheetsage CLI - natural-language questions about spreadsheet data

mod config;
mod detect;
mod session;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sheetsage_engine::{execute, Dataset, Locale, QueryResult};

use session::Session;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_IO_ERROR: u8 = 3;

#[derive(Parser)]
#[command(name = "sheetsage")]
#[command(about = "Ask natural-language questions about spreadsheet data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question about a data file
    #[command(after_help = "\
Examples:
  sheetsage ask sales.csv 'what is the average of revenue'
  sheetsage ask data.xlsx 'is 48 in the data' --sheet Orders
  sheetsage ask bericht.csv 'wie viele zeilen gibt es'
  sheetsage ask sales.csv 'sum of amount' --json | jq .answer")]
    Ask {
        /// Data file (csv, tsv, xlsx, xls, xlsb, ods)
        file: PathBuf,

        /// The question to ask
        query: String,

        /// Answer language: auto, en-US, or de-DE
        #[arg(long, default_value = "auto")]
        locale: String,

        /// Sheet to query in multi-sheet files
        #[arg(long)]
        sheet: Option<String>,

        /// Print the full result record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive question loop with per-session history
    #[command(after_help = "\
Commands inside the loop:
  :locale <tag>    switch the answer language (auto, en-US, de-DE)
  :sheet <name>    switch the active sheet
  :history         list the questions asked so far
  :export <path>   write the question history as CSV
  :quit            leave the loop")]
    Repl {
        /// Data file (csv, tsv, xlsx, xls, xlsb, ods)
        file: PathBuf,

        /// Answer language: auto, en-US, or de-DE
        #[arg(long, default_value = "auto")]
        locale: String,

        /// Sheet to start on in multi-sheet files
        #[arg(long)]
        sheet: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = config::load();

    let code = match cli.command {
        Commands::Ask {
            file,
            query,
            locale,
            sheet,
            json,
        } => run_ask(&file, &query, &locale, sheet.as_deref(), json, &settings),
        Commands::Repl {
            file,
            locale,
            sheet,
        } => run_repl(&file, &locale, sheet.as_deref(), &settings),
    };

    ExitCode::from(code)
}

fn run_ask(
    file: &Path,
    query: &str,
    locale_flag: &str,
    sheet: Option<&str>,
    json: bool,
    settings: &config::CliConfig,
) -> u8 {
    let locale = match resolve_locale(locale_flag, query, settings) {
        Ok(locale) => locale,
        Err(message) => {
            eprintln!("{message}");
            return EXIT_USAGE;
        }
    };

    let mut dataset = match load_dataset(file) {
        Ok(dataset) => dataset,
        Err(message) => {
            eprintln!("{message}");
            if json {
                // Hosts render one record shape no matter what failed.
                print_json(&QueryResult::processing_error(locale));
            }
            return EXIT_IO_ERROR;
        }
    };

    if let Some(name) = sheet {
        if !dataset.set_active(name) {
            eprintln!(
                "no sheet named '{name}' (available: {})",
                dataset.sheet_names().join(", ")
            );
            return EXIT_USAGE;
        }
    }

    let result = execute(query, &dataset, locale);
    if json {
        print_json(&result);
    } else {
        render_text(&result, settings.display_rows);
    }
    EXIT_SUCCESS
}

fn run_repl(
    file: &Path,
    locale_flag: &str,
    sheet: Option<&str>,
    settings: &config::CliConfig,
) -> u8 {
    let mut dataset = match load_dataset(file) {
        Ok(dataset) => dataset,
        Err(message) => {
            eprintln!("{message}");
            return EXIT_IO_ERROR;
        }
    };

    if let Some(name) = sheet {
        if !dataset.set_active(name) {
            eprintln!(
                "no sheet named '{name}' (available: {})",
                dataset.sheet_names().join(", ")
            );
            return EXIT_USAGE;
        }
    }

    let interactive = atty::is(atty::Stream::Stdin);
    let mut locale_flag = locale_flag.to_string();
    let mut history = Session::new();

    if interactive {
        let sheet_names = dataset.sheet_names().join(", ");
        println!(
            "{} rows on sheet '{}' (sheets: {sheet_names}). Ask away; :quit leaves.",
            dataset.active_rows().len(),
            dataset.active().map(|s| s.name.as_str()).unwrap_or("-"),
        );
    }

    let stdin = io::stdin();
    loop {
        if interactive {
            print!("> ");
            let _ = io::stdout().flush();
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            match repl_command(command, &mut dataset, &mut locale_flag, &history) {
                ReplAction::Continue => continue,
                ReplAction::Quit => break,
            }
        }

        let locale = match resolve_locale(&locale_flag, line, settings) {
            Ok(locale) => locale,
            Err(message) => {
                eprintln!("{message}");
                locale_flag = "auto".to_string();
                continue;
            }
        };

        let result = execute(line, &dataset, locale);
        history.record(line, &result);
        render_text(&result, settings.display_rows);
    }

    EXIT_SUCCESS
}

enum ReplAction {
    Continue,
    Quit,
}

fn repl_command(
    command: &str,
    dataset: &mut Dataset,
    locale_flag: &mut String,
    history: &Session,
) -> ReplAction {
    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let argument = parts.next().map(str::trim).unwrap_or("");

    match name {
        "quit" | "q" | "exit" => return ReplAction::Quit,
        "locale" => {
            if argument == "auto" || Locale::parse(argument).is_some() {
                *locale_flag = argument.to_string();
                println!("locale set to {argument}");
            } else {
                eprintln!("unsupported locale '{argument}' (expected auto, en-US, or de-DE)");
            }
        }
        "sheet" => {
            if dataset.set_active(argument) {
                println!("switched to sheet '{argument}'");
            } else {
                eprintln!(
                    "no sheet named '{argument}' (available: {})",
                    dataset.sheet_names().join(", ")
                );
            }
        }
        "history" => {
            if history.is_empty() {
                println!("no questions asked yet");
            }
            for entry in history.entries() {
                println!("[{}] {} -> {}", entry.operation, entry.query, entry.answer);
            }
        }
        "export" => {
            if argument.is_empty() {
                eprintln!("usage: :export <path>");
            } else if history.is_empty() {
                eprintln!("nothing to export yet");
            } else {
                match history.export_csv(Path::new(argument)) {
                    Ok(()) => println!("wrote {} entries to {argument}", history.len()),
                    Err(message) => eprintln!("{message}"),
                }
            }
        }
        _ => eprintln!("unknown command ':{name}'"),
    }
    ReplAction::Continue
}

fn resolve_locale(
    flag: &str,
    query: &str,
    settings: &config::CliConfig,
) -> Result<Locale, String> {
    if flag != "auto" {
        return Locale::parse(flag)
            .ok_or_else(|| format!("unsupported locale '{flag}' (expected auto, en-US, or de-DE)"));
    }
    if let Some(tag) = &settings.default_locale {
        if let Some(locale) = Locale::parse(tag) {
            return Ok(locale);
        }
    }
    Ok(detect::detect_locale(query))
}

fn load_dataset(path: &Path) -> Result<Dataset, String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xls" | "xlsb" | "ods" => sheetsage_io::xlsx::import(path),
        "tsv" => sheetsage_io::csv::import_tsv(path),
        _ => sheetsage_io::csv::import(path),
    }
}

fn print_json(result: &QueryResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize result: {e}"),
    }
}

fn render_text(result: &QueryResult, display_rows: Option<usize>) {
    println!("{}", result.answer);
    println!("  {}", result.explanation);

    if let Some(rows) = &result.data {
        let limit = display_rows.unwrap_or(rows.len()).min(rows.len());
        for row in &rows[..limit] {
            let line: Vec<String> = row
                .iter()
                .map(|(name, value)| format!("{name}={}", value.display()))
                .collect();
            println!("  {}", line.join("  "));
        }
        if rows.len() > limit {
            println!("  ... {} more rows", rows.len() - limit);
        }
    }

    if !result.follow_up_questions.is_empty() {
        println!("  Try next:");
        for question in &result.follow_up_questions {
            println!("   - {question}");
        }
    }

    println!("  (confidence {:.0}%)", result.confidence * 100.0);
}
