use anniv::cli;
use anniv::config::Config;
use anniv::context::StandardContext;
use anniv::convert::{ColumnMapping, ColumnSelector, ConversionRequest, convert};
use anniv::model::date::DateFormat;
use anniv::model::table::{Delimiter, TabularModel};
use anyhow::{Context, Result, bail};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::fs;
use strum::IntoEnumIterator;

fn main() -> Result<()> {
    // Warnings and up go to stderr; the document itself never touches the logger.
    let _ = TermLogger::init(
        LevelFilter::Warn,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" || args[1] == "help" {
        cli::print_help();
        return Ok(());
    }

    match args[1].as_str() {
        "convert" => run_convert(&args[2..]),
        "preview" => run_preview(&args[2..]),
        other => bail!("Unknown command '{}'. See 'anniv --help'.", other),
    }
}

/// Value of `--flag <value>`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn input_path(args: &[String], command: &str) -> Result<String> {
    match args.first() {
        Some(path) if !path.starts_with("--") => Ok(path.clone()),
        _ => bail!("{} requires an input file. See 'anniv --help'.", command),
    }
}

fn delimiter_from(args: &[String], config: &Config) -> Result<Delimiter> {
    match flag_value(args, "--delimiter") {
        Some(name) => Delimiter::from_name(name).ok_or_else(|| {
            let options: Vec<String> = Delimiter::iter().map(|d| d.to_string()).collect();
            anyhow::anyhow!("Unknown delimiter '{}' (expected {})", name, options.join(", "))
        }),
        None => Ok(config.delimiter),
    }
}

/// Resolve `--flag <col>` against the table's header row.
fn resolve_column(args: &[String], flag: &str, model: &TabularModel) -> Result<Option<usize>> {
    let Some(text) = flag_value(args, flag) else {
        return Ok(None);
    };
    match ColumnSelector::parse(text).resolve(model) {
        Some(index) => Ok(Some(index)),
        None => bail!(
            "No column matches {} '{}' (headers: {})",
            flag,
            text,
            model.headers().join(", ")
        ),
    }
}

fn run_convert(args: &[String]) -> Result<()> {
    let input = input_path(args, "convert")?;

    let ctx = StandardContext;
    let config = Config::load_or_default(&ctx)?;

    let delimiter = delimiter_from(args, &config)?;
    let date_format = match flag_value(args, "--format") {
        Some(name) => DateFormat::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown date format '{}' (dmy, mdy or ymd)", name))?,
        None => config.date_format,
    };
    let max_age = match flag_value(args, "--max-age") {
        Some(value) => value
            .parse::<u32>()
            .with_context(|| format!("--max-age expects a non-negative integer, got '{}'", value))?,
        None => config.max_age,
    };
    let output = flag_value(args, "--output")
        .map(str::to_string)
        .unwrap_or_else(|| config.output_filename.clone());

    let raw = fs::read_to_string(&input).with_context(|| format!("Failed to read '{}'", input))?;
    let model = TabularModel::parse(&raw, delimiter)?;
    println!("✓ Loaded {} ({} data rows)", input, model.row_count() - 1);

    let mapping = ColumnMapping {
        name: resolve_column(args, "--name", &model)?,
        date: resolve_column(args, "--date", &model)?,
        note: resolve_column(args, "--note", &model)?,
    };

    let request = ConversionRequest {
        mapping,
        max_age,
        date_format,
    };
    let outcome = convert(&model, &request)?;

    fs::write(&output, &outcome.document)
        .with_context(|| format!("Failed to write '{}'", output))?;

    if !outcome.skipped.is_empty() {
        eprintln!("✗ {} row(s) skipped, fix the dates and re-run:", outcome.skipped.len());
        for skip in &outcome.skipped {
            eprintln!("    row {}: {}", skip.row, skip.reason);
        }
    }
    println!(
        "✓ Wrote {} ({} events from {} rows)",
        output, outcome.events, outcome.rows_processed
    );
    Ok(())
}

fn run_preview(args: &[String]) -> Result<()> {
    const MAX_ROWS: usize = 10;

    let input = input_path(args, "preview")?;

    let ctx = StandardContext;
    let config = Config::load_or_default(&ctx)?;
    let delimiter = delimiter_from(args, &config)?;

    let raw = fs::read_to_string(&input).with_context(|| format!("Failed to read '{}'", input))?;
    let model = TabularModel::parse(&raw, delimiter)?;

    println!("{}", model.headers().join(" | "));
    for (_, row) in model.data_rows().take(MAX_ROWS) {
        println!("{}", row.join(" | "));
    }

    let data_rows = model.row_count() - 1;
    if data_rows > MAX_ROWS {
        println!("Showing first {} rows of {} total rows", MAX_ROWS, data_rows);
    } else {
        println!("Showing all {} rows", data_rows);
    }
    Ok(())
}
