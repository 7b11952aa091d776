// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help() {
    println!(
        "anniv v{} - Turn CSV contact lists into recurring birthday / anniversary calendars",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    anniv convert <file.csv> --name <col> --date <col> [options]");
    println!("    anniv preview <file.csv> [--delimiter <d>]");
    println!("    anniv --help");
    println!();
    println!("OPTIONS:");
    println!("    --name <col>         Column holding the person's name (header name or 0-based index). Required.");
    println!("    --date <col>         Column holding the birth date (header name or 0-based index). Required.");
    println!("    --note <col>         Optional column copied into each event's DESCRIPTION.");
    println!("    --delimiter <d>      comma, semicolon or tab (default: comma, or config).");
    println!("    --format <f>         Date format family: dmy, mdy or ymd (default: dmy, or config).");
    println!("    --max-age <n>        Last age to generate an event for (default: 100, or config).");
    println!("    --output <file>      Output path (default: birthdays.ics, or config).");
    println!("    -h, --help           Show this help message.");
    println!();
    println!("CONVERT COMMAND:");
    println!("    anniv convert people.csv --name Name --date Birthday        Events for ages 0..=100");
    println!("    anniv convert people.csv --name 0 --date 1 --note 2         Columns by index");
    println!("    anniv convert people.csv --name Name --date DOB --format mdy --max-age 80");
    println!();
    println!("PREVIEW COMMAND:");
    println!("    anniv preview people.csv                   Show the header row and first data rows");
    println!("    anniv preview people.csv --delimiter tab   Same, for a tab-separated file");
    println!();
    println!("DATE FORMATS:");
    println!("    dmy    day/month/year    15/03/1990");
    println!("    mdy    month/day/year    03/15/1990");
    println!("    ymd    year/month/day    1990/03/15");
    println!("    Separators '/', '-' and '.' are interchangeable.");
    println!();
    println!("Rows with an empty name or date cell are skipped. Rows whose date cannot");
    println!("be parsed under the chosen format are skipped and listed after conversion.");
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/trougnouf/anniv");
    println!("    License:    GPL-3.0");
}
