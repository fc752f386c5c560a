//! formata CLI
//!
//! Format, parse and convert money and date strings from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Format a major-unit amount under a preset
//! formata money --value 1234.56 --preset brl
//!
//! # Format integer cents
//! formata cents --value 123456 --preset usd
//!
//! # Parse a formatted string back to cents
//! formata parse --text 'R$ 1.234,56' --preset brl
//!
//! # Reformat from one locale shape to another
//! formata convert --text 'R$ 1.234,56' --from brl --to usd
//!
//! # Render an instant under a pattern and zone
//! formata date --epoch-ms 1704164645000 --pattern 'dd/MM/yyyy HH:mm:ss' --zone UTC
//!
//! # Format through a tenant settings blob
//! formata tenant --settings company.json --value 1234.56
//! ```

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use formata::core::date_config::{DateFormatConfig, DEFAULT_PATTERN};
use formata::core::money_config::MoneyFormatConfig;
use formata::date::formatter::format_date;
use formata::date::parser::convert_date;
use formata::money::formatter::{format_cents, format_money};
use formata::money::parser::{convert_money, parse_money_to_cents, validate_money};
use formata::tenant::facade::{locale_preset, TenantFormatter};
use formata::tenant::settings::MemoryStore;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"formata — locale-aware money and date formatting/parsing

USAGE:
    formata <COMMAND> [OPTIONS]

COMMANDS:
    money           Format a major-unit amount
    cents           Format an integer minor-unit (cents) amount
    parse           Parse a formatted money string to cents
    convert         Reformat a money string between presets
    date            Render an instant under a pattern and zone
    convert-date    Reformat a date string between patterns
    tenant          Format using a tenant settings blob (JSON file)
    help            Show this message

OPTIONS (money, cents):
    --value <N>         Amount (major units for money, cents for cents)
    --preset <NAME>     brl | usd | eur | gbp | jpy (default: brl)
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (parse, convert):
    --text <S>          Input string
    --preset <NAME>     Preset for parse
    --from/--to <NAME>  Presets for convert

OPTIONS (date, convert-date):
    --epoch-ms <N>      Instant as epoch milliseconds
    --pattern <P>       Token pattern (default: dd/MM/yyyy HH:mm:ss)
    --zone <TZ>         IANA zone (default: UTC)
    --text <S>          Input string (convert-date)
    --from/--to <P>     Patterns for convert-date

OPTIONS (tenant):
    --settings <FILE>   JSON settings blob
    --value <N>         Amount to format
    --epoch-ms <N>      Optional instant to format

EXAMPLES:
    formata money --value -9876.5 --preset brl
    formata convert --text 'R$ 1.234,56' --from brl --to usd
    formata date --epoch-ms 1704164645000 --zone America/Sao_Paulo"#
    );
}

fn preset_config(name: &str) -> MoneyFormatConfig {
    locale_preset(&name.to_uppercase()).unwrap_or_else(|| {
        eprintln!("Unknown preset '{name}' (expected brl, usd, eur, gbp or jpy)");
        process::exit(1);
    })
}

fn required<'a>(value: &'a Option<String>, flag: &str) -> &'a str {
    value.as_deref().unwrap_or_else(|| {
        eprintln!("Error: {flag} is required");
        process::exit(1);
    })
}

/// Collect `--flag value` pairs; unknown flags abort.
fn collect_options(args: &[String], allowed: &[&str]) -> Vec<(String, String)> {
    let mut options = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if !allowed.contains(&flag) {
            eprintln!("Unknown option: {flag}");
            process::exit(1);
        }
        i += 1;
        let value = args.get(i).cloned().unwrap_or_else(|| {
            eprintln!("{flag} requires a value");
            process::exit(1);
        });
        options.push((flag.to_string(), value));
        i += 1;
    }
    options
}

fn option_value(options: &[(String, String)], flag: &str) -> Option<String> {
    options
        .iter()
        .find(|(name, _)| name == flag)
        .map(|(_, value)| value.clone())
}

#[derive(serde::Serialize)]
struct MoneyOutput {
    formatted: String,
    cents: Option<i64>,
    valid: bool,
}

fn emit_money(formatted: String, cfg: &MoneyFormatConfig, format: &str) {
    if format == "json" {
        let output = MoneyOutput {
            cents: parse_money_to_cents(&formatted, cfg),
            valid: validate_money(&formatted, cfg),
            formatted,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error serializing output: {err}");
                process::exit(1);
            }
        }
    } else {
        println!("{formatted}");
    }
}

fn cmd_money(args: &[String], cents: bool) {
    let options = collect_options(args, &["--value", "--preset", "--format"]);
    let value = option_value(&options, "--value");
    let value = required(&value, "--value <N>");
    let cfg = preset_config(&option_value(&options, "--preset").unwrap_or_else(|| "brl".into()));
    let format = option_value(&options, "--format").unwrap_or_else(|| "text".into());

    let formatted = if cents {
        let amount: i64 = value.parse().unwrap_or_else(|_| {
            eprintln!("--value must be integer cents, got '{value}'");
            process::exit(1);
        });
        format_cents(amount, &cfg)
    } else {
        let amount: f64 = value.parse().unwrap_or_else(|_| {
            eprintln!("--value must be a number, got '{value}'");
            process::exit(1);
        });
        format_money(amount, &cfg)
    };
    emit_money(formatted, &cfg, &format);
}

fn cmd_parse(args: &[String]) {
    let options = collect_options(args, &["--text", "--preset"]);
    let text = option_value(&options, "--text");
    let text = required(&text, "--text <S>");
    let cfg = preset_config(&option_value(&options, "--preset").unwrap_or_else(|| "brl".into()));
    match parse_money_to_cents(text, &cfg) {
        Some(cents) => println!("{cents}"),
        None => println!("undefined"),
    }
}

fn cmd_convert(args: &[String]) {
    let options = collect_options(args, &["--text", "--from", "--to"]);
    let text = option_value(&options, "--text");
    let text = required(&text, "--text <S>");
    let from = option_value(&options, "--from");
    let to = option_value(&options, "--to");
    let from_cfg = preset_config(required(&from, "--from <PRESET>"));
    let to_cfg = preset_config(required(&to, "--to <PRESET>"));
    println!("{}", convert_money(text, &from_cfg, &to_cfg));
}

fn parse_zone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        eprintln!("Unknown IANA timezone '{name}'");
        process::exit(1);
    })
}

fn parse_instant(millis: &str) -> DateTime<Utc> {
    let millis: i64 = millis.parse().unwrap_or_else(|_| {
        eprintln!("--epoch-ms must be an integer, got '{millis}'");
        process::exit(1);
    });
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_else(|| {
        eprintln!("--epoch-ms {millis} is out of range");
        process::exit(1);
    })
}

fn cmd_date(args: &[String]) {
    let options = collect_options(args, &["--epoch-ms", "--pattern", "--zone"]);
    let millis = option_value(&options, "--epoch-ms");
    let instant = parse_instant(required(&millis, "--epoch-ms <N>"));
    let cfg = DateFormatConfig {
        pattern: option_value(&options, "--pattern").unwrap_or_else(|| DEFAULT_PATTERN.into()),
        time_zone: parse_zone(&option_value(&options, "--zone").unwrap_or_else(|| "UTC".into())),
    };
    println!("{}", format_date(instant, &cfg));
}

fn cmd_convert_date(args: &[String]) {
    let options = collect_options(args, &["--text", "--from", "--to", "--zone"]);
    let text = option_value(&options, "--text");
    let text = required(&text, "--text <S>");
    let zone = parse_zone(&option_value(&options, "--zone").unwrap_or_else(|| "UTC".into()));
    let from = option_value(&options, "--from");
    let to = option_value(&options, "--to");
    let from_cfg = DateFormatConfig {
        pattern: required(&from, "--from <PATTERN>").to_string(),
        time_zone: zone,
    };
    let to_cfg = DateFormatConfig {
        pattern: required(&to, "--to <PATTERN>").to_string(),
        time_zone: zone,
    };
    println!("{}", convert_date(text, &from_cfg, &to_cfg));
}

fn cmd_tenant(args: &[String]) {
    let options = collect_options(args, &["--settings", "--value", "--epoch-ms"]);
    let path = option_value(&options, "--settings");
    let path = required(&path, "--settings <FILE>");
    let blob = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Error reading file '{path}': {err}");
        process::exit(1);
    });

    let mut store = MemoryStore::new();
    store.set("company", blob);
    let formatter = TenantFormatter::new(&store, "cli");

    if let Some(value) = option_value(&options, "--value") {
        println!("{}", formatter.format_currency(value));
    }
    if let Some(millis) = option_value(&options, "--epoch-ms") {
        println!("{}", formatter.format_date(parse_instant(&millis)));
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "money" => cmd_money(rest, false),
        "cents" => cmd_money(rest, true),
        "parse" => cmd_parse(rest),
        "convert" => cmd_convert(rest),
        "date" => cmd_date(rest),
        "convert-date" => cmd_convert_date(rest),
        "tenant" => cmd_tenant(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            print_usage();
            process::exit(1);
        }
    }
}
