use chrono::TimeZone;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formata::core::date_config::DateFormatConfig;
use formata::core::money_config::MoneyFormatConfig;
use formata::date::formatter::format_date;
use formata::date::parser::parse_date;
use formata::money::formatter::format_money;
use formata::money::parser::{convert_money, parse_money_to_cents};

fn brl() -> MoneyFormatConfig {
    MoneyFormatConfig {
        symbol: "R$".to_string(),
        thousand_separator: ".".to_string(),
        decimal_separator: ",".to_string(),
        ..Default::default()
    }
}

fn usd() -> MoneyFormatConfig {
    MoneyFormatConfig {
        symbol: "$".to_string(),
        space_between_symbol: false,
        ..Default::default()
    }
}

fn bench_format_money(c: &mut Criterion) {
    let cfg = brl();
    c.bench_function("format_money", |b| {
        b.iter(|| format_money(black_box(-9_876_543.21), black_box(&cfg)))
    });
}

fn bench_parse_money(c: &mut Criterion) {
    let cfg = brl();
    c.bench_function("parse_money_to_cents", |b| {
        b.iter(|| parse_money_to_cents(black_box("-R$ 9.876.543,21"), black_box(&cfg)))
    });
}

fn bench_convert_money(c: &mut Criterion) {
    let from = brl();
    let to = usd();
    c.bench_function("convert_money", |b| {
        b.iter(|| convert_money(black_box("R$ 1.234,56"), black_box(&from), black_box(&to)))
    });
}

fn bench_format_date(c: &mut Criterion) {
    let cfg = DateFormatConfig {
        pattern: "dd/MM/yyyy HH:mm:ss".to_string(),
        time_zone: chrono_tz::America::Sao_Paulo,
    };
    let instant = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    c.bench_function("format_date", |b| {
        b.iter(|| format_date(black_box(instant), black_box(&cfg)))
    });
}

fn bench_parse_date(c: &mut Criterion) {
    let cfg = DateFormatConfig::default();
    c.bench_function("parse_date", |b| {
        b.iter(|| parse_date(black_box("02/01/2024 03:04:05"), black_box(&cfg)))
    });
}

criterion_group!(
    benches,
    bench_format_money,
    bench_parse_money,
    bench_convert_money,
    bench_format_date,
    bench_parse_date
);
criterion_main!(benches);
