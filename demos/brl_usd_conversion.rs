//! Money formatting, parsing and cross-locale conversion example.
//!
//! Demonstrates named configs in a registry, cents round-trips and
//! reshaping a formatted string between locale conventions.

use formata::core::money_config::{MoneyFormatConfig, SymbolPosition};
use formata::core::registry::FormatRegistry;
use formata::money::formatter::format_cents;
use formata::money::parser::{convert_money, parse_money_to_cents, validate_money};

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  formata: BRL ⇄ USD Conversion Example    ║");
    println!("╚═══════════════════════════════════════════╝\n");

    let mut registry = FormatRegistry::new();
    registry.define_money(
        "brl",
        MoneyFormatConfig {
            symbol: "R$".to_string(),
            thousand_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..Default::default()
        }
        .into(),
    );
    registry.define_money(
        "usd",
        MoneyFormatConfig {
            symbol: "$".to_string(),
            space_between_symbol: false,
            ..Default::default()
        }
        .into(),
    );
    registry.define_money(
        "eur",
        MoneyFormatConfig {
            symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
            thousand_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..Default::default()
        }
        .into(),
    );

    let brl = registry.get_money("brl").expect("registered").clone();
    let usd = registry.get_money("usd").expect("registered").clone();
    let eur = registry.get_money("eur").expect("registered").clone();

    // --- Scenario 1: format cents under each locale shape ---
    println!("━━━ Scenario 1: One amount, three locale shapes ━━━\n");

    let cents = 123_456_789i64;
    println!("cents:  {cents}");
    println!("BRL:    {}", format_cents(cents, &brl));
    println!("USD:    {}", format_cents(cents, &usd));
    println!("EUR:    {}", format_cents(cents, &eur));
    println!();

    // --- Scenario 2: parse and validate user input ---
    println!("━━━ Scenario 2: Parsing user input ━━━\n");

    for input in ["R$ 1.234,56", "-R$ 9.876,50", "1.234,56", "abc"] {
        println!(
            "{input:<14} valid={:<5} cents={:?}",
            validate_money(input, &brl),
            parse_money_to_cents(input, &brl)
        );
    }
    println!();

    // --- Scenario 3: reshape between locales ---
    println!("━━━ Scenario 3: Cross-locale conversion ━━━\n");

    let source = "R$ 1.234,56";
    println!("{} → {}", source, convert_money(source, &brl, &usd));
    println!("{} → {}", source, convert_money(source, &brl, &eur));
    println!("garbage → {}", convert_money("garbage", &brl, &usd));
}
