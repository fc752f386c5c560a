use chrono::{DateTime, Utc};
use formata::core::date_config::DateFormatConfig;
use formata::core::money_config::{MoneyFormatConfig, SymbolPosition, SYMBOL_NONE};
use formata::date::formatter::format_date;
use formata::date::parser::{parse_date, validate_date};
use formata::money::formatter::format_cents;
use formata::money::parser::{convert_money, parse_money_to_cents, validate_money};
use proptest::prelude::*;

/// Sane 2-decimal configs with distinct separators, the precondition for
/// cents round-trips.
fn arb_config() -> impl Strategy<Value = MoneyFormatConfig> {
    prop::sample::select(vec![
        MoneyFormatConfig {
            symbol: "R$".to_string(),
            thousand_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..Default::default()
        },
        MoneyFormatConfig {
            symbol: "$".to_string(),
            space_between_symbol: false,
            ..Default::default()
        },
        MoneyFormatConfig {
            symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
            thousand_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..Default::default()
        },
        MoneyFormatConfig {
            symbol: SYMBOL_NONE.to_string(),
            thousand_separator: " ".to_string(),
            decimal_separator: ",".to_string(),
            ..Default::default()
        },
    ])
}

/// Cents kept well inside f64's exact-integer range.
fn arb_cents() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Instants on whole seconds between 1970 and ~2096.
fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_000_000_000i64).prop_filter_map("valid timestamp", |secs| {
        DateTime::<Utc>::from_timestamp(secs, 0)
    })
}

proptest! {
    // ===================================================================
    // INVARIANT 1: Cents round-trip through format at 2 decimal places.
    //
    // For any cents value and any 2-decimal config with distinct
    // separators, parsing the formatted string recovers the exact cents.
    // ===================================================================
    #[test]
    fn cents_round_trip(cents in arb_cents(), cfg in arb_config()) {
        let rendered = format_cents(cents, &cfg);
        prop_assert_eq!(
            parse_money_to_cents(&rendered, &cfg),
            Some(cents),
            "round-trip failed: {} -> {}",
            cents,
            rendered
        );
    }

    // ===================================================================
    // INVARIANT 2: Formatting is idempotent through a parse.
    //
    // Reformatting the parsed-back value yields the identical string.
    // ===================================================================
    #[test]
    fn reformat_is_stable(cents in arb_cents(), cfg in arb_config()) {
        let first = format_cents(cents, &cfg);
        let parsed = parse_money_to_cents(&first, &cfg);
        prop_assert!(parsed.is_some());
        if let Some(cents_back) = parsed {
            prop_assert_eq!(format_cents(cents_back, &cfg), first);
        }
    }

    // ===================================================================
    // INVARIANT 3: Every formatted output validates under its config.
    // ===================================================================
    #[test]
    fn formatted_output_validates(cents in arb_cents(), cfg in arb_config()) {
        let rendered = format_cents(cents, &cfg);
        prop_assert!(
            validate_money(&rendered, &cfg),
            "'{}' rejected by its own config",
            rendered
        );
    }

    // ===================================================================
    // INVARIANT 4: The sign is outermost, whatever the symbol position.
    // ===================================================================
    #[test]
    fn negative_sign_is_leading(cents in -1_000_000_000_000i64..-1, cfg in arb_config()) {
        let rendered = format_cents(cents, &cfg);
        prop_assert!(rendered.starts_with('-'), "'{}' lacks leading '-'", rendered);
    }

    // ===================================================================
    // INVARIANT 5: Conversion agrees with formatting the same cents.
    //
    // convert(format(c, from), from, to) == format(c, to).
    // ===================================================================
    #[test]
    fn conversion_matches_direct_format(
        cents in arb_cents(),
        from in arb_config(),
        to in arb_config(),
    ) {
        let rendered = format_cents(cents, &from);
        prop_assert_eq!(
            convert_money(&rendered, &from, &to),
            format_cents(cents, &to)
        );
    }

    // ===================================================================
    // INVARIANT 6: Date format/parse round-trips exactly at UTC.
    //
    // With a UTC config carrying all six tokens, parsing the rendered
    // string recovers the original instant (sub-second precision is
    // already zero for whole-second instants).
    // ===================================================================
    #[test]
    fn date_round_trip_at_utc(instant in arb_instant()) {
        let cfg = DateFormatConfig::default();
        let rendered = format_date(instant, &cfg);
        prop_assert!(validate_date(&rendered, &cfg));
        prop_assert_eq!(parse_date(&rendered, &cfg), Some(instant));
    }

    // ===================================================================
    // INVARIANT 7: Garbage never parses, never panics.
    // ===================================================================
    #[test]
    fn arbitrary_text_never_panics(text in ".{0,40}", cfg in arb_config()) {
        let _ = parse_money_to_cents(&text, &cfg);
        let _ = validate_money(&text, &cfg);
        let _ = parse_date(&text, &DateFormatConfig::default());
        let _ = validate_date(&text, &DateFormatConfig::default());
    }
}
