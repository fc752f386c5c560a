//! Ambient tenant-configuration example.
//!
//! Shows the façade reading a per-tenant settings blob from storage and
//! applying it as the implicit formatting default, including graceful
//! degradation on missing or malformed storage.

use chrono::TimeZone;
use formata::tenant::facade::TenantFormatter;
use formata::tenant::settings::MemoryStore;

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  formata: Tenant Defaults Example         ║");
    println!("╚═══════════════════════════════════════════╝\n");

    let instant = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    // --- Tenant with a full settings blob ---
    let mut store = MemoryStore::new();
    store.set(
        "acme:company",
        r#"{
            "currency": "BRL (R$)",
            "date_format": "dd/mm/yyyy HH:mm:ss",
            "number_format": "1.234,56",
            "time_zone": "America/Sao_Paulo",
            "website": "https://acme.example"
        }"#,
    );
    let acme = TenantFormatter::new(&store, "acme");
    println!("━━━ acme (BRL, São Paulo) ━━━");
    println!("currency: {}", acme.format_currency(1234.56));
    println!("date:     {}", acme.format_date(instant));
    println!();

    // --- Tenant with no stored settings at all ---
    let fallback = TenantFormatter::new(&MemoryStore::new(), "ghost");
    println!("━━━ ghost (no blob, ambient defaults) ━━━");
    println!("currency: {}", fallback.format_currency(1234.56));
    println!("date:     {}", fallback.format_date(instant));
    println!();

    // --- Degradation on bad input ---
    println!("━━━ resilience ━━━");
    println!("text input:  {}", acme.format_currency("9876,50"));
    println!("garbage:     {}", acme.format_currency("abc"));
}
