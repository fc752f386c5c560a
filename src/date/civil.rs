use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

/// Civil calendar fields as displayed in a given timezone, independent of
/// the underlying absolute instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Source of civil fields for an instant in a zone.
///
/// The formatting engine stays pure by depending on this seam instead of a
/// concrete timezone facility; tests can plug in a fixed source.
pub trait CivilFieldSource {
    fn civil_fields(&self, instant: DateTime<Utc>, zone: Tz) -> CivilFields;
}

/// The tz-database-backed source used in production, built on `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneDatabase;

impl CivilFieldSource for ZoneDatabase {
    fn civil_fields(&self, instant: DateTime<Utc>, zone: Tz) -> CivilFields {
        let local = instant.with_timezone(&zone);
        CivilFields {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_utc_fields_match_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let fields = ZoneDatabase.civil_fields(instant, Tz::UTC);
        assert_eq!(
            fields,
            CivilFields {
                year: 2024,
                month: 1,
                day: 2,
                hour: 3,
                minute: 4,
                second: 5
            }
        );
    }

    #[test]
    fn test_sao_paulo_shifts_wall_clock() {
        // UTC-3 year-round since Brazil dropped DST in 2019.
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 1, 30, 0).unwrap();
        let fields = ZoneDatabase.civil_fields(instant, chrono_tz::America::Sao_Paulo);
        assert_eq!(fields.day, 1);
        assert_eq!(fields.hour, 22);
        assert_eq!(fields.minute, 30);
    }
}
