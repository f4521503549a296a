//! Gate that keeps weekly pulls inside the safe update window.
//!
//! A week's stats are not final until the Monday night game ends, so the
//! pipeline only records data late Monday or on Tuesday. Running outside
//! that window would bake partial box scores into the weekly artifacts.

use anyhow::{bail, Result};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

/// Hour (24h, local to the clock passed in) when Monday pulls open.
pub const MONDAY_OPEN_HOUR: u32 = 20;

/// Errors unless `now` falls on Tuesday or late Monday.
pub fn ensure_update_window<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<()> {
    match now.weekday() {
        Weekday::Tue => Ok(()),
        Weekday::Mon if now.hour() >= MONDAY_OPEN_HOUR => Ok(()),
        day => bail!(
            "weekly data is not final on {} at {:02}:00; run after {}:00 on Monday or on Tuesday",
            day,
            now.hour(),
            MONDAY_OPEN_HOUR
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_tuesday_is_open() {
        let tuesday = Utc.with_ymd_and_hms(2025, 9, 9, 8, 0, 0).unwrap();
        assert!(ensure_update_window(&tuesday).is_ok());
    }

    #[test]
    fn test_monday_opens_at_the_cutoff() {
        let early = Utc.with_ymd_and_hms(2025, 9, 8, 19, 59, 0).unwrap();
        assert!(ensure_update_window(&early).is_err());

        let late = Utc.with_ymd_and_hms(2025, 9, 8, 20, 0, 0).unwrap();
        assert!(ensure_update_window(&late).is_ok());
    }

    #[test]
    fn test_midweek_is_closed() {
        let wednesday = Utc.with_ymd_and_hms(2025, 9, 10, 21, 0, 0).unwrap();
        assert!(ensure_update_window(&wednesday).is_err());

        let sunday = Utc.with_ymd_and_hms(2025, 9, 7, 13, 0, 0).unwrap();
        assert!(ensure_update_window(&sunday).is_err());
    }
}
