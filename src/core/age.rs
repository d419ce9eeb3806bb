use chrono::{Datelike, NaiveDate};

/// Whole years elapsed between `birthdate` and `today`
///
/// A year only counts once its anniversary has been reached, so someone born
/// on 29 February turns one on 1 March of a non-leap year. Missing or future
/// birth dates yield 0.
pub fn age_in_years(birthdate: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(birthdate) = birthdate else {
        return 0;
    };

    let mut years = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}
