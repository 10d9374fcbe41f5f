use serde::Deserialize;
use time::Month;

/// Language used for month names in the stored `date` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// Month from its name in any supported locale, ignoring case.
    pub fn parse_month(name: &str) -> Option<Month> {
        let mut month = Month::January;
        for _ in 0..12 {
            if Self::ALL
                .iter()
                .any(|locale| locale.month_name(month).eq_ignore_ascii_case(name))
            {
                return Some(month);
            }
            month = month.next();
        }
        None
    }

    pub fn month_name(self, month: Month) -> &'static str {
        match self {
            Self::Es => match month {
                Month::January => "enero",
                Month::February => "febrero",
                Month::March => "marzo",
                Month::April => "abril",
                Month::May => "mayo",
                Month::June => "junio",
                Month::July => "julio",
                Month::August => "agosto",
                Month::September => "septiembre",
                Month::October => "octubre",
                Month::November => "noviembre",
                Month::December => "diciembre",
            },
            Self::En => match month {
                Month::January => "January",
                Month::February => "February",
                Month::March => "March",
                Month::April => "April",
                Month::May => "May",
                Month::June => "June",
                Month::July => "July",
                Month::August => "August",
                Month::September => "September",
                Month::October => "October",
                Month::November => "November",
                Month::December => "December",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_parse_back_in_either_locale() {
        assert_eq!(Locale::parse_month("septiembre"), Some(Month::September));
        assert_eq!(Locale::parse_month("Diciembre"), Some(Month::December));
        assert_eq!(Locale::parse_month("march"), Some(Month::March));
        assert_eq!(Locale::parse_month("brumaire"), None);
    }
}
