use clap::ValueEnum;
use std::fmt;

/// The window a "top" listing is ranked over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum TimeFilter {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeFilter {
    pub const VALUES: [Self; 6] = [
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Year,
        Self::All,
    ];

    /// The value Reddit expects in the `t` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_names_match_api_values() {
        for filter in TimeFilter::VALUES {
            let value = filter.to_possible_value().unwrap();
            assert_eq!(value.get_name(), filter.as_str());
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(TimeFilter::from_str("DAY", true), Ok(TimeFilter::Day));
        assert_eq!(TimeFilter::from_str("All", true), Ok(TimeFilter::All));
        assert!(TimeFilter::from_str("fortnight", true).is_err());
    }

    #[test]
    fn display_is_the_api_value() {
        assert_eq!(TimeFilter::Hour.to_string(), "hour");
        assert_eq!(TimeFilter::All.to_string(), "all");
    }
}
