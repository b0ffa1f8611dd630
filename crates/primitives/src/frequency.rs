//! Return frequency selector.

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::PrimitivesError;

/// Frequency of a return table in a [`ReturnBundle`](crate::ReturnBundle).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReturnFrequency {
    /// Daily returns indexed by calendar date.
    Daily,
    /// Monthly returns indexed by year-month.
    Monthly,
}

impl FromStr for ReturnFrequency {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" => Ok(Self::Daily),
            "Monthly" => Ok(Self::Monthly),
            _ => Err(PrimitivesError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn frequency_display() {
        assert_eq!(ReturnFrequency::Daily.to_string(), "Daily");
        assert_eq!(ReturnFrequency::Monthly.to_string(), "Monthly");
    }

    #[test]
    fn parse_exact_names() {
        assert_eq!("Daily".parse::<ReturnFrequency>().unwrap(), ReturnFrequency::Daily);
        assert_eq!("Monthly".parse::<ReturnFrequency>().unwrap(), ReturnFrequency::Monthly);
    }

    #[rstest]
    #[case("daily")]
    #[case("MONTHLY")]
    #[case(" Daily")]
    #[case("Weekly")]
    fn parse_rejects_other_spellings(#[case] input: &str) {
        let err = input.parse::<ReturnFrequency>().unwrap_err();
        assert!(matches!(err, PrimitivesError::UnknownFrequency(ref s) if s == input));
    }
}
