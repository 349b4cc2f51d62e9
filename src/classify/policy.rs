use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the classifier does with a module whose type does not resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    /// Drop the module; only visible at debug level
    Skip,
    /// Drop the module and log a warning
    #[default]
    Warn,
    /// Abort classification
    Fail,
}

impl FromStr for UnknownTypePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            _ => Err(format!(
                "Invalid unknown type policy: {}. Valid options: skip, warn, fail",
                s
            )),
        }
    }
}

impl fmt::Display for UnknownTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Skip => "skip",
            Self::Warn => "warn",
            Self::Fail => "fail",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!("skip".parse::<UnknownTypePolicy>(), Ok(UnknownTypePolicy::Skip));
        assert_eq!("Warn".parse::<UnknownTypePolicy>(), Ok(UnknownTypePolicy::Warn));
        assert_eq!("FAIL".parse::<UnknownTypePolicy>(), Ok(UnknownTypePolicy::Fail));
        assert!("abort".parse::<UnknownTypePolicy>().is_err());
    }

    #[test]
    fn test_value_enum_names_match_display() {
        for policy in UnknownTypePolicy::value_variants() {
            let name = policy.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(name, policy.to_string());
            assert_eq!(<UnknownTypePolicy as ValueEnum>::from_str(&name, false), Ok(*policy));
        }
    }

    #[test]
    fn test_display_round_trips() {
        for policy in [
            UnknownTypePolicy::Skip,
            UnknownTypePolicy::Warn,
            UnknownTypePolicy::Fail,
        ] {
            assert_eq!(policy.to_string().parse::<UnknownTypePolicy>(), Ok(policy));
        }
    }
}
