//! Macro for implementing Display and FromStr for status enums
//!
//! Status enums in this crate travel as fixed lowercase strings (for example
//! `"at-risk"`), both over serde and in log fields. The macro keeps the
//! string table in one place so `Display`, `FromStr` and `as_str` agree.
//!
//! # Example
//!
//! ```rust
//! use slawatch_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Phase {
//!     Idle,
//!     Running,
//! }
//!
//! impl_domain_status_conversions!(Phase {
//!     Idle => "idle",
//!     Running => "running",
//! });
//!
//! assert_eq!(Phase::Running.as_str(), "running");
//! assert_eq!("IDLE".parse::<Phase>().unwrap(), Phase::Idle);
//! ```

/// Implements `as_str`, Display and FromStr for status enums
///
/// This macro generates:
/// - `as_str()`: the canonical string for a variant
/// - Display trait: writes the canonical string
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase representation of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestHealth {
        Breached,
        AtRisk,
        OnSchedule,
    }

    impl_domain_status_conversions!(TestHealth {
        Breached => "breached",
        AtRisk => "at-risk",
        OnSchedule => "on-schedule",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestHealth::Breached.to_string(), "breached");
        assert_eq!(TestHealth::AtRisk.to_string(), "at-risk");
        assert_eq!(TestHealth::OnSchedule.to_string(), "on-schedule");
    }

    #[test]
    fn test_fromstr_ignores_case_and_whitespace() {
        assert_eq!(TestHealth::from_str("AT-RISK").unwrap(), TestHealth::AtRisk);
        assert_eq!(TestHealth::from_str(" On-Schedule ").unwrap(), TestHealth::OnSchedule);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestHealth::from_str("late");
        assert!(result.unwrap_err().contains("Invalid TestHealth: late"));
        assert!(TestHealth::from_str("").is_err());
    }

    #[test]
    fn test_as_str_matches_display() {
        for status in [TestHealth::Breached, TestHealth::AtRisk, TestHealth::OnSchedule] {
            assert_eq!(status.as_str(), status.to_string());
        }
    }
}
