//! Severity and risk scoring
//!
//! This module derives a qualitative severity label and a bounded risk
//! score from the set of verified matched fields and the breach's
//! affected-record count, plus the relative time-ago rendering of the
//! breach date.

use chrono::{NaiveDate, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::fields::FieldType;

/// Qualitative breach severity
///
/// Ordered so that comparisons follow escalation: `Low < Medium < High <
/// Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Few low-weight fields in a small breach
    Low,

    /// Multiple fields or a mid-size breach
    Medium,

    /// Many fields or a large breach
    High,

    /// Sensitive data exposed, or an extremely large breach
    Critical,
}

/// Records above this count make a breach Critical regardless of fields
const CRITICAL_RECORDS: u64 = 10_000_000;

/// Records above this count make a breach at least High
const HIGH_RECORDS: u64 = 1_000_000;

/// Records above this count make a breach at least Medium
const MEDIUM_RECORDS: u64 = 100_000;

/// Extract the numeric record count from a display string
///
/// Non-digit characters are stripped before parsing; strings with no
/// digits count as zero.
pub fn parse_record_count(records: &str) -> u64 {
    let digits: String = records.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Compute the risk score for a set of matched fields
///
/// Sums the per-field weights and clamps to 100. Monotonic
/// non-decreasing as fields are added to the matched set.
pub fn risk_score(matched_fields: &[FieldType]) -> u32 {
    let sum: u32 = matched_fields
        .iter()
        .map(|field| field.risk_weight())
        .sum();
    sum.min(100)
}

/// Classify breach severity from matched fields and record count
///
/// Evaluated in strict precedence order: sensitive-field presence or an
/// extreme record count dominates; field count and mid-size record counts
/// are secondary tie-breakers. Adding a sensitive field or increasing the
/// record count never lowers the result.
pub fn severity(matched_fields: &[FieldType], affected_records: &str) -> Severity {
    let record_count = parse_record_count(affected_records);
    let has_sensitive = matched_fields.iter().any(FieldType::is_sensitive);
    let field_count = matched_fields.len();

    if has_sensitive || record_count > CRITICAL_RECORDS {
        Severity::Critical
    } else if field_count >= 3 || record_count > HIGH_RECORDS {
        Severity::High
    } else if field_count >= 2 || record_count > MEDIUM_RECORDS {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Render the breach date as a relative age, e.g. "3 days ago"
///
/// Deltas under 30 days render in days, anything older in 30-day months.
/// A breach dated today renders as "0 days ago"; future-dated breaches
/// clamp to zero rather than going negative. Unparseable dates are
/// returned unchanged.
pub fn time_ago(date: &str) -> String {
    time_ago_at(date, Utc::now().date_naive())
}

fn time_ago_at(date: &str, now: NaiveDate) -> String {
    let breach_date = match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("unparseable breach date {:?}: {}", date, err);
            return date.to_string();
        }
    };

    let days = (now - breach_date).num_days().max(0);

    if days < 30 {
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else {
        let months = days / 30;
        format!("{} month{} ago", months, if months == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_record_count() {
        assert_eq!(parse_record_count("1000000"), 1_000_000);
        assert_eq!(parse_record_count("1,000,000"), 1_000_000);
        assert_eq!(parse_record_count("2.5M records"), 25);
        assert_eq!(parse_record_count("unknown"), 0);
        assert_eq!(parse_record_count(""), 0);
    }

    #[test]
    fn test_risk_score_bounds() {
        assert_eq!(risk_score(&[]), 0);
        assert_eq!(risk_score(&[FieldType::Country]), 2);
        assert_eq!(risk_score(&[FieldType::FirstName]), 5);

        // ssn + creditCard + password = 135, clamped
        assert_eq!(
            risk_score(&[FieldType::Ssn, FieldType::CreditCard, FieldType::Password]),
            100
        );

        for field_type in FieldType::ALL {
            assert!(risk_score(&[field_type]) <= 100);
        }
    }

    #[test]
    fn test_risk_score_monotonic_in_matched_set() {
        let mut matched = Vec::new();
        let mut previous = 0;

        for field_type in FieldType::ALL {
            matched.push(field_type);
            let score = risk_score(&matched);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_severity_precedence_ladder() {
        // Sensitive field dominates regardless of breach size
        assert_eq!(severity(&[FieldType::Ssn], "10"), Severity::Critical);

        // Extreme record count dominates regardless of fields
        assert_eq!(severity(&[FieldType::City], "10000001"), Severity::Critical);
        assert_eq!(severity(&[FieldType::City], "10000000"), Severity::High);

        // Field count and mid-size record counts are tie-breakers
        assert_eq!(
            severity(
                &[FieldType::FirstName, FieldType::LastName, FieldType::City],
                "10"
            ),
            Severity::High
        );
        assert_eq!(severity(&[FieldType::Email], "1000001"), Severity::High);
        assert_eq!(
            severity(&[FieldType::FirstName, FieldType::LastName], "10"),
            Severity::Medium
        );
        assert_eq!(severity(&[FieldType::Email], "100001"), Severity::Medium);
        assert_eq!(severity(&[FieldType::FirstName], "1000000"), Severity::Medium);
        assert_eq!(severity(&[FieldType::FirstName], "1000"), Severity::Low);
    }

    #[test]
    fn test_severity_monotonic_in_record_count() {
        let counts = ["0", "1000", "100001", "1000001", "10000001"];

        for fields in [
            vec![],
            vec![FieldType::Email],
            vec![FieldType::FirstName, FieldType::LastName],
            vec![FieldType::Ssn],
        ] {
            let mut previous = Severity::Low;
            for count in counts {
                let current = severity(&fields, count);
                assert!(current >= previous);
                previous = current;
            }
        }
    }

    #[test]
    fn test_severity_monotonic_in_sensitivity() {
        for count in ["0", "500000", "20000000"] {
            let without = severity(&[FieldType::Email], count);
            let with = severity(&[FieldType::Email, FieldType::Password], count);
            assert!(with >= without);
        }
    }

    #[test]
    fn test_time_ago_days_and_months() {
        let now = date("2024-06-15");

        assert_eq!(time_ago_at("2024-06-15", now), "0 days ago");
        assert_eq!(time_ago_at("2024-06-14", now), "1 day ago");
        assert_eq!(time_ago_at("2024-06-12", now), "3 days ago");
        assert_eq!(time_ago_at("2024-05-17", now), "29 days ago");
        assert_eq!(time_ago_at("2024-05-16", now), "1 month ago");
        assert_eq!(time_ago_at("2024-04-15", now), "2 months ago");
        assert_eq!(time_ago_at("2020-06-15", now), "48 months ago");
    }

    #[test]
    fn test_time_ago_never_negative() {
        let now = date("2024-06-15");

        // Future-dated breach clamps to zero
        assert_eq!(time_ago_at("2024-07-01", now), "0 days ago");
    }

    #[test]
    fn test_time_ago_unparseable_date_passes_through() {
        let _ = env_logger::builder().is_test(true).try_init();
        let now = date("2024-06-15");

        assert_eq!(time_ago_at("sometime in 2020", now), "sometime in 2020");
    }
}
