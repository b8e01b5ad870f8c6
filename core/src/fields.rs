//! Field taxonomy and normalization
//!
//! This module defines the personal-data field types that can be searched
//! against the breach database, together with the normalization rule
//! applied to each field before hashing.

use serde::{Deserialize, Serialize};

/// A searchable personal-data field type
///
/// Each variant maps to exactly one normalization rule, one per-field salt
/// and one risk weight. The serialized form is the camelCase wire tag used
/// by the breach-search service (e.g. `firstName`, `creditCard`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// Email address
    Email,

    /// Phone number
    Phone,

    /// First name
    FirstName,

    /// Last name
    LastName,

    /// Username
    Username,

    /// Street address
    Address,

    /// City
    City,

    /// State or province
    State,

    /// ZIP or postal code
    ZipCode,

    /// Country
    Country,

    /// Date of birth
    DateOfBirth,

    /// Social Security number
    Ssn,

    /// Password
    Password,

    /// Credit card number
    CreditCard,

    /// Driver license number
    DriverLicense,

    /// Passport number
    Passport,
}

impl FieldType {
    /// All field types, in wire-tag order
    pub const ALL: [FieldType; 16] = [
        FieldType::Email,
        FieldType::Phone,
        FieldType::FirstName,
        FieldType::LastName,
        FieldType::Username,
        FieldType::Address,
        FieldType::City,
        FieldType::State,
        FieldType::ZipCode,
        FieldType::Country,
        FieldType::DateOfBirth,
        FieldType::Ssn,
        FieldType::Password,
        FieldType::CreditCard,
        FieldType::DriverLicense,
        FieldType::Passport,
    ];

    /// Get the camelCase wire tag for this field type
    pub fn wire_name(&self) -> &'static str {
        match self {
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::FirstName => "firstName",
            FieldType::LastName => "lastName",
            FieldType::Username => "username",
            FieldType::Address => "address",
            FieldType::City => "city",
            FieldType::State => "state",
            FieldType::ZipCode => "zipCode",
            FieldType::Country => "country",
            FieldType::DateOfBirth => "dateOfBirth",
            FieldType::Ssn => "ssn",
            FieldType::Password => "password",
            FieldType::CreditCard => "creditCard",
            FieldType::DriverLicense => "driverLicense",
            FieldType::Passport => "passport",
        }
    }

    /// Whether this field type belongs to the sensitive subset
    ///
    /// Sensitive fields may only be searched one at a time, through the
    /// k-anonymity path, and dominate severity classification.
    pub fn is_sensitive(&self) -> bool {
        matches!(
            self,
            FieldType::Ssn
                | FieldType::CreditCard
                | FieldType::Password
                | FieldType::DriverLicense
                | FieldType::Passport
        )
    }

    /// Get the risk weight contributed by a match on this field type
    ///
    /// Weights are summed over the matched set and clamped to 100 by
    /// [`crate::scoring::risk_score`]. The most identity-compromising
    /// fields carry the highest weights; quasi-identifiers the lowest.
    pub fn risk_weight(&self) -> u32 {
        match self {
            FieldType::Ssn => 50,
            FieldType::CreditCard => 45,
            FieldType::Password => 40,
            FieldType::DriverLicense => 35,
            FieldType::Passport => 30,
            FieldType::Email => 20,
            FieldType::Phone => 15,
            FieldType::DateOfBirth => 15,
            FieldType::Address => 10,
            FieldType::Username => 10,
            FieldType::ZipCode => 5,
            FieldType::FirstName => 5,
            FieldType::LastName => 5,
            FieldType::City => 3,
            FieldType::State => 3,
            FieldType::Country => 2,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Canonicalize a raw field value before hashing
///
/// Leading/trailing whitespace is always trimmed first. Numeric-ish fields
/// (phone, SSN, credit card, driver license) keep only ASCII digits; every
/// other field type is lowercased. The result is deterministic and
/// idempotent, and an empty input yields an empty output — callers skip
/// empty fields before hashing.
pub fn normalize(value: &str, field_type: FieldType) -> String {
    let trimmed = value.trim();

    match field_type {
        FieldType::Phone | FieldType::Ssn | FieldType::CreditCard | FieldType::DriverLicense => {
            trimmed.chars().filter(|c| c.is_ascii_digit()).collect()
        }
        _ => trimmed.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(" John ", FieldType::FirstName, "john")]
    #[case("DOE", FieldType::LastName, "doe")]
    #[case("  User@Example.COM ", FieldType::Email, "user@example.com")]
    #[case("(555) 123-4567", FieldType::Phone, "5551234567")]
    #[case("123-45-6789", FieldType::Ssn, "123456789")]
    #[case("4111 1111 1111 1111", FieldType::CreditCard, "4111111111111111")]
    #[case("D-123-456", FieldType::DriverLicense, "123456")]
    #[case("A12345678", FieldType::Passport, "a12345678")]
    #[case("", FieldType::Email, "")]
    #[case("   ", FieldType::Phone, "")]
    fn test_normalize_cases(
        #[case] input: &str,
        #[case] field_type: FieldType,
        #[case] expected: &str,
    ) {
        assert_eq!(normalize(input, field_type), expected);
    }

    #[test]
    fn test_sensitive_subset() {
        let sensitive: Vec<FieldType> = FieldType::ALL
            .iter()
            .copied()
            .filter(FieldType::is_sensitive)
            .collect();

        assert_eq!(
            sensitive,
            vec![
                FieldType::Ssn,
                FieldType::Password,
                FieldType::CreditCard,
                FieldType::DriverLicense,
                FieldType::Passport,
            ]
        );
    }

    #[test]
    fn test_wire_tags_round_trip() {
        for field_type in FieldType::ALL {
            let json = serde_json::to_string(&field_type).unwrap();
            assert_eq!(json, format!("\"{}\"", field_type.wire_name()));

            let parsed: FieldType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, field_type);
        }
    }

    #[test]
    fn test_sensitive_fields_outweigh_quasi_identifiers() {
        for field_type in FieldType::ALL {
            if field_type.is_sensitive() {
                assert!(field_type.risk_weight() >= 30);
            } else {
                assert!(field_type.risk_weight() <= 20);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(value in ".{0,64}", index in 0usize..16) {
            let field_type = FieldType::ALL[index];
            let once = normalize(&value, field_type);
            let twice = normalize(&once, field_type);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalize_deterministic(value in ".{0,64}", index in 0usize..16) {
            let field_type = FieldType::ALL[index];
            prop_assert_eq!(normalize(&value, field_type), normalize(&value, field_type));
        }

        #[test]
        fn prop_digit_fields_keep_only_digits(value in ".{0,64}") {
            for field_type in [
                FieldType::Phone,
                FieldType::Ssn,
                FieldType::CreditCard,
                FieldType::DriverLicense,
            ] {
                prop_assert!(normalize(&value, field_type)
                    .chars()
                    .all(|c| c.is_ascii_digit()));
            }
        }
    }
}
