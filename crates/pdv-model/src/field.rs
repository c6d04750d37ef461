//! The nine validated fields of a personal record.

use std::fmt;

/// A named field of a [`Record`](crate::Record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Telephone,
    Height,
    Snils,
    PassportNumber,
    Age,
    Occupation,
    PoliticalViews,
    Worldview,
    Address,
}

impl Field {
    /// All fields in record order (the order used for report dumps).
    pub const ALL: [Field; 9] = [
        Field::Telephone,
        Field::Height,
        Field::Snils,
        Field::PassportNumber,
        Field::Age,
        Field::Occupation,
        Field::PoliticalViews,
        Field::Worldview,
        Field::Address,
    ];

    /// Fields in rule evaluation order. The position of a field here is its
    /// rule index, which diagnostics and summaries are keyed by.
    pub const RULE_ORDER: [Field; 9] = [
        Field::Telephone,
        Field::Height,
        Field::Snils,
        Field::PassportNumber,
        Field::Age,
        Field::Occupation,
        Field::Address,
        Field::PoliticalViews,
        Field::Worldview,
    ];

    /// Number of rules (one per field).
    pub const RULE_COUNT: usize = Self::RULE_ORDER.len();

    /// JSON key of the field in the input file.
    pub fn key(self) -> &'static str {
        match self {
            Field::Telephone => "telephone",
            Field::Height => "height",
            Field::Snils => "snils",
            Field::PassportNumber => "passport_number",
            Field::Age => "age",
            Field::Occupation => "occupation",
            Field::PoliticalViews => "political_views",
            Field::Worldview => "worldview",
            Field::Address => "address",
        }
    }

    /// Human-readable label used in the valid-record report.
    pub fn label(self) -> &'static str {
        match self {
            Field::Telephone => "Telephone",
            Field::Height => "Height",
            Field::Snils => "SNILS",
            Field::PassportNumber => "Passport number",
            Field::Age => "Age",
            Field::Occupation => "Occupation",
            Field::PoliticalViews => "Political views",
            Field::Worldview => "Worldview",
            Field::Address => "Address",
        }
    }

    /// Position of this field's rule in [`Field::RULE_ORDER`].
    pub fn rule_index(self) -> usize {
        match self {
            Field::Telephone => 0,
            Field::Height => 1,
            Field::Snils => 2,
            Field::PassportNumber => 3,
            Field::Age => 4,
            Field::Occupation => 5,
            Field::Address => 6,
            Field::PoliticalViews => 7,
            Field::Worldview => 8,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
