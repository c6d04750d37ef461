use std::fmt;

use crate::field::Field;

/// Outcome of validating one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Every rule passed.
    Valid,
    /// The first rule (in rule order) that the record failed.
    Invalid(Field),
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Valid => f.write_str("valid"),
            Classification::Invalid(field) => write!(f, "invalid {field}"),
        }
    }
}
