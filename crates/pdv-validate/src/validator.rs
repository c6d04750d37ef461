//! Per-field validation rules.
//!
//! Each rule inspects the textual value of exactly one field. A missing
//! value always fails its rule, and values that cannot be converted to a
//! number fail the numeric rules instead of raising an error. Height and
//! age accept ASCII digits only; the identifier patterns use `\d`.

use std::sync::LazyLock;

use pdv_model::{Classification, Field, Record};
use regex::Regex;

use crate::denylist::{
    OCCUPATION_DENYLIST, POLITICAL_VIEWS_DENYLIST, WORLDVIEW_DENYLIST, is_denied,
};

static TELEPHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+\d-\(\d{3}\)-\d{3}-\d{2}-\d{2}$").expect("Invalid telephone regex")
});

static HEIGHT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}$").expect("Invalid height regex"));

static SNILS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{11}$").expect("Invalid SNILS regex"));

static PASSPORT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("Invalid passport number regex"));

static AGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}$").expect("Invalid age regex"));

/// Street addresses only need to start with the pattern; trailing text is allowed.
static STREET_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ул\.\s[\w .-]+\d+").expect("Invalid street address regex"));

static ALLEY_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Аллея\s[\w .-]+\d+$").expect("Invalid alley address regex"));

static OCCUPATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-ZА-Я]\D+$").expect("Invalid occupation regex"));

static NO_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\D+$").expect("Invalid no-digits regex"));

/// Exclusive bounds for height in metres.
pub const HEIGHT_BOUNDS: (f64, f64) = (1.50, 2.20);

/// Exclusive bounds for age in years.
pub const AGE_BOUNDS: (u8, u8) = (18, 70);

/// A named predicate over one field's value.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    field: Field,
    predicate: fn(&str) -> bool,
}

impl ValidationRule {
    pub fn field(&self) -> Field {
        self.field
    }

    /// Apply the rule. Missing values fail.
    pub fn check(&self, value: Option<&str>) -> bool {
        value.is_some_and(self.predicate)
    }
}

/// The rule table, in evaluation order.
pub static RULES: [ValidationRule; Field::RULE_COUNT] = [
    ValidationRule {
        field: Field::Telephone,
        predicate: is_valid_telephone,
    },
    ValidationRule {
        field: Field::Height,
        predicate: is_valid_height,
    },
    ValidationRule {
        field: Field::Snils,
        predicate: is_valid_snils,
    },
    ValidationRule {
        field: Field::PassportNumber,
        predicate: is_valid_passport_number,
    },
    ValidationRule {
        field: Field::Age,
        predicate: is_valid_age,
    },
    ValidationRule {
        field: Field::Occupation,
        predicate: is_valid_occupation,
    },
    ValidationRule {
        field: Field::Address,
        predicate: is_valid_address,
    },
    ValidationRule {
        field: Field::PoliticalViews,
        predicate: is_valid_political_views,
    },
    ValidationRule {
        field: Field::Worldview,
        predicate: is_valid_worldview,
    },
];

/// Rule for `field`.
pub fn rule_for(field: Field) -> &'static ValidationRule {
    &RULES[field.rule_index()]
}

/// Format `+D-(DDD)-DDD-DD-DD`.
pub fn is_valid_telephone(value: &str) -> bool {
    TELEPHONE_REGEX.is_match(value)
}

/// One or two ASCII digits, a point, one or two ASCII digits, strictly inside [`HEIGHT_BOUNDS`].
pub fn is_valid_height(value: &str) -> bool {
    let (low, high) = HEIGHT_BOUNDS;
    HEIGHT_REGEX.is_match(value)
        && value
            .parse::<f64>()
            .is_ok_and(|height| height > low && height < high)
}

pub fn is_valid_snils(value: &str) -> bool {
    SNILS_REGEX.is_match(value)
}

pub fn is_valid_passport_number(value: &str) -> bool {
    PASSPORT_NUMBER_REGEX.is_match(value)
}

/// Exactly two ASCII digits, strictly inside [`AGE_BOUNDS`].
pub fn is_valid_age(value: &str) -> bool {
    let (low, high) = AGE_BOUNDS;
    AGE_REGEX.is_match(value) && value.parse::<u8>().is_ok_and(|age| age > low && age < high)
}

/// Must start like `ул. <name> <number>`. Alley addresses are rejected as
/// well, although no street address can also match the alley pattern.
pub fn is_valid_address(value: &str) -> bool {
    STREET_ADDRESS_REGEX.is_match(value) && !ALLEY_ADDRESS_REGEX.is_match(value)
}

/// Capitalised Latin or Cyrillic word(s) without digits, not denylisted.
pub fn is_valid_occupation(value: &str) -> bool {
    !is_denied(OCCUPATION_DENYLIST, value) && OCCUPATION_REGEX.is_match(value)
}

pub fn is_valid_political_views(value: &str) -> bool {
    !is_denied(POLITICAL_VIEWS_DENYLIST, value) && NO_DIGITS_REGEX.is_match(value)
}

pub fn is_valid_worldview(value: &str) -> bool {
    !is_denied(WORLDVIEW_DENYLIST, value) && NO_DIGITS_REGEX.is_match(value)
}

/// Validates the fields of a single record.
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator<'a> {
    record: &'a Record,
}

impl<'a> FieldValidator<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    /// Check one field against its rule.
    pub fn check(&self, field: Field) -> bool {
        rule_for(field).check(self.record.get(field))
    }

    pub fn check_telephone(&self) -> bool {
        self.check(Field::Telephone)
    }

    pub fn check_height(&self) -> bool {
        self.check(Field::Height)
    }

    pub fn check_snils(&self) -> bool {
        self.check(Field::Snils)
    }

    pub fn check_passport_number(&self) -> bool {
        self.check(Field::PassportNumber)
    }

    pub fn check_age(&self) -> bool {
        self.check(Field::Age)
    }

    pub fn check_address(&self) -> bool {
        self.check(Field::Address)
    }

    pub fn check_occupation(&self) -> bool {
        self.check(Field::Occupation)
    }

    pub fn check_political_views(&self) -> bool {
        self.check(Field::PoliticalViews)
    }

    pub fn check_worldview(&self) -> bool {
        self.check(Field::Worldview)
    }

    /// Classify the record by the first failing rule in rule order.
    ///
    /// Rules after the first failure are not evaluated.
    pub fn classify(&self) -> Classification {
        RULES
            .iter()
            .find(|rule| !rule.check(self.record.get(rule.field)))
            .map_or(Classification::Valid, |rule| {
                Classification::Invalid(rule.field)
            })
    }

    /// Every failing rule, in rule order. Used for diagnostics only.
    pub fn failing_rules(&self) -> Vec<Field> {
        RULES
            .iter()
            .filter(|rule| !rule.check(self.record.get(rule.field)))
            .map(ValidationRule::field)
            .collect()
    }
}
