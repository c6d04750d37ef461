//! Personal record validation.
//!
//! [`FieldValidator`] checks one record field by field and classifies it by
//! the first rule it breaks; [`BatchClassifier`] runs that classification
//! over a whole batch and accumulates a [`RunSummary`].

mod batch;
mod denylist;
mod validator;

pub use batch::{BatchClassifier, RunSummary, classify_batch};
pub use denylist::{OCCUPATION_DENYLIST, POLITICAL_VIEWS_DENYLIST, WORLDVIEW_DENYLIST};
pub use validator::{
    AGE_BOUNDS, FieldValidator, HEIGHT_BOUNDS, RULES, ValidationRule, is_valid_address,
    is_valid_age, is_valid_height, is_valid_occupation, is_valid_passport_number,
    is_valid_political_views, is_valid_snils, is_valid_telephone, is_valid_worldview, rule_for,
};
