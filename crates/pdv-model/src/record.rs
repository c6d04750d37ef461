//! Personal record value holder and its report rendering.

use std::fmt;

use crate::field::Field;

/// Width of the delimiter line written after each dumped record.
pub const DELIMITER_WIDTH: usize = 40;

/// One person's submitted data.
///
/// Every field holds the textual form of the submitted value, or `None`
/// when the field was absent from the input. Numeric inputs (height, age)
/// are kept as text so that format rules can inspect them before any
/// numeric conversion happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub telephone: Option<String>,
    pub height: Option<String>,
    pub snils: Option<String>,
    pub passport_number: Option<String>,
    pub age: Option<String>,
    pub occupation: Option<String>,
    pub political_views: Option<String>,
    pub worldview: Option<String>,
    pub address: Option<String>,
}

impl Record {
    /// Returns the value stored for `field`, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Telephone => &self.telephone,
            Field::Height => &self.height,
            Field::Snils => &self.snils,
            Field::PassportNumber => &self.passport_number,
            Field::Age => &self.age,
            Field::Occupation => &self.occupation,
            Field::PoliticalViews => &self.political_views,
            Field::Worldview => &self.worldview,
            Field::Address => &self.address,
        };
        slot.as_deref()
    }

    /// Builder-style setter used while assembling a record.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            Field::Telephone => self.telephone = value,
            Field::Height => self.height = value,
            Field::Snils => self.snils = value,
            Field::PassportNumber => self.passport_number = value,
            Field::Age => self.age = value,
            Field::Occupation => self.occupation = value,
            Field::PoliticalViews => self.political_views = value,
            Field::Worldview => self.worldview = value,
            Field::Address => self.address = value,
        }
        self
    }

    /// Fields that have no value.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// Report rendering of this record: one `Label: value` line per field
    /// in record order, then a delimiter line.
    pub fn dump(&self) -> RecordDump<'_> {
        RecordDump { record: self }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`Record::dump`].
pub struct RecordDump<'a> {
    record: &'a Record,
}

impl fmt::Display for RecordDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in Field::ALL {
            writeln!(
                f,
                "{}: {}",
                field.label(),
                self.record.get(field).unwrap_or_default()
            )?;
        }
        writeln!(f, "{}", "-".repeat(DELIMITER_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::default()
            .with(Field::Telephone, "+7-(912)-345-67-89")
            .with(Field::Height, "1.8")
            .with(Field::Snils, "12345678901")
            .with(Field::PassportNumber, "123456")
            .with(Field::Age, "35")
            .with(Field::Occupation, "Инженер")
            .with(Field::PoliticalViews, "аполитичен")
            .with(Field::Worldview, "Атеизм")
            .with(Field::Address, "ул. Ленина 5")
    }

    #[test]
    fn get_returns_stored_values() {
        let record = sample();
        assert_eq!(record.get(Field::Age), Some("35"));
        assert_eq!(record.get(Field::Address), Some("ул. Ленина 5"));
        assert!(record.missing_fields().is_empty());
    }

    #[test]
    fn missing_fields_are_reported_in_record_order() {
        let record = Record::default().with(Field::Height, "1.7");
        let missing = record.missing_fields();
        assert_eq!(missing.len(), 8);
        assert_eq!(missing[0], Field::Telephone);
        assert!(!missing.contains(&Field::Height));
    }

    #[test]
    fn dump_lists_fields_in_record_order() {
        let dump = sample().dump().to_string();
        insta::assert_snapshot!(dump.trim_end(), @r"
        Telephone: +7-(912)-345-67-89
        Height: 1.8
        SNILS: 12345678901
        Passport number: 123456
        Age: 35
        Occupation: Инженер
        Political views: аполитичен
        Worldview: Атеизм
        Address: ул. Ленина 5
        ----------------------------------------
        ");
    }
}
