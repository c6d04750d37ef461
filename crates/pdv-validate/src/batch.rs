//! Single-pass classification of a batch of records.

use pdv_model::{Classification, Field, Record};
use tracing::{debug, info};

use crate::validator::FieldValidator;

/// Counts and valid-record report accumulated over one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Failure count per rule, indexed by rule index.
    failures: [usize; Field::RULE_COUNT],
    valid: usize,
    report: String,
}

impl RunSummary {
    pub fn valid_count(&self) -> usize {
        self.valid
    }

    /// Sum of every rule's failure count.
    pub fn invalid_count(&self) -> usize {
        self.failures.iter().sum()
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid_count()
    }

    /// Number of records whose first failing rule was `field`'s rule.
    pub fn failures(&self, field: Field) -> usize {
        self.failures[field.rule_index()]
    }

    /// `(field, failures)` pairs in rule order.
    pub fn rule_failures(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        Field::RULE_ORDER
            .into_iter()
            .map(|field| (field, self.failures(field)))
    }

    /// Dumps of every valid record, in input order.
    pub fn report(&self) -> &str {
        &self.report
    }

    fn record(&mut self, record: &Record, classification: Classification) {
        match classification {
            Classification::Valid => {
                self.valid += 1;
                self.report.push_str(&record.dump().to_string());
            }
            Classification::Invalid(field) => self.failures[field.rule_index()] += 1,
        }
    }
}

/// Applies [`FieldValidator::classify`] to records one at a time and
/// tallies the results.
#[derive(Debug, Default)]
pub struct BatchClassifier {
    summary: RunSummary,
    seen: usize,
}

impl BatchClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the next record of the batch and count it.
    pub fn observe(&mut self, record: &Record) -> Classification {
        let classification = FieldValidator::new(record).classify();
        if let Classification::Invalid(field) = classification {
            debug!(record = self.seen, rule = %field, "record rejected");
        }
        self.summary.record(record, classification);
        self.seen += 1;
        classification
    }

    /// Summary of the records observed so far.
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    pub fn finish(self) -> RunSummary {
        info!(
            records = self.summary.total(),
            valid = self.summary.valid_count(),
            invalid = self.summary.invalid_count(),
            "batch classified"
        );
        self.summary
    }
}

/// Classify a whole batch in input order.
pub fn classify_batch<'a, I>(records: I) -> RunSummary
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut classifier = BatchClassifier::new();
    for record in records {
        classifier.observe(record);
    }
    classifier.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let records: Vec<Record> = Vec::new();
        let summary = classify_batch(&records);

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.valid_count(), 0);
        assert!(summary.report().is_empty());
        assert!(summary.rule_failures().all(|(_, count)| count == 0));
    }

    #[test]
    fn test_all_missing_records_fail_first_rule() {
        let records = vec![Record::default(), Record::default()];
        let summary = classify_batch(&records);

        assert_eq!(summary.failures(Field::Telephone), 2);
        assert_eq!(summary.invalid_count(), 2);
        assert_eq!(summary.valid_count(), 0);
    }

    #[test]
    fn test_observe_returns_classification() {
        let mut classifier = BatchClassifier::new();
        let record = Record::default().with(Field::Telephone, "+7-(912)-345-67-89");

        assert_eq!(
            classifier.observe(&record),
            Classification::Invalid(Field::Height)
        );
        assert_eq!(classifier.summary().failures(Field::Height), 1);
    }
}
