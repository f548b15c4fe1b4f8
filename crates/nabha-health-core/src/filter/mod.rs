//! Entity filter shared by every list screen.
//!
//! Filtering is a pure, stable operation: the output is always an
//! order-preserving subsequence of the input and the source collection is
//! never touched. Local status transitions go through [`update_field`], which
//! returns a new collection with one element replaced in place.

mod criterion;

pub use criterion::*;

use thiserror::Error;

use crate::models::{Appointment, AppointmentStatus};

/// Distinguished categorical value that matches every record.
pub const ALL: &str = "all";

/// Filter errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown field '{field}' for {kind}")]
    UnknownField { kind: &'static str, field: String },

    #[error("Text criterion for {kind} names no fields")]
    EmptyFieldList { kind: &'static str },

    #[error("Invalid value '{value}' for {kind}.{field}")]
    InvalidValue {
        kind: &'static str,
        field: String,
        value: String,
    },

    #[error("Record not found: {kind} {id}")]
    RecordNotFound { kind: &'static str, id: String },
}

pub type FilterResult<T> = Result<T, FilterError>;

/// A fixed-shape record the entity filter can operate on.
///
/// Field names are part of the type: a criterion naming a field outside
/// [`Filterable::CATEGORICAL_FIELDS`] or [`Filterable::TEXT_FIELDS`] is
/// rejected before any record is inspected.
pub trait Filterable: Clone {
    /// Record kind used in error messages.
    const KIND: &'static str;
    /// Fields usable with [`Criterion::Equals`].
    const CATEGORICAL_FIELDS: &'static [&'static str];
    /// Fields usable with [`Criterion::Contains`].
    const TEXT_FIELDS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Tag of a categorical field, `None` if the field does not exist.
    fn category(&self, field: &str) -> Option<&'static str>;

    /// All values of a text field. Optional fields yield nothing when unset;
    /// multi-valued fields yield one entry per value.
    fn text_values(&self, field: &str) -> Vec<&str>;

    /// Replace a categorical field by its tag.
    fn set_category(&mut self, field: &str, value: &str) -> FilterResult<()>;
}

/// Case-insensitive substring test. An empty needle always matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Produce the filtered view of `records`.
pub fn filter<T: Filterable>(records: &[T], criterion: &Criterion) -> FilterResult<Vec<T>> {
    if let Err(e) = criterion.validate::<T>() {
        tracing::warn!(kind = T::KIND, error = %e, "Rejected filter criterion");
        return Err(e);
    }

    let view: Vec<T> = records
        .iter()
        .filter(|record| criterion.matches(*record))
        .cloned()
        .collect();

    tracing::debug!(
        kind = T::KIND,
        total = records.len(),
        visible = view.len(),
        "Filtered records"
    );
    Ok(view)
}

/// Replace one categorical field of the record with `id`, keeping every other
/// record, field and position unchanged.
pub fn update_field<T: Filterable>(
    records: &[T],
    id: &str,
    field: &str,
    value: &str,
) -> FilterResult<Vec<T>> {
    if !T::CATEGORICAL_FIELDS.iter().any(|known| *known == field) {
        return Err(FilterError::UnknownField {
            kind: T::KIND,
            field: field.to_string(),
        });
    }

    let index = records
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| FilterError::RecordNotFound {
            kind: T::KIND,
            id: id.to_string(),
        })?;

    let mut updated = records.to_vec();
    updated[index].set_category(field, value)?;

    tracing::debug!(kind = T::KIND, id, field, value, "Updated record");
    Ok(updated)
}

/// Mark an appointment as cancelled.
pub fn cancel_appointment(
    appointments: &[Appointment],
    id: &str,
) -> FilterResult<Vec<Appointment>> {
    update_field(appointments, id, "status", AppointmentStatus::Cancelled.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentType, Medicine};
    use chrono::NaiveDate;

    fn appt(id: &str, status: AppointmentStatus) -> Appointment {
        let mut a = Appointment::new(
            id.into(),
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            format!("Dr. {}", id),
            AppointmentType::Video,
        );
        a.status = status;
        a
    }

    fn ids<T: Filterable>(records: &[T]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_filter_by_status() {
        let records = vec![
            appt("1", AppointmentStatus::Upcoming),
            appt("2", AppointmentStatus::Completed),
            appt("3", AppointmentStatus::Upcoming),
        ];

        let upcoming = filter(&records, &Criterion::equals("status", "upcoming")).unwrap();
        assert_eq!(ids(&upcoming), vec!["1", "3"]);

        let all = filter(&records, &Criterion::equals("status", ALL)).unwrap();
        assert_eq!(all, records);
    }

    #[test]
    fn test_filter_medicines_by_query() {
        let meds = vec![
            Medicine::new("1".into(), "Paracetamol 500mg".into(), "Paracetamol".into()),
            Medicine::new("2".into(), "Cetirizine 10mg".into(), "Cetirizine".into()),
        ];
        let hits = filter(&meds, &Criterion::contains(["name", "generic_name"], "cetir")).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cetirizine 10mg");
    }

    #[test]
    fn test_unknown_field_fails_on_empty_collection() {
        let empty: Vec<Appointment> = Vec::new();
        let result = filter(&empty, &Criterion::equals("priority", "high"));
        assert!(matches!(result, Err(FilterError::UnknownField { .. })));

        assert!(filter(&empty, &Criterion::equals("status", "upcoming"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_cancel_is_index_stable() {
        let records = vec![
            appt("1", AppointmentStatus::Upcoming),
            appt("2", AppointmentStatus::Completed),
        ];
        let updated = cancel_appointment(&records, "1").unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0].id, "1");
        assert_eq!(updated[0].status, AppointmentStatus::Cancelled);
        assert_eq!(updated[0].doctor, records[0].doctor);
        assert_eq!(updated[1], records[1]);
        // Source untouched
        assert_eq!(records[0].status, AppointmentStatus::Upcoming);
    }

    #[test]
    fn test_update_errors() {
        let records = vec![appt("1", AppointmentStatus::Upcoming)];
        assert!(matches!(
            cancel_appointment(&records, "42"),
            Err(FilterError::RecordNotFound { .. })
        ));
        assert!(matches!(
            update_field(&records, "1", "doctor", "Dr. X"),
            Err(FilterError::UnknownField { .. })
        ));
        assert!(matches!(
            update_field(&records, "1", "status", "postponed"),
            Err(FilterError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Cetirizine 10mg", "CETIR"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("", "a"));
    }
}
