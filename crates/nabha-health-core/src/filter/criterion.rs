//! Matching rules for the entity filter.

use serde::{Deserialize, Serialize};

use super::{contains_ignore_case, FilterError, FilterResult, Filterable, ALL};

/// A matching rule applied to each record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Criterion {
    /// Matches every record
    #[default]
    All,
    /// Categorical equality on one field; the value `all` matches everything
    Equals { field: String, value: String },
    /// Case-insensitive substring over any of the fields; empty query matches everything
    Contains { fields: Vec<String>, query: String },
}

impl Criterion {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Criterion::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn contains<I, S>(fields: I, query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Criterion::Contains {
            fields: fields.into_iter().map(Into::into).collect(),
            query: query.into(),
        }
    }

    /// True if the criterion accepts every record regardless of content.
    pub fn is_unconditional(&self) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Equals { value, .. } => value == ALL,
            Criterion::Contains { query, .. } => query.is_empty(),
        }
    }

    /// Check that every field named by the criterion exists on `T`.
    pub fn validate<T: Filterable>(&self) -> FilterResult<()> {
        match self {
            Criterion::All => Ok(()),
            Criterion::Equals { field, .. } => {
                if T::CATEGORICAL_FIELDS.iter().any(|known| *known == field.as_str()) {
                    Ok(())
                } else {
                    Err(FilterError::UnknownField {
                        kind: T::KIND,
                        field: field.clone(),
                    })
                }
            }
            Criterion::Contains { fields, .. } => {
                if fields.is_empty() {
                    return Err(FilterError::EmptyFieldList { kind: T::KIND });
                }
                match fields
                    .iter()
                    .find(|f| !T::TEXT_FIELDS.iter().any(|known| *known == f.as_str()))
                {
                    Some(unknown) => Err(FilterError::UnknownField {
                        kind: T::KIND,
                        field: unknown.clone(),
                    }),
                    None => Ok(()),
                }
            }
        }
    }

    /// Evaluate the criterion against one record.
    ///
    /// Assumes [`Criterion::validate`] already passed for `T`.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        if self.is_unconditional() {
            return true;
        }
        match self {
            Criterion::All => true,
            Criterion::Equals { field, value } => record.category(field) == Some(value.as_str()),
            Criterion::Contains { fields, query } => fields.iter().any(|field| {
                record
                    .text_values(field)
                    .into_iter()
                    .any(|text| contains_ignore_case(text, query))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Medicine;

    #[test]
    fn test_unconditional_forms() {
        assert!(Criterion::All.is_unconditional());
        assert!(Criterion::equals("availability", "all").is_unconditional());
        assert!(Criterion::contains(["name"], "").is_unconditional());
        assert!(!Criterion::contains(["name"], " ").is_unconditional());
        assert!(!Criterion::equals("availability", "available").is_unconditional());
    }

    #[test]
    fn test_validate_rejects_wrong_field_kind() {
        // "name" is a text field, not categorical
        let err = Criterion::equals("name", "x").validate::<Medicine>().unwrap_err();
        assert!(matches!(err, FilterError::UnknownField { kind: "medicine", .. }));

        let err = Criterion::contains(["name", "brand"], "x")
            .validate::<Medicine>()
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::UnknownField {
                kind: "medicine",
                field: "brand".into()
            }
        );

        let empty: [&str; 0] = [];
        assert!(matches!(
            Criterion::contains(empty, "x").validate::<Medicine>(),
            Err(FilterError::EmptyFieldList { .. })
        ));
    }

    #[test]
    fn test_serde_shape() {
        let c = Criterion::equals("status", "upcoming");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"kind":"equals","field":"status","value":"upcoming"}"#);
        let back: Criterion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
