use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};
use thiserror::Error;
use time::Time;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShiftCatalogError {
    #[error("unknown shift code: {0}")]
    UnknownCode(String),
}

/// Daily time bucket a shift type belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShiftPeriod {
    Morning,
    Afternoon,
    Night,
    Off,
}

/// A shift-type definition, e.g. "M6" = 6-hour morning shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftType {
    pub code: String,
    pub description: String,
    /// Explicit classification; absent for legacy rows that rely on the
    /// code-prefix convention.
    pub period: Option<ShiftPeriod>,
    pub hours: f64,
    pub starts_at: Option<Time>,
    pub ends_at: Option<Time>,
}

impl ShiftType {
    /// The period this type counts toward.
    ///
    /// An explicit `period` wins; otherwise the prefix convention applies:
    /// `M*` morning, `T*` afternoon ("tarde"), `N*` night. Codes matching
    /// neither are unclassified and count toward no period.
    pub fn effective_period(&self) -> Option<ShiftPeriod> {
        if self.period.is_some() {
            return self.period;
        }
        match self.code.as_bytes().first() {
            Some(b'M') => Some(ShiftPeriod::Morning),
            Some(b'T') => Some(ShiftPeriod::Afternoon),
            Some(b'N') => Some(ShiftPeriod::Night),
            _ => None,
        }
    }
}

/// Resolved classification of a shift code within one catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftClass {
    pub period: Option<ShiftPeriod>,
    pub hours: f64,
}

/// Immutable snapshot of the shift-type reference data.
///
/// The catalog itself is owned externally; aggregations work against one
/// snapshot so a code maps to exactly one classification and duration.
#[derive(Debug, Clone, Default)]
pub struct ShiftCatalog {
    types: HashMap<String, ShiftType>,
}

impl ShiftCatalog {
    pub fn from_types(types: impl IntoIterator<Item = ShiftType>) -> Self {
        Self {
            types: types
                .into_iter()
                .map(|t| (t.code.clone(), t))
                .collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&ShiftType> {
        self.types.get(code)
    }

    pub fn classify(&self, code: &str) -> Result<ShiftClass, ShiftCatalogError> {
        let shift = self
            .types
            .get(code)
            .ok_or_else(|| ShiftCatalogError::UnknownCode(code.to_string()))?;
        Ok(ShiftClass {
            period: shift.effective_period(),
            hours: shift.hours,
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
