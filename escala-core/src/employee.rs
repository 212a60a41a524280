use serde::{Deserialize, Serialize};

use crate::ids::{EmployeeId, UnitId};

/// A member of a unit's nursing roster.
///
/// Owned by the roster collaborator and immutable for the duration of a
/// schedule computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    /// Institutional registration number (SIAPE).
    pub registration: String,
    /// Professional council registration (COREN etc.), when applicable.
    pub council_registration: Option<String>,
    pub grade: Option<String>,
    /// Job category, e.g. "ENF", "TE", "AE".
    pub role: String,
    /// Employment bond, e.g. "EBSERH", "UFMA", "MS".
    pub bond: String,
    /// Contracted weekly-hour quota.
    pub weekly_hours: i32,
    pub unit_id: UnitId,
    pub group: Option<String>,
    /// Free-text preferred shift codes, e.g. "M6, T6".
    pub shift_preferences: Option<String>,
}

/// An organizational work location that owns a roster and monthly schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    /// Founding ordinance reference, e.g. "1192/2023".
    pub ordinance: Option<String>,
}
