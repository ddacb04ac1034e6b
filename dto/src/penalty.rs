use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum PenaltyKind {
    LateKeyReturn,
    Noise,
    Cleanliness,
    Smoking,
    CurfewViolation,
    PropertyDamage,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PenaltyDraft {
    pub kind: Option<PenaltyKind>,
    #[serde(default)]
    pub custom_kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    pub occurred_on: NaiveDate,
    pub occurred_at: Option<NaiveTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Penalty {
    pub id: Uuid,
    pub student_name: String,
    pub kind: PenaltyKind,
    pub custom_kind: Option<String>,
    pub description: String,
    pub severity: Severity,
    pub occurred_on: NaiveDate,
    pub occurred_at: Option<NaiveTime>,
    pub issued_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum PenaltyDraftError {
    MissingKind,
    MissingCustomKind,
    DescriptionTooShort,
}

impl fmt::Display for PenaltyDraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            PenaltyDraftError::MissingKind => "الرجاء اختيار نوع المخالفة",
            PenaltyDraftError::MissingCustomKind => "الرجاء تحديد نوع المخالفة",
            PenaltyDraftError::DescriptionTooShort => "وصف المخالفة قصير جداً، الحد الأدنى 20 حرف",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for PenaltyDraftError {}
