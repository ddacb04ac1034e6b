use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attendance::WingId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum FaultType {
    Plumbing,
    Electric,
    Gas,
    Internet,
    Ac,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum LocationKind {
    Room,
    Study,
    Corridor,
    Bathroom,
    Kitchen,
    Office,
    Lobby,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum FaultStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FaultDraft {
    pub fault_type: Option<FaultType>,
    pub floor: Option<u8>,
    pub wing: Option<WingId>,
    pub location: Option<LocationKind>,
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FaultLocation {
    pub floor: u8,
    pub wing: WingId,
    pub kind: LocationKind,
    pub room_number: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Fault {
    pub id: Uuid,
    pub fault_type: FaultType,
    pub title: String,
    pub description: String,
    pub location: FaultLocation,
    pub status: FaultStatus,
    pub priority: Priority,
    pub reported_by: String,
    pub reported_on: NaiveDate,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FaultBoard {
    pub pending: Vec<Fault>,
    pub in_progress: Vec<Fault>,
    pub completed: Vec<Fault>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum FaultDraftError {
    MissingType,
    MissingFloor,
    MissingWing,
    WingNotAllowed,
    MissingLocation,
    LocationNotAllowed,
    MissingTitle,
}

impl fmt::Display for FaultDraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FaultDraftError::MissingType => "الرجاء اختيار نوع العطل",
            FaultDraftError::MissingFloor => "الرجاء اختيار الطابق",
            FaultDraftError::MissingWing => "الرجاء اختيار الجناح",
            FaultDraftError::WingNotAllowed => "هذا الجناح غير متاح لهذا النوع",
            FaultDraftError::MissingLocation => "الرجاء اختيار نوع المكان",
            FaultDraftError::LocationNotAllowed => "هذا المكان غير متاح لهذا النوع",
            FaultDraftError::MissingTitle => "الرجاء إدخال عنوان العطل",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for FaultDraftError {}
