use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum ResidencyStatus {
    Credit,
    Regular,
    Expat,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub college: String,
    pub year: u8,
    pub room_number: String,
    pub floor: u8,
    pub governorate: String,
    pub residency: ResidencyStatus,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub has_penalties: bool,
    pub exceeded_absence: bool,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub guardian_relation: String,
    pub absence_count: u32,
    pub penalty_count: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DirectoryFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub floors: BTreeSet<u8>,
    #[serde(default)]
    pub colleges: BTreeSet<String>,
    #[serde(default)]
    pub governorates: BTreeSet<String>,
    #[serde(default)]
    pub has_penalties: bool,
    #[serde(default)]
    pub exceeded_absence: bool,
}
