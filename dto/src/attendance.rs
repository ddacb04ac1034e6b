use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[default]
    Unchecked,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum RoomStatus {
    Full,
    Partial,
    Unchecked,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum MealType {
    #[default]
    Regular,
    Special,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub enum WingId {
    A,
    B,
    C,
    D,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Resident {
    pub id: String,
    pub name: String,
    pub student_no: String,
    pub status: AttendanceStatus,
    pub college: String,
    pub meal_type: MealType,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Room {
    pub room_number: String,
    pub students: Vec<Resident>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Wing {
    pub id: WingId,
    pub label: String,
    pub rooms: Vec<Room>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Floor {
    pub number: u8,
    pub wings: Vec<Wing>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Building {
    pub floors: Vec<Floor>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FlatResident {
    pub id: String,
    pub name: String,
    pub student_no: String,
    pub status: AttendanceStatus,
    pub room_number: String,
    pub floor: u8,
    pub college: String,
    pub meal_type: MealType,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MealHeadcountReport {
    pub total_present: usize,
    pub total_absent: usize,
    pub total_unchecked: usize,
    pub eligible: Vec<FlatResident>,
    pub eligible_count: usize,
    pub regular_meals: usize,
    pub special_meals: usize,
    pub by_floor: BTreeMap<u8, usize>,
    pub by_college: BTreeMap<String, usize>,
}
