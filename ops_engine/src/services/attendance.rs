use std::collections::BTreeMap;

use dto::attendance::{
    AttendanceStatus, Building, FlatResident, MealHeadcountReport, MealType, Room, RoomStatus,
    WingId,
};

pub fn toggle_status(status: AttendanceStatus) -> AttendanceStatus {
    match status {
        AttendanceStatus::Unchecked => AttendanceStatus::Present,
        AttendanceStatus::Present => AttendanceStatus::Absent,
        AttendanceStatus::Absent => AttendanceStatus::Unchecked,
    }
}

// Flips exactly one student on one floor; every other room is left untouched.
pub fn toggle_resident(
    building: &mut Building,
    floor: u8,
    wing: WingId,
    student_id: &str,
) -> Option<AttendanceStatus> {
    let student = building
        .floors
        .iter_mut()
        .find(|f| f.number == floor)?
        .wings
        .iter_mut()
        .find(|w| w.id == wing)?
        .rooms
        .iter_mut()
        .flat_map(|r| r.students.iter_mut())
        .find(|s| s.id == student_id)?;

    student.status = toggle_status(student.status);
    Some(student.status)
}

pub fn room_status(room: &Room) -> RoomStatus {
    let checked = room
        .students
        .iter()
        .filter(|s| s.status != AttendanceStatus::Unchecked)
        .count();

    if checked == 0 {
        RoomStatus::Unchecked
    } else if room
        .students
        .iter()
        .all(|s| s.status == AttendanceStatus::Present)
    {
        RoomStatus::Full
    } else {
        // All-absent rooms land here as well, not in a separate state.
        RoomStatus::Partial
    }
}

pub fn flatten(building: &Building) -> Vec<FlatResident> {
    building
        .floors
        .iter()
        .flat_map(|floor| {
            floor.wings.iter().flat_map(move |wing| {
                wing.rooms.iter().flat_map(move |room| {
                    room.students.iter().map(move |s| FlatResident {
                        id: s.id.clone(),
                        name: s.name.clone(),
                        student_no: s.student_no.clone(),
                        status: s.status,
                        room_number: room.room_number.clone(),
                        floor: floor.number,
                        college: s.college.clone(),
                        meal_type: s.meal_type,
                    })
                })
            })
        })
        .collect()
}

pub fn build_meal_report(students: &[FlatResident]) -> MealHeadcountReport {
    let total_present = students
        .iter()
        .filter(|s| s.status == AttendanceStatus::Present)
        .count();
    let total_absent = students
        .iter()
        .filter(|s| s.status == AttendanceStatus::Absent)
        .count();
    let total_unchecked = students
        .iter()
        .filter(|s| s.status == AttendanceStatus::Unchecked)
        .count();

    // Only a confirmed presence authorizes a meal.
    let eligible: Vec<FlatResident> = students
        .iter()
        .filter(|s| s.status == AttendanceStatus::Present)
        .cloned()
        .collect();
    let eligible_count = eligible.len();

    let mut by_floor = BTreeMap::new();
    let mut by_college = BTreeMap::new();
    for student in &eligible {
        *by_floor.entry(student.floor).or_insert(0) += 1;
        *by_college.entry(student.college.clone()).or_insert(0) += 1;
    }

    let regular_meals = eligible
        .iter()
        .filter(|s| s.meal_type == MealType::Regular)
        .count();
    let special_meals = eligible
        .iter()
        .filter(|s| s.meal_type == MealType::Special)
        .count();

    log::debug!(
        "meal report: {} eligible of {} students",
        eligible_count,
        students.len()
    );

    MealHeadcountReport {
        total_present,
        total_absent,
        total_unchecked,
        eligible,
        eligible_count,
        regular_meals,
        special_meals,
        by_floor,
        by_college,
    }
}

pub fn search_eligible(eligible: &[FlatResident], query: &str) -> Vec<FlatResident> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return eligible.to_vec();
    }

    eligible
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&query)
                || s.student_no.contains(&query)
                || s.room_number.contains(&query)
                || s.college.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
