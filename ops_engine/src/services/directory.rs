use dto::student::{DirectoryFilter, StudentRecord};

pub fn filter_records(records: &[StudentRecord], filter: &DirectoryFilter) -> Vec<StudentRecord> {
    let query = filter.search.to_lowercase();

    records
        .iter()
        .filter(|student| {
            let matches_search = query.is_empty()
                || student.name.to_lowercase().contains(&query)
                || student.room_number.contains(&filter.search)
                || student.national_id.contains(&filter.search);

            let matches_floor =
                filter.floors.is_empty() || filter.floors.contains(&student.floor);
            let matches_college =
                filter.colleges.is_empty() || filter.colleges.contains(&student.college);
            let matches_governorate = filter.governorates.is_empty()
                || filter.governorates.contains(&student.governorate);
            let matches_penalties = !filter.has_penalties || student.has_penalties;
            let matches_absence = !filter.exceeded_absence || student.exceeded_absence;

            matches_search
                && matches_floor
                && matches_college
                && matches_governorate
                && matches_penalties
                && matches_absence
        })
        .cloned()
        .collect()
}

pub fn toggle_floor(filter: &mut DirectoryFilter, floor: u8) {
    if !filter.floors.remove(&floor) {
        filter.floors.insert(floor);
    }
}

pub fn toggle_college(filter: &mut DirectoryFilter, college: &str) {
    if !filter.colleges.remove(college) {
        filter.colleges.insert(college.to_string());
    }
}

pub fn toggle_governorate(filter: &mut DirectoryFilter, governorate: &str) {
    if !filter.governorates.remove(governorate) {
        filter.governorates.insert(governorate.to_string());
    }
}

// The search text is not a "filter" in the UI sense and stays out of the count.
pub fn active_criteria(filter: &DirectoryFilter) -> usize {
    filter.floors.len()
        + filter.colleges.len()
        + filter.governorates.len()
        + usize::from(filter.has_penalties)
        + usize::from(filter.exceeded_absence)
}

pub fn clear(filter: &mut DirectoryFilter) {
    filter.floors.clear();
    filter.colleges.clear();
    filter.governorates.clear();
    filter.has_penalties = false;
    filter.exceeded_absence = false;
}
