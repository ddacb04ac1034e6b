use chrono::NaiveDate;
use dto::attendance::WingId;
use dto::fault::{
    Fault, FaultBoard, FaultDraft, FaultDraftError, FaultLocation, FaultStatus, FaultType,
    LocationKind,
};
use uuid::Uuid;

pub const ALL_WINGS: [WingId; 4] = [WingId::A, WingId::B, WingId::C, WingId::D];

pub const ALL_LOCATION_KINDS: [LocationKind; 7] = [
    LocationKind::Room,
    LocationKind::Study,
    LocationKind::Corridor,
    LocationKind::Bathroom,
    LocationKind::Kitchen,
    LocationKind::Office,
    LocationKind::Lobby,
];

pub fn allowed_location_kinds(fault_type: Option<FaultType>) -> Vec<LocationKind> {
    let allowed: &[LocationKind] = match fault_type {
        Some(FaultType::Internet) => &[LocationKind::Study, LocationKind::Office, LocationKind::Lobby],
        Some(FaultType::Gas) => &[LocationKind::Kitchen],
        Some(FaultType::Plumbing) => &[
            LocationKind::Room,
            LocationKind::Bathroom,
            LocationKind::Kitchen,
        ],
        Some(FaultType::Ac) => &[
            LocationKind::Room,
            LocationKind::Study,
            LocationKind::Office,
            LocationKind::Lobby,
        ],
        Some(FaultType::Electric) | Some(FaultType::Other) | None => &ALL_LOCATION_KINDS,
    };

    // Keep the master-list ordering regardless of how the row above is written.
    ALL_LOCATION_KINDS
        .iter()
        .copied()
        .filter(|kind| allowed.contains(kind))
        .collect()
}

pub fn allowed_wings(fault_type: Option<FaultType>) -> Vec<WingId> {
    match fault_type {
        Some(FaultType::Gas) => vec![WingId::B, WingId::D],
        _ => ALL_WINGS.to_vec(),
    }
}

pub fn location_kind_allowed(fault_type: Option<FaultType>, kind: LocationKind) -> bool {
    allowed_location_kinds(fault_type).contains(&kind)
}

pub fn wing_allowed(fault_type: Option<FaultType>, wing: WingId) -> bool {
    allowed_wings(fault_type).contains(&wing)
}

pub fn needs_room_number(kind: LocationKind) -> bool {
    kind == LocationKind::Room
}

// Step 1 holds type+floor, 2 the wing, 3 the location kind, 4 the details.
pub fn furthest_step(draft: &FaultDraft) -> u8 {
    if draft.fault_type.is_none() || draft.floor.is_none() {
        1
    } else if draft.wing.is_none() {
        2
    } else if draft.location.is_none() {
        3
    } else {
        4
    }
}

pub fn can_reach_step(draft: &FaultDraft, step: u8) -> bool {
    step <= furthest_step(draft)
}

pub fn validate_draft(draft: &FaultDraft) -> Result<(), FaultDraftError> {
    if draft.fault_type.is_none() {
        return Err(FaultDraftError::MissingType);
    }
    if draft.floor.is_none() {
        return Err(FaultDraftError::MissingFloor);
    }
    let wing = draft.wing.ok_or(FaultDraftError::MissingWing)?;
    if !wing_allowed(draft.fault_type, wing) {
        return Err(FaultDraftError::WingNotAllowed);
    }
    let location = draft.location.ok_or(FaultDraftError::MissingLocation)?;
    if !location_kind_allowed(draft.fault_type, location) {
        return Err(FaultDraftError::LocationNotAllowed);
    }
    if draft.title.trim().is_empty() {
        return Err(FaultDraftError::MissingTitle);
    }
    Ok(())
}

pub fn submit_draft(
    draft: &FaultDraft,
    reported_by: &str,
    reported_on: NaiveDate,
) -> Result<Fault, FaultDraftError> {
    validate_draft(draft)?;

    let kind = draft.location.ok_or(FaultDraftError::MissingLocation)?;
    let room_number = if needs_room_number(kind) && !draft.room_number.trim().is_empty() {
        Some(draft.room_number.trim().to_string())
    } else {
        None
    };

    let fault = Fault {
        id: Uuid::new_v4(),
        fault_type: draft.fault_type.ok_or(FaultDraftError::MissingType)?,
        title: draft.title.clone(),
        description: draft.description.clone(),
        location: FaultLocation {
            floor: draft.floor.ok_or(FaultDraftError::MissingFloor)?,
            wing: draft.wing.ok_or(FaultDraftError::MissingWing)?,
            kind,
            room_number,
        },
        status: FaultStatus::Pending,
        priority: draft.priority,
        reported_by: reported_by.to_string(),
        reported_on,
    };

    log::info!("fault submitted: {} ({:?})", fault.title, fault.fault_type);
    Ok(fault)
}

pub fn filter_faults(
    faults: &[Fault],
    query: &str,
    type_filter: Option<FaultType>,
) -> Vec<Fault> {
    let query = query.to_lowercase();
    faults
        .iter()
        .filter(|f| {
            let matches_search = query.is_empty()
                || f.title.to_lowercase().contains(&query)
                || f.description.to_lowercase().contains(&query);
            let matches_type = type_filter.map_or(true, |t| f.fault_type == t);
            matches_search && matches_type
        })
        .cloned()
        .collect()
}

pub fn board(faults: &[Fault]) -> FaultBoard {
    let mut lanes = FaultBoard::default();
    for fault in faults {
        match fault.status {
            FaultStatus::Pending => lanes.pending.push(fault.clone()),
            FaultStatus::InProgress => lanes.in_progress.push(fault.clone()),
            FaultStatus::Completed => lanes.completed.push(fault.clone()),
        }
    }
    lanes
}

pub fn set_status(faults: &mut [Fault], id: Uuid, status: FaultStatus) -> bool {
    match faults.iter_mut().find(|f| f.id == id) {
        Some(fault) => {
            fault.status = status;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::fault::Priority;

    fn gas_draft() -> FaultDraft {
        FaultDraft {
            fault_type: Some(FaultType::Gas),
            floor: Some(2),
            wing: Some(WingId::B),
            location: Some(LocationKind::Kitchen),
            room_number: String::new(),
            title: "رائحة غاز في المطبخ".to_string(),
            description: "رائحة غاز خفيفة في منطقة المطبخ المشترك".to_string(),
            priority: Priority::High,
        }
    }

    #[test]
    fn gas_constraints_are_exact() {
        assert_eq!(
            allowed_location_kinds(Some(FaultType::Gas)),
            vec![LocationKind::Kitchen]
        );
        assert_eq!(
            allowed_wings(Some(FaultType::Gas)),
            vec![WingId::B, WingId::D]
        );
    }

    #[test]
    fn internet_constraints_are_exact() {
        assert_eq!(
            allowed_location_kinds(Some(FaultType::Internet)),
            vec![LocationKind::Study, LocationKind::Office, LocationKind::Lobby]
        );
        assert_eq!(allowed_wings(Some(FaultType::Internet)), ALL_WINGS.to_vec());
    }

    #[test]
    fn electric_other_and_unset_allow_everything() {
        for fault_type in [Some(FaultType::Electric), Some(FaultType::Other), None] {
            assert_eq!(
                allowed_location_kinds(fault_type),
                ALL_LOCATION_KINDS.to_vec()
            );
            assert_eq!(allowed_wings(fault_type), ALL_WINGS.to_vec());
        }
    }

    #[test]
    fn plumbing_and_ac_rows_match_the_table() {
        assert_eq!(
            allowed_location_kinds(Some(FaultType::Plumbing)),
            vec![LocationKind::Room, LocationKind::Bathroom, LocationKind::Kitchen]
        );
        assert_eq!(
            allowed_location_kinds(Some(FaultType::Ac)),
            vec![
                LocationKind::Room,
                LocationKind::Study,
                LocationKind::Office,
                LocationKind::Lobby
            ]
        );
    }

    #[test]
    fn gas_in_wing_a_fails_but_wing_b_passes() {
        let mut draft = gas_draft();
        draft.wing = Some(WingId::A);
        assert_eq!(validate_draft(&draft), Err(FaultDraftError::WingNotAllowed));

        draft.wing = Some(WingId::B);
        assert_eq!(validate_draft(&draft), Ok(()));
    }

    #[test]
    fn validation_reports_the_first_unmet_precondition_only() {
        let empty = FaultDraft::default();
        assert_eq!(validate_draft(&empty), Err(FaultDraftError::MissingType));

        let mut draft = FaultDraft {
            fault_type: Some(FaultType::Gas),
            ..FaultDraft::default()
        };
        assert_eq!(validate_draft(&draft), Err(FaultDraftError::MissingFloor));

        draft.floor = Some(1);
        assert_eq!(validate_draft(&draft), Err(FaultDraftError::MissingWing));

        draft.wing = Some(WingId::D);
        assert_eq!(validate_draft(&draft), Err(FaultDraftError::MissingLocation));

        draft.location = Some(LocationKind::Bathroom);
        assert_eq!(
            validate_draft(&draft),
            Err(FaultDraftError::LocationNotAllowed)
        );

        draft.location = Some(LocationKind::Kitchen);
        assert_eq!(validate_draft(&draft), Err(FaultDraftError::MissingTitle));
    }

    #[test]
    fn steps_gate_monotonically() {
        let mut draft = FaultDraft::default();
        assert_eq!(furthest_step(&draft), 1);
        assert!(!can_reach_step(&draft, 2));

        draft.fault_type = Some(FaultType::Plumbing);
        assert_eq!(furthest_step(&draft), 1);

        draft.floor = Some(3);
        assert_eq!(furthest_step(&draft), 2);
        assert!(can_reach_step(&draft, 1));

        draft.wing = Some(WingId::C);
        assert_eq!(furthest_step(&draft), 3);

        draft.location = Some(LocationKind::Bathroom);
        assert_eq!(furthest_step(&draft), 4);
    }

    #[test]
    fn submit_builds_a_pending_fault() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let fault = submit_draft(&gas_draft(), "أحمد محمد", date).unwrap();

        assert_eq!(fault.status, FaultStatus::Pending);
        assert_eq!(fault.location.wing, WingId::B);
        assert_eq!(fault.location.room_number, None);
        assert_eq!(fault.reported_on, date);
    }

    #[test]
    fn submit_keeps_room_number_only_for_residential_rooms() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();

        let mut draft = gas_draft();
        draft.fault_type = Some(FaultType::Plumbing);
        draft.wing = Some(WingId::A);
        draft.location = Some(LocationKind::Room);
        draft.room_number = "201".to_string();
        let fault = submit_draft(&draft, "خالد علي", date).unwrap();
        assert_eq!(fault.location.room_number.as_deref(), Some("201"));

        draft.location = Some(LocationKind::Bathroom);
        let fault = submit_draft(&draft, "خالد علي", date).unwrap();
        assert_eq!(fault.location.room_number, None);
    }

    #[test]
    fn board_partitions_by_status_and_filter_is_conjunctive() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let mut faults = vec![
            submit_draft(&gas_draft(), "أحمد", date).unwrap(),
            submit_draft(
                &FaultDraft {
                    fault_type: Some(FaultType::Electric),
                    floor: Some(2),
                    wing: Some(WingId::A),
                    location: Some(LocationKind::Corridor),
                    title: "عطل في الإضاءة".to_string(),
                    description: "الأضواء في الممر لا تعمل".to_string(),
                    ..FaultDraft::default()
                },
                "خالد",
                date,
            )
            .unwrap(),
        ];

        let id = faults[1].id;
        assert!(set_status(&mut faults, id, FaultStatus::InProgress));

        let lanes = board(&faults);
        assert_eq!(lanes.pending.len(), 1);
        assert_eq!(lanes.in_progress.len(), 1);
        assert_eq!(lanes.completed.len(), 0);

        assert_eq!(filter_faults(&faults, "الإضاءة", None).len(), 1);
        assert_eq!(
            filter_faults(&faults, "الإضاءة", Some(FaultType::Gas)).len(),
            0
        );
        assert_eq!(filter_faults(&faults, "", None).len(), 2);
    }
}
