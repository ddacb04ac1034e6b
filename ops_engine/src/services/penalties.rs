use chrono::NaiveDateTime;
use dto::penalty::{Penalty, PenaltyDraft, PenaltyDraftError, PenaltyKind};
use uuid::Uuid;

pub const MIN_DESCRIPTION_CHARS: usize = 20;

pub fn kind_label(kind: PenaltyKind) -> &'static str {
    match kind {
        PenaltyKind::LateKeyReturn => "تأخير في تسليم المفتاح",
        PenaltyKind::Noise => "إزعاج",
        PenaltyKind::Cleanliness => "عدم الالتزام بقواعد النظافة",
        PenaltyKind::Smoking => "التدخين داخل الغرفة",
        PenaltyKind::CurfewViolation => "عدم احترام مواعيد الحضور",
        PenaltyKind::PropertyDamage => "إتلاف ممتلكات",
        PenaltyKind::Other => "أخرى",
    }
}

pub fn validate_draft(draft: &PenaltyDraft) -> Result<(), PenaltyDraftError> {
    let kind = draft.kind.ok_or(PenaltyDraftError::MissingKind)?;
    if kind == PenaltyKind::Other && draft.custom_kind.trim().is_empty() {
        return Err(PenaltyDraftError::MissingCustomKind);
    }
    if draft.description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(PenaltyDraftError::DescriptionTooShort);
    }
    Ok(())
}

pub fn issue(
    draft: &PenaltyDraft,
    student_name: &str,
    issued_at: NaiveDateTime,
) -> Result<Penalty, PenaltyDraftError> {
    validate_draft(draft)?;

    let kind = draft.kind.ok_or(PenaltyDraftError::MissingKind)?;
    let custom_kind = if kind == PenaltyKind::Other {
        Some(draft.custom_kind.trim().to_string())
    } else {
        None
    };

    let penalty = Penalty {
        id: Uuid::new_v4(),
        student_name: student_name.to_string(),
        kind,
        custom_kind,
        description: draft.description.clone(),
        severity: draft.severity,
        occurred_on: draft.occurred_on,
        occurred_at: draft.occurred_at,
        issued_at,
    };

    log::info!(
        "penalty issued for {}: {}",
        penalty.student_name,
        kind_label(penalty.kind)
    );
    Ok(penalty)
}
