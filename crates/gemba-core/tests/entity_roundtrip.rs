//! Serde roundtrip and JsonSchema validation tests for all entity types.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use schemars::schema_for;
use gemba_core::catalog::Catalog;
use gemba_core::entities::*;
use gemba_core::enums::*;
use gemba_core::responses::*;
use gemba_core::trail::TrailOperation;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_action() -> CorrectiveAction {
    CorrectiveAction {
        id: "act-deadbeef-q301".into(),
        source_audit_id: "aud-deadbeef".into(),
        created_date: date(2023, 10, 15),
        deadline: date(2023, 11, 14),
        department: "Production - Line A".into(),
        auditor_name: "Ana Auditor".into(),
        question_id: 301,
        question_text: "Are floors, walls and equipment clean?".into(),
        issue_description: "Oil stain next to machine 3.".into(),
        original_evidence_ref: Some("img/oil-stain.jpg".into()),
        status: ActionStatus::Approved,
        execution_text: Some("Degreased and installed a drip tray.".into()),
        execution_evidence_ref: Some("img/clean.jpg".into()),
        log: vec![
            LogEntry {
                kind: LogKind::Execution,
                actor: "Maria".into(),
                timestamp: Utc.with_ymd_and_hms(2023, 10, 16, 10, 0, 0).unwrap(),
                note: Some("Washed with water.".into()),
                evidence_ref: Some("img/try1.jpg".into()),
            },
            LogEntry {
                kind: LogKind::Rejection,
                actor: "Ana Auditor".into(),
                timestamp: Utc.with_ymd_and_hms(2023, 10, 16, 14, 0, 0).unwrap(),
                note: Some("Still oily.".into()),
                evidence_ref: None,
            },
            LogEntry {
                kind: LogKind::Execution,
                actor: "Maria".into(),
                timestamp: Utc.with_ymd_and_hms(2023, 10, 17, 9, 0, 0).unwrap(),
                note: Some("Degreased and installed a drip tray.".into()),
                evidence_ref: Some("img/clean.jpg".into()),
            },
            LogEntry {
                kind: LogKind::Approval,
                actor: "Ana Auditor".into(),
                timestamp: Utc.with_ymd_and_hms(2023, 10, 17, 16, 0, 0).unwrap(),
                note: None,
                evidence_ref: None,
            },
        ],
    }
}

roundtrip_and_validate!(
    question_roundtrip,
    Question,
    Question {
        id: 303,
        text: "Is pest control up to date?".into(),
        applicability: Applicability::only(["Cafeteria", "Warehouse"]),
    }
);

roundtrip_and_validate!(catalog_roundtrip, Catalog, Catalog::standard());

roundtrip_and_validate!(
    draft_roundtrip,
    AuditDraft,
    AuditDraft::new("Warehouse", "Ana", "Rui")
        .with_date(date(2024, 2, 29))
        .with_answer(101, Answer::ok())
        .with_answer(303, Answer::not_applicable())
        .with_answer(203, Answer::partial(4, "Boxes blocking corridor", Some("img/1.jpg")))
);

roundtrip_and_validate!(
    audit_record_roundtrip,
    AuditRecord,
    AuditRecord {
        id: "aud-deadbeef".into(),
        date: date(2024, 1, 15),
        department: "Warehouse".into(),
        auditor_name: "Ana".into(),
        interviewee_name: "Rui".into(),
        answers: BTreeMap::from([(101, Answer::ok()), (203, Answer::partial(5, "Boxes", None))]),
        signatures: Signatures {
            auditor: Some("sig/ana.png".into()),
            interviewee: Some("sig/rui.png".into()),
        },
        overall_score: Some(7.5),
        category_scores: BTreeMap::from([
            (CategoryId::Seiri, Some(10.0)),
            (CategoryId::Seiton, Some(5.0)),
            (CategoryId::Seiso, None),
            (CategoryId::Seiketsu, None),
            (CategoryId::Shitsuke, None),
        ]),
        schedule_id: Some("sch-0000beef".into()),
    }
);

roundtrip_and_validate!(corrective_action_roundtrip, CorrectiveAction, sample_action());

roundtrip_and_validate!(
    schedule_roundtrip,
    Schedule,
    Schedule {
        id: "sch-12345678".into(),
        department: "Cafeteria".into(),
        auditor_name: "Ana".into(),
        date: date(2025, 1, 2),
    }
);

roundtrip_and_validate!(
    goal_roundtrip,
    Goal,
    Goal {
        id: "gol-12345678".into(),
        department: "Production - Line A".into(),
        start_date: date(2023, 1, 1),
        end_date: date(2023, 12, 31),
        targets: BTreeMap::from([
            (CategoryId::Seiri, 9.0),
            (CategoryId::Seiketsu, 8.5),
        ]),
    }
);

roundtrip_and_validate!(
    trend_point_roundtrip,
    TrendPoint,
    TrendPoint {
        month: YearMonth { year: 2024, month: 2 },
        filtered_mean: None,
        global_mean: Some(8.25),
        target: 8.0,
    }
);

roundtrip_and_validate!(
    agenda_item_roundtrip,
    AgendaItem,
    AgendaItem {
        date: date(2024, 3, 1),
        department: "Maintenance".into(),
        entry: AgendaEntry::ActionDeadline {
            action_id: "act-1-q101".into(),
            issue_description: "Unused pallets".into(),
            overdue: true,
        },
    }
);

roundtrip_and_validate!(
    trail_operation_roundtrip,
    TrailOperation,
    TrailOperation {
        v: 1,
        ts: "2024-01-15T10:00:00+00:00".into(),
        actor: None,
        op: TrailOp::Transition,
        entity: EntityType::Action,
        id: "act-deadbeef-q301".into(),
        data: serde_json::to_value(sample_action()).unwrap(),
    }
);

#[test]
fn action_log_order_survives_roundtrip() {
    let action = sample_action();
    let json = serde_json::to_string(&action).unwrap();
    let back: CorrectiveAction = serde_json::from_str(&json).unwrap();
    let kinds: Vec<LogKind> = back.log.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LogKind::Execution,
            LogKind::Rejection,
            LogKind::Execution,
            LogKind::Approval
        ]
    );
}

#[test]
fn applicability_wire_shape() {
    let all = serde_json::to_value(Applicability::AllDepartments).unwrap();
    assert_eq!(all, serde_json::json!({"scope": "all_departments"}));

    let some = serde_json::to_value(Applicability::only(["Maintenance"])).unwrap();
    assert_eq!(
        some,
        serde_json::json!({"scope": "specific_departments", "departments": ["Maintenance"]})
    );
}
