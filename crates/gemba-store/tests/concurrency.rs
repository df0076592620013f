//! Concurrent lifecycle calls against one corrective action.

use std::thread;

use chrono::NaiveDate;
use gemba_core::catalog::Catalog;
use gemba_core::entities::{Answer, AuditDraft};
use gemba_core::enums::{ActionStatus, LogKind};
use gemba_core::policy::AuditPolicy;
use gemba_core::trail::TrailOperation;
use gemba_store::{AuditService, TrailReplayer, TrailWriter};
use pretty_assertions::assert_eq;

const THREADS: usize = 8;
const SUBMISSIONS: usize = 25;

fn finalized_action(svc: &AuditService) -> String {
    let on = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
    let draft = AuditDraft::new("Production - Line B", "Ana", "Rui")
        .with_date(on)
        .with_answer(402, Answer::partial(5, "Labels faded", Some("img/labels")));
    svc.finalize_audit(draft, "Ana", on).unwrap().actions[0].id.clone()
}

#[test]
fn concurrent_submissions_are_serialized_per_action() {
    let dir = tempfile::tempdir().unwrap();
    let svc = AuditService::new(
        Catalog::standard(),
        AuditPolicy::default(),
        TrailWriter::new(dir.path().to_path_buf()).unwrap(),
    );
    let id = finalized_action(&svc);

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let svc = &svc;
            let id = id.as_str();
            scope.spawn(move || {
                for n in 0..SUBMISSIONS {
                    svc.submit_execution(id, &format!("fix {worker}-{n}"), "img/fix", "Rui")
                        .unwrap();
                }
            });
        }
    });

    let action = svc.get_action(&id).unwrap();
    assert_eq!(action.status, ActionStatus::Executed);
    assert_eq!(action.log.len(), THREADS * SUBMISSIONS);
    assert!(action.log.iter().all(|e| e.kind == LogKind::Execution));
    assert!(action.log.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert_eq!(action.execution_text, action.log.last().and_then(|e| e.note.clone()));

    // Every transition landed in the trail exactly once, and replay agrees.
    let transitions: usize = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| {
            serde_jsonlines::json_lines::<TrailOperation, _>(entry.unwrap().path())
                .unwrap()
                .filter(|op| op.as_ref().is_ok_and(|op| op.id == id && op.data.is_object()))
                .count()
        })
        .sum();
    // One create plus one transition per submission.
    assert_eq!(transitions, THREADS * SUBMISSIONS + 1);

    let mut rebuilt = AuditService::in_memory(Catalog::standard(), AuditPolicy::default());
    TrailReplayer::rebuild(&mut rebuilt, dir.path()).unwrap();
    assert_eq!(rebuilt.get_action(&id).unwrap().log.len(), THREADS * SUBMISSIONS);
}

#[test]
fn different_actions_progress_independently() {
    let svc = AuditService::in_memory(Catalog::standard(), AuditPolicy::default());
    let ids: Vec<String> = (0..4).map(|_| finalized_action(&svc)).collect();

    thread::scope(|scope| {
        for id in &ids {
            let svc = &svc;
            scope.spawn(move || {
                svc.submit_execution(id, "fixed", "img", "Rui").unwrap();
            });
        }
    });

    for id in &ids {
        assert_eq!(svc.get_action(id).unwrap().log.len(), 1);
    }
}
