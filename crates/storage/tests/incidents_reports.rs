mod common;

use common::{database, date, seed_competition, seed_race};
use storage::Database;
use storage::dto::{CreateIncidentRequest, CreateReportRequest, CreateUserRequest,
    UpdateReportRequest};
use storage::error::StorageError;
use storage::models::{IncidentDecision, IncidentStatus, ReportStatus, User};
use storage::repository::{IncidentRepository, ReportRepository, UserRepository};

async fn seed_reporter(db: &Database, email: &str) -> User {
    UserRepository::new(db.pool())
        .create(&CreateUserRequest {
            email: email.to_string(),
            name: "Referee".to_string(),
            admin: false,
            role_id: None,
            country: None,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn incidents_start_unofficial_and_pending() {
    let db = database().await;
    let comp = seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;
    let race = seed_race(&db, comp.id, "Individual Women").await;
    let repo = IncidentRepository::new(db.pool());

    let incident = repo
        .create(&CreateIncidentRequest {
            race_id: race.id,
            race_location_id: None,
            reported_by: None,
            description: "Contact at gate 4".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(incident.status, IncidentStatus::Unofficial);
    assert_eq!(incident.decision, IncidentDecision::Pending);
    assert_eq!(incident.race_name, "Individual Women");
    assert_eq!(incident.competition_country, "FRA");
    assert!(incident.unofficial());
}

#[tokio::test]
async fn officialize_and_decide() {
    let db = database().await;
    let comp = seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;
    let race = seed_race(&db, comp.id, "Individual Women").await;
    let repo = IncidentRepository::new(db.pool());

    let incident = repo
        .create(&CreateIncidentRequest {
            race_id: race.id,
            race_location_id: None,
            reported_by: None,
            description: "Missing skin at transition".to_string(),
        })
        .await
        .unwrap();

    let official = repo.officialize(incident.id).await.unwrap();
    assert_eq!(official.status, IncidentStatus::Official);
    assert!(!official.unofficial());

    let decided = repo
        .set_decision(incident.id, IncidentDecision::PenaltyApplied)
        .await
        .unwrap();
    assert_eq!(decided.decision, IncidentDecision::PenaltyApplied);
}

#[tokio::test]
async fn for_race_and_for_country_filter_correctly() {
    let db = database().await;
    let comp = seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;
    let race_a = seed_race(&db, comp.id, "Individual Women").await;
    let race_b = seed_race(&db, comp.id, "Individual Men").await;
    let repo = IncidentRepository::new(db.pool());

    for (rid, desc) in [(race_a.id, "first"), (race_b.id, "second")] {
        repo.create(&CreateIncidentRequest {
            race_id: rid,
            race_location_id: None,
            reported_by: None,
            description: desc.to_string(),
        })
        .await
        .unwrap();
    }

    assert_eq!(repo.for_race(race_a.id).await.unwrap().len(), 1);
    assert_eq!(repo.for_country("FRA").await.unwrap().len(), 2);
    assert!(repo.for_country("ITA").await.unwrap().is_empty());
}

#[tokio::test]
async fn reports_move_draft_submitted_finalized_only_forward() {
    let db = database().await;
    let reporter = seed_reporter(&db, "ref@example.com").await;
    let repo = ReportRepository::new(db.pool());

    let report = repo
        .create(&CreateReportRequest {
            user_id: reporter.id,
            incident_id: None,
            title: "Gate 4 contact".to_string(),
            body: Some("Bib 12 pushed bib 14.".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(report.status, ReportStatus::Draft);
    assert_eq!(report.user_name, "Referee");

    // Cannot finalize straight from draft.
    match repo.finalize(report.id).await {
        Err(StorageError::ConstraintViolation(reason)) => {
            assert_eq!(reason, "Cannot move report from draft to finalized");
        }
        other => panic!("expected constraint violation, got {other:?}"),
    }

    let submitted = repo.submit(report.id).await.unwrap();
    assert_eq!(submitted.status, ReportStatus::Submitted);

    let finalized = repo.finalize(report.id).await.unwrap();
    assert_eq!(finalized.status, ReportStatus::Finalized);

    // And never backwards.
    assert!(repo.submit(report.id).await.is_err());
}

#[tokio::test]
async fn update_touches_content_but_not_status() {
    let db = database().await;
    let reporter = seed_reporter(&db, "ref@example.com").await;
    let repo = ReportRepository::new(db.pool());

    let report = repo
        .create(&CreateReportRequest {
            user_id: reporter.id,
            incident_id: None,
            title: "Draft title".to_string(),
            body: None,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            report.id,
            &UpdateReportRequest {
                title: Some("Final title".to_string()),
                body: Some("Details added later.".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Final title");
    assert_eq!(updated.body.as_deref(), Some("Details added later."));
    assert_eq!(updated.status, ReportStatus::Draft);
}

#[tokio::test]
async fn for_user_separates_authors() {
    let db = database().await;
    let alice = seed_reporter(&db, "alice@example.com").await;
    let bob = seed_reporter(&db, "bob@example.com").await;
    let repo = ReportRepository::new(db.pool());

    for (author, title) in [(&alice, "A"), (&alice, "B"), (&bob, "C")] {
        repo.create(&CreateReportRequest {
            user_id: author.id,
            incident_id: None,
            title: title.to_string(),
            body: None,
        })
        .await
        .unwrap();
    }

    assert_eq!(repo.for_user(alice.id).await.unwrap().len(), 2);
    assert_eq!(repo.for_user(bob.id).await.unwrap().len(), 1);
}
