mod common;

use common::{database, date, seed_competition};
use storage::dto::UpdateCompetitionRequest;
use storage::error::StorageError;
use storage::models::CompetitionStatus;
use storage::repository::{CompetitionRepository, Repository};

#[tokio::test]
async fn created_competition_round_trips_through_find() {
    let db = database().await;
    let repo = CompetitionRepository::new(db.pool());

    let created = seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;
    let found = repo.find(created.id).await.unwrap().unwrap();

    assert_eq!(found, created);
}

#[tokio::test]
async fn find_returns_none_and_get_errors_for_missing_ids() {
    let db = database().await;
    let repo = CompetitionRepository::new(db.pool());

    assert!(repo.find(9999).await.unwrap().is_none());
    assert!(matches!(repo.get(9999).await, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn delete_reports_whether_a_row_existed() {
    let db = database().await;
    let repo = CompetitionRepository::new(db.pool());
    let created = seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn end_date_before_start_date_is_rejected() {
    let db = database().await;
    let repo = CompetitionRepository::new(db.pool());
    let created = seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;

    let result = repo
        .update(
            created.id,
            &UpdateCompetitionRequest {
                name: None,
                city: None,
                place: None,
                country: None,
                description: None,
                start_date: None,
                end_date: Some(date(2026, 3, 1)),
                webpage_url: None,
            },
        )
        .await;

    match result {
        Err(StorageError::ConstraintViolation(reason)) => {
            assert_eq!(reason, "End date must be on or after start date");
        }
        other => panic!("expected constraint violation, got {other:?}"),
    }
}

#[tokio::test]
async fn update_keeps_unspecified_fields() {
    let db = database().await;
    let repo = CompetitionRepository::new(db.pool());
    let created = seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;

    let updated = repo
        .update(
            created.id,
            &UpdateCompetitionRequest {
                name: Some("Pierra Menta 2026".to_string()),
                city: None,
                place: None,
                country: None,
                description: None,
                start_date: None,
                end_date: None,
                webpage_url: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Pierra Menta 2026");
    assert_eq!(updated.city, created.city);
    assert_eq!(updated.start_date, created.start_date);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let db = database().await;
    let repo = CompetitionRepository::new(db.pool());
    seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;
    seed_competition(&db, "Adamello Ski Raid", date(2026, 4, 1), date(2026, 4, 2)).await;

    let hits = repo.search("pIeRrA").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Pierra Menta");

    assert!(repo.search("nope").await.unwrap().is_empty());
}

#[tokio::test]
async fn ongoing_and_upcoming_respect_date_boundaries() {
    let db = database().await;
    let repo = CompetitionRepository::new(db.pool());
    let comp = seed_competition(&db, "Pierra Menta", date(2026, 3, 11), date(2026, 3, 14)).await;

    // Both boundary days count as ongoing.
    assert_eq!(repo.ongoing(date(2026, 3, 11)).await.unwrap().len(), 1);
    assert_eq!(repo.ongoing(date(2026, 3, 14)).await.unwrap().len(), 1);
    assert!(repo.ongoing(date(2026, 3, 15)).await.unwrap().is_empty());

    assert_eq!(repo.upcoming(date(2026, 3, 10)).await.unwrap().len(), 1);
    assert!(repo.upcoming(date(2026, 3, 11)).await.unwrap().is_empty());

    assert_eq!(comp.status_on(date(2026, 3, 10)), CompetitionStatus::Upcoming);
    assert_eq!(comp.status_on(date(2026, 3, 12)), CompetitionStatus::Ongoing);
    assert_eq!(comp.status_on(date(2026, 3, 15)), CompetitionStatus::Past);
}

#[tokio::test]
async fn collections_return_summaries_in_default_order() {
    let db = database().await;
    let repo = CompetitionRepository::new(db.pool());
    seed_competition(&db, "Early", date(2026, 1, 5), date(2026, 1, 6)).await;
    seed_competition(&db, "Late", date(2026, 5, 5), date(2026, 5, 6)).await;

    let all = repo.all().await.unwrap();
    assert_eq!(all.len(), 2);
    // Newest start date first.
    assert_eq!(all[0].name, "Late");
    assert_eq!(all[1].name, "Early");

    let first = repo.first().await.unwrap().unwrap();
    let last = repo.last().await.unwrap().unwrap();
    assert_eq!(first.name, "Late");
    assert_eq!(last.name, "Early");
}
