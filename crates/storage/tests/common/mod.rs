#![allow(dead_code)]

use chrono::NaiveDate;
use storage::Database;
use storage::dto::{CreateAthleteRequest, CreateCompetitionRequest, CreateRaceRequest};
use storage::models::{Athlete, Competition, Race};
use storage::repository::{
    AthleteRepository, CompetitionRepository, RaceRepository, RaceTypeRepository,
};

pub async fn database() -> Database {
    let db = Database::in_memory().await.expect("in-memory database");
    db.run_migrations().await.expect("migrations");
    db
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

pub async fn seed_competition(
    db: &Database,
    name: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Competition {
    CompetitionRepository::new(db.pool())
        .create(&CreateCompetitionRequest {
            name: name.to_string(),
            city: "Arêches-Beaufort".to_string(),
            place: "Beaufortain".to_string(),
            country: "FRA".to_string(),
            description: None,
            start_date: start,
            end_date: end,
            webpage_url: None,
        })
        .await
        .expect("seed competition")
}

pub async fn seed_race(db: &Database, competition_id: i64, name: &str) -> Race {
    let race_type = RaceTypeRepository::new(db.pool())
        .find_by_name("Individual")
        .await
        .expect("race type lookup")
        .expect("seeded race type");

    RaceRepository::new(db.pool())
        .create(&CreateRaceRequest {
            competition_id,
            race_type_id: race_type.id,
            name: name.to_string(),
            stage_type: "final".to_string(),
            stage_name: "Final".to_string(),
            heat_number: None,
            position: 1,
            scheduled_at: None,
            gender_category: "women".to_string(),
        })
        .await
        .expect("seed race")
}

pub async fn seed_athlete(db: &Database, first: &str, last: &str) -> Athlete {
    AthleteRepository::new(db.pool())
        .create(&CreateAthleteRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            country: "SUI".to_string(),
            gender: "F".to_string(),
            license_number: None,
        })
        .await
        .expect("seed athlete")
}
