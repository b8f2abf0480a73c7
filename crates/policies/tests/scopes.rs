use chrono::NaiveDate;
use policies::{Access, CompetitionScope, IncidentScope, RaceScope, ReportScope};
use storage::Database;
use storage::dto::{CreateCompetitionRequest, CreateIncidentRequest, CreateRaceRequest,
    CreateReportRequest, CreateUserRequest};
use storage::models::{RoleName, User};
use storage::repository::{
    CompetitionRepository, IncidentRepository, RaceRepository, RaceTypeRepository,
    ReportRepository, RoleRepository, UserRepository,
};

async fn database() -> Database {
    let db = Database::in_memory().await.unwrap();
    db.run_migrations().await.unwrap();
    db
}

async fn seed_user(db: &Database, email: &str, role: Option<RoleName>, country: Option<&str>) -> User {
    let role_id = match role {
        Some(name) => Some(
            RoleRepository::new(db.pool())
                .find_by_name(name)
                .await
                .unwrap()
                .unwrap()
                .id,
        ),
        None => None,
    };
    UserRepository::new(db.pool())
        .create(&CreateUserRequest {
            email: email.to_string(),
            name: email.to_string(),
            admin: false,
            role_id,
            country: country.map(str::to_string),
        })
        .await
        .unwrap()
}

async fn seed_incident(db: &Database, country: &str, description: &str) -> i64 {
    let competition = CompetitionRepository::new(db.pool())
        .create(&CreateCompetitionRequest {
            name: format!("Cup {country}"),
            city: "Somewhere".into(),
            place: "Course".into(),
            country: country.into(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
            webpage_url: None,
        })
        .await
        .unwrap();

    let race_type = RaceTypeRepository::new(db.pool())
        .find_by_name("Individual")
        .await
        .unwrap()
        .unwrap();

    let race = RaceRepository::new(db.pool())
        .create(&CreateRaceRequest {
            competition_id: competition.id,
            race_type_id: race_type.id,
            name: format!("Individual {country}"),
            stage_type: "final".into(),
            stage_name: "Final".into(),
            heat_number: None,
            position: 1,
            scheduled_at: None,
            gender_category: "women".into(),
        })
        .await
        .unwrap();

    IncidentRepository::new(db.pool())
        .create(&CreateIncidentRequest {
            race_id: race.id,
            race_location_id: None,
            reported_by: None,
            description: description.into(),
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn guests_resolve_every_scope_to_nothing() {
    let db = database().await;
    seed_incident(&db, "FRA", "cut gate").await;

    let access = Access::of(None);
    let pool = db.pool();

    assert!(CompetitionScope::new(&access)
        .resolve(&CompetitionRepository::new(pool))
        .await
        .unwrap()
        .is_empty());
    assert!(RaceScope::new(&access)
        .resolve(&RaceRepository::new(pool))
        .await
        .unwrap()
        .is_empty());
    assert!(IncidentScope::new(&access)
        .resolve(&IncidentRepository::new(pool))
        .await
        .unwrap()
        .is_empty());
    assert!(ReportScope::new(&access)
        .resolve(&ReportRepository::new(pool))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn national_referees_see_only_their_countrys_incidents() {
    let db = database().await;
    let fra = seed_incident(&db, "FRA", "skipped a checkpoint").await;
    seed_incident(&db, "ITA", "late start").await;

    let referee = seed_user(&db, "nat@example.com", Some(RoleName::NationalReferee), Some("FRA")).await;
    let access = Access::of(Some(&referee));
    let visible = IncidentScope::new(&access)
        .resolve(&IncidentRepository::new(db.pool()))
        .await
        .unwrap();

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, fra);
}

#[tokio::test]
async fn national_referee_without_country_sees_nothing() {
    let db = database().await;
    seed_incident(&db, "FRA", "skipped a checkpoint").await;

    let referee = seed_user(&db, "stateless@example.com", Some(RoleName::NationalReferee), None).await;
    let access = Access::of(Some(&referee));
    let visible = IncidentScope::new(&access)
        .resolve(&IncidentRepository::new(db.pool()))
        .await
        .unwrap();

    assert!(visible.is_empty());
}

#[tokio::test]
async fn broad_roles_see_all_incidents() {
    let db = database().await;
    seed_incident(&db, "FRA", "skipped a checkpoint").await;
    seed_incident(&db, "ITA", "late start").await;

    for (email, role) in [
        ("int@example.com", RoleName::InternationalReferee),
        ("var@example.com", RoleName::VarOperator),
        ("tv@example.com", RoleName::BroadcastViewer),
        ("jury@example.com", RoleName::JuryPresident),
    ] {
        let user = seed_user(&db, email, Some(role), None).await;
        let access = Access::of(Some(&user));
        let visible = IncidentScope::new(&access)
            .resolve(&IncidentRepository::new(db.pool()))
            .await
            .unwrap();
        assert_eq!(visible.len(), 2, "role {role:?} should see every incident");
    }
}

#[tokio::test]
async fn reporters_see_only_their_own_reports() {
    let db = database().await;
    let alice = seed_user(&db, "alice@example.com", Some(RoleName::NationalReferee), Some("FRA")).await;
    let bob = seed_user(&db, "bob@example.com", Some(RoleName::InternationalReferee), None).await;
    let manager = seed_user(&db, "rm@example.com", Some(RoleName::RefereeManager), None).await;

    let reports = ReportRepository::new(db.pool());
    for (author, title) in [(&alice, "Gate 4 contact"), (&bob, "Start order dispute")] {
        reports
            .create(&CreateReportRequest {
                user_id: author.id,
                incident_id: None,
                title: title.into(),
                body: None,
            })
            .await
            .unwrap();
    }

    let alices = ReportScope::new(&Access::of(Some(&alice)))
        .resolve(&reports)
        .await
        .unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].user_id, alice.id);

    let bobs = ReportScope::new(&Access::of(Some(&bob)))
        .resolve(&reports)
        .await
        .unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].user_id, bob.id);

    let everything = ReportScope::new(&Access::of(Some(&manager)))
        .resolve(&reports)
        .await
        .unwrap();
    assert_eq!(everything.len(), 2);
}

#[tokio::test]
async fn authenticated_users_list_competitions_and_races() {
    let db = database().await;
    seed_incident(&db, "FRA", "anything").await;

    let viewer = seed_user(&db, "tv2@example.com", Some(RoleName::BroadcastViewer), None).await;
    let access = Access::of(Some(&viewer));

    let competitions = CompetitionScope::new(&access)
        .resolve(&CompetitionRepository::new(db.pool()))
        .await
        .unwrap();
    assert_eq!(competitions.len(), 1);

    let races = RaceScope::new(&access)
        .resolve(&RaceRepository::new(db.pool()))
        .await
        .unwrap();
    assert_eq!(races.len(), 1);
}
