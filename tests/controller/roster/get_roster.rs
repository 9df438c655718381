use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pokeparty::{
    model::roster::RosterEntryDto,
    server::{controller::roster::get_roster, model::session::user::SessionUserId},
};
use pokeparty_test_utils::prelude::*;

use crate::{controller::json_body, TestContextExt};

#[tokio::test]
/// Expect 200 with the user's roster entries
async fn returns_roster_of_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_species_types()
        .with_user("ash")
        .build()
        .await?;
    test.roster().insert_typed_entry(1, "1", "Grass").await?;
    test.roster().insert_team(1, &["4"]).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_roster(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let roster: Vec<RosterEntryDto> = json_body(resp).await;
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].species_type.as_deref(), Some("Grass"));
    assert!(roster[0].is_favorite);
    assert!(roster[1].is_team_member);

    Ok(())
}

#[tokio::test]
/// Expect 200 with an empty list for a user without roster entries
async fn returns_empty_roster() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = get_roster(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let roster: Vec<RosterEntryDto> = json_body(resp).await;
    assert!(roster.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 401 when no user is in session
async fn returns_unauthorized_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = get_roster(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
