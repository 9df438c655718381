use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pokeparty::{
    model::{
        api::ErrorDto,
        roster::{ToggleDto, ToggleRequestDto},
    },
    server::{controller::roster::toggle_team, model::session::user::SessionUserId},
};
use pokeparty_test_utils::prelude::*;

use super::request;
use crate::{controller::json_body, TestContextExt};

#[tokio::test]
/// Expect 200 with the new flag when adding a species to the team
async fn returns_success_when_adding() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_endpoint("25", 25, "pikachu", &["electric"], 1)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("25")),
    )
    .await;

    test.assert_mocks();
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ToggleDto = json_body(resp).await;
    assert_eq!(body.message, "Pikachu added to battle team");
    assert!(body.updated_flag);

    Ok(())
}

#[tokio::test]
/// Expect 200 with a false flag when removing a team member
async fn returns_success_when_removing() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .build()
        .await?;
    test.roster().insert_team(1, &["4"]).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("4")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ToggleDto = json_body(resp).await;
    assert_eq!(body.message, "Species 4 removed from battle team");
    assert!(!body.updated_flag);

    Ok(())
}

#[tokio::test]
/// Expect 403 carrying the unchanged flag when the team is full
async fn returns_forbidden_when_team_full() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_endpoint("26", 26, "raichu", &["electric"], 1)
        .build()
        .await?;
    test.roster()
        .insert_team(1, &["1", "2", "3", "4", "5", "6"])
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("26")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: ToggleDto = json_body(resp).await;
    assert!(!body.updated_flag);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the catalog does not know the species
async fn returns_not_found_for_unknown_species() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_error_endpoint("99999", 404, 1)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("99999")),
    )
    .await;

    test.assert_mocks();
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("99999"));

    Ok(())
}

#[tokio::test]
/// Expect 400 when the request carries no species code
async fn returns_bad_request_for_missing_species_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(ToggleRequestDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 401 when no user is in session
async fn returns_unauthorized_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_roster_tables().build().await?;

    let result = toggle_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("25")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the session user no longer exists
async fn returns_not_found_and_clears_session_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_species_endpoint("25", 25, "pikachu", &["electric"], 1)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("25")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 500 when required database tables don't exist
async fn returns_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_team(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("25")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
