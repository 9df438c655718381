use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pokeparty::{
    model::roster::ToggleDto,
    server::{controller::roster::toggle_favorite, model::session::user::SessionUserId},
};
use pokeparty_test_utils::prelude::*;

use super::request;
use crate::{controller::json_body, TestContextExt};

#[tokio::test]
/// Expect 200 with the new flag when marking a species as favorite
async fn returns_success_when_adding() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_endpoint("bulbasaur", 1, "bulbasaur", &["grass", "poison"], 1)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_favorite(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("bulbasaur")),
    )
    .await;

    test.assert_mocks();
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ToggleDto = json_body(resp).await;
    assert_eq!(body.message, "Bulbasaur added to favorites");
    assert!(body.updated_flag);

    Ok(())
}

#[tokio::test]
/// Expect 200 with a false flag when removing a favorite
async fn returns_success_when_removing() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .build()
        .await?;
    test.roster().insert_entry(1, "1", true, false).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_favorite(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("1")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ToggleDto = json_body(resp).await;
    assert!(!body.updated_flag);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a whitespace-only species code
async fn returns_bad_request_for_blank_species_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = toggle_favorite(
        State(test.to_app_state()),
        test.session.clone(),
        Json(request("  ")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
