use pokeparty::server::{
    error::{roster::RosterError, Error},
    model::roster::ToggleAction,
    service::roster::RosterService,
};
use pokeparty_test_utils::prelude::*;

use crate::TestContextExt;

const FIVE_MEMBERS: [&str; 5] = ["1", "4", "7", "10", "13"];
const SIX_MEMBERS: [&str; 6] = ["1", "4", "7", "10", "13", "16"];

/// Adding to a team of five succeeds and fills the team.
///
/// Expected: Ok with action Added, flag true, 6 members
#[tokio::test]
async fn adds_sixth_member() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_endpoint("25", 25, "pikachu", &["electric"], 1)
        .build()
        .await?;
    test.roster().insert_team(1, &FIVE_MEMBERS).await?;
    let catalog = test.catalog_client();

    let result = RosterService::new(&test.db, &catalog)
        .toggle_team(1, "25")
        .await;

    test.assert_mocks();
    let outcome = result.unwrap();
    assert_eq!(outcome.action, ToggleAction::Added);
    assert!(outcome.flag);
    assert_eq!(test.roster().count_team_members(1).await?, 6);

    Ok(())
}

/// Adding a never-seen species to a full team is rejected without creating its entry.
///
/// Expected: Err with TeamFull carrying a false flag, no entry for the species
#[tokio::test]
async fn rejects_new_species_when_team_full() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_endpoint("26", 26, "raichu", &["electric"], 1)
        .build()
        .await?;
    test.roster().insert_team(1, &SIX_MEMBERS).await?;
    let catalog = test.catalog_client();

    let result = RosterService::new(&test.db, &catalog)
        .toggle_team(1, "26")
        .await;

    assert!(matches!(
        result,
        Err(Error::RosterError(RosterError::TeamFull {
            current_flag: false,
            ..
        }))
    ));
    assert!(test.roster().get_entry(1, "26").await?.is_none());
    assert_eq!(test.roster().count_team_members(1).await?, 6);

    Ok(())
}

/// Repeated additions to a full team are all rejected and never mutate the store.
///
/// Expected: Err with TeamFull each time, favorite entry left untouched
#[tokio::test]
async fn repeated_rejections_leave_store_untouched() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .build()
        .await?;
    test.roster().insert_team(1, &SIX_MEMBERS).await?;
    let favorite = test.roster().insert_entry(1, "150", true, false).await?;
    let catalog = test.catalog_client();

    for _ in 0..3 {
        let result = RosterService::new(&test.db, &catalog)
            .toggle_team(1, "150")
            .await;

        assert!(matches!(
            result,
            Err(Error::RosterError(RosterError::TeamFull {
                current_flag: false,
                ..
            }))
        ));
    }

    let entry = test.roster().get_entry(1, "150").await?.unwrap();
    assert_eq!(entry, favorite);
    assert_eq!(test.roster().count_entries(1).await?, 7);
    assert_eq!(test.roster().count_team_members(1).await?, 6);

    Ok(())
}

/// Toggling a team member removes it.
///
/// Expected: Ok with action Removed, flag false, one member fewer
#[tokio::test]
async fn removes_existing_member() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .build()
        .await?;
    test.roster().insert_team(1, &FIVE_MEMBERS).await?;
    let catalog = test.catalog_client();

    let result = RosterService::new(&test.db, &catalog)
        .toggle_team(1, "4")
        .await;

    let outcome = result.unwrap();
    assert_eq!(outcome.action, ToggleAction::Removed);
    assert!(!outcome.flag);
    assert_eq!(test.roster().count_team_members(1).await?, 4);

    Ok(())
}

/// Removing a member of a full team is never blocked by the limit.
///
/// Expected: Ok with action Removed
#[tokio::test]
async fn removes_member_of_full_team() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .build()
        .await?;
    test.roster().insert_team(1, &SIX_MEMBERS).await?;
    let catalog = test.catalog_client();

    let result = RosterService::new(&test.db, &catalog)
        .toggle_team(1, "16")
        .await;

    assert!(matches!(result, Ok(ref o) if o.action == ToggleAction::Removed));
    assert_eq!(test.roster().count_team_members(1).await?, 5);

    Ok(())
}

/// An unknown species without an existing entry is not found and nothing is created.
///
/// Expected: Err with SpeciesNotFound, no entries
#[tokio::test]
async fn fails_for_unknown_species() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_error_endpoint("99999", 404, 1)
        .build()
        .await?;
    let catalog = test.catalog_client();

    let result = RosterService::new(&test.db, &catalog)
        .toggle_team(1, "99999")
        .await;

    test.assert_mocks();
    assert!(matches!(
        result,
        Err(Error::RosterError(RosterError::SpeciesNotFound(_)))
    ));
    assert_eq!(test.roster().count_entries(1).await?, 0);

    Ok(())
}

/// A catalog that stays unavailable is treated as not found after three attempts.
///
/// Expected: Err with SpeciesNotFound, three catalog requests, no entries
#[tokio::test]
async fn fails_when_catalog_unavailable() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_error_endpoint("25", 503, 3)
        .build()
        .await?;
    let catalog = test.catalog_client();

    let result = RosterService::new(&test.db, &catalog)
        .toggle_team(1, "25")
        .await;

    test.assert_mocks();
    assert!(matches!(
        result,
        Err(Error::RosterError(RosterError::SpeciesNotFound(_)))
    ));
    assert_eq!(test.roster().count_entries(1).await?, 0);

    Ok(())
}

/// Adding then removing a species returns it to a non-member without duplicating it.
///
/// Expected: Added then Removed, a single entry with a false flag, one catalog request
#[tokio::test]
async fn toggling_twice_restores_membership() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_endpoint("25", 25, "pikachu", &["electric"], 1)
        .build()
        .await?;
    let catalog = test.catalog_client();
    let roster_service = RosterService::new(&test.db, &catalog);

    let first = roster_service.toggle_team(1, "25").await.unwrap();
    let second = roster_service.toggle_team(1, "25").await.unwrap();

    test.assert_mocks();
    assert_eq!(first.action, ToggleAction::Added);
    assert_eq!(second.action, ToggleAction::Removed);
    assert!(!second.flag);
    assert_eq!(test.roster().count_entries(1).await?, 1);
    assert!(!test.roster().get_entry(1, "25").await?.unwrap().is_team_member);

    Ok(())
}

/// A species requested by name and by ID resolves to the same entry.
///
/// Expected: a single entry keyed by the catalog ID
#[tokio::test]
async fn resolves_name_and_id_to_same_entry() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_endpoint("pikachu", 25, "pikachu", &["electric"], 1)
        .build()
        .await?;
    let catalog = test.catalog_client();
    let roster_service = RosterService::new(&test.db, &catalog);

    let added = roster_service.toggle_team(1, "pikachu").await.unwrap();
    let removed = roster_service.toggle_team(1, "25").await.unwrap();

    test.assert_mocks();
    assert_eq!(added.species_code, "25");
    assert_eq!(removed.action, ToggleAction::Removed);
    assert_eq!(test.roster().count_entries(1).await?, 1);

    Ok(())
}

/// Two concurrent additions at five members: exactly one succeeds.
///
/// Expected: one Ok, one TeamFull, 6 members, no entry for the rejected species
#[tokio::test]
async fn concurrent_additions_never_exceed_limit() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_endpoint("25", 25, "pikachu", &["electric"], 1)
        .with_species_endpoint("26", 26, "raichu", &["electric"], 1)
        .build()
        .await?;
    test.roster().insert_team(1, &FIVE_MEMBERS).await?;
    let catalog = test.catalog_client();
    let roster_service = RosterService::new(&test.db, &catalog);

    let (first, second) = tokio::join!(
        roster_service.toggle_team(1, "25"),
        roster_service.toggle_team(1, "26")
    );

    test.assert_mocks();
    let results = [first, second];
    let added: Vec<&str> = results
        .iter()
        .filter_map(|r| r.as_ref().ok().map(|o| o.species_code.as_str()))
        .collect();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(Error::RosterError(RosterError::TeamFull { .. }))))
        .count();

    assert_eq!(added.len(), 1);
    assert_eq!(rejected, 1);
    assert_eq!(test.roster().count_team_members(1).await?, 6);
    assert_eq!(test.roster().count_entries(1).await?, 6);

    Ok(())
}

/// Many concurrent additions from an empty team fill it to exactly six members.
///
/// Expected: 6 successes, 4 TeamFull rejections
#[tokio::test]
async fn concurrent_burst_fills_team_exactly() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_roster_tables().with_user("ash");
    for id in 1..=10 {
        builder = builder.with_species_endpoint(id.to_string(), id, "bulbasaur", &["grass"], 1);
    }
    let mut test = builder.build().await?;
    let catalog = test.catalog_client();
    let roster_service = RosterService::new(&test.db, &catalog);

    let codes: Vec<String> = (1..=10).map(|id: i64| id.to_string()).collect();
    let results =
        futures::future::join_all(codes.iter().map(|code| roster_service.toggle_team(1, code)))
            .await;

    let added = results.iter().filter(|r| r.is_ok()).count();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(Error::RosterError(RosterError::TeamFull { .. }))))
        .count();

    assert_eq!(added, 6);
    assert_eq!(rejected, 4);
    assert_eq!(test.roster().count_team_members(1).await?, 6);

    Ok(())
}

/// Team limits are tracked per user.
///
/// Expected: Ok for a user with an empty team while another user's team is full
#[tokio::test]
async fn limit_is_per_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_user("misty")
        .with_species_endpoint("25", 25, "pikachu", &["electric"], 1)
        .build()
        .await?;
    test.roster().insert_team(1, &SIX_MEMBERS).await?;
    let catalog = test.catalog_client();

    let result = RosterService::new(&test.db, &catalog)
        .toggle_team(2, "25")
        .await;

    assert!(matches!(result, Ok(ref o) if o.flag));
    assert_eq!(test.roster().count_team_members(2).await?, 1);

    Ok(())
}
