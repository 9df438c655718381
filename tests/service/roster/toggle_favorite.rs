use pokeparty::server::{
    error::{roster::RosterError, Error},
    model::roster::ToggleAction,
    service::roster::RosterService,
};
use pokeparty_test_utils::prelude::*;

use crate::TestContextExt;

/// Favoriting a never-seen species creates exactly one entry, repeated toggles reuse it.
///
/// Expected: Added, Removed, Added with a single entry and one catalog request
#[tokio::test]
async fn creates_single_entry_across_toggles() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_species_types()
        .with_user("ash")
        .with_species_endpoint("7", 7, "squirtle", &["water"], 1)
        .build()
        .await?;
    let catalog = test.catalog_client();
    let roster_service = RosterService::new(&test.db, &catalog);

    let mut actions = Vec::new();
    for _ in 0..3 {
        actions.push(roster_service.toggle_favorite(1, "7").await.unwrap().action);
    }

    test.assert_mocks();
    assert_eq!(
        actions,
        vec![
            ToggleAction::Added,
            ToggleAction::Removed,
            ToggleAction::Added
        ]
    );
    assert_eq!(test.roster().count_entries(1).await?, 1);
    let entry = test.roster().get_entry(1, "7").await?.unwrap();
    assert!(entry.is_favorite);
    assert!(!entry.is_team_member);
    assert_eq!(entry.name, "Squirtle");
    assert!(entry.species_type_id.is_some());

    Ok(())
}

/// An unknown species cannot be favorited.
///
/// Expected: Err with SpeciesNotFound, no entries
#[tokio::test]
async fn fails_for_unknown_species() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_roster_tables()
        .with_user("ash")
        .with_species_error_endpoint("missingno", 404, 1)
        .build()
        .await?;
    let catalog = test.catalog_client();

    let result = RosterService::new(&test.db, &catalog)
        .toggle_favorite(1, "MissingNo")
        .await;

    test.assert_mocks();
    assert!(matches!(
        result,
        Err(Error::RosterError(RosterError::SpeciesNotFound(_)))
    ));
    assert_eq!(test.roster().count_entries(1).await?, 0);

    Ok(())
}
