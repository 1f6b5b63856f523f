mod common;

use common::{address, client, setup_state};
use mystore_api::{
    dto::clients::{CreateClientRequest, UpdateClientRequest},
    entity::addresses::{ActiveModel as AddressActive, Entity as Addresses},
    error::AppError,
    repository::addresses,
    services::{address_service, client_service},
};
use sea_orm::{
    ActiveValue::{NotSet, Unchanged},
    EntityTrait, Set,
};

#[tokio::test]
async fn add_then_remove_address_scenario() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let pedro = client_service::create_client(&state, client("Pedro", "p@x.com", "555")).await?;
    assert!(pedro.addresses.is_empty());

    let with_address =
        client_service::add_address(&state, pedro.id, address("123 Main St")).await?;
    assert_eq!(with_address.addresses.len(), 1);
    let attached = &with_address.addresses[0];
    assert_eq!(attached.street, "123 Main St");
    assert_eq!(attached.client_id, Some(pedro.id));

    let without = client_service::remove_address(&state, pedro.id, attached.id).await?;
    assert!(without.addresses.is_empty());

    Ok(())
}

#[tokio::test]
async fn added_address_is_visible_on_subsequent_reads() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ana = client_service::create_client(&state, client("Ana", "a@x.com", "1")).await?;

    client_service::add_address(&state, ana.id, address("1 First Ave")).await?;
    client_service::add_address(&state, ana.id, address("2 Second Ave")).await?;

    let reloaded = client_service::get_client(&state, ana.id).await?;
    let streets: Vec<&str> = reloaded.addresses.iter().map(|a| a.street.as_str()).collect();
    assert_eq!(streets, vec!["1 First Ave", "2 Second Ave"]);
    assert!(reloaded.addresses.iter().all(|a| a.client_id == Some(ana.id)));

    let standalone = address_service::get_address(&state, reloaded.addresses[0].id).await?;
    assert_eq!(standalone.client_id, Some(ana.id));

    Ok(())
}

#[tokio::test]
async fn removed_address_row_is_deleted() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ana = client_service::create_client(&state, client("Ana", "a@x.com", "1")).await?;
    let ana = client_service::add_address(&state, ana.id, address("1 First Ave")).await?;
    let ana = client_service::add_address(&state, ana.id, address("2 Second Ave")).await?;
    let removed_id = ana.addresses[0].id;
    let kept_id = ana.addresses[1].id;

    let after = client_service::remove_address(&state, ana.id, removed_id).await?;

    assert_eq!(after.addresses.len(), 1);
    assert_eq!(after.addresses[0].id, kept_id);
    assert!(!addresses::exists_by_id(&state.orm, removed_id).await?);
    assert!(matches!(
        address_service::get_address(&state, removed_id).await,
        Err(AppError::NotFound)
    ));

    Ok(())
}

#[tokio::test]
async fn removing_unknown_address_returns_client_unchanged() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ana = client_service::create_client(&state, client("Ana", "a@x.com", "1")).await?;
    let before = client_service::add_address(&state, ana.id, address("1 First Ave")).await?;

    let after = client_service::remove_address(&state, ana.id, 999).await?;

    assert_eq!(after, before);
    Ok(())
}

#[tokio::test]
async fn removing_another_clients_address_leaves_it_alone() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ana = client_service::create_client(&state, client("Ana", "a@x.com", "1")).await?;
    let bob = client_service::create_client(&state, client("Bob", "b@x.com", "2")).await?;
    let bob = client_service::add_address(&state, bob.id, address("9 Bob St")).await?;
    let bobs_address = bob.addresses[0].id;

    let ana_after = client_service::remove_address(&state, ana.id, bobs_address).await?;

    assert!(ana_after.addresses.is_empty());
    let still_there = address_service::get_address(&state, bobs_address).await?;
    assert_eq!(still_there.client_id, Some(bob.id));
    Ok(())
}

#[tokio::test]
async fn unknown_client_is_not_found_for_address_mutations() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let added = client_service::add_address(&state, 404, address("1 Nowhere")).await;
    assert!(matches!(added, Err(AppError::NotFound)));

    let removed = client_service::remove_address(&state, 404, 1).await;
    assert!(matches!(removed, Err(AppError::NotFound)));

    // Nothing was written by the failed attach.
    assert!(Addresses::find().all(&state.orm).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_client_cascades_to_addresses() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ana = client_service::create_client(&state, client("Ana", "a@x.com", "1")).await?;
    let ana = client_service::add_address(&state, ana.id, address("1 First Ave")).await?;
    let ana = client_service::add_address(&state, ana.id, address("2 Second Ave")).await?;
    let detached = address_service::create_address(&state, address("5 Loose Ln")).await?;

    client_service::delete_client(&state, ana.id).await?;

    assert!(matches!(
        client_service::get_client(&state, ana.id).await,
        Err(AppError::NotFound)
    ));
    for owned in &ana.addresses {
        assert!(!addresses::exists_by_id(&state.orm, owned.id).await?);
    }
    let remaining = Addresses::find().all(&state.orm).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, detached.id);

    assert!(matches!(
        client_service::delete_client(&state, ana.id).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn update_client_overwrites_contact_and_keeps_addresses() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let john =
        client_service::create_client(&state, client("John Doe", "john.doe@example.com", "123"))
            .await?;
    let john = client_service::add_address(&state, john.id, address("123 Main St")).await?;

    let updated = client_service::update_client(
        &state,
        john.id,
        UpdateClientRequest {
            name: "Updated Name".into(),
            email: "updated.email@example.com".into(),
            phone: "111-222-3333".into(),
        },
    )
    .await?;

    assert_eq!(updated.name, "Updated Name");
    assert_eq!(updated.email, "updated.email@example.com");
    assert_eq!(updated.phone, "111-222-3333");
    assert_eq!(updated.addresses, john.addresses);

    let missing = client_service::update_client(
        &state,
        404,
        UpdateClientRequest {
            name: "x".into(),
            email: "x".into(),
            phone: "x".into(),
        },
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn create_client_attaches_listed_addresses() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let created = client_service::create_client(
        &state,
        CreateClientRequest {
            addresses: vec![address("1 First Ave"), address("2 Second Ave")],
            ..client("Jane Smith", "jane.smith@example.com", "987-654-3210")
        },
    )
    .await?;

    assert_eq!(created.addresses.len(), 2);
    assert!(created.addresses.iter().all(|a| a.client_id == Some(created.id)));

    let all = client_service::list_clients(&state).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
    Ok(())
}

#[tokio::test]
async fn address_update_preserves_owner() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let ana = client_service::create_client(&state, client("Ana", "a@x.com", "1")).await?;
    let ana = client_service::add_address(&state, ana.id, address("1 First Ave")).await?;
    let address_id = ana.addresses[0].id;

    let mut changed = address("77 New St");
    changed.city = "Othertown".into();
    let updated = address_service::update_address(&state, address_id, changed).await?;

    assert_eq!(updated.id, address_id);
    assert_eq!(updated.street, "77 New St");
    assert_eq!(updated.city, "Othertown");
    assert_eq!(updated.client_id, Some(ana.id));

    let reloaded = client_service::get_client(&state, ana.id).await?;
    assert_eq!(reloaded.addresses[0], updated);
    Ok(())
}

#[tokio::test]
async fn standalone_address_lifecycle() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let created = address_service::create_address(&state, address("123 Main St")).await?;
    assert_eq!(created.client_id, None);
    assert_eq!(address_service::get_address(&state, created.id).await?, created);

    assert!(matches!(
        address_service::update_address(&state, created.id + 1, address("x")).await,
        Err(AppError::NotFound)
    ));

    address_service::delete_address(&state, created.id).await?;
    assert!(matches!(
        address_service::delete_address(&state, created.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        address_service::get_address(&state, created.id).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn saving_a_vanished_address_maps_to_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let created = address_service::create_address(&state, address("1 Gone St")).await?;
    address_service::delete_address(&state, created.id).await?;

    // Same write the update path performs once its existence check has passed.
    let stale = AddressActive {
        id: Unchanged(created.id),
        street: Set("2 Gone St".into()),
        city: Set("Anytown".into()),
        state: Set("CA".into()),
        zip_code: Set("12345".into()),
        client_id: NotSet,
    };
    let err = match addresses::save(&state.orm, stale).await {
        Ok(address) => anyhow::bail!("stale update wrote {address:?}"),
        Err(err) => AppError::from(err),
    };
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}
