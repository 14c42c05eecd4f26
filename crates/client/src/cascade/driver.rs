//! Runs cascade lookups against the API and applies their results.

use shared_types::AppError;

use super::{
    apply_field_change, apply_lookup_result, begin_initial_load, FormState, LookupData,
    LookupQuery, PendingLookup, Tier,
};
use crate::api::ApiClient;
use crate::store::StateHandle;
use crate::transport::Transport;

/// Perform the network call a pending lookup describes.
pub async fn fetch<T: Transport>(
    client: &ApiClient<T>,
    query: &LookupQuery,
) -> Result<LookupData, AppError> {
    match query {
        LookupQuery::States => client.list_states().await.map(LookupData::States),
        LookupQuery::Districts { state } => {
            client.list_districts(state).await.map(LookupData::Districts)
        }
        LookupQuery::Courts { state, district } => client
            .list_courts(state, district)
            .await
            .map(LookupData::Courts),
        LookupQuery::Judges {
            state,
            district,
            court_complex,
        } => client
            .list_judges(state, district, court_complex)
            .await
            .map(LookupData::Judges),
    }
}

/// Apply a field edit immediately and return the lookup it started.
///
/// The downstream reset is visible in `store` as soon as this returns,
/// before any response arrives.
pub fn stage_change<S: StateHandle<FormState>>(
    store: &S,
    tier: Tier,
    value: &str,
) -> Option<PendingLookup> {
    store.update(|form| {
        let (next, pending) = apply_field_change(std::mem::take(form), tier, value);
        *form = next;
        pending
    })
}

/// Run `pending` and fold its outcome into `store`, unless a newer
/// lookup has superseded it in the meantime.
pub async fn resolve<T: Transport, S: StateHandle<FormState>>(
    client: &ApiClient<T>,
    store: &S,
    pending: PendingLookup,
) {
    let result = fetch(client, &pending.query).await;
    store.update(|form| {
        let next = apply_lookup_result(std::mem::take(form), pending.ticket, result);
        *form = next;
    });
}

/// Mount-time load of the states list.
pub async fn load_states<T: Transport, S: StateHandle<FormState>>(client: &ApiClient<T>, store: &S) {
    let pending = store.update(|form| {
        let (next, pending) = begin_initial_load(std::mem::take(form));
        *form = next;
        pending
    });
    resolve(client, store, pending).await;
}

/// Apply an edit and, if it starts a lookup, run it to completion.
pub async fn change_field<T: Transport, S: StateHandle<FormState>>(
    client: &ApiClient<T>,
    store: &S,
    tier: Tier,
    value: &str,
) {
    if let Some(pending) = stage_change(store, tier, value) {
        resolve(client, store, pending).await;
    }
}
