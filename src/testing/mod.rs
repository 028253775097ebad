//! Test support: an in-memory, call-counting `EntityStore` and helpers for
//! building an app instance plus bearer tokens. Lives outside `#[cfg(test)]`
//! because the integration suites in `tests/` link against it.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use crate::auth::{generate_jwt, Claims, Role};
use crate::database::models::{
    Keyed, MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem, UcsbOrganization,
};
use crate::database::store::EntityStore;
use crate::database::DatabaseError;
use crate::handlers;
use crate::state::AppState;

/// In-memory `EntityStore` keeping rows in key order and counting every
/// contract call, so tests can assert "exactly one save" the way the
/// original service's Mockito tests did.
pub struct MemoryStore<E: Keyed> {
    rows: Mutex<BTreeMap<E::Key, E>>,
    next_key: AtomicI64,
    find_by_id_calls: AtomicUsize,
    find_all_calls: AtomicUsize,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl<E: Keyed + Clone> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_key: AtomicI64::new(1),
            find_by_id_calls: AtomicUsize::new(0),
            find_all_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Insert a row directly, bypassing the call counters
    pub fn seed(&self, entity: E) {
        let mut rows = self.rows.lock().unwrap();
        rows.insert(entity.key(), entity);
    }

    /// Snapshot of all rows in key order
    pub fn rows(&self) -> Vec<E> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

impl<E: Keyed + Clone> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E> EntityStore<E, E::Key> for MemoryStore<E>
where
    E: Keyed + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, key: &E::Key) -> Result<Option<E>, DatabaseError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().get(key).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, DatabaseError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn save(&self, mut entity: E) -> Result<E, DatabaseError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();

        if entity.needs_generated_key() {
            loop {
                let candidate = self.next_key.fetch_add(1, Ordering::SeqCst);
                entity.set_generated_key(candidate);
                if !rows.contains_key(&entity.key()) {
                    break;
                }
            }
        }

        rows.insert(entity.key(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, entity: &E) -> Result<(), DatabaseError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().remove(&entity.key());
        Ok(())
    }
}

/// Concrete store handles kept alongside the app so tests can seed rows and
/// inspect call counts after requests run.
pub struct TestStores {
    pub reviews: Arc<MemoryStore<MenuItemReview>>,
    pub menu_items: Arc<MemoryStore<UcsbDiningCommonsMenuItem>>,
    pub recommendation_requests: Arc<MemoryStore<RecommendationRequest>>,
    pub organizations: Arc<MemoryStore<UcsbOrganization>>,
}

impl TestStores {
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(MemoryStore::new()),
            menu_items: Arc::new(MemoryStore::new()),
            recommendation_requests: Arc::new(MemoryStore::new()),
            organizations: Arc::new(MemoryStore::new()),
        }
    }
}

impl Default for TestStores {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full router against fresh in-memory stores
pub fn test_app() -> (Router, TestStores) {
    let stores = TestStores::new();

    let state = AppState {
        reviews: stores.reviews.clone(),
        menu_items: stores.menu_items.clone(),
        recommendation_requests: stores.recommendation_requests.clone(),
        organizations: stores.organizations.clone(),
        pool: None,
    };

    (handlers::app(state), stores)
}

/// Authorization header value for a regular user
pub fn user_auth_header() -> String {
    bearer("cgaucho@ucsb.edu", &[Role::User])
}

/// Authorization header value for an admin (admins also carry USER)
pub fn admin_auth_header() -> String {
    bearer("phtcon@ucsb.edu", &[Role::Admin, Role::User])
}

fn bearer(email: &str, roles: &[Role]) -> String {
    let token = generate_jwt(Claims::new(email, roles)).expect("failed to sign test token");
    format!("Bearer {}", token)
}
