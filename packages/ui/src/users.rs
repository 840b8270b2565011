//! User search and lookup hooks.
//!
//! Both searches follow the same contract: the filter signal is watched,
//! changes are debounced by [`SEARCH_DEBOUNCE`], every dispatched fetch
//! resets the result state before the request and replaces it wholesale on
//! completion, and a stale response (superseded by a newer fetch) never
//! commits. Transport failures collapse to `error = true` with empty
//! results.
//!
//! Single-user lookup short-circuits through a bounded cache so profile
//! views do not re-fetch users they have already seen.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use api::{
    ApiClient, PublicUserSearchQuery, UserRead, UserReadPublic, UserSearchFilters, UserSearchPage,
};
use dioxus::prelude::*;

use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::session::{use_api, use_user_lookup};

const LOOKUP_CACHE_CAPACITY: usize = 256;

/// Result surface of a user search; replaced wholesale on every fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct UserSearchState<U> {
    pub users: Vec<U>,
    pub total: usize,
    pub loading: bool,
    pub error: bool,
}

impl<U> Default for UserSearchState<U> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<U> UserSearchState<U> {
    fn loading() -> Self {
        Self {
            users: Vec::new(),
            total: 0,
            loading: true,
            error: false,
        }
    }

    fn idle() -> Self {
        Self {
            users: Vec::new(),
            total: 0,
            loading: false,
            error: false,
        }
    }

    fn failed() -> Self {
        Self {
            users: Vec::new(),
            total: 0,
            loading: false,
            error: true,
        }
    }

    fn done(page: UserSearchPage<U>) -> Self {
        Self {
            users: page.users,
            total: page.total,
            loading: false,
            error: false,
        }
    }
}

/// Public user search over `GET /users/public`.
#[derive(Clone)]
pub struct PublicUserSearcher {
    client: ApiClient,
    generation: Arc<AtomicU64>,
}

impl PublicUserSearcher {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run one search. Returns `None` when a newer search superseded this
    /// one before it completed; such results must not commit.
    pub async fn run(
        &self,
        query: &PublicUserSearchQuery,
    ) -> Option<UserSearchState<UserReadPublic>> {
        // empty query without emptyOk never reaches the network; the bump
        // still supersedes any fetch that is in flight
        if !query.hits_network() {
            self.generation.fetch_add(1, Ordering::SeqCst);
            return Some(UserSearchState::idle());
        }
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.client.search_public_users(query).await;
        if self.generation.load(Ordering::SeqCst) != scheduled {
            return None;
        }
        Some(match outcome {
            Ok(page) => UserSearchState::done(page),
            Err(e) => {
                tracing::error!("public user search failed: {e}");
                UserSearchState::failed()
            }
        })
    }
}

/// Administrative user search over `GET /users`.
#[derive(Clone)]
pub struct AdminUserSearcher {
    client: ApiClient,
    generation: Arc<AtomicU64>,
}

impl AdminUserSearcher {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn run(&self, filters: &UserSearchFilters) -> Option<UserSearchState<UserRead>> {
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.client.search_users(filters).await;
        if self.generation.load(Ordering::SeqCst) != scheduled {
            return None;
        }
        Some(match outcome {
            Ok(page) => UserSearchState::done(page),
            Err(e) => {
                tracing::error!("user search failed: {e}");
                UserSearchState::failed()
            }
        })
    }
}

/// Debounced public user search bound to a reactive query.
pub fn use_public_user_search(
    query: ReadOnlySignal<PublicUserSearchQuery>,
) -> Signal<UserSearchState<UserReadPublic>> {
    let client = use_api();
    let mut state = use_signal(UserSearchState::default);
    let debouncer = use_hook(Debouncer::new);
    let searcher = use_hook(|| PublicUserSearcher::new(client));

    use_effect(move || {
        let query = query();
        let debouncer = debouncer.clone();
        let searcher = searcher.clone();
        spawn(async move {
            // a query that cannot fetch resolves immediately, without the
            // loading state or the debounce delay
            if query.hits_network() {
                state.set(UserSearchState::loading());
                if !debouncer.wait(SEARCH_DEBOUNCE).await {
                    return;
                }
            }
            if let Some(result) = searcher.run(&query).await {
                state.set(result);
            }
        });
    });

    state
}

/// Debounced administrative user search bound to reactive filters.
pub fn use_user_search(
    filters: ReadOnlySignal<UserSearchFilters>,
) -> Signal<UserSearchState<UserRead>> {
    let client = use_api();
    let mut state = use_signal(UserSearchState::default);
    let debouncer = use_hook(Debouncer::new);
    let searcher = use_hook(|| AdminUserSearcher::new(client));

    use_effect(move || {
        let filters = filters();
        let debouncer = debouncer.clone();
        let searcher = searcher.clone();
        spawn(async move {
            state.set(UserSearchState::loading());
            if !debouncer.wait(SEARCH_DEBOUNCE).await {
                return;
            }
            if let Some(result) = searcher.run(&filters).await {
                state.set(result);
            }
        });
    });

    state
}

/// Bounded user cache: least-recently-used entries are evicted once the
/// capacity is reached.
#[derive(Debug, Default)]
struct LookupCache {
    entries: HashMap<String, UserReadPublic>,
    order: VecDeque<String>,
    capacity: usize,
}

impl LookupCache {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    fn get(&mut self, key: &str) -> Option<UserReadPublic> {
        let hit = self.entries.get(key).cloned()?;
        // move to the back of the recency order
        self.order.retain(|k| k != key);
        self.order.push_back(key.to_string());
        Some(hit)
    }

    fn put(&mut self, key: String, value: UserReadPublic) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.entries.remove(&evicted);
            }
        }
        self.order.retain(|k| k != &key);
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }
}

/// Cached lookup of public users by username or id.
#[derive(Clone)]
pub struct UserLookup {
    client: ApiClient,
    cache: Arc<Mutex<LookupCache>>,
}

impl UserLookup {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: Arc::new(Mutex::new(LookupCache::with_capacity(
                LOOKUP_CACHE_CAPACITY,
            ))),
        }
    }

    /// Get a user, from cache when possible. `None` covers both "not found"
    /// and transport failure; views show the same empty state for either.
    pub async fn get(&self, user: &str) -> Option<UserReadPublic> {
        if let Some(hit) = self.cache.lock().unwrap().get(user) {
            return Some(hit);
        }
        match self.client.public_user(user).await {
            Ok(found) => {
                self.cache
                    .lock()
                    .unwrap()
                    .put(user.to_string(), found.clone());
                Some(found)
            }
            Err(e) => {
                tracing::error!("user lookup for {user} failed: {e}");
                None
            }
        }
    }
}

/// Resolve one public user through the shared cache.
pub fn use_public_user(user: ReadOnlySignal<String>) -> Resource<Option<UserReadPublic>> {
    let lookup = use_user_lookup();
    use_resource(move || {
        let lookup = lookup.clone();
        let user = user();
        async move { lookup.get(&user).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::PathResolution;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(PathResolution::resolve(None, Some(&server.uri())))
    }

    fn public_user_json(username: &str) -> serde_json::Value {
        json!({"id": format!("id-{username}"), "username": username})
    }

    fn user_json(username: &str) -> serde_json::Value {
        json!({
            "id": format!("id-{username}"),
            "username": username,
            "email": format!("{username}@example.org"),
            "name": username,
            "isActive": true
        })
    }

    #[tokio::test]
    async fn test_lookup_hits_network_once_per_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/public/ada"))
            .respond_with(ResponseTemplate::new(200).set_body_json(public_user_json("ada")))
            .expect(1)
            .mount(&server)
            .await;

        let lookup = UserLookup::new(client_for(&server));
        let first = lookup.get("ada").await.unwrap();
        let second = lookup.get("ada").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_cached() {
        let server = MockServer::start().await;
        let lookup = UserLookup::new(client_for(&server));
        assert!(lookup.get("ghost").await.is_none());

        Mock::given(method("GET"))
            .and(path("/users/public/ghost"))
            .respond_with(ResponseTemplate::new(200).set_body_json(public_user_json("ghost")))
            .mount(&server)
            .await;
        assert!(lookup.get("ghost").await.is_some());
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let mut cache = LookupCache::with_capacity(2);
        let user = |name: &str| UserReadPublic {
            id: name.to_string(),
            username: name.to_string(),
            name: None,
            affiliation: None,
            avatar_url: None,
        };
        cache.put("a".to_string(), user("a"));
        cache.put("b".to_string(), user("b"));
        // touch "a" so "b" is the eviction candidate
        assert!(cache.get("a").is_some());
        cache.put("c".to_string(), user("c"));
        assert!(cache.get("b").is_none());
        assert!(cache.get("a").is_some());
        assert!(cache.get("c").is_some());
    }

    #[tokio::test]
    async fn test_failed_search_leaves_users_empty_and_error_set() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/public"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let searcher = PublicUserSearcher::new(client_for(&server));
        let state = searcher
            .run(&PublicUserSearchQuery {
                query: "ada".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(state.users.is_empty());
        assert!(state.error);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_empty_query_without_empty_ok_short_circuits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/public"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [public_user_json("ada")],
                "total": 1
            })))
            .expect(0)
            .mount(&server)
            .await;

        let searcher = PublicUserSearcher::new(client_for(&server));
        let state = searcher.run(&PublicUserSearchQuery::default()).await.unwrap();
        assert!(state.users.is_empty());
        assert!(!state.loading);
        assert!(!state.error);
    }

    #[tokio::test]
    async fn test_empty_query_with_empty_ok_lists_everyone() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/public"))
            .and(query_param("emptyOk", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [public_user_json("ada"), public_user_json("grace")],
                "total": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let searcher = PublicUserSearcher::new(client_for(&server));
        let state = searcher
            .run(&PublicUserSearchQuery {
                empty_ok: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(state.total, 2);
    }

    #[tokio::test]
    async fn test_admin_search_sends_active_filter_only_when_set() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("q", "ada"))
            .and(query_param("active", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [user_json("ada")],
                "total": 1
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param_is_missing("active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [user_json("ada"), user_json("ada-inactive")],
                "total": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let searcher = AdminUserSearcher::new(client_for(&server));
        let filtered = searcher
            .run(&UserSearchFilters {
                query: "ada".to_string(),
                active_only: true,
                page: 1,
                page_size: 10,
            })
            .await
            .unwrap();
        assert_eq!(filtered.total, 1);
        assert!(filtered.users[0].is_active);

        let unfiltered = searcher
            .run(&UserSearchFilters {
                query: "ada".to_string(),
                active_only: false,
                page: 1,
                page_size: 10,
            })
            .await
            .unwrap();
        assert_eq!(unfiltered.total, 2);
    }

    #[tokio::test]
    async fn test_admin_search_failure_sets_error_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let searcher = AdminUserSearcher::new(client_for(&server));
        let state = searcher
            .run(&UserSearchFilters {
                query: "ada".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(state.users.is_empty());
        assert!(state.error);
    }

    #[tokio::test]
    async fn test_superseded_search_does_not_commit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/public"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [public_user_json("ada")],
                "total": 1
            })))
            .mount(&server)
            .await;

        let searcher = PublicUserSearcher::new(client_for(&server));
        let query = PublicUserSearchQuery {
            query: "ada".to_string(),
            ..Default::default()
        };
        let stale = searcher.run(&query);
        let fresh = searcher.run(&query);
        let (stale, fresh) = futures::join!(stale, fresh);
        assert!(stale.is_none());
        assert_eq!(fresh.unwrap().total, 1);
    }
}
