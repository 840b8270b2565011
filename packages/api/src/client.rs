//! Typed REST client for the platform backend.
//!
//! One [`ApiClient`] is created at application start and shared by every
//! store and hook. Authentication is cookie-based and handled by the browser;
//! the client's single cross-cutting concern is session-expiry detection:
//! any 401 response — except from the logout endpoint itself — emits one
//! event on the session-expiry channel so the session store can force a
//! logout. There are no retries and no request cancellation.

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::env::PathResolution;
use crate::error::ApiError;
use crate::models::{
    ContentRead, LocationData, PlatformData, PublicUserSearchQuery, ResourceKind, SearchHit,
    UserRead, UserReadPublic, UserSearchFilters, UserSearchPage,
};

/// The one endpoint whose responses never trigger forced logout.
pub const LOGOUT_PATH: &str = "/auth/cookie/logout";

const LOGIN_PATH: &str = "/auth/cookie/login";

/// Typed client for the platform REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    paths: PathResolution,
    expiry_tx: Option<UnboundedSender<()>>,
}

impl ApiClient {
    pub fn new(paths: PathResolution) -> Self {
        Self {
            http: reqwest::Client::new(),
            paths,
            expiry_tx: None,
        }
    }

    /// The path configuration this client was built with.
    pub fn paths(&self) -> &PathResolution {
        &self.paths
    }

    /// Subscribe to session-expiry events (one per intercepted 401).
    ///
    /// Call before handing the client out; clones share the subscription.
    pub fn session_expired_events(&mut self) -> UnboundedReceiver<()> {
        let (tx, rx) = unbounded();
        self.expiry_tx = Some(tx);
        rx
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.paths.api_path, path)
    }

    /// Inspect a response status; 401 anywhere but the logout endpoint
    /// means the session is gone.
    fn check_session(&self, path: &str, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED && path != LOGOUT_PATH {
            if let Some(tx) = &self.expiry_tx {
                let _ = tx.unbounded_send(());
            }
        }
    }

    async fn send(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        self.check_session(path, status);
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.http.get(self.url(path)).query(query);
        Ok(self.send(path, request).await?.json().await?)
    }

    /// Fetch platform configuration/metadata.
    ///
    /// The one call whose error is propagated to the caller instead of being
    /// collapsed into a flag; the platform provider must handle it.
    pub async fn platform_data(&self) -> Result<PlatformData, ApiError> {
        self.get_json("/platform", &[]).await
    }

    /// The currently authenticated user, if any.
    pub async fn me(&self) -> Result<UserRead, ApiError> {
        self.get_json("/users/me", &[]).await
    }

    /// Log in with username/email and password (cookie flow).
    pub async fn login(&self, username: &str, password: &str) -> Result<UserRead, ApiError> {
        #[derive(Serialize)]
        struct Credentials<'a> {
            username: &'a str,
            password: &'a str,
        }
        let request = self.http.post(self.url(LOGIN_PATH)).json(&Credentials {
            username,
            password,
        });
        Ok(self.send(LOGIN_PATH, request).await?.json().await?)
    }

    /// End the current session.
    ///
    /// A 401 here means the session was already gone; that is not an error
    /// and, unlike everywhere else, never triggers the expiry event.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.http.post(self.url(LOGOUT_PATH)).send().await?;
        let status = response.status();
        self.check_session(LOGOUT_PATH, status);
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                path: LOGOUT_PATH.to_string(),
            })
        }
    }

    /// Administrative user search (`GET /users`).
    pub async fn search_users(
        &self,
        filters: &UserSearchFilters,
    ) -> Result<UserSearchPage<UserRead>, ApiError> {
        let mut query = vec![
            ("q", filters.query.clone()),
            ("pg", filters.page.to_string()),
            ("pgs", filters.page_size.to_string()),
        ];
        if filters.active_only {
            query.push(("active", "true".to_string()));
        }
        self.get_json("/users", &query).await
    }

    /// Public user search (`GET /users/public`).
    pub async fn search_public_users(
        &self,
        query: &PublicUserSearchQuery,
    ) -> Result<UserSearchPage<UserReadPublic>, ApiError> {
        let params = vec![
            ("q", query.query.clone()),
            ("emptyOk", query.empty_ok.to_string()),
            ("pg", query.page.to_string()),
            ("pgs", query.page_size.to_string()),
        ];
        self.get_json("/users/public", &params).await
    }

    /// Look up one user by username or id (`GET /users/public/{user}`).
    pub async fn public_user(&self, user: &str) -> Result<UserReadPublic, ApiError> {
        self.get_json(&format!("/users/public/{user}"), &[]).await
    }

    /// Contents of all resources at one location of a text.
    pub async fn location_data(
        &self,
        text_id: &str,
        position: usize,
    ) -> Result<LocationData, ApiError> {
        let query = vec![("txt", text_id.to_string()), ("pos", position.to_string())];
        self.get_json("/browse/location-data", &query).await
    }

    /// Quick search over contents of one resource kind.
    pub async fn quick_search(
        &self,
        kind: ResourceKind,
        query: &str,
    ) -> Result<Vec<SearchHit>, ApiError> {
        let params = vec![
            ("q", query.to_string()),
            ("type", kind.as_tag().to_string()),
        ];
        self.get_json("/search", &params).await
    }

    /// Replace a content unit's payload.
    pub async fn update_content(&self, content: &ContentRead) -> Result<ContentRead, ApiError> {
        let path = format!("/contents/{}", content.id);
        let request = self.http.patch(self.url(&path)).json(content);
        Ok(self.send(&path, request).await?.json().await?)
    }

    /// Probe whether a static asset exists (custom logo discovery).
    pub async fn probe(&self, url: &str) -> bool {
        match self.http.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("asset probe for {url} failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(PathResolution::resolve(None, Some(&server.uri())))
    }

    #[tokio::test]
    async fn test_search_public_users_parses_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/public"))
            .and(query_param("q", "ada"))
            .and(query_param("emptyOk", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [{"id": "u1", "username": "ada", "name": "Ada L."}],
                "total": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let page = client
            .search_public_users(&PublicUserSearchQuery {
                query: "ada".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.users[0].display_name(), "Ada L.");
    }

    #[tokio::test]
    async fn test_401_emits_exactly_one_expiry_event() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let mut client = client_for(&server);
        let mut events = client.session_expired_events();

        let err = client.me().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(events.try_next().unwrap().is_some());
        // no second event for a single response
        assert!(events.try_next().is_err());
    }

    #[tokio::test]
    async fn test_logout_401_does_not_emit_expiry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/cookie/logout"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let mut client = client_for(&server);
        let mut events = client.session_expired_events();

        // already-expired session: logout succeeds quietly
        client.logout().await.unwrap();
        assert!(events.try_next().is_err());
    }

    #[tokio::test]
    async fn test_platform_data_propagates_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/platform"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.platform_data().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_probe_reports_existence() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/static/logo.svg"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let base = server.uri();
        assert!(client.probe(&format!("{base}/static/logo.svg")).await);
        assert!(!client.probe(&format!("{base}/static/favicon.png")).await);
    }

    #[tokio::test]
    async fn test_update_content_patches_by_id() {
        let server = MockServer::start().await;
        let body = json!({
            "id": "c1",
            "resourceId": "r1",
            "locationId": "l1",
            "resourceType": "plainText",
            "text": "updated"
        });
        Mock::given(method("PATCH"))
            .and(path("/contents/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let content: ContentRead = serde_json::from_value(body).unwrap();
        let updated = client.update_content(&content).await.unwrap();
        assert_eq!(updated, content);
    }

    #[tokio::test]
    async fn test_location_data_contents() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/browse/location-data"))
            .and(query_param("txt", "t1"))
            .and(query_param("pos", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "locationLabel": "1.3",
                "contents": [{
                    "id": "c1",
                    "resourceId": "r1",
                    "locationId": "l3",
                    "resourceType": "richText",
                    "html": "<p>hi</p>"
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let data = client.location_data("t1", 3).await.unwrap();
        assert_eq!(data.contents.len(), 1);
        assert_eq!(data.contents[0].kind(), ResourceKind::RichText);
    }
}
