//! Quick-search context object.
//!
//! Same commit contract as the user searchers: every dispatched fetch opens
//! a new generation and a response that has been superseded before it
//! arrived never commits, regardless of network ordering.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use api::{ApiClient, ApiError, ResourceKind, SearchHit};

#[derive(Clone)]
pub struct QuickSearcher {
    client: ApiClient,
    generation: Arc<AtomicU64>,
}

impl QuickSearcher {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Discard whatever fetch is currently in flight; its result will not
    /// commit. Used when the query empties out and no new fetch follows.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Run one search. Returns `None` when a newer search (or a cancel)
    /// superseded this one before it completed.
    pub async fn run(
        &self,
        kind: ResourceKind,
        query: &str,
    ) -> Option<Result<Vec<SearchHit>, ApiError>> {
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.client.quick_search(kind, query).await;
        if self.generation.load(Ordering::SeqCst) != scheduled {
            return None;
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::PathResolution;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(PathResolution::resolve(None, Some(&server.uri())))
    }

    fn hit_json(id: &str, text: &str) -> serde_json::Value {
        json!({
            "textId": "t1",
            "locationLabel": "1.1",
            "content": {
                "id": id,
                "resourceId": "r1",
                "locationId": "l1",
                "resourceType": "plainText",
                "text": text
            }
        })
    }

    #[tokio::test]
    async fn test_run_returns_hits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "lorem"))
            .and(query_param("type", "plainText"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([hit_json("c1", "lorem ipsum")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let searcher = QuickSearcher::new(client_for(&server));
        let hits = searcher
            .run(ResourceKind::PlainText, "lorem")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content.id, "c1");
    }

    #[tokio::test]
    async fn test_superseded_run_does_not_commit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([hit_json("c1", "lorem")])),
            )
            .mount(&server)
            .await;

        let searcher = QuickSearcher::new(client_for(&server));
        let stale = searcher.run(ResourceKind::PlainText, "lor");
        let fresh = searcher.run(ResourceKind::PlainText, "lorem");
        let (stale, fresh) = futures::join!(stale, fresh);
        assert!(stale.is_none());
        assert_eq!(fresh.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_run_does_not_commit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([hit_json("c1", "lorem")])),
            )
            .mount(&server)
            .await;

        let searcher = QuickSearcher::new(client_for(&server));
        let run = searcher.run(ResourceKind::PlainText, "lorem");
        let cancel = async {
            searcher.cancel();
        };
        let (outcome, ()) = futures::join!(run, cancel);
        assert!(outcome.is_none());
    }
}
