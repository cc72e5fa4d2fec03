use crate::core::client::ConnectClient;
use crate::core::operation::Paginated;
use crate::domain::ports::Transport;
use crate::utils::error::{ConnectError, Result};
use std::collections::HashSet;

/// Walks a paginated operation page by page.
///
/// Iteration ends when the service returns no `NextToken` or an empty one.
/// A token the service already returned earlier is treated as an error so a
/// misbehaving endpoint cannot loop forever.
pub struct Paginator<'a, T: Transport, R: Paginated> {
    client: &'a ConnectClient<T>,
    request: R,
    seen_tokens: HashSet<String>,
    pages: usize,
    done: bool,
}

impl<'a, T: Transport, R: Paginated> Paginator<'a, T, R> {
    pub fn new(client: &'a ConnectClient<T>, request: R) -> Self {
        // 續傳時的起始 token 也算已見過
        let seen_tokens = request
            .starting_token()
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .into_iter()
            .collect();
        Self {
            client,
            request,
            seen_tokens,
            pages: 0,
            done: false,
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    pub async fn next_page(&mut self) -> Result<Option<R::Output>> {
        if self.done {
            return Ok(None);
        }

        let output = match self.client.execute(&self.request).await {
            Ok(output) => output,
            Err(e) => {
                self.done = true;
                return Err(e);
            }
        };
        self.pages += 1;

        match R::next_token(&output) {
            Some(token) if !token.is_empty() => {
                if !self.seen_tokens.insert(token.to_string()) {
                    self.done = true;
                    return Err(ConnectError::PaginationError {
                        message: format!(
                            "{} returned a repeated NextToken after {} pages",
                            R::NAME,
                            self.pages
                        ),
                    });
                }
                self.request.set_next_token(Some(token.to_string()));
            }
            _ => self.done = true,
        }

        Ok(Some(output))
    }

    /// Fetches every remaining page and concatenates their items.
    pub async fn collect_items(mut self) -> Result<Vec<R::Item>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(R::into_items(page));
        }
        tracing::debug!("{}: {} items over {} pages", R::NAME, items.len(), self.pages);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::client::mock::{client, json_response};
    use crate::domain::model::*;
    use crate::utils::error::ConnectError;

    #[tokio::test]
    async fn test_collects_all_pages() {
        let client = client(vec![
            Ok(json_response(
                200,
                r#"{"UserSummaryList": [{"Id": "1"}, {"Id": "2"}], "NextToken": "p2"}"#,
            )),
            Ok(json_response(200, r#"{"UserSummaryList": [{"Id": "3"}]}"#)),
        ]);

        let users = client
            .paginate(ListUsersRequest::new("i-1"))
            .collect_items()
            .await
            .unwrap();
        let ids: Vec<_> = users.iter().filter_map(|u| u.id.as_deref()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let sent = client.transport_requests();
        assert!(sent[0].query.is_empty());
        assert_eq!(sent[1].query, vec![("nextToken".to_string(), "p2".to_string())]);
    }

    #[tokio::test]
    async fn test_empty_token_ends_iteration() {
        let client = client(vec![Ok(json_response(
            200,
            r#"{"QueueSummaryList": [], "NextToken": ""}"#,
        ))]);
        let mut pages = client.paginate(ListQueuesRequest::new("i-1"));
        assert!(pages.next_page().await.unwrap().is_some());
        assert!(pages.next_page().await.unwrap().is_none());
        assert_eq!(pages.pages_fetched(), 1);
    }

    #[tokio::test]
    async fn test_repeated_token_is_an_error() {
        let page = || Ok(json_response(200, r#"{"MetricResults": [], "NextToken": "same"}"#));
        let client = client(vec![page(), page()]);
        let request = GetCurrentMetricDataRequest::new(
            "i-1",
            Filters::queues(vec!["q-1".to_string()]),
            vec![CurrentMetric::default()],
        );

        let err = client.paginate(request).collect_items().await.unwrap_err();
        assert!(matches!(err, ConnectError::PaginationError { .. }));
    }

    #[tokio::test]
    async fn test_resumed_token_echoed_back_is_an_error() {
        let client = client(vec![Ok(json_response(
            200,
            r#"{"UserSummaryList": [{"Id": "9"}], "NextToken": "resume-here"}"#,
        ))]);
        let mut request = ListUsersRequest::new("i-1");
        request.next_token = Some("resume-here".to_string());

        let mut pages = client.paginate(request);
        let err = pages.next_page().await.unwrap_err();
        assert!(matches!(err, ConnectError::PaginationError { .. }));
        assert_eq!(pages.pages_fetched(), 1);
        assert!(pages.next_page().await.unwrap().is_none());
        assert_eq!(client.transport_requests().len(), 1);
    }
}
