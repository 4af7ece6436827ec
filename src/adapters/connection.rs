use crate::domain::model::{Request, Response};
use crate::domain::ports::Connection;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// Transport handle owned by one service instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transport {
    label: String,
}

impl Transport {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn open_and_send(&self, request: &Request) -> Response {
        tracing::debug!(
            "{} transport: {} {} ({} options)",
            self.label,
            request.method,
            request.url,
            request.options.len()
        );
        Response::ok(format!("{} {} via {}", request.method, request.url, self.label))
    }
}

/// XML-style transport. The handle is injected per instance, never shared.
#[derive(Debug, Clone)]
pub struct XmlHttpService {
    xhr: Transport,
}

impl XmlHttpService {
    pub fn new(xhr: Transport) -> Self {
        Self { xhr }
    }
}

impl Default for XmlHttpService {
    fn default() -> Self {
        Self::new(Transport::new("xhr"))
    }
}

#[async_trait]
impl Connection for XmlHttpService {
    async fn request(&self, request: &Request) -> Result<Response> {
        Ok(self.xhr.open_and_send(request))
    }
}

#[derive(Debug, Clone)]
pub struct NodeHttpService {
    agent: Transport,
}

impl NodeHttpService {
    pub fn new(agent: Transport) -> Self {
        Self { agent }
    }
}

impl Default for NodeHttpService {
    fn default() -> Self {
        Self::new(Transport::new("node"))
    }
}

#[async_trait]
impl Connection for NodeHttpService {
    async fn request(&self, request: &Request) -> Result<Response> {
        Ok(self.agent.open_and_send(request))
    }
}

/// 測試用連線：記錄所有請求並回傳固定回應
#[derive(Debug)]
pub struct MockHttpService {
    response: Response,
    requests: Mutex<Vec<Request>>,
}

impl MockHttpService {
    pub fn new(response: Response) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Default for MockHttpService {
    fn default() -> Self {
        Self::new(Response::ok("mock"))
    }
}

#[async_trait]
impl Connection for MockHttpService {
    async fn request(&self, request: &Request) -> Result<Response> {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(request.clone()),
            Err(poisoned) => poisoned.into_inner().push(request.clone()),
        }
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HttpMethod;

    fn get(url: &str) -> Request {
        Request {
            url: url.to_string(),
            method: HttpMethod::Get,
            options: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_services_answer_with_their_own_transport() {
        let xml = XmlHttpService::default();
        let node = NodeHttpService::new(Transport::new("undici"));

        let a = xml.request(&get("https://a.test")).await.unwrap();
        let b = node.request(&get("https://a.test")).await.unwrap();

        assert!(a.body.ends_with("via xhr"));
        assert!(b.body.ends_with("via undici"));
    }

    #[tokio::test]
    async fn test_transport_is_not_shared_between_instances() {
        let first = XmlHttpService::new(Transport::new("first"));
        let second = XmlHttpService::new(Transport::new("second"));

        let a = first.request(&get("https://a.test")).await.unwrap();
        let b = second.request(&get("https://a.test")).await.unwrap();
        assert_ne!(a.body, b.body);
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockHttpService::new(Response {
            status: 204,
            body: String::new(),
        });
        let response = mock.request(&get("https://a.test/one")).await.unwrap();
        mock.request(&get("https://a.test/two")).await.unwrap();

        assert_eq!(response.status, 204);
        let urls: Vec<String> = mock.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["https://a.test/one", "https://a.test/two"]);
    }
}
