use crate::domain::model::{HttpMethod, Request, Response};
use crate::domain::ports::Connection;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use std::collections::BTreeMap;

/// High-level HTTP component. It only knows the `Connection` port; the
/// concrete service is handed in by the caller.
#[derive(Debug)]
pub struct Http<C: Connection> {
    connection: C,
}

impl<C: Connection> Http<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub async fn get(&self, url: &str, options: BTreeMap<String, String>) -> Result<Response> {
        self.send(HttpMethod::Get, url, options).await
    }

    pub async fn post(&self, url: &str, options: BTreeMap<String, String>) -> Result<Response> {
        self.send(HttpMethod::Post, url, options).await
    }

    pub async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        options: BTreeMap<String, String>,
    ) -> Result<Response> {
        validate_url("url", url)?;
        let request = Request {
            url: url.to_string(),
            method,
            options,
        };

        tracing::info!("🌐 {} {}", method, url);
        let response = self.connection.request(&request).await?;
        if !response.is_success() {
            tracing::warn!("⚠️ {} {} returned status {}", method, url, response.status);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::connection::MockHttpService;
    use crate::domain::ports::UnimplementedConnection;
    use crate::utils::error::SolidError;

    #[tokio::test]
    async fn test_get_and_post_use_matching_methods() {
        let http = Http::new(MockHttpService::default());
        http.get("https://api.test/animals", BTreeMap::new())
            .await
            .unwrap();
        http.post("https://api.test/animals", BTreeMap::new())
            .await
            .unwrap();

        let methods: Vec<HttpMethod> = http
            .connection()
            .requests()
            .into_iter()
            .map(|r| r.method)
            .collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
    }

    #[tokio::test]
    async fn test_invalid_url_never_reaches_connection() {
        let http = Http::new(MockHttpService::default());
        let err = http.get("not a url", BTreeMap::new()).await.unwrap_err();

        assert!(matches!(err, SolidError::Validation { .. }));
        assert!(http.connection().requests().is_empty());
    }

    #[tokio::test]
    async fn test_abstract_connection_fails_fast() {
        let http = Http::new(UnimplementedConnection);
        let err = http
            .get("https://api.test", BTreeMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SolidError::NotImplemented { .. }));
    }
}
