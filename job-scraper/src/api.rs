use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// A single GET request for one page of search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl PageRequest {
    pub fn new(url: String) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }
}

/// Fetches and decodes a JSON document
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, request: &PageRequest) -> Result<serde_json::Value>;
}

/// Strategy describing how one recruitment site is searched and paginated
pub trait VacancySource {
    /// decoded body of a search response
    type Page: DeserializeOwned;
    /// one vacancy as the site reports it
    type Vacancy;

    fn name(&self) -> &'static str;
    fn build_request(&self, language: &str, page: u32) -> PageRequest;
    /// `page` is the index the response was requested with
    fn has_more_pages(&self, response: &Self::Page, page: u32) -> bool;
    fn extract_total(&self, response: &Self::Page) -> u32;
    fn extract_items(&self, response: Self::Page) -> Vec<Self::Vacancy>;
    fn estimate(&self, vacancy: &Self::Vacancy) -> Option<f64>;
}

/// One decoded page of search results
#[derive(Debug)]
pub struct SearchPage<V> {
    pub total: u32,
    pub items: Vec<V>,
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, request: &PageRequest) -> Result<serde_json::Value> {
        log::debug!("GET {}", request.url);
        let mut builder = self
            .client
            .get(&request.url)
            .header("Accept", "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "request not successful, url: {}, status code: {}, error resp body: {:?}",
                request.url,
                status,
                error_body,
            );
            return Err(Error::RequestNotOk(request.url.clone(), status));
        }
        let body = resp.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Answer a single connection with `response` and return the url to hit
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Listener has no address");
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("Failed to accept");
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{}/vacancies", addr)
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\n\
             Content-Type: application/json\r\n\
             Content-Length: 2\r\n\
             Connection: close\r\n\r\n{}",
        )
        .await;
        let result = HttpTransport::new().get_json(&PageRequest::new(url)).await;
        assert!(matches!(
            result,
            Err(Error::RequestNotOk(_, status)) if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn test_success_body_is_decoded() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\n\
             Content-Type: application/json\r\n\
             Content-Length: 27\r\n\
             Connection: close\r\n\r\n{\"total\": 7, \"more\": false}",
        )
        .await;
        let request = PageRequest::new(url).header("X-Api-App-Id", "key");
        let body = HttpTransport::new()
            .get_json(&request)
            .await
            .expect("Request failed");
        assert_eq!(body["total"], 7);
        assert_eq!(body["more"], false);
    }
}
