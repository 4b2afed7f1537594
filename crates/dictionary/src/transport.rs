use crate::DictionaryError;

/// Status and body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The outbound HTTP seam of the dictionary.
///
/// Implemented for [`reqwest::Client`]; anything else that can answer a GET
/// with a status and a body can stand in for it.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, DictionaryError>;
}

#[async_trait::async_trait]
impl Transport for reqwest::Client {
    async fn get(&self, url: &str) -> Result<HttpResponse, DictionaryError> {
        let res: reqwest::Response = reqwest::Client::get(self, url)
            .send()
            .await
            .map_err(DictionaryError::Fetch)?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(DictionaryError::Fetch)?;
        Ok(HttpResponse { status, body })
    }
}
