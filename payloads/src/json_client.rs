use serde::de::DeserializeOwned;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// A client for fetching JSON documents from absolute URLs.
///
/// Requests carry no headers or credentials. The response status is not
/// inspected: any response whose body decodes as `T` is a success, and any
/// body that doesn't is a [`FetchError::Decode`].
#[derive(Clone, Default)]
pub struct JsonClient {
    pub inner_client: reqwest::Client,
}

impl JsonClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn empty_get(&self, url: &str) -> ReqwestResult {
        self.inner_client.get(url).send().await
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// An empty `url` fails with [`FetchError::MissingUrl`] before any
    /// request is made.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, FetchError> {
        if url.is_empty() {
            return Err(FetchError::MissingUrl);
        }
        let response = self.empty_get(url).await.map_err(FetchError::Network)?;
        json_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("No url provided")]
    MissingUrl,
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The body was read but is not valid JSON for the requested type.
    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Deserialize a response body into the desired type, regardless of status.
pub async fn json_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FetchError> {
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            FetchError::Decode(e)
        } else {
            FetchError::Network(e)
        }
    })
}
