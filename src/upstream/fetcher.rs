use crate::config::InmetConfig;
use crate::upstream::cache::ResponseCache;
use crate::upstream::error::UpstreamError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// A parsed body together with where it came from.
pub(crate) struct Parsed<T> {
    pub(crate) data: T,
    pub(crate) cached: bool,
}

/// Issues upstream GET requests through a [`ResponseCache`].
pub(crate) struct UpstreamFetcher {
    client: Client,
    cache: ResponseCache,
}

impl UpstreamFetcher {
    pub(crate) fn new(config: &InmetConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .connect_timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            cache: ResponseCache::new(),
        })
    }

    /// Fetches the JSON body at `url` and runs `parse` on it.
    ///
    /// A body is cached for `ttl` only once `parse` has accepted it, so transport,
    /// JSON and shape failures all reach the network again on the next call.
    /// Cached bodies are parsed again on every hit.
    pub(crate) async fn get_parsed<T, F>(
        &self,
        url: &str,
        ttl: Duration,
        parse: F,
    ) -> Result<Parsed<T>, UpstreamError>
    where
        F: FnOnce(Value) -> Result<T, UpstreamError>,
    {
        if let Some(body) = self.cache.get(url).await {
            return parse(body).map(|data| Parsed { data, cached: true });
        }

        let body = self.get_json(url).await?;
        let data = parse(body.clone())?;
        self.cache.put(url, body, ttl).await;
        Ok(Parsed {
            data,
            cached: false,
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(url, e))?;
        let response = response
            .error_for_status()
            .map_err(|e| UpstreamError::from_reqwest(url, e))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(url, e))?;
        serde_json::from_slice(&bytes).map_err(|source| UpstreamError::JsonParse {
            url: url.to_string(),
            source,
        })
    }

    pub(crate) async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    pub(crate) async fn cached_responses(&self) -> usize {
        self.cache.len().await
    }
}
