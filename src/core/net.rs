// src/core/net.rs

// Blocking HTTP GET. One attempt per call, no retry, fresh client each time.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::config::options::FetchOptions;
use crate::error::{Result, ScrapeError};

/// The two reads the pipeline needs. `Sync` so the worker pool can share one.
pub trait Fetch: Send + Sync {
    /// GET `url` and decode the body as JSON.
    fn fetch_json(&self, url: &str) -> Result<Value>;

    /// GET `url` and return the raw body.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    options: FetchOptions,
}

impl HttpFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    /// A new client per call: no connection reuse across requests.
    fn client(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .user_agent(self.options.user_agent.as_str())
            .default_headers(header_map(&self.options.headers)?)
            .timeout(self.options.timeout);

        if let Some(proxy) = &self.options.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str())
                .map_err(|e| ScrapeError::InvalidOption(format!("proxy `{proxy}`: {e}")))?;
            builder = builder.proxy(proxy);
        }

        builder
            .build()
            .map_err(|e| ScrapeError::InvalidOption(format!("HTTP client: {e}")))
    }

    fn get(&self, url: &str) -> Result<Response> {
        let resp = self.client()?
            .get(url)
            .send()
            .map_err(|e| ScrapeError::network(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::network(url, format!("HTTP {status}")));
        }
        Ok(resp)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self { Self::new(FetchOptions::default()) }
}

impl Fetch for HttpFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        logd!("GET {url} (json)");
        self.get(url)?
            .json::<Value>()
            .map_err(|e| ScrapeError::network(url, format!("invalid JSON body: {e}")))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        logd!("GET {url}");
        let body = self.get(url)?
            .bytes()
            .map_err(|e| ScrapeError::network(url, e))?;
        Ok(body.to_vec())
    }
}

fn header_map(pairs: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let n = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ScrapeError::InvalidOption(format!("header name `{name}`: {e}")))?;
        let v = HeaderValue::from_str(value)
            .map_err(|e| ScrapeError::InvalidOption(format!("header `{name}` value: {e}")))?;
        map.append(n, v);
    }
    Ok(map)
}
