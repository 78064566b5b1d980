use crate::error::{ClientError, Result};
use crate::site::{LngLat, Site, SiteId};
use crate::wire::{BucketListAdd, MatchResponse, MessageResponse, NearbyResponse, SearchRequest};
use reqwest::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// Operations the search controller and bucket list need from the server.
pub trait SiteBackend {
    /// Sites within `dist` miles of `at`.
    fn search_nearby(&self, at: LngLat, dist: u32) -> impl Future<Output = Result<Vec<Site>>> + Send;

    /// Sites whose name matches `text`.
    fn search_text(&self, text: &str) -> impl Future<Output = Result<Vec<Site>>> + Send;

    fn bucket_list_add(&self, id: &SiteId) -> impl Future<Output = Result<String>> + Send;

    fn bucket_list_remove(&self, id: &SiteId) -> impl Future<Output = Result<String>> + Send;
}

impl<T: SiteBackend + Sync> SiteBackend for &T {
    fn search_nearby(&self, at: LngLat, dist: u32) -> impl Future<Output = Result<Vec<Site>>> + Send {
        (**self).search_nearby(at, dist)
    }

    fn search_text(&self, text: &str) -> impl Future<Output = Result<Vec<Site>>> + Send {
        (**self).search_text(text)
    }

    fn bucket_list_add(&self, id: &SiteId) -> impl Future<Output = Result<String>> + Send {
        (**self).bucket_list_add(id)
    }

    fn bucket_list_remove(&self, id: &SiteId) -> impl Future<Output = Result<String>> + Send {
        (**self).bucket_list_remove(id)
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub session_cookie: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(10),
            session_cookie: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Raw `Cookie` header value sent with every request, e.g. `session=abc`.
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }
}

pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::InvalidHeader(format!("session cookie: {}", e)))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .user_agent(concat!("Reefscout/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .connect_timeout(config.timeout / 2)
            .cookie_store(true)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    async fn post<B, T>(&self, url: Url, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", url);
        let start = Instant::now();

        let request = self.client.post(url.clone());
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("{} answered {} in {:?}", url, status, start.elapsed());

        if !status.is_success() {
            warn!("{} failed with status {}", url, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl SiteBackend for HttpBackend {
    async fn search_nearby(&self, at: LngLat, dist: u32) -> Result<Vec<Site>> {
        info!("Searching for sites within {} of {}", dist, at);
        let url = self.endpoint(&["sites", "search"])?;
        let body = SearchRequest::Sites {
            lat: at.lat,
            lng: at.lng,
            dist,
        };
        let response: NearbyResponse = self.post(url, Some(&body)).await?;
        info!("Found {} nearby sites", response.sites.len());
        Ok(response.sites)
    }

    async fn search_text(&self, text: &str) -> Result<Vec<Site>> {
        info!("Searching for sites matching '{}'", text);
        let url = self.endpoint(&["sites", "search"])?;
        let body = SearchRequest::Search {
            text: text.to_string(),
        };
        let response: MatchResponse = self.post(url, Some(&body)).await?;
        info!("Found {} matching sites", response.matches.len());
        Ok(response.matches)
    }

    async fn bucket_list_add(&self, id: &SiteId) -> Result<String> {
        info!("Adding site {} to bucket list", id);
        let url = self.endpoint(&["bucketlist"])?;
        let response: MessageResponse = self.post(url, Some(&BucketListAdd { id })).await?;
        Ok(response.message)
    }

    async fn bucket_list_remove(&self, id: &SiteId) -> Result<String> {
        info!("Removing site {} from bucket list", id);
        let url = self.endpoint(&["bucketlist", id.as_str(), "delete"])?;
        let response: MessageResponse = self.post::<(), _>(url, None).await?;
        Ok(response.message)
    }
}
