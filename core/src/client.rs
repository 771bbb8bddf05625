//! The Afterparty API client.
//!
//! # Design
//! `AfterpartyApi` owns three things and no mutable state: a pooled
//! `reqwest::Client`, the tokio runtime handle that loads execute on, and the
//! immutable `Config`. Clones share all three. Every endpoint method is the
//! same composition: resolve an [`Endpoint`], build a [`Resource`], `load` it.

use std::sync::Arc;

use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, warn, Instrument};
use url::Url;

use crate::config::{Config, EventsRoute};
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ClientError};
use crate::load::Load;
use crate::resource::Resource;
use crate::types::{Event, Location, User};

#[derive(Debug, Clone)]
pub struct AfterpartyApi {
    http: reqwest::Client,
    runtime: Handle,
    config: Arc<Config>,
}

impl AfterpartyApi {
    /// Build a client whose loads run on the current tokio runtime.
    ///
    /// The runtime must be multi-threaded so loads decode in parallel; a
    /// `current_thread` runtime is rejected with
    /// [`ClientError::SingleThreadedRuntime`].
    pub fn new(config: Config) -> Result<Self, ClientError> {
        Self::with_runtime(config, Handle::try_current()?)
    }

    /// Build a client whose loads run on `runtime`, which must be
    /// multi-threaded.
    pub fn with_runtime(config: Config, runtime: Handle) -> Result<Self, ClientError> {
        if runtime.runtime_flavor() == RuntimeFlavor::CurrentThread {
            return Err(ClientError::SingleThreadedRuntime);
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            runtime,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> Url {
        endpoint.url(&self.config.root_url)
    }

    /// The endpoint `get_mock_events` requests under the configured
    /// [`EventsRoute`].
    pub fn events_endpoint(&self) -> Endpoint {
        match self.config.events_route {
            EventsRoute::Events => Endpoint::MockEvents,
            EventsRoute::Locations => Endpoint::MockLocations,
        }
    }

    /// GET `resource.url()` and decode the body with `resource`.
    ///
    /// Transport failures become [`ApiError::AddressUnreachable`]; a non-2xx
    /// status or a body the resource cannot parse becomes
    /// [`ApiError::InvalidResponse`]. Nothing is sent until the returned
    /// [`Load`] is polled or subscribed.
    pub fn load<A>(&self, resource: Resource<A>) -> Load<A>
    where
        A: Send + 'static,
    {
        let url = resource.url().clone();
        let span = tracing::debug_span!("load", url = %url);
        let task = fetch(self.http.clone(), resource).instrument(span);
        Load::spawn_on(self.runtime.clone(), url, task)
    }

    pub fn get_hello_response(&self, name: Option<&str>) -> Load<String> {
        let endpoint = Endpoint::Hello(name.map(str::to_owned));
        self.load(Resource::text(self.url_for(&endpoint)))
    }

    pub fn get_mock_events(&self) -> Load<Vec<Event>> {
        self.load(Resource::json(self.url_for(&self.events_endpoint())))
    }

    pub fn get_mock_locations(&self) -> Load<Vec<Location>> {
        self.load(Resource::json(self.url_for(&Endpoint::MockLocations)))
    }

    pub fn get_mock_users(&self) -> Load<Vec<User>> {
        self.load(Resource::json(self.url_for(&Endpoint::MockUsers)))
    }
}

async fn fetch<A>(http: reqwest::Client, resource: Resource<A>) -> Result<A, ApiError> {
    let url = resource.url();
    debug!("sending request");

    let response = http
        .get(url.clone())
        .send()
        .await
        .map_err(|err| transport_failure(url, &err))?;

    let status = response.status();
    if !status.is_success() {
        warn!(%status, "unexpected status");
        return Err(ApiError::InvalidResponse);
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| transport_failure(url, &err))?;

    let value = resource.parse(&body).map_err(|err| {
        warn!(error = %err, "failed to decode response");
        ApiError::InvalidResponse
    })?;
    debug!(bytes = body.len(), "response decoded");
    Ok(value)
}

fn transport_failure(url: &Url, err: &reqwest::Error) -> ApiError {
    warn!(error = %err, "transport failure");
    ApiError::AddressUnreachable(url.clone())
}
