//! Client configuration.
//!
//! # Design
//! The only required input is the root URL every endpoint hangs off. It is
//! validated once, up front, into a [`RootUrl`] so that endpoint resolution
//! itself can never fail. `from_env` is a thin wrapper over `from_lookup`,
//! which takes any key lookup so tests never touch the process environment.

use std::fmt;
use std::str::FromStr;

use url::Url;

pub const ROOT_URL_VAR: &str = "AFTERPARTY_ROOT_URL";
pub const EVENTS_ROUTE_VAR: &str = "AFTERPARTY_EVENTS_ROUTE";
pub const DEFAULT_ROOT_URL: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid root URL {value:?}: {source}")]
    InvalidRootUrl {
        value: String,
        source: url::ParseError,
    },

    #[error("root URL scheme must be http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("root URL {0:?} has no host")]
    MissingHost(String),

    #[error("unknown events route {0:?}, expected \"events\" or \"locations\"")]
    InvalidEventsRoute(String),
}

/// An absolute `http`/`https` URL with a host, usable as a base for
/// endpoint paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootUrl(Url);

impl RootUrl {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(value).map_err(|source| ConfigError::InvalidRootUrl {
            value: value.to_string(),
            source,
        })?;
        Self::try_from(url)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl TryFrom<Url> for RootUrl {
    type Error = ConfigError;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        // http(s) URLs with a host are always usable as a base.
        if url.host().is_none() {
            return Err(ConfigError::MissingHost(url.to_string()));
        }
        Ok(Self(url))
    }
}

impl FromStr for RootUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RootUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which backend path `get_mock_events` requests.
///
/// Earlier builds of the app fetched events from `mock/locations`. `Locations`
/// keeps that routing for backends that still depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsRoute {
    #[default]
    Events,
    Locations,
}

impl FromStr for EventsRoute {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "events" => Ok(EventsRoute::Events),
            "locations" => Ok(EventsRoute::Locations),
            _ => Err(ConfigError::InvalidEventsRoute(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root_url: RootUrl,
    pub events_route: EventsRoute,
}

impl Config {
    pub fn new(root_url: RootUrl) -> Self {
        Self {
            root_url,
            events_route: EventsRoute::default(),
        }
    }

    pub fn with_events_route(mut self, events_route: EventsRoute) -> Self {
        self.events_route = events_route;
        self
    }

    /// Read `AFTERPARTY_ROOT_URL` and `AFTERPARTY_EVENTS_ROUTE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root_url = match lookup(ROOT_URL_VAR) {
            Some(value) => RootUrl::parse(&value)?,
            None => RootUrl::parse(DEFAULT_ROOT_URL)?,
        };
        let events_route = match lookup(EVENTS_ROUTE_VAR) {
            Some(value) => value.parse()?,
            None => EventsRoute::default(),
        };
        Ok(Self {
            root_url,
            events_route,
        })
    }
}
