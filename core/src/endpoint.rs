//! The closed set of backend routes and their URLs.

use url::Url;

use crate::config::RootUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    MockEvents,
    MockUsers,
    MockLocations,
    /// `hello`, or `hello/{name}` when a name is given. Names that cannot
    /// be a path segment (empty, `.` or `..`) resolve to plain `hello`.
    Hello(Option<String>),
}

impl Endpoint {
    /// Resolve this endpoint below `root`.
    ///
    /// Segments are appended after dropping a trailing empty segment, so
    /// `https://x/api` and `https://x/api/` resolve the same way. A name is
    /// a single percent-encoded segment even if it contains `/`. URL parsing
    /// removes `.` and `..` segments in any spelling, including `%2E`, so
    /// those names are treated like no name at all.
    pub fn url(&self, root: &RootUrl) -> Url {
        let mut url = root.as_url().clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(self.segments());
        }
        url
    }

    fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Hello(Some(name)) if is_segment(name) => vec!["hello", name.as_str()],
            Endpoint::Hello(_) => vec!["hello"],
            Endpoint::MockEvents => vec!["mock", "events"],
            Endpoint::MockUsers => vec!["mock", "users"],
            Endpoint::MockLocations => vec!["mock", "locations"],
        }
    }
}

fn is_segment(name: &str) -> bool {
    !matches!(name, "" | "." | "..")
}
