//! Document location model.
//!
//! A [`Location`] is the decomposed address of the currently loaded document,
//! shaped like the browser's `window.location`: the query and fragment are
//! kept without their leading `?` / `#`, and an empty query or fragment is
//! reported as absent.

mod prefix;

pub use prefix::RepoPrefix;

use crate::error::ShimError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub scheme: String,
    pub host: String,
    /// Explicit port; `None` when the URL uses the scheme's default.
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Location {
    /// Parses an absolute href the way a browser would populate `location`.
    pub fn parse(href: &str) -> Result<Self, ShimError> {
        let parsed = url::Url::parse(href).map_err(|source| ShimError::InvalidLocation {
            href: href.to_string(),
            source,
        })?;

        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ShimError::MissingHost(href.to_string()))?
            .to_string();

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            port: parsed.port(),
            path: parsed.path().to_string(),
            query: non_empty(parsed.query()),
            fragment: non_empty(parsed.fragment()),
        })
    }

    /// `scheme://host[:port]`, with no trailing slash.
    pub fn origin_prefix(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// `?query`, or the empty string when there is no query.
    pub fn search(&self) -> String {
        self.query
            .as_deref()
            .map(|q| format!("?{q}"))
            .unwrap_or_default()
    }

    /// `#fragment`, or the empty string when there is no fragment.
    pub fn hash(&self) -> String {
        self.fragment
            .as_deref()
            .map(|f| format!("#{f}"))
            .unwrap_or_default()
    }

    pub fn href(&self) -> String {
        format!(
            "{}{}{}{}",
            self.origin_prefix(),
            self.path,
            self.search(),
            self.hash()
        )
    }

    /// Same origin, with the path, query and fragment taken from a
    /// root-relative URL such as the one written by a history URL replacement.
    pub fn with_relative(&self, relative: &str) -> Result<Self, ShimError> {
        Self::parse(&format!("{}{}", self.origin_prefix(), relative))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

fn non_empty(part: Option<&str>) -> Option<String> {
    part.filter(|s| !s.is_empty()).map(str::to_string)
}
