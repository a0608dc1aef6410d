//! Navigation paths

use std::fmt;

/// A navigable screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: the country table
    Listing,
    /// `/country/{country}`: one country's chart and detail panel
    Detail(String),
    /// Anything else (the original path is kept for display)
    NotFound(String),
}

impl Route {
    /// Resolve a navigation path
    ///
    /// Query strings and fragments are ignored. The country segment is
    /// percent-decoded.
    pub fn parse(path: &str) -> Route {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/');

        if clean.is_empty() {
            return Route::Listing;
        }

        let segments: Vec<&str> = clean.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["country", segment] if !segment.is_empty() => match urlencoding::decode(segment) {
                Ok(country) => Route::Detail(country.into_owned()),
                Err(_) => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Path for this route, with the country segment percent-encoded
    pub fn path(&self) -> String {
        match self {
            Route::Listing => "/".to_string(),
            Route::Detail(country) => format!("/country/{}", urlencoding::encode(country)),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
