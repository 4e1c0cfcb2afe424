//! Navigation - Route Table and Path Resolution
//!
//! Defines the pages available in the application and the static mapping
//! from URL-style paths to them.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing page with the brand welcome
    #[default]
    Home,
    /// Company description
    About,
    /// Property listing cards
    Properties,
    /// Artwork gallery grid
    Gallery,
    /// Contact form
    Contact,
    /// Blog teaser
    Blog,
    /// Fallback for paths outside the route table
    NotFound,
}

/// Ordered route table: every navigable path and the page it renders.
///
/// `NotFound` is deliberately absent; it is the fallback for everything
/// else.
const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/about", Route::About),
    ("/properties", Route::Properties),
    ("/gallery", Route::Gallery),
    ("/contact", Route::Contact),
    ("/blog", Route::Blog),
];

impl Route {
    /// Resolve a path against the route table
    ///
    /// Total over all inputs: paths outside the table resolve to `NotFound`.
    pub fn resolve(path: &str) -> Route {
        ROUTES
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound)
    }

    /// The path this route answers to
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Properties => "/properties",
            Route::Gallery => "/gallery",
            Route::Contact => "/contact",
            Route::Blog => "/blog",
            Route::NotFound => "/404",
        }
    }

    /// Fixed link label for the navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Properties => "Properties",
            Route::Gallery => "Gallery",
            Route::Contact => "Contact",
            Route::Blog => "Blog",
            Route::NotFound => "Not Found",
        }
    }

    /// The navigable routes, in navigation bar order
    pub fn nav() -> &'static [Route] {
        &[
            Route::Home,
            Route::About,
            Route::Properties,
            Route::Gallery,
            Route::Contact,
            Route::Blog,
        ]
    }
}

// Routes persist as their path string so the app-state file stays readable
// and unknown values degrade to the NotFound fallback.

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        Ok(Route::resolve(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn declared_paths_resolve_to_their_view() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/about"), Route::About);
        assert_eq!(Route::resolve("/properties"), Route::Properties);
        assert_eq!(Route::resolve("/gallery"), Route::Gallery);
        assert_eq!(Route::resolve("/contact"), Route::Contact);
        assert_eq!(Route::resolve("/blog"), Route::Blog);
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::resolve("/missing"), Route::NotFound);
        assert_eq!(Route::resolve(""), Route::NotFound);
        assert_eq!(Route::resolve("/About"), Route::NotFound);
        assert_eq!(Route::resolve("/404"), Route::NotFound);
    }

    #[test]
    fn nav_routes_round_trip_through_the_table() {
        for route in Route::nav() {
            assert_eq!(Route::resolve(route.path()), *route);
        }
    }

    #[test]
    fn nav_order_matches_the_navbar_contract() {
        let titles: Vec<&str> = Route::nav().iter().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            ["Home", "About", "Properties", "Gallery", "Contact", "Blog"]
        );
    }

    #[test]
    fn nav_paths_are_unique() {
        let paths: HashSet<&str> = Route::nav().iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::nav().len());
    }

    #[test]
    fn not_found_is_not_navigable() {
        assert!(!Route::nav().contains(&Route::NotFound));
    }
}
