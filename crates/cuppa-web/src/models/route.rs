//! Hash-based routing for static-host-friendly navigation.

use crate::utils::dom;

/// Application routes.
/// URL format: `#/` for the directory, `#/cafes/{slug}` for one café.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// The filterable café directory.
    Directory,
    /// A single café's detail page.
    Cafe { slug: String },
}

impl AppRoute {
    /// Parse a URL hash into a route. Anything unrecognized falls back to
    /// the directory.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        match path.strip_prefix("cafes/") {
            Some(slug) => {
                let slug = slug.trim_end_matches('/');
                if slug.is_empty() {
                    Self::Directory
                } else {
                    Self::Cafe {
                        slug: slug.to_string(),
                    }
                }
            }
            None => Self::Directory,
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Directory => "#/".to_string(),
            Self::Cafe { slug } => format!("#/cafes/{slug}"),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Update the browser URL to match this route. Goes through the hash
    /// so the router's `hashchange` listener stays the single update path.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Cafe { .. })
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Cafe { slug } => Some(slug),
            Self::Directory => None,
        }
    }
}
