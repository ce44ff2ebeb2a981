//! Pages and link targets.

use std::fmt;

/// The three application pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
    Predict,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::Home, Self::Dashboard, Self::Predict];

    /// Route path of the page.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::Predict => "/predict",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Label used in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::Predict => "Risk Assessment",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a link goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// In-page anchor (`#id`); the id is without the `#`.
    Anchor(&'a str),
    /// Another page.
    Page(Page),
}

impl<'a> LinkTarget<'a> {
    /// Classifies an href. Returns `None` for paths that name no page.
    pub fn parse(href: &'a str) -> Option<Self> {
        match href.strip_prefix('#') {
            Some(id) => Some(Self::Anchor(id)),
            None => Page::from_path(href).map(Self::Page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_links_are_anchors() {
        assert_eq!(LinkTarget::parse("#features"), Some(LinkTarget::Anchor("features")));
        assert_eq!(LinkTarget::parse("#"), Some(LinkTarget::Anchor("")));
    }

    #[test]
    fn test_paths_are_pages() {
        assert_eq!(LinkTarget::parse("/predict"), Some(LinkTarget::Page(Page::Predict)));
        assert_eq!(LinkTarget::parse("/"), Some(LinkTarget::Page(Page::Home)));
        assert_eq!(LinkTarget::parse("/admin"), None);
    }
}
