//! Navigation counter that lets a mounted view reload on re-navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router keeps a route's view mounted when a link targets the page that
//! is already showing, so no key a view tracks would change. Such clicks bump
//! the counter instead, and every query folds it into its key.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Count of in-place navigations since the app started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationEpoch {
    pub count: u64,
}

impl NavigationEpoch {
    pub fn bump(&mut self) {
        self.count = self.count.wrapping_add(1);
    }
}

/// Path part of an in-app `href`, without query or fragment.
///
/// `None` for external, protocol-relative and non-path links.
pub fn link_path(href: &str) -> Option<&str> {
    if !href.starts_with('/') || href.starts_with("//") {
        return None;
    }
    let end = href.find(['?', '#']).unwrap_or(href.len());
    Some(&href[..end])
}

/// Whether following `href` from `current_path` keeps the current view
/// mounted. Trailing slashes are ignored except on the root.
pub fn reenters_current_page(current_path: &str, href: &str) -> bool {
    let Some(target) = link_path(href) else {
        return false;
    };
    normalize(target) == normalize(current_path)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
