use crate::domain::model::{Page, Route};

/// Exact match of a route against the five known pages. Anything else,
/// including trailing slashes or query-like suffixes, selects no page.
pub fn select(route: &Route) -> Option<Page> {
    Page::ALL
        .into_iter()
        .find(|page| page.route_path() == route.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_known_route_selects_its_page() {
        for page in Page::ALL {
            assert_eq!(select(&page.route()), Some(page));
        }
    }

    #[test]
    fn test_matching_is_exact() {
        for raw in ["/unknown", "/about/", "about", "/About", "/track/123", ""] {
            assert_eq!(select(&Route::new(raw)), None, "route {:?}", raw);
        }
    }
}
