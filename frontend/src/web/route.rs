//! URL paths of the top-level views
//!
//! Pure mapping, no DOM access. Guards live with the views themselves.

use gymdash::View;

/// View named by a URL path; `None` for unknown paths.
pub fn from_path(path: &str) -> Option<View> {
    match path.trim_end_matches('/') {
        "" | "/login" => Some(View::Login),
        "/signup" => Some(View::Signup),
        "/dashboard" => Some(View::Dashboard),
        _ => None,
    }
}

pub fn to_path(view: View) -> &'static str {
    match view {
        View::Login => "/",
        View::Signup => "/signup",
        View::Dashboard => "/dashboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for view in View::ALL {
            assert_eq!(from_path(to_path(view)), Some(view));
        }
    }

    #[test]
    fn trailing_slashes_and_unknown_paths() {
        assert_eq!(from_path("/dashboard/"), Some(View::Dashboard));
        assert_eq!(from_path("/login"), Some(View::Login));
        assert_eq!(from_path("/admin"), None);
    }
}
