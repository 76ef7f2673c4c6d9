//! Deployment base-path helpers.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/admin` for a subdirectory
//! deployment), the router is mounted below it and browser paths carry it as
//! a prefix. Local builds without `PUBLIC_URL` are anchored at the root.

/// Base path for the router.
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Browser pathname with the deployment base removed, always starting with `/`.
#[must_use]
pub fn app_path(pathname: &str) -> String {
    app_path_with_base(pathname, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn app_path_with_base(pathname: &str, base: &str) -> String {
    let stripped = router_base_with_base(base)
        .and_then(|base| pathname.strip_prefix(base.as_str()).map(str::to_string))
        .unwrap_or_else(|| pathname.to_string());
    if stripped.starts_with('/') {
        stripped
    } else {
        format!("/{stripped}")
    }
}

#[cfg(test)]
mod tests {
    use super::{app_path, router_base};

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/admin/"),
            Some(String::from("/admin"))
        );
        assert_eq!(super::router_base_with_base("  "), None);
    }

    #[test]
    fn app_path_is_unchanged_without_base() {
        assert_eq!(app_path("/pokemon/pokedex"), "/pokemon/pokedex");
    }

    #[test]
    fn app_path_strips_configured_base() {
        assert_eq!(
            super::app_path_with_base("/admin/ui/colorfy", "/admin/"),
            "/ui/colorfy"
        );
        assert_eq!(super::app_path_with_base("/admin", "/admin"), "/");
        assert_eq!(
            super::app_path_with_base("/elsewhere", "/admin"),
            "/elsewhere"
        );
    }
}
