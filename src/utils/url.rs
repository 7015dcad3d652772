//! URL helpers

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://x/v1beta/", "/models/m"), "http://x/v1beta/models/m");
        assert_eq!(join_url("http://x/v1beta", "models/m"), "http://x/v1beta/models/m");
    }
}
