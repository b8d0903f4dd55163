//! Configuration loading and resolution.

use serde::Serialize;

/// Default cap on raw pixel bytes accepted by `feature_extract` (64 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 64 * 1024 * 1024;

/// Default cap on candidates accepted per matching call.
pub const DEFAULT_MAX_CANDIDATES: usize = 100_000;

/// Default cap on `k` for top-k queries.
pub const DEFAULT_MAX_TOP_K: usize = 1_000;

const ENV_MAX_IMAGE_BYTES: &str = "NEURALIST_MAX_IMAGE_BYTES";
const ENV_MAX_CANDIDATES: &str = "NEURALIST_MAX_CANDIDATES";
const ENV_MAX_TOP_K: &str = "NEURALIST_MAX_TOP_K";

/// Request limits enforced by the tool layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub max_image_bytes: usize,
    pub max_candidates: usize,
    pub max_top_k: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_top_k: DEFAULT_MAX_TOP_K,
        }
    }
}

impl ServerConfig {
    /// Resolve each limit: explicit value, then environment, then default.
    pub fn resolve(
        max_image_bytes: Option<usize>,
        max_candidates: Option<usize>,
        max_top_k: Option<usize>,
    ) -> Self {
        Self {
            max_image_bytes: resolve_limit(
                max_image_bytes,
                ENV_MAX_IMAGE_BYTES,
                DEFAULT_MAX_IMAGE_BYTES,
            ),
            max_candidates: resolve_limit(
                max_candidates,
                ENV_MAX_CANDIDATES,
                DEFAULT_MAX_CANDIDATES,
            ),
            max_top_k: resolve_limit(max_top_k, ENV_MAX_TOP_K, DEFAULT_MAX_TOP_K),
        }
    }
}

fn resolve_limit(explicit: Option<usize>, env_var: &str, default: usize) -> usize {
    if let Some(value) = explicit {
        return value;
    }

    match std::env::var(env_var) {
        Ok(raw) => parse_limit(&raw).unwrap_or_else(|| {
            tracing::warn!("Ignoring {env_var}={raw:?}: expected a positive integer");
            default
        }),
        Err(_) => default,
    }
}

fn parse_limit(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|&v| v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins() {
        let config = ServerConfig::resolve(Some(10), Some(20), Some(30));
        assert_eq!(config.max_image_bytes, 10);
        assert_eq!(config.max_candidates, 20);
        assert_eq!(config.max_top_k, 30);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(" 42 "), Some(42));
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("-5"), None);
        assert_eq!(parse_limit("lots"), None);
    }

    #[test]
    fn test_default_limits() {
        let config = ServerConfig::default();
        assert_eq!(config.max_top_k, DEFAULT_MAX_TOP_K);
        assert_eq!(config.max_candidates, DEFAULT_MAX_CANDIDATES);
    }
}
