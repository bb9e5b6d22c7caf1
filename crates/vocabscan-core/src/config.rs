/// Endpoints and timeout for the remote license lookups.
///
/// Defaults target the public Licensius API; every field can be overridden
/// through the environment so tests and mirrors can point elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Scans the RDF document at a URI for the first license statement.
    pub find_license_endpoint: String,
    /// Resolves a license URI to its human-readable title.
    pub license_info_endpoint: String,
    pub timeout_ms: u64,
}

pub const DEFAULT_FIND_LICENSE_ENDPOINT: &str =
    "http://www.licensius.com/api/license/findlicenseinrdf";
pub const DEFAULT_LICENSE_INFO_ENDPOINT: &str =
    "http://www.licensius.com/api/license/getlicenseinfo";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            find_license_endpoint: DEFAULT_FIND_LICENSE_ENDPOINT.to_string(),
            license_info_endpoint: DEFAULT_LICENSE_INFO_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            find_license_endpoint: read_non_empty_env("VOCABSCAN_LICENSE_ENDPOINT")
                .unwrap_or(defaults.find_license_endpoint),
            license_info_endpoint: read_non_empty_env("VOCABSCAN_LICENSE_INFO_ENDPOINT")
                .unwrap_or(defaults.license_info_endpoint),
            timeout_ms: read_env_u64("VOCABSCAN_HTTP_TIMEOUT_MS").unwrap_or(defaults.timeout_ms),
        }
    }
}

#[must_use]
fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
fn read_env_u64(name: &str) -> Option<u64> {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_to_licensius() {
        let config = ResolverConfig::default();
        assert!(config.find_license_endpoint.contains("findlicenseinrdf"));
        assert!(config.license_info_endpoint.contains("getlicenseinfo"));
        assert_eq!(config.timeout_ms, 10_000);
    }

    // The VOCABSCAN_* variables are process-global, so exactly one test
    // touches them; helper-level cases below use their own names.
    #[test]
    fn env_overrides_land_and_blank_values_fall_back() {
        unsafe {
            std::env::set_var("VOCABSCAN_LICENSE_ENDPOINT", "  http://mirror.example/find  ");
            std::env::set_var("VOCABSCAN_LICENSE_INFO_ENDPOINT", "   ");
            std::env::set_var("VOCABSCAN_HTTP_TIMEOUT_MS", "2500");
        }
        let config = ResolverConfig::from_env();
        unsafe {
            std::env::remove_var("VOCABSCAN_LICENSE_ENDPOINT");
            std::env::remove_var("VOCABSCAN_LICENSE_INFO_ENDPOINT");
            std::env::remove_var("VOCABSCAN_HTTP_TIMEOUT_MS");
        }

        assert_eq!(config.find_license_endpoint, "http://mirror.example/find");
        assert_eq!(
            config.license_info_endpoint,
            DEFAULT_LICENSE_INFO_ENDPOINT
        );
        assert_eq!(config.timeout_ms, 2500);
    }

    #[test]
    fn env_helpers_trim_and_reject_garbage() {
        unsafe {
            std::env::set_var("VOCABSCAN_TEST_PADDED", "  value  ");
            std::env::set_var("VOCABSCAN_TEST_PADDED_NUM", " 2500 ");
            std::env::set_var("VOCABSCAN_TEST_GARBAGE_NUM", "fast");
        }
        let padded = read_non_empty_env("VOCABSCAN_TEST_PADDED");
        let padded_num = read_env_u64("VOCABSCAN_TEST_PADDED_NUM");
        let garbage_num = read_env_u64("VOCABSCAN_TEST_GARBAGE_NUM");
        unsafe {
            std::env::remove_var("VOCABSCAN_TEST_PADDED");
            std::env::remove_var("VOCABSCAN_TEST_PADDED_NUM");
            std::env::remove_var("VOCABSCAN_TEST_GARBAGE_NUM");
        }

        assert_eq!(padded.as_deref(), Some("value"));
        assert_eq!(padded_num, Some(2500));
        assert_eq!(garbage_num, None);
        assert_eq!(read_non_empty_env("VOCABSCAN_TEST_NEVER_SET"), None);
        assert_eq!(read_env_u64("VOCABSCAN_TEST_NEVER_SET"), None);
    }
}
