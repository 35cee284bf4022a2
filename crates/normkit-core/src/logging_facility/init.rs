//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Directive used when `RUST_LOG` is not set
    pub fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "normkit_core=debug",
            Profile::Production => "normkit_core=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Installs the global tracing subscriber for the selected profile. Only the
/// first call has an effect; later calls are ignored whatever their profile.
///
/// `RUST_LOG` overrides the profile's default filter.
///
/// # Example
///
/// ```
/// use normkit_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_filter(profile, rust_log.as_deref());
        // try_init: a subscriber installed by the host application wins
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .finish()
                .try_init(),
            // Test capture is installed separately via init_test_capture()
            Profile::Test => tracing_subscriber::registry().with(filter).try_init(),
        };
    });
}

/// Filter from `RUST_LOG` if it parses, else the profile's default directive.
fn build_filter(profile: Profile, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(profile.default_directive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Development);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(
            Profile::Development.default_directive(),
            "normkit_core=debug"
        );
        assert_eq!(Profile::Production.default_directive(), "normkit_core=info");
        assert_ne!(Profile::Development, Profile::Production);
    }

    #[test]
    fn test_test_profile_filter_is_off() {
        let filter = build_filter(Profile::Test, None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::OFF));
    }

    #[test]
    fn test_rust_log_overrides_profile() {
        let filter = build_filter(Profile::Test, Some("normkit_core=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter(Profile::Production, Some("   "));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
