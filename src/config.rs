use log::debug;
use std::env;
use std::time::Duration;

/// Host used when nothing else is configured.
pub const DEFAULT_HOST: &str = "http://localhost:8080";

/// Environment variable overriding the target host.
pub const HOST_ENV_VAR: &str = "ACCOUNT_API_HOST";

/// Request timeout of the default `reqwest` transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolve the target host from `ACCOUNT_API_HOST`, falling back to [`DEFAULT_HOST`].
pub fn host_from_env() -> String {
    resolve_host(env::var(HOST_ENV_VAR).ok())
}

fn resolve_host(value: Option<String>) -> String {
    match value {
        Some(host) if !host.trim().is_empty() => {
            debug!("Using account API host from {}", HOST_ENV_VAR);
            host.trim().to_string()
        }
        _ => DEFAULT_HOST.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_host() {
        assert_eq!(resolve_host(None), DEFAULT_HOST);
        assert_eq!(resolve_host(Some("   ".into())), DEFAULT_HOST);
    }

    #[test]
    fn uses_configured_host() {
        assert_eq!(
            resolve_host(Some(" http://accountapi:8080 ".into())),
            "http://accountapi:8080"
        );
    }
}
