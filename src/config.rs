use std::time::Duration;

pub const DEFAULT_REGISTRATION_URL: &str =
    "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA";

#[derive(Debug, Clone)]
pub struct Config {
    pub identity: Identity,
    pub registration_url: String,
    pub http_timeout: Duration,
    pub log_level: String,
}

/// Candidate details sent to the registration endpoint.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` is this over the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let identity = Identity {
            name: non_empty("REGISTRATION_NAME", env_or("REGISTRATION_NAME", "John Doe"))?,
            reg_no: non_empty("REGISTRATION_REG_NO", env_or("REGISTRATION_REG_NO", "REG12347"))?,
            email: non_empty(
                "REGISTRATION_EMAIL",
                env_or("REGISTRATION_EMAIL", "john@example.com"),
            )?,
        };

        let registration_url = non_empty(
            "REGISTRATION_URL",
            env_or("REGISTRATION_URL", DEFAULT_REGISTRATION_URL),
        )?;

        let timeout_secs: u64 = env_or("HOOKSUBMIT_HTTP_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid HOOKSUBMIT_HTTP_TIMEOUT_SECS: {e}"))?;
        if timeout_secs == 0 {
            return Err("Invalid HOOKSUBMIT_HTTP_TIMEOUT_SECS: must be greater than zero".to_string());
        }

        let log_level = env_or("HOOKSUBMIT_LOG_LEVEL", "info");

        Ok(Config {
            identity,
            registration_url,
            http_timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}

/// Rejects blank values. Non-blank values are passed through untouched.
fn non_empty(key: &str, value: String) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err(format!("Environment variable {key} must not be empty"));
    }
    Ok(value)
}
