//! Runtime configuration from the environment (optionally seeded from `.env`).

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Delays of the simulated payment flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTiming {
    /// Time spent in `processing` before the gateway answers
    pub processing: Duration,
    /// Time `success` is shown before the booking is confirmed
    pub success_hold: Duration,
}

impl Default for PaymentTiming {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(2000),
            success_hold: Duration::from_millis(3000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub payment_timing: PaymentTiming,
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            payment_timing: PaymentTiming::default(),
            session_ttl: Duration::from_secs(30 * 60),
        }
    }
}

impl Config {
    /// Read configuration, falling back to defaults for unset variables.
    ///
    /// A variable that is set but unparsable is an error.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let processing_ms = env_or(
            "PAYMENT_PROCESSING_DELAY_MS",
            defaults.payment_timing.processing.as_millis() as u64,
        )?;
        let success_hold_ms = env_or(
            "PAYMENT_SUCCESS_HOLD_MS",
            defaults.payment_timing.success_hold.as_millis() as u64,
        )?;
        let session_ttl_secs = env_or("PAYMENT_SESSION_TTL_SECS", defaults.session_ttl.as_secs())?;
        if session_ttl_secs == 0 {
            return Err(anyhow!("PAYMENT_SESSION_TTL_SECS must be positive"));
        }

        Ok(Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            static_dir: env_or("STATIC_DIR", defaults.static_dir)?,
            payment_timing: PaymentTiming {
                processing: Duration::from_millis(processing_ms),
                success_hold: Duration::from_millis(success_hold_ms),
            },
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).with_context(|| format!("cannot read {}", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.payment_timing.processing, Duration::from_secs(2));
        assert_eq!(config.payment_timing.success_hold, Duration::from_secs(3));
    }

    // Uses variable names nothing else reads, so parallel tests don't race
    #[test]
    fn test_env_or_parses_and_rejects() {
        env::set_var("M360_TEST_PORT_OK", " 8080 ");
        assert_eq!(env_or("M360_TEST_PORT_OK", 1u16).unwrap(), 8080);

        env::set_var("M360_TEST_PORT_BAD", "eighty");
        let err = env_or("M360_TEST_PORT_BAD", 1u16).unwrap_err();
        assert!(err.to_string().contains("M360_TEST_PORT_BAD"));

        assert_eq!(env_or("M360_TEST_UNSET", 42u64).unwrap(), 42);
    }
}
