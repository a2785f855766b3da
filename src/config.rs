//! Per-call credentials and transport settings

use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use log::debug;

/// Whole-call time bound used when none is configured
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Environment variable read by `Credentials::from_env`
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Optional organization variable read by `Credentials::from_env`
pub const ORG_ID_ENV: &str = "OPENAI_ORG_ID";

/// Caller-supplied authentication for one call
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials
{   /// Bearer token, never serialized
    #[serde(skip_serializing)]
    pub api_key: String
  , /// Sent as `OpenAI-Organization` when non-blank
    #[serde(default)]
    pub organization: Option<String>
}

impl Credentials
{   /// Credentials without an organization
    pub fn new(api_key: impl Into<String>) -> Self
    {   Credentials
        {   api_key: api_key.into()
          , organization: None
        }
    }

    pub fn with_organization(
      mut self
    , organization: impl Into<String>
    ) -> Self
    {   self.organization = Some(organization.into());
        self
    }

    /// Read credentials from `OPENAI_API_KEY` and `OPENAI_ORG_ID`
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   let api_key = std::env::var(API_KEY_ENV)
          .unwrap_or_default();
        crate::error::require_non_blank("api_key", &api_key)?;
        let organization = std::env::var(ORG_ID_ENV).ok();
        debug!(
          "Loaded credentials from environment (organization: {})"
        , organization.is_some()
        );
        Ok(Credentials
        {   api_key
          , organization
        })
    }

    /// Fails unless the API key is non-blank
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   crate::error::require_non_blank("api_key", &self.api_key)
    }

    /// Trimmed API key
    pub fn api_key(&self) -> &str
    {   self.api_key.trim()
    }

    /// Trimmed organization id, `None` when absent or blank
    pub fn organization(&self) -> Option<&str>
    {   self.organization
          .as_deref()
          .map(str::trim)
          .filter(|org| !org.is_empty())
    }
}

impl fmt::Debug for Credentials
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("Credentials")
          .field("api_key", &"<redacted>")
          .field("organization", &self.organization)
          .finish()
    }
}

/// Transport configuration applied to a single call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransportConfig
{   /// Whole-call timeout in milliseconds (default 60s)
    #[serde(default)]
    pub timeout_ms: Option<u64>
  , /// Proxy URL for all schemes, e.g. `http://127.0.0.1:7890`
    #[serde(default)]
    pub proxy: Option<String>
  , /// Log request and response bodies at trace level
    #[serde(default)]
    pub verbose: bool
}

impl TransportConfig
{   pub fn with_timeout(mut self, timeout: Duration) -> Self
    {   self.timeout_ms = Some(
          u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
        );
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self
    {   self.proxy = Some(proxy.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self
    {   self.verbose = verbose;
        self
    }

    /// Effective whole-call timeout
    pub fn timeout(&self) -> Duration
    {   Duration::from_millis(
          self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
        )
    }

    /// Trimmed proxy URL, `None` when absent or blank
    pub fn proxy(&self) -> Option<&str>
    {   self.proxy
          .as_deref()
          .map(str::trim)
          .filter(|proxy| !proxy.is_empty())
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn blank_organization_is_treated_as_absent()
    {   let creds = Credentials::new("sk-test")
          .with_organization("   ");
        assert_eq!(creds.organization(), None);

        let creds = Credentials::new("sk-test")
          .with_organization(" org-1 ");
        assert_eq!(creds.organization(), Some("org-1"));
    }

    #[test]
    fn debug_output_hides_the_key()
    {   let creds = Credentials::new("sk-secret");
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn serialized_credentials_omit_the_key()
    {   let creds = Credentials::new("sk-secret")
          .with_organization("org-1");
        let json = serde_json::to_string(&creds).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(json.contains("org-1"));
    }

    #[test]
    fn oversized_timeout_saturates()
    {   let config = TransportConfig::default()
          .with_timeout(Duration::MAX);
        assert_eq!(config.timeout_ms, Some(u64::MAX));
    }

    #[test]
    fn blank_key_fails_validation()
    {   assert_eq!(
          Credentials::new(" ").validate()
        , Err(crate::error::Error::EmptyField("api_key"))
        );
    }

    #[test]
    fn transport_defaults_to_sixty_seconds_without_proxy()
    {   let config = TransportConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.proxy(), None);
        assert!(!config.verbose);
    }

    #[test]
    fn transport_config_deserializes_from_partial_json()
    {   let config: TransportConfig = serde_json::from_str(
          r#"{"proxy":"http://127.0.0.1:7890","timeout_ms":1500}"#
        ).unwrap();
        assert_eq!(config.proxy(), Some("http://127.0.0.1:7890"));
        assert_eq!(config.timeout(), Duration::from_millis(1500));
    }
}
