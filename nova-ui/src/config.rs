//! Build-time configuration for the identity provider.
//!
//! The web bundle has no process environment, so settings are baked in
//! with `option_env!` at compile time and parsed by [`Config::from_lookup`].

use crate::auth::error::ConfigurationError;

pub const PROVIDER_VAR: &str = "NOVA_AUTH_PROVIDER";
pub const API_KEY_VAR: &str = "NOVA_FIREBASE_API_KEY";
pub const AUTH_DOMAIN_VAR: &str = "NOVA_FIREBASE_AUTH_DOMAIN";
pub const PROJECT_ID_VAR: &str = "NOVA_FIREBASE_PROJECT_ID";
pub const EMULATOR_HOST_VAR: &str = "NOVA_AUTH_EMULATOR_HOST";

const IDENTITY_TOOLKIT_HOST: &str = "identitytoolkit.googleapis.com";
const SECURE_TOKEN_HOST: &str = "securetoken.googleapis.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    /// `host:port` of a local Auth emulator
    pub emulator_host: Option<String>,
}

impl FirebaseConfig {
    /// Base URL for Identity Toolkit calls, honoring the emulator if set.
    pub fn identity_base_url(&self) -> String {
        match &self.emulator_host {
            Some(host) => format!("http://{host}/{IDENTITY_TOOLKIT_HOST}"),
            None => format!("https://{IDENTITY_TOOLKIT_HOST}"),
        }
    }

    pub fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/v1/accounts:{method}?key={}",
            self.identity_base_url(),
            self.api_key
        )
    }

    /// Refresh-token exchange endpoint.
    pub fn token_endpoint(&self) -> String {
        let base = match &self.emulator_host {
            Some(host) => format!("http://{host}/{SECURE_TOKEN_HOST}"),
            None => format!("https://{SECURE_TOKEN_HOST}"),
        };
        format!("{base}/v1/token?key={}", self.api_key)
    }

    /// Name of the Firebase project for log lines.
    pub fn project_label(&self) -> &str {
        self.project_id
            .as_deref()
            .or(self.auth_domain.as_deref())
            .unwrap_or("unnamed project")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthProvider {
    Firebase(FirebaseConfig),
    /// In-memory accounts, for running the UI without a Firebase project
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub provider: AuthProvider,
}

impl Config {
    pub fn from_build_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| {
            let value = match name {
                PROVIDER_VAR => option_env!("NOVA_AUTH_PROVIDER"),
                API_KEY_VAR => option_env!("NOVA_FIREBASE_API_KEY"),
                AUTH_DOMAIN_VAR => option_env!("NOVA_FIREBASE_AUTH_DOMAIN"),
                PROJECT_ID_VAR => option_env!("NOVA_FIREBASE_PROJECT_ID"),
                EMULATOR_HOST_VAR => option_env!("NOVA_AUTH_EMULATOR_HOST"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |name: &str| lookup(name).and_then(non_placeholder);

        let provider = match setting(PROVIDER_VAR).as_deref() {
            None | Some("firebase") => {
                let api_key = setting(API_KEY_VAR)
                    .ok_or(ConfigurationError::MissingSetting(API_KEY_VAR))?;
                AuthProvider::Firebase(FirebaseConfig {
                    api_key,
                    auth_domain: setting(AUTH_DOMAIN_VAR),
                    project_id: setting(PROJECT_ID_VAR),
                    emulator_host: setting(EMULATOR_HOST_VAR),
                })
            }
            Some("local") => AuthProvider::Local,
            Some(other) => {
                return Err(ConfigurationError::UnknownProvider(other.to_string()));
            }
        };

        Ok(Self { provider })
    }
}

/// Empty values and the `YOUR_...` template placeholders count as unset.
fn non_placeholder(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.starts_with("YOUR_") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn firebase_is_the_default_provider() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_VAR, "key-123"),
            (PROJECT_ID_VAR, "nova-videos-ai"),
        ]))
        .expect("should parse");

        match config.provider {
            AuthProvider::Firebase(firebase) => {
                assert_eq!(firebase.api_key, "key-123");
                assert_eq!(firebase.project_id.as_deref(), Some("nova-videos-ai"));
                assert!(firebase.emulator_host.is_none());
            }
            AuthProvider::Local => panic!("expected firebase provider"),
        }
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let err = Config::from_lookup(lookup(&[])).expect_err("must fail");
        assert_eq!(err, ConfigurationError::MissingSetting(API_KEY_VAR));
    }

    #[test]
    fn template_placeholders_count_as_missing() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "YOUR_API_KEY")]))
            .expect_err("must fail");
        assert_eq!(err, ConfigurationError::MissingSetting(API_KEY_VAR));
    }

    #[test]
    fn local_provider_needs_no_keys() {
        let config = Config::from_lookup(lookup(&[(PROVIDER_VAR, "local")])).unwrap();
        assert_eq!(config.provider, AuthProvider::Local);
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = Config::from_lookup(lookup(&[(PROVIDER_VAR, "ldap")])).expect_err("must fail");
        assert!(err.to_string().contains("ldap"));
    }

    #[test]
    fn endpoints_respect_emulator_host() {
        let mut firebase = FirebaseConfig {
            api_key: "k".to_string(),
            auth_domain: None,
            project_id: None,
            emulator_host: None,
        };
        assert_eq!(
            firebase.endpoint("signUp"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=k"
        );

        assert_eq!(
            firebase.token_endpoint(),
            "https://securetoken.googleapis.com/v1/token?key=k"
        );

        firebase.emulator_host = Some("localhost:9099".to_string());
        assert_eq!(
            firebase.endpoint("signInWithPassword"),
            "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=k"
        );
        assert_eq!(
            firebase.token_endpoint(),
            "http://localhost:9099/securetoken.googleapis.com/v1/token?key=k"
        );
    }

    #[test]
    fn project_label_prefers_project_id() {
        let mut firebase = FirebaseConfig {
            api_key: "k".to_string(),
            auth_domain: Some("nova.firebaseapp.com".to_string()),
            project_id: Some("nova-videos-ai".to_string()),
            emulator_host: None,
        };
        assert_eq!(firebase.project_label(), "nova-videos-ai");

        firebase.project_id = None;
        assert_eq!(firebase.project_label(), "nova.firebaseapp.com");

        firebase.auth_domain = None;
        assert_eq!(firebase.project_label(), "unnamed project");
    }
}
