// Sheetkey — Credential Providers
//
// Each provider knows one way to produce transport credentials. The backend
// tries a configured chain in order and propagates the last failure when
// every provider comes up empty:
//
//   1. `ServiceAccountFileProvider` — an explicit key file on disk
//   2. `ApplicationDefaultProvider` — the conventional key-file environment
//      variable set by hosted platforms
//   3. `HostedNotebookProvider` — the ambient token a hosted notebook
//      environment exposes to its kernels

use std::path::PathBuf;

use super::credentials::{AccessCredentials, ServiceAccountKey};
use super::AuthError;

/// Environment variable hosted platforms use to point at a key file.
const APPLICATION_DEFAULT_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Environment variable a hosted notebook exposes its session token in.
const NOTEBOOK_TOKEN_ENV: &str = "NOTEBOOK_AUTH_TOKEN";

/// Account label for credentials acquired through the notebook flow.
const NOTEBOOK_ACCOUNT: &str = "hosted-notebook";

// ─── Trait ───────────────────────────────────────────────────────────────────

/// A single way of producing transport credentials.
pub trait CredentialProvider {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Produce transport credentials, or fail.
    fn credentials(&self) -> std::result::Result<AccessCredentials, AuthError>;
}

/// Try each provider in order. The first success wins; if every provider
/// fails, the LAST failure is propagated (it is the most specific one: the
/// end of the chain is the most interactive fallback).
pub fn resolve_chain(
    providers: &[Box<dyn CredentialProvider>],
) -> std::result::Result<AccessCredentials, AuthError> {
    let mut last_err = AuthError::Exhausted;
    for provider in providers {
        match provider.credentials() {
            Ok(creds) => {
                tracing::debug!(
                    provider = provider.name(),
                    account = %creds.account(),
                    "Resolved transport credentials"
                );
                return Ok(creds);
            }
            Err(e) => {
                tracing::debug!(
                    provider = provider.name(),
                    error = %e,
                    "Credential provider failed — trying next"
                );
                last_err = e;
            }
        }
    }
    Err(last_err)
}

/// The fallback chain used when no explicit credentials or key file are
/// configured: ambient platform identity, then the hosted-notebook flow.
pub fn default_provider_chain() -> Vec<Box<dyn CredentialProvider>> {
    vec![
        Box::new(ApplicationDefaultProvider::new()),
        Box::new(HostedNotebookProvider::new()),
    ]
}

// ─── File-based provider ─────────────────────────────────────────────────────

/// Reads a service-account key file (JSON) from an explicit path.
pub struct ServiceAccountFileProvider {
    path: PathBuf,
}

impl ServiceAccountFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialProvider for ServiceAccountFileProvider {
    fn name(&self) -> &'static str {
        "service-account-file"
    }

    fn credentials(&self) -> std::result::Result<AccessCredentials, AuthError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| AuthError::KeyFile {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let key: ServiceAccountKey =
            serde_json::from_str(&raw).map_err(|e| AuthError::MalformedKey(e.to_string()))?;
        tracing::debug!(account = %key.client_email, "Loaded service account key file");
        Ok(AccessCredentials::from_service_account(&key))
    }
}

// ─── Ambient platform provider ───────────────────────────────────────────────

/// Ambient platform identity: honors the conventional environment variable
/// that hosted platforms set to point at a key file.
pub struct ApplicationDefaultProvider {
    env_var: String,
}

impl ApplicationDefaultProvider {
    pub fn new() -> Self {
        Self {
            env_var: APPLICATION_DEFAULT_ENV.to_string(),
        }
    }

    /// Read a custom environment variable (useful for testing isolation).
    pub fn with_env_var(name: impl Into<String>) -> Self {
        Self {
            env_var: name.into(),
        }
    }
}

impl Default for ApplicationDefaultProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for ApplicationDefaultProvider {
    fn name(&self) -> &'static str {
        "application-default"
    }

    fn credentials(&self) -> std::result::Result<AccessCredentials, AuthError> {
        match std::env::var(&self.env_var) {
            Ok(path) if !path.is_empty() => ServiceAccountFileProvider::new(path).credentials(),
            _ => Err(AuthError::NoAmbientCredentials),
        }
    }
}

// ─── Hosted-notebook provider ────────────────────────────────────────────────

/// Interactive flow offered by hosted notebook environments. Those
/// environments expose a session token to their kernels; outside one, this
/// provider always fails.
pub struct HostedNotebookProvider {
    token_var: String,
}

impl HostedNotebookProvider {
    pub fn new() -> Self {
        Self {
            token_var: NOTEBOOK_TOKEN_ENV.to_string(),
        }
    }

    /// Read a custom environment variable (useful for testing isolation).
    pub fn with_token_var(name: impl Into<String>) -> Self {
        Self {
            token_var: name.into(),
        }
    }
}

impl Default for HostedNotebookProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for HostedNotebookProvider {
    fn name(&self) -> &'static str {
        "hosted-notebook"
    }

    fn credentials(&self) -> std::result::Result<AccessCredentials, AuthError> {
        match std::env::var(&self.token_var) {
            Ok(token) if !token.is_empty() => {
                tracing::debug!("Using hosted-notebook session token");
                Ok(AccessCredentials::new(NOTEBOOK_ACCOUNT, token))
            }
            _ => Err(AuthError::NotebookUnavailable),
        }
    }
}

// ─── Static mock for testing ─────────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────
