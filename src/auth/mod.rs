// Sheetkey — Auth Module
//
// Acquires the opaque transport credentials the tabular-store client needs.
// Acquisition is modeled as an ordered chain of credential providers, tried
// in order; the last failure is propagated if none succeeds.

mod credentials;
mod error;
mod provider;

pub use credentials::{AccessCredentials, ServiceAccountKey};
pub use error::AuthError;
pub use provider::{
    default_provider_chain, resolve_chain, ApplicationDefaultProvider, CredentialProvider,
    HostedNotebookProvider, ServiceAccountFileProvider,
};

#[cfg(test)]
pub use provider::mock;
