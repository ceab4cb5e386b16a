// Sheetkey — Credential Backend
//
// The public-facing component. Composes the row locator, record store
// adapter, and read-through cache into set/get/delete operations over the
// backing table. One backend instance is one logical thread of control:
// public operations take `&mut self`, every store call is a blocking round
// trip, and a set followed by a get on the same key observes the written
// value via the cache. Concurrent writers in other processes are out of
// scope — the backing store has no row locking or compare-and-swap to
// build on.

use std::time::Duration;

use zeroize::Zeroizing;

use super::adapter::RecordStore;
use super::cache::PasswordCache;
use super::{clock, locator, StoreError};
use crate::auth::{self, AccessCredentials, CredentialProvider};
use crate::error::{Result, SheetkeyError};
use crate::transport::{SheetsClient, TransportError};

/// Document title used when no other selection is configured.
const DEFAULT_SHEET_TITLE: &str = "keyring";

// ─── Trait ───────────────────────────────────────────────────────────────────

/// The contract surfaced to a host credential-store registration mechanism.
pub trait CredentialBackend {
    /// Store a password for the user of the service, creating or updating
    /// the backing record as needed.
    fn set_password(&mut self, service: &str, username: &str, password: &str) -> Result<()>;

    /// Retrieve the password for the user of the service, or `None` if no
    /// record exists.
    fn get_password(&mut self, service: &str, username: &str)
        -> Result<Option<Zeroizing<String>>>;

    /// Delete the password for the user of the service. Fails with a
    /// not-found condition if no matching record exists.
    fn delete_password(&mut self, service: &str, username: &str) -> Result<()>;
}

// ─── Backend ─────────────────────────────────────────────────────────────────

/// A credential backend backed by a remote spreadsheet.
///
/// The backing document may be selected several ways, with precedence
/// pre-opened worksheet > URL > key > title; the first configured option
/// wins and lower-precedence ones are ignored. If only a title is in play
/// and no document with that title exists, one is created — the only
/// circumstance under which this backend creates a document.
///
/// Nothing touches the network until the first operation: credentials are
/// resolved and the worksheet is opened lazily.
pub struct SheetKeyring<C: SheetsClient> {
    client: Option<C>,
    worksheet: Option<C::Sheet>,
    sheet_url: Option<String>,
    sheet_key: Option<String>,
    sheet_title: Option<String>,
    credentials: Option<AccessCredentials>,
    providers: Vec<Box<dyn CredentialProvider>>,
    cache: PasswordCache,
}

impl<C: SheetsClient> SheetKeyring<C> {
    pub fn new() -> Self {
        Self {
            client: None,
            worksheet: None,
            sheet_url: None,
            sheet_key: None,
            sheet_title: None,
            credentials: None,
            providers: auth::default_provider_chain(),
            cache: PasswordCache::new(),
        }
    }

    /// Use an already-open worksheet (highest precedence).
    pub fn with_worksheet(mut self, worksheet: C::Sheet) -> Self {
        self.worksheet = Some(worksheet);
        self
    }

    /// Use an already-authorized client instead of authorizing lazily.
    pub fn with_client(mut self, client: C) -> Self {
        self.client = Some(client);
        self
    }

    /// Select the backing document by URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.sheet_url = Some(url.into());
        self
    }

    /// Select the backing document by key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.sheet_key = Some(key.into());
        self
    }

    /// Select the backing document by title (lowest precedence; defaults
    /// to "keyring").
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.sheet_title = Some(title.into());
        self
    }

    /// Supply transport credentials up front, skipping the provider chain.
    pub fn with_credentials(mut self, credentials: AccessCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Prepend an explicit service-account key file to the provider chain.
    pub fn with_key_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        let mut providers: Vec<Box<dyn CredentialProvider>> =
            vec![Box::new(auth::ServiceAccountFileProvider::new(path))];
        providers.append(&mut self.providers);
        self.providers = providers;
        self
    }

    /// Replace the credential provider chain entirely.
    pub fn with_providers(mut self, providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        self.providers = providers;
        self
    }

    /// Override the cache renewal interval (defaults to 60 seconds).
    pub fn with_cache_renewal(mut self, renewal: Duration) -> Self {
        self.cache = PasswordCache::with_renewal_interval(renewal);
        self
    }

    /// The open worksheet, if the backend has opened one yet.
    pub fn worksheet(&self) -> Option<&C::Sheet> {
        self.worksheet.as_ref()
    }

    fn credentials(&mut self) -> Result<&AccessCredentials> {
        if self.credentials.is_none() {
            let creds = auth::resolve_chain(&self.providers)?;
            self.credentials = Some(creds);
        }
        self.credentials
            .as_ref()
            .ok_or_else(|| SheetkeyError::Internal("credentials missing after resolve".to_string()))
    }

    fn client(&mut self) -> Result<&C> {
        if self.client.is_none() {
            let creds = self.credentials()?;
            let client = C::authorize(creds)?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| SheetkeyError::Internal("client missing after authorize".to_string()))
    }

    fn open_worksheet(&mut self) -> Result<C::Sheet> {
        if let Some(url) = self.sheet_url.clone() {
            let client = self.client()?;
            return client
                .open_by_url(&url)
                .map_err(|e| StoreError::Init(e.to_string()).into());
        }
        if let Some(key) = self.sheet_key.clone() {
            let client = self.client()?;
            return client
                .open_by_key(&key)
                .map_err(|e| StoreError::Init(e.to_string()).into());
        }
        let title = self
            .sheet_title
            .clone()
            .unwrap_or_else(|| DEFAULT_SHEET_TITLE.to_string());
        let client = self.client()?;
        match client.open_by_title(&title) {
            Ok(ws) => Ok(ws),
            Err(TransportError::DocumentNotFound) => {
                tracing::info!(title = %title, "No spreadsheet with this title — creating one");
                client
                    .create(&title)
                    .map_err(|e| StoreError::Init(e.to_string()).into())
            }
            Err(e) => Err(StoreError::Init(e.to_string()).into()),
        }
    }

    fn sheet(&mut self) -> Result<&mut C::Sheet> {
        if self.worksheet.is_none() {
            let ws = self.open_worksheet()?;
            self.worksheet = Some(ws);
        }
        self.worksheet
            .as_mut()
            .ok_or_else(|| SheetkeyError::Internal("worksheet missing after open".to_string()))
    }
}

impl<C: SheetsClient> Default for SheetKeyring<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SheetsClient> CredentialBackend for SheetKeyring<C> {
    fn set_password(&mut self, service: &str, username: &str, password: &str) -> Result<()> {
        let ts = clock::now_string();
        let ws = self.sheet()?;
        let rows = locator::find_rows(&*ws, service, username)?;

        let mut records = RecordStore::new(ws);
        if let Some(&canonical) = rows.iter().next() {
            // Lowest row wins; extra duplicate rows are left untouched.
            records.update_existing(canonical, password, &ts)?;
        } else {
            records.write_new(service, username, password, &ts)?;
        }

        self.cache
            .access()
            .insert((service.to_string(), username.to_string()), Some(password.to_string()));
        tracing::info!(service = %service, username = %username, "Password stored");
        Ok(())
    }

    fn get_password(
        &mut self,
        service: &str,
        username: &str,
    ) -> Result<Option<Zeroizing<String>>> {
        let key = (service.to_string(), username.to_string());
        if let Some(cached) = self.cache.access().get(&key) {
            tracing::debug!(service = %service, username = %username, "Password cache hit");
            return Ok(cached.clone().map(Zeroizing::new));
        }

        let ws = self.sheet()?;
        let rows = locator::find_rows(&*ws, service, username)?;
        let records = RecordStore::new(ws);
        let password = match rows.iter().next() {
            Some(&canonical) => Some(records.read_password(canonical)?),
            None => None,
        };

        // Negative results are cached too, so repeated misses within the
        // renewal interval cost no round trips.
        self.cache.access().insert(key, password.clone());
        Ok(password.map(Zeroizing::new))
    }

    fn delete_password(&mut self, service: &str, username: &str) -> Result<()> {
        let ws = self.sheet()?;
        let rows = locator::find_rows(&*ws, service, username)?;
        if rows.is_empty() {
            return Err(StoreError::PasswordNotFound {
                service: service.to_string(),
                username: username.to_string(),
            }
            .into());
        }

        RecordStore::new(ws).delete_rows(&rows)?;

        self.cache
            .access()
            .remove(&(service.to_string(), username.to_string()));
        tracing::info!(
            service = %service,
            username = %username,
            rows = rows.len(),
            "Password deleted"
        );
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
