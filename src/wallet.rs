//! Label-keyed identity wallet
//!
//! Identities are held in memory as [`Elements`] and decoded on the way out.
//! Nothing is persisted; the store lives and dies with the wallet value.
//! Mutating operations take `&mut self`, so sharing a wallet across threads
//! requires the caller to wrap it in a lock.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::codec::{IdentityCodec, TYPE_ELEMENT};
use crate::config::{WalletConfig, DEFAULT_CAPACITY, MAX_INITIAL_CAPACITY};
use crate::elements::Elements;
use crate::error::WalletError;
use crate::x509::X509IdentityCodec;
use crate::Result;

/// Stores identities under user-chosen labels
pub struct Wallet<C: IdentityCodec = X509IdentityCodec> {
    codec: C,
    path: PathBuf,
    storage: HashMap<String, Elements>,
}

impl Wallet<X509IdentityCodec> {
    /// Create an empty X.509 wallet.
    ///
    /// `path` is recorded for interface compatibility with persistent
    /// backends and is otherwise unused.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(path, X509IdentityCodec)
    }
}

impl<C: IdentityCodec> Wallet<C> {
    /// Create an empty wallet that encodes identities with `codec`
    pub fn with_codec(path: impl Into<PathBuf>, codec: C) -> Self {
        Self::build(path.into(), codec, DEFAULT_CAPACITY)
    }

    /// Create an empty wallet from configuration
    pub fn from_config(config: &WalletConfig, codec: C) -> Self {
        Self::build(config.path.clone(), codec, config.initial_capacity)
    }

    fn build(path: PathBuf, codec: C, capacity: usize) -> Self {
        let capacity = if capacity > MAX_INITIAL_CAPACITY {
            log::warn!(
                "Initial capacity {} exceeds {}, reserving {}",
                capacity,
                MAX_INITIAL_CAPACITY,
                MAX_INITIAL_CAPACITY
            );
            MAX_INITIAL_CAPACITY
        } else {
            capacity
        };
        log::info!("Created in-memory wallet at {}", path.display());
        Self {
            codec,
            path,
            storage: HashMap::with_capacity(capacity),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Store `identity` under `label`, replacing any previous entry
    pub fn put(&mut self, label: &str, identity: &C::Identity) -> Result<()> {
        validate_label(label)?;
        let elements = self
            .codec
            .encode(identity)
            .map_err(|source| WalletError::EncodeFailure {
                label: label.to_string(),
                source,
            })?;

        if self.storage.insert(label.to_string(), elements).is_some() {
            log::debug!("Replaced identity '{}'", label);
        } else {
            log::debug!("Stored identity '{}'", label);
        }
        Ok(())
    }

    /// Fetch and decode the identity stored under `label`
    pub fn get(&self, label: &str) -> Result<C::Identity> {
        let elements = self.entry(label)?;
        self.codec.decode(elements).map_err(|source| {
            log::warn!("Stored identity '{}' failed to decode: {}", label, source);
            WalletError::DecodeFailure {
                label: label.to_string(),
                source,
            }
        })
    }

    /// Delete the identity stored under `label`.
    ///
    /// Removing an absent label succeeds. Returns whether an entry was
    /// actually deleted.
    pub fn remove(&mut self, label: &str) -> Result<bool> {
        let removed = self.storage.remove(label).is_some();
        if removed {
            log::debug!("Removed identity '{}'", label);
        } else {
            log::debug!("Remove of absent identity '{}' ignored", label);
        }
        Ok(removed)
    }

    pub fn exists(&self, label: &str) -> bool {
        self.storage.contains_key(label)
    }

    /// Snapshot of all labels, in no particular order
    pub fn list(&self) -> Vec<String> {
        self.storage.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Export the stored elements for `label` as JSON without decoding them
    pub fn export(&self, label: &str) -> Result<String> {
        let json = self
            .entry(label)?
            .to_json()
            .map_err(|source| WalletError::EncodeFailure {
                label: label.to_string(),
                source,
            })?;
        log::debug!("Exported identity '{}'", label);
        Ok(json)
    }

    /// Store elements exported by [`Wallet::export`] under `label`.
    ///
    /// The elements must decode with this wallet's codec; anything else is
    /// rejected before it reaches the store.
    pub fn import(&mut self, label: &str, json: &str) -> Result<()> {
        validate_label(label)?;
        let decode_failure = |source| WalletError::DecodeFailure {
            label: label.to_string(),
            source,
        };

        let elements = Elements::from_json(json).map_err(decode_failure)?;
        self.codec.decode(&elements).map_err(decode_failure)?;

        log::debug!(
            "Imported {} identity '{}'",
            elements.get(TYPE_ELEMENT).unwrap_or("unknown"),
            label
        );
        self.storage.insert(label.to_string(), elements);
        Ok(())
    }

    fn entry(&self, label: &str) -> Result<&Elements> {
        self.storage
            .get(label)
            .ok_or_else(|| WalletError::NotFound(label.to_string()))
    }
}

fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(WalletError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

// Stored elements hold private keys; only labels are shown.
impl<C: IdentityCodec> fmt::Debug for Wallet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("path", &self.path)
            .field("labels", &self.storage.keys().collect::<Vec<_>>())
            .finish()
    }
}
