//! Wallet configuration from environment variables
//!
//! The path is carried for storage backends that need a root directory or
//! connection string. The in-memory wallet records it and never touches it.

use std::env;
use std::path::PathBuf;

const DEFAULT_PATH: &str = "./wallet";
pub(crate) const DEFAULT_CAPACITY: usize = 10;
/// Largest capacity reserved up front; the store still grows past it
pub(crate) const MAX_INITIAL_CAPACITY: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    /// Storage location handed to the wallet
    pub path: PathBuf,
    /// Number of identities the store reserves room for up front
    pub initial_capacity: usize,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `WALLET_PATH`: storage location (default `./wallet`)
    /// - `WALLET_CAPACITY`: initial store capacity (default 10, at most 1024)
    pub fn from_env() -> Self {
        Self::from_vars(env::var("WALLET_PATH").ok(), env::var("WALLET_CAPACITY").ok())
    }

    fn from_vars(path: Option<String>, capacity: Option<String>) -> Self {
        let path = path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
        log::info!("Wallet path: {}", path.display());

        let initial_capacity = match capacity {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n <= MAX_INITIAL_CAPACITY => n,
                Ok(n) => {
                    log::warn!(
                        "WALLET_CAPACITY {} exceeds {}, defaulting to {}",
                        n,
                        MAX_INITIAL_CAPACITY,
                        DEFAULT_CAPACITY
                    );
                    DEFAULT_CAPACITY
                }
                Err(_) => {
                    log::warn!(
                        "Invalid WALLET_CAPACITY '{}', defaulting to {}",
                        raw,
                        DEFAULT_CAPACITY
                    );
                    DEFAULT_CAPACITY
                }
            },
            None => DEFAULT_CAPACITY,
        };

        Self {
            path,
            initial_capacity,
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = WalletConfig::from_vars(None, None);
        assert_eq!(config, WalletConfig::default());
    }

    #[test]
    fn test_reads_path_and_capacity() {
        let config =
            WalletConfig::from_vars(Some("/var/lib/wallet".to_string()), Some("64".to_string()));
        assert_eq!(config.path, PathBuf::from("/var/lib/wallet"));
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    fn test_bad_capacity_falls_back() {
        let config = WalletConfig::from_vars(None, Some("lots".to_string()));
        assert_eq!(config.initial_capacity, 10);
    }

    #[test]
    fn test_oversized_capacity_falls_back() {
        let config = WalletConfig::from_vars(None, Some(usize::MAX.to_string()));
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);

        let config = WalletConfig::from_vars(None, Some("1025".to_string()));
        assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);

        let config = WalletConfig::from_vars(None, Some("1024".to_string()));
        assert_eq!(config.initial_capacity, MAX_INITIAL_CAPACITY);
    }

    #[test]
    fn test_from_env_reads_variables() {
        env::set_var("WALLET_PATH", "/opt/identities");
        env::set_var("WALLET_CAPACITY", "32");

        let config = WalletConfig::from_env();

        env::remove_var("WALLET_PATH");
        env::remove_var("WALLET_CAPACITY");

        assert_eq!(config.path, PathBuf::from("/opt/identities"));
        assert_eq!(config.initial_capacity, 32);
    }
}
