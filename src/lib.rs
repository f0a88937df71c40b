//! Identity Wallet: label-keyed storage for network credentials
//!
//! A wallet holds named identities (certificate + private key, or a bare
//! signing key) used to authenticate a client against a remote network.
//! The wallet never inspects identities itself; a pluggable
//! [`IdentityCodec`] turns each identity into flat string [`Elements`] on
//! the way in and back on the way out.
//!
//! # Architecture
//!
//! - **Wallet**: in-memory label → elements store with put/get/remove/exists/list
//! - **IdentityCodec**: two-operation capability separating storage from credential format
//! - **Codecs**: X.509 (default) and raw secp256k1 keys
//!
//! # Example
//!
//! ```ignore
//! use identity_wallet::{Wallet, X509Identity};
//!
//! let mut wallet = Wallet::new("./wallet");
//! wallet.put("alice", &X509Identity::new("Org1MSP", cert_pem, key_pem))?;
//!
//! let alice = wallet.get("alice")?;
//! assert_eq!(alice.msp_id, "Org1MSP");
//! ```

// Public modules
pub mod codec;
pub mod config;
pub mod elements;
pub mod error;
pub mod key_identity;
pub mod wallet;
pub mod x509;

// Re-exports for convenience
pub use codec::{IdentityCodec, TypedCodec};
pub use config::WalletConfig;
pub use elements::Elements;
pub use error::{CodecError, WalletError};
pub use key_identity::{KeyIdentity, KeyIdentityCodec};
pub use wallet::Wallet;
pub use x509::{X509Identity, X509IdentityCodec};

// Common result type
pub type Result<T> = std::result::Result<T, WalletError>;
