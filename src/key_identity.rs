//! Raw secp256k1 key identity scheme
//!
//! Stores the signing key as hex alongside its compressed public key. The
//! public key is redundant but lets decode detect a corrupted private key.

use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::codec::{
    require_msp_id, IdentityCodec, TypedCodec, MSP_ID_ELEMENT, PRIVATE_KEY_ELEMENT, TYPE_ELEMENT,
};
use crate::elements::Elements;
use crate::error::CodecError;

/// Element holding the compressed public key
pub const PUBLIC_KEY_ELEMENT: &str = "publicKey";

/// Identity backed by a bare secp256k1 signing key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIdentity {
    pub msp_id: String,
    pub secret_key: SecretKey,
}

impl KeyIdentity {
    pub fn new(msp_id: impl Into<String>, secret_key: SecretKey) -> Self {
        Self {
            msp_id: msp_id.into(),
            secret_key,
        }
    }

    /// Create an identity with a freshly generated key
    pub fn generate(msp_id: impl Into<String>) -> Self {
        let secret_key = SecretKey::new(&mut secp256k1::rand::thread_rng());
        Self::new(msp_id, secret_key)
    }

    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::new();
        PublicKey::from_secret_key(&secp, &self.secret_key)
    }
}

/// Codec for [`KeyIdentity`]
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyIdentityCodec;

impl KeyIdentityCodec {
    pub const IDENTITY_TYPE: &'static str = "secp256k1";

    pub fn new() -> Self {
        Self
    }
}

fn decode_hex(name: &str, value: &str) -> Result<Vec<u8>, CodecError> {
    hex::decode(value).map_err(|e| CodecError::invalid_element(name, e.to_string()))
}

impl IdentityCodec for KeyIdentityCodec {
    type Identity = KeyIdentity;

    fn encode(&self, identity: &KeyIdentity) -> Result<Elements, CodecError> {
        require_msp_id(&identity.msp_id)?;

        let public_key = identity.public_key();
        Ok(Elements::from_iter([
            (TYPE_ELEMENT, Self::IDENTITY_TYPE.to_string()),
            (MSP_ID_ELEMENT, identity.msp_id.clone()),
            (
                PRIVATE_KEY_ELEMENT,
                hex::encode(identity.secret_key.secret_bytes()),
            ),
            (PUBLIC_KEY_ELEMENT, hex::encode(public_key.serialize())),
        ]))
    }

    fn decode(&self, elements: &Elements) -> Result<KeyIdentity, CodecError> {
        self.check_type(elements)?;

        let msp_id = elements.require(MSP_ID_ELEMENT)?;
        require_msp_id(msp_id)?;

        let secret_bytes = decode_hex(PRIVATE_KEY_ELEMENT, elements.require(PRIVATE_KEY_ELEMENT)?)?;
        let secret_key = SecretKey::from_slice(&secret_bytes)
            .map_err(|e| CodecError::invalid_element(PRIVATE_KEY_ELEMENT, e.to_string()))?;

        let public_bytes = decode_hex(PUBLIC_KEY_ELEMENT, elements.require(PUBLIC_KEY_ELEMENT)?)?;
        let stored_public = PublicKey::from_slice(&public_bytes)
            .map_err(|e| CodecError::invalid_element(PUBLIC_KEY_ELEMENT, e.to_string()))?;

        let identity = KeyIdentity::new(msp_id, secret_key);
        if identity.public_key() != stored_public {
            return Err(CodecError::invalid_element(
                PUBLIC_KEY_ELEMENT,
                "does not match private key",
            ));
        }

        Ok(identity)
    }
}

impl TypedCodec for KeyIdentityCodec {
    fn identity_type(&self) -> &'static str {
        Self::IDENTITY_TYPE
    }
}
