//! Identity codec capability
//!
//! A codec translates between a concrete identity value and [`Elements`].
//! The wallet depends only on this trait, so any credential scheme that
//! implements it can be stored without changing wallet logic.

use crate::elements::Elements;
use crate::error::CodecError;

/// Element holding the identity scheme tag
pub const TYPE_ELEMENT: &str = "type";
/// Element holding the membership service provider id
pub const MSP_ID_ELEMENT: &str = "mspId";
/// Element holding the private key
pub const PRIVATE_KEY_ELEMENT: &str = "privateKey";

/// Bidirectional translation between an identity and its elements
pub trait IdentityCodec {
    /// Identity value this codec understands
    type Identity;

    /// Project an identity onto elements.
    ///
    /// Fails only when the identity cannot be represented by this scheme.
    fn encode(&self, identity: &Self::Identity) -> Result<Elements, CodecError>;

    /// Rebuild an identity from elements produced by [`IdentityCodec::encode`].
    ///
    /// Elements from a different scheme or corrupted elements are an error.
    fn decode(&self, elements: &Elements) -> Result<Self::Identity, CodecError>;
}

/// Codec that tags its elements with a scheme name under [`TYPE_ELEMENT`].
///
/// Not required by the wallet; concrete codecs use it to refuse elements
/// written by another scheme.
pub trait TypedCodec: IdentityCodec {
    /// Scheme tag written under [`TYPE_ELEMENT`]
    fn identity_type(&self) -> &'static str;

    /// Check the scheme tag before reading any other element
    fn check_type(&self, elements: &Elements) -> Result<(), CodecError> {
        let found = elements.require(TYPE_ELEMENT)?;
        if found != self.identity_type() {
            return Err(CodecError::UnsupportedType {
                expected: self.identity_type().to_string(),
                found: found.to_string(),
            });
        }
        Ok(())
    }
}

/// Reject an empty msp id before it reaches storage
pub(crate) fn require_msp_id(msp_id: &str) -> Result<(), CodecError> {
    if msp_id.trim().is_empty() {
        return Err(CodecError::invalid_element(MSP_ID_ELEMENT, "must not be empty"));
    }
    Ok(())
}
