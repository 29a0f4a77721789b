//! Signed transaction envelopes.

use crate::errors::Error;
use crate::xdr::{XdrDecode, XdrEncode, XdrReader, XdrWriter};
use crate::Result;

/// Most signatures a single envelope may carry.
pub const MAX_SIGNATURES: u32 = 20;

/// Longest signature body accepted, in bytes.
pub const MAX_SIGNATURE_LEN: u32 = 64;

/// A signature plus the 4-byte hint identifying which key produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: Vec<u8>,
}

/// A built and signed transaction, as the submission layer sees it.
///
/// The transaction body is opaque at this level: its inner grammar belongs
/// to the external transaction builder. This type holds the body bytes plus
/// the appended signatures and defines only their canonical framing —
/// the body as a variable opaque, a signature count, then hint and
/// signature per entry. Construction is unvalidated; the limits on
/// signature count and length are enforced when decoding foreign bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionEnvelope {
    tx: Vec<u8>,
    signatures: Vec<DecoratedSignature>,
}

impl TransactionEnvelope {
    pub fn new(tx: Vec<u8>, signatures: Vec<DecoratedSignature>) -> Self {
        Self { tx, signatures }
    }

    /// The built transaction body, exactly as supplied by the builder.
    pub fn tx(&self) -> &[u8] {
        &self.tx
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        &self.signatures
    }
}

impl XdrEncode for DecoratedSignature {
    fn xdr_encode(&self, w: &mut XdrWriter) {
        w.put_fixed(&self.hint);
        w.put_var_opaque(&self.signature);
    }
}

impl XdrDecode for DecoratedSignature {
    fn xdr_decode(r: &mut XdrReader<'_>) -> Result<Self> {
        let hint = r.read_fixed::<4>()?;
        let signature = r.read_var_opaque(MAX_SIGNATURE_LEN)?;
        Ok(Self { hint, signature })
    }
}

impl XdrEncode for TransactionEnvelope {
    fn xdr_encode(&self, w: &mut XdrWriter) {
        w.put_var_opaque(&self.tx);
        w.put_u32(self.signatures.len() as u32);
        for signature in &self.signatures {
            signature.xdr_encode(w);
        }
    }
}

impl XdrDecode for TransactionEnvelope {
    fn xdr_decode(r: &mut XdrReader<'_>) -> Result<Self> {
        // The body length is bounded by the input itself, not by a schema cap.
        let tx = r.read_var_opaque(u32::MAX)?;
        let count = r.read_u32()?;
        if count > MAX_SIGNATURES {
            return Err(Error::Decode(format!(
                "signature count {count} exceeds maximum {MAX_SIGNATURES}"
            )));
        }
        let mut signatures = Vec::with_capacity(count as usize);
        for _ in 0..count {
            signatures.push(DecoratedSignature::xdr_decode(r)?);
        }
        Ok(Self { tx, signatures })
    }
}
