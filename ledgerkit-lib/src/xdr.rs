//! Canonical binary encoding and decoding.
//!
//! The wire form follows XDR framing rules: every value occupies a multiple
//! of four bytes, integers are big-endian, fixed-length opaques are written
//! raw, and variable-length opaques carry a 4-byte length followed by the
//! content and zero padding up to the next 4-byte boundary.
//!
//! Encoding is infallible and deterministic: equal values produce identical
//! bytes. Decoding validates everything it reads — lengths against the
//! remaining input, padding bytes against zero, and (via [`from_xdr`]) that
//! no input trails the decoded value. Types opt in by implementing
//! [`XdrEncode`] and [`XdrDecode`]; callers go through [`to_xdr`] and
//! [`from_xdr`] and never touch the framing directly.

use crate::errors::Error;
use crate::Result;

/// Serializes a value into its canonical byte form.
pub trait XdrEncode {
    fn xdr_encode(&self, w: &mut XdrWriter);
}

/// Reconstructs a value from its canonical byte form.
pub trait XdrDecode: Sized {
    fn xdr_decode(r: &mut XdrReader<'_>) -> Result<Self>;
}

/// Encodes `value` to bytes. Infallible.
pub fn to_xdr<T: XdrEncode>(value: &T) -> Vec<u8> {
    let mut w = XdrWriter::new();
    value.xdr_encode(&mut w);
    w.into_bytes()
}

/// Decodes a value from `bytes`, requiring the whole input to be consumed.
pub fn from_xdr<T: XdrDecode>(bytes: &[u8]) -> Result<T> {
    let mut r = XdrReader::new(bytes);
    let value = T::xdr_decode(&mut r)?;
    r.finish()?;
    Ok(value)
}

fn pad_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Append-only encoder over a growable buffer.
#[derive(Default)]
pub struct XdrWriter {
    buf: Vec<u8>,
}

impl XdrWriter {
    fn new() -> Self {
        Self::default()
    }

    pub fn put_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Writes bytes whose length is fixed by the schema; no length prefix.
    pub fn put_fixed(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a length-prefixed opaque, zero-padded to a 4-byte boundary.
    pub fn put_var_opaque(&mut self, bytes: &[u8]) {
        self.put_u32(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
        for _ in 0..pad_len(bytes.len()) {
            self.buf.push(0);
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor-based decoder over a borrowed byte slice.
pub struct XdrReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> XdrReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(Error::Decode(format!(
                "truncated input: need {n} bytes, have {}",
                self.remaining()
            )));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N]> {
        let slice = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Reads a length-prefixed opaque.
    ///
    /// The declared length is checked against `max_len` and against the
    /// bytes actually remaining before anything is allocated, so a hostile
    /// length cannot drive an oversized allocation. Padding must be zero.
    pub fn read_var_opaque(&mut self, max_len: u32) -> Result<Vec<u8>> {
        let len = self.read_u32()?;
        if len > max_len {
            return Err(Error::Decode(format!(
                "opaque length {len} exceeds maximum {max_len}"
            )));
        }
        let len = len as usize;
        if len > self.remaining() {
            return Err(Error::Decode(format!(
                "opaque length {len} exceeds remaining input {}",
                self.remaining()
            )));
        }
        let content = self.take(len)?.to_vec();
        self.read_padding(len)?;
        Ok(content)
    }

    fn read_padding(&mut self, content_len: usize) -> Result<()> {
        let pad = self.take(pad_len(content_len))?;
        if pad.iter().any(|&b| b != 0) {
            return Err(Error::Decode("nonzero padding".into()));
        }
        Ok(())
    }

    /// Succeeds only when every input byte has been consumed.
    fn finish(&self) -> Result<()> {
        if self.remaining() != 0 {
            return Err(Error::Decode(format!(
                "trailing input: {} bytes after value",
                self.remaining()
            )));
        }
        Ok(())
    }
}
