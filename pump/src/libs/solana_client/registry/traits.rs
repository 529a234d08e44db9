use crate::error::DecodeError;

/// A core trait that defines the interface for any DEX-related blockchain entity.
///
/// This trait provides constants for identification and a unified method for
/// deserializing raw Solana account data into structured types.
pub trait DexEntity: Sized {
    /// The byte prefix (Anchor discriminator) written in front of the entity.
    const DISCRIMINATOR: &'static [u8];

    /// The minimum number of bytes `deserialize` needs, discriminator included.
    const DATA_SIZE: usize;

    /// Primary deserialization method to be implemented by each specific DEX type.
    fn deserialize(data: &[u8]) -> Result<Self, DecodeError>;

    /// Reports whether the buffer starts with the expected discriminator.
    #[must_use]
    fn has_discriminator(data: &[u8]) -> bool {
        data.starts_with(Self::DISCRIMINATOR)
    }
}

/// Sequential little-endian reader that names the field it failed on.
pub(crate) struct FieldReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub(crate) fn skip(&mut self, field: &'static str, len: usize) -> Result<(), DecodeError> {
        self.take(field, len).map(|_| ())
    }

    pub(crate) fn read_u64(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        let bytes = self.take(field, 8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(buf))
    }

    pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8, DecodeError> {
        Ok(self.take(field, 1)?[0])
    }

    fn take(&mut self, field: &'static str, len: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self
            .offset
            .checked_add(len)
            .and_then(|end| self.data.get(self.offset..end))
            .ok_or(DecodeError::Truncated {
                field,
                offset: self.offset,
                needed: len,
                len: self.data.len(),
            })?;
        self.offset += len;
        Ok(bytes)
    }
}
