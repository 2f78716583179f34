use crate::codec::CodecError;
use crate::primitives::Int64;

impl From<Int64> for [u8; 8] {
    fn from(value: Int64) -> Self {
        value.0
    }
}

impl From<[u8; 8]> for Int64 {
    fn from(value: [u8; 8]) -> Self {
        Int64(value)
    }
}

impl TryFrom<&[u8]> for Int64 {
    type Error = CodecError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; 8] = value.try_into().map_err(|_| CodecError::SizeMismatch)?;

        Ok(Int64(raw))
    }
}

impl TryFrom<Int64> for u8 {
    type Error = ();

    fn try_from(value: Int64) -> Result<Self, Self::Error> {
        let (low, high) = value.0.split_at(1);

        if high.iter().any(|&b| b != 0) {
            return Err(());
        }

        Ok(low[0])
    }
}

impl From<u8> for Int64 {
    fn from(value: u8) -> Self {
        let mut out = [0u8; 8];

        out[0] = value;

        Int64(out)
    }
}

impl AsRef<[u8]> for Int64 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8; 8]> for Int64 {
    fn as_ref(&self) -> &[u8; 8] {
        &self.0
    }
}
