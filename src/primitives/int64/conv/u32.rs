use crate::primitives::Int64;

impl From<u32> for Int64 {
    fn from(value: u32) -> Self {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&value.to_le_bytes());

        Int64(out)
    }
}

/// Attempts to convert an `Int64` into a `u32`.
///
/// The conversion succeeds only if the upper 32 bits of the value are zero.
impl TryFrom<Int64> for u32 {
    type Error = ();

    fn try_from(value: Int64) -> Result<Self, Self::Error> {
        if value.upper() != 0 {
            return Err(());
        }

        Ok(value.lower())
    }
}
