//! Binary format of an [`AliasTable`].
//!
//! ```text
//! slot[i]   : threshold (u32 LE, < 2^31) | alias (u32 LE)   for i in 0..M
//! [padding] : dummy index (u32 LE), present iff the table is padded
//! ```
//!
//! Nothing else is stored. `M` comes from the length and `unit` is taken
//! as `1 + max(threshold)`. That is only the table's real unit if some slot
//! holds `unit - 1`; both builders assert this before returning, and any
//! other producer of this format must guarantee it before writing.

use bytes::{Buf, BufMut};

use crate::error::DecodeError;
use crate::table::{AliasTable, Slot, THRESHOLD_LIMIT};

const SLOT_BYTES: usize = 8;

impl AliasTable {
    /// Size in bytes of [`encode`](Self::encode)'s output.
    pub fn encoded_len(&self) -> usize {
        self.slots.len() * SLOT_BYTES + if self.dummy_index().is_some() { 4 } else { 0 }
    }

    /// Serialize the table. The inverse of [`decode`](Self::decode).
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        for slot in &self.slots {
            out.put_u32_le(slot.threshold);
            out.put_u32_le(slot.alias);
        }
        if let Some(dummy) = self.dummy_index() {
            out.put_u32_le(dummy as u32);
        }
        out
    }

    /// Restore a table written by [`encode`](Self::encode).
    ///
    /// # Errors
    /// A [`DecodeError`] when the buffer could not have come from `encode`.
    /// On error no partially decoded table escapes.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        decode_slots(data).inspect_err(|e| log::debug!("rejected alias table encoding: {e}"))
    }
}

fn decode_slots(data: &[u8]) -> Result<AliasTable, DecodeError> {
    let len = data.len();
    if len % 4 != 0 {
        return Err(DecodeError::MalformedLength { len });
    }
    let m = len / SLOT_BYTES;
    if m == 0 {
        return Err(DecodeError::Empty);
    }
    if u32::try_from(m).is_err() {
        return Err(DecodeError::TooLarge { slots: m });
    }

    let mut buf = data;
    let mut slots = Vec::with_capacity(m);
    let mut max_threshold = 0u32;
    for slot in 0..m {
        let threshold = buf.get_u32_le();
        let alias = buf.get_u32_le();
        if threshold >= THRESHOLD_LIMIT {
            return Err(DecodeError::ThresholdOutOfRange { slot, threshold });
        }
        if alias as usize >= m {
            return Err(DecodeError::AliasOutOfRange { slot, alias });
        }
        max_threshold = max_threshold.max(threshold);
        slots.push(Slot { threshold, alias });
    }

    let dummy = if buf.has_remaining() {
        // Only the integer builder pads, and always with the last slot.
        let dummy = buf.get_u32_le();
        if m < 2 || dummy as usize != m - 1 {
            return Err(DecodeError::DummyOutOfRange { dummy, slots: m });
        }
        dummy
    } else {
        m as u32
    };

    Ok(AliasTable::from_parts(slots, max_threshold + 1, dummy))
}

impl TryFrom<&[u8]> for AliasTable {
    type Error = DecodeError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        AliasTable::decode(data)
    }
}
