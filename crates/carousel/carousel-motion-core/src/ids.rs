//! Identifiers for host-owned entities the engine refers to.

use serde::{Deserialize, Serialize};

/// Index of a cell in the host's ordered cell collection.
///
/// The engine never allocates cells; ids are handed in with the layout and
/// echoed back in [`CellShift`](crate::outputs::CellShift) instructions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub u32);

impl CellId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for CellId {
    type Error = std::num::TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u32::try_from(value).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_rejects_indices_past_u32() {
        assert_eq!(CellId::try_from(7usize), Ok(CellId(7)));
        assert!(CellId::try_from(u32::MAX as usize).is_ok());
        #[cfg(target_pointer_width = "64")]
        assert!(CellId::try_from(u32::MAX as usize + 1).is_err());
    }
}
