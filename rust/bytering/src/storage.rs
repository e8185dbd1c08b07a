//! Backing storage for the ring buffer, tagged by ownership.

use bytering_common::{Result, error::Error};

/// A contiguous byte region backing a ring buffer.
///
/// The variant determines the release policy: `Owned` storage is allocated by
/// the buffer and freed when it is dropped, while `Borrowed` storage is lent by
/// the caller and is never released by the buffer. Tying the release logic to
/// the variant (rather than a flag next to a raw region) makes double-free and
/// use-after-free states unrepresentable.
pub enum Storage<'a> {
    /// Region allocated by the buffer itself.
    Owned(Vec<u8>),
    /// Region lent by the caller for the lifetime of the buffer.
    Borrowed(&'a mut [u8]),
}

impl<'a> Storage<'a> {
    /// Allocates a zero-initialized owned region of `capacity` bytes.
    ///
    /// Allocation failure is surfaced as an error rather than an abort, so a
    /// caller never receives an unusable buffer.
    pub fn allocate(capacity: usize) -> Result<Storage<'static>> {
        let mut region = Vec::new();
        region
            .try_reserve_exact(capacity)
            .map_err(|e| Error::allocation(capacity, e))?;
        region.resize(capacity, 0);
        Ok(Storage::Owned(region))
    }

    /// Returns the length of the region in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Storage::Owned(region) => region.len(),
            Storage::Borrowed(region) => region.len(),
        }
    }

    /// Returns `true` if the region is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the region is owned by the buffer.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Storage::Owned(_))
    }

    /// Returns the region as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Owned(region) => region,
            Storage::Borrowed(region) => region,
        }
    }

    /// Returns the region as a mutable byte slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::Owned(region) => region,
            Storage::Borrowed(region) => region,
        }
    }
}

impl std::fmt::Debug for Storage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Storage::Owned(region) => f.debug_tuple("Owned").field(&region.len()).finish(),
            Storage::Borrowed(region) => f.debug_tuple("Borrowed").field(&region.len()).finish(),
        }
    }
}
