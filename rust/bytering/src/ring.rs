//! The ring buffer engine: occupancy bookkeeping and the wrap-aware
//! push/pop/peek algorithms.

use bytering_common::{Result, error::Error, verify_arg};

use crate::storage::Storage;

/// A fixed-capacity circular byte buffer with overwrite-on-overflow semantics.
///
/// The buffer tracks three integers over its backing [`Storage`]: the free
/// space and the read and write offsets. All offset arithmetic wraps modulo
/// the capacity, and the empty state is detected solely through
/// `free_space == capacity`.
///
/// A push that exceeds the current free space succeeds by overwriting the
/// oldest unread bytes; the overwritten data is permanently lost. Callers that
/// need lossless behavior must check [`remaining`](RingBuffer::remaining)
/// before pushing.
#[derive(Debug)]
pub struct RingBuffer<'a> {
    storage: Storage<'a>,
    free_space: usize,
    read_pos: usize,
    write_pos: usize,
}

impl<'a> RingBuffer<'a> {
    /// Creates a ring buffer over a freshly allocated, zero-initialized region
    /// of `capacity` bytes.
    ///
    /// Fails with an invalid-argument error when `capacity` is zero, and with
    /// an allocation error when the region cannot be obtained.
    pub fn with_capacity(capacity: usize) -> Result<RingBuffer<'static>> {
        verify_arg!(capacity, capacity > 0);
        let storage = Storage::allocate(capacity)?;
        Ok(RingBuffer {
            storage,
            free_space: capacity,
            read_pos: 0,
            write_pos: 0,
        })
    }

    /// Creates a ring buffer that takes over a caller-owned region as its
    /// backing storage.
    ///
    /// The region is never released by the buffer; the exclusive borrow keeps
    /// it valid and un-aliased for the buffer's lifetime. Existing content of
    /// the region is ignored (it is logically unreachable until written over).
    ///
    /// Fails with an invalid-argument error when the region is empty.
    pub fn take_over(region: &'a mut [u8]) -> Result<RingBuffer<'a>> {
        verify_arg!(region, !region.is_empty());
        let free_space = region.len();
        Ok(RingBuffer {
            storage: Storage::Borrowed(region),
            free_space,
            read_pos: 0,
            write_pos: 0,
        })
    }

    /// Returns the total capacity of the buffer in bytes, fixed at creation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of bytes that can be pushed without overwriting
    /// unread data.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.free_space
    }

    /// Returns the number of valid unread bytes in the buffer.
    #[inline]
    pub fn used(&self) -> usize {
        self.capacity() - self.free_space
    }

    /// Returns `true` if the buffer holds no unread bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free_space == self.capacity()
    }

    /// Returns `true` if a push of any length would overwrite unread data.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_space == 0
    }

    /// Resets the buffer to the empty state.
    ///
    /// Storage contents are not zeroed; stale bytes remain in the region but
    /// are unreachable once the offsets restart at zero.
    pub fn clear(&mut self) {
        self.free_space = self.capacity();
        self.read_pos = 0;
        self.write_pos = 0;
    }

    /// Pushes `data` into the buffer, overwriting the oldest unread bytes when
    /// `data` is larger than the current free space.
    ///
    /// The write wraps around the end of the region when needed. On overflow
    /// the read offset is forcibly advanced to the new write offset, so the
    /// buffer ends up exactly full, holding the newest `capacity` bytes of the
    /// logical stream.
    ///
    /// Fails with an invalid-argument error when `data` is larger than the
    /// total capacity; a single push can never exceed the capacity, and larger
    /// writes must be chunked by the caller. No bytes are written in that case.
    pub fn push(&mut self, data: &[u8]) -> Result<()> {
        let capacity = self.capacity();
        verify_arg!(data, data.len() <= capacity);
        let n = data.len();
        if n == 0 {
            return Ok(());
        }

        let write_pos = self.write_pos;
        let run = capacity - write_pos;
        let storage = self.storage.as_mut_slice();
        if n <= run {
            storage[write_pos..write_pos + n].copy_from_slice(data);
        } else {
            storage[write_pos..].copy_from_slice(&data[..run]);
            storage[..n - run].copy_from_slice(&data[run..]);
        }
        self.write_pos = (write_pos + n) % capacity;

        if n > self.free_space {
            // The write lapped into unread data. The oldest surviving byte now
            // sits right behind the write offset.
            self.read_pos = self.write_pos;
        }
        self.free_space = self.free_space.saturating_sub(n);
        Ok(())
    }

    /// Pops exactly `out.len()` bytes into `out`, advancing the read offset.
    ///
    /// The semantics are all-or-nothing: when the buffer is empty the
    /// operation fails with `Empty`, and when fewer than `out.len()` unread
    /// bytes are available it fails with `Insufficient`; in both cases no
    /// bytes are copied and the buffer state is unchanged.
    pub fn pop(&mut self, out: &mut [u8]) -> Result<()> {
        let used = self.used();
        if used == 0 {
            return Err(Error::empty());
        }
        if out.len() > used {
            return Err(Error::insufficient(out.len(), used));
        }

        self.copy_out(out);
        self.read_pos = (self.read_pos + out.len()) % self.capacity();
        self.free_space += out.len();
        Ok(())
    }

    /// Copies the oldest `out.len()` unread bytes into `out` without consuming
    /// them.
    ///
    /// Uses the same wrap-aware copy as [`pop`](RingBuffer::pop) but mutates
    /// nothing, so repeated peeks return identical bytes. The request is
    /// bounds-checked against the unread byte count, mirroring `pop`: peeking
    /// past the valid data would expose unwritten or already-overwritten
    /// storage.
    pub fn peek(&self, out: &mut [u8]) -> Result<()> {
        let used = self.used();
        if out.len() > used {
            return Err(Error::insufficient(out.len(), used));
        }
        self.copy_out(out);
        Ok(())
    }

    /// Dismantles the buffer, handing a borrowed backing region back to the
    /// caller.
    ///
    /// Returns `None` for owned storage, which is released as usual when the
    /// buffer is dropped. Any use after dismantling is a compile error rather
    /// than a runtime state.
    pub fn release(self) -> Option<&'a mut [u8]> {
        match self.storage {
            Storage::Owned(_) => None,
            Storage::Borrowed(region) => Some(region),
        }
    }

    /// Wrap-aware copy of `out.len()` bytes starting at the read offset.
    /// The caller has verified that the request does not exceed the unread
    /// byte count.
    fn copy_out(&self, out: &mut [u8]) {
        let n = out.len();
        if n == 0 {
            return;
        }
        let capacity = self.capacity();
        let read_pos = self.read_pos;
        let run = capacity - read_pos;
        let storage = self.storage.as_slice();
        if n <= run {
            out.copy_from_slice(&storage[read_pos..read_pos + n]);
        } else {
            out[..run].copy_from_slice(&storage[read_pos..]);
            out[run..].copy_from_slice(&storage[..n - run]);
        }
    }
}
