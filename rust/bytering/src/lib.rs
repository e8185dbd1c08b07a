//! Fixed-capacity circular byte buffer with explicit overwrite-on-overflow semantics.
//!
//! The buffer provides bounded FIFO storage over a contiguous byte region that is
//! either allocated by the buffer itself or borrowed from the caller, with no
//! allocation in the steady state. It is single-threaded by design: every mutating
//! operation takes `&mut self`, and sharing an instance across threads requires
//! external mutual exclusion.

pub mod ring;
pub mod storage;

pub use ring::RingBuffer;
pub use storage::Storage;
