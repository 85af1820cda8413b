//! CowByteString, a copy-on-write byte string.
//!
//! This crate provides a single type, CowByteString, which stores an
//! arbitrary sequence of bytes with an explicit length. Zero bytes are
//! ordinary data, there is no terminator anywhere in the
//! representation.
//!
//! A CowByteString is a single pointer to a reference-counted buffer.
//! The buffer owns an exactly-sized heap allocation for the bytes,
//! the logical length, and a share count recording how many handles
//! currently reference it. Cloning a handle bumps the share count and
//! copies nothing; the bytes are duplicated only when one of the
//! sharing handles is written through.
//!
//! A buffer is in one of two states. While the share count is one the
//! owning handle may mutate it freely and in place. While the share
//! count is higher the bytes are immutable; the first handle to
//! attempt a write first detaches onto a private copy of the buffer,
//! leaving the remaining handles with the unmodified original. Writes
//! through an exclusively owned buffer never allocate, and the detach
//! copy is the only allocation a write after sharing ever performs.
//!
//! Byte storage is always an exact fit for the current length, so
//! appending reallocates. All storage goes through the global
//! allocator, one allocation per buffer for the bytes plus a
//! constant-sized one for the buffer header, which keeps the type easy
//! to observe under an allocation-tracing harness.
//!
//! The share count is a plain cell rather than an atomic, so a
//! CowByteString is a single-threaded value: it is neither Send nor
//! Sync.

#![no_std]

extern crate alloc;

mod buffer;
mod bytestring;

pub use bytestring::CowByteString;
