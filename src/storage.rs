//! The owned memory block backing a [`GrowableArray`](crate::GrowableArray).

use crate::{Error, Result};

use alloc::boxed::Box;
use core::mem::MaybeUninit;

/// A fixed-size, heap-allocated block of possibly uninitialized `T` slots.
///
/// The block never tracks which of its slots are initialized, and dropping it
/// releases the memory without dropping any values stored in it. Growing is
/// done by allocating a larger block and moving values across, see
/// [`GrowableArray`](crate::GrowableArray) for the doubling policy.
pub struct HeapStorage<T> {
    block: Box<[MaybeUninit<T>]>,
}

impl<T> HeapStorage<T> {
    /// Allocates a block with room for exactly `capacity` values.
    ///
    /// Returns [`Error::AllocFailed`] if the allocator refuses the request,
    /// or if the size of the block in bytes would overflow `isize`.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut block = alloc::vec::Vec::<MaybeUninit<T>>::new();
        block
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocFailed)?;

        // SAFETY: capacity was reserved above, and `MaybeUninit<T>` is valid
        // in any state, so no slot needs to be written first.
        unsafe {
            block.set_len(capacity);
        }

        trace!(
            "allocated block of {} slots ({} bytes)",
            capacity,
            capacity * core::mem::size_of::<T>()
        );

        Ok(HeapStorage {
            block: block.into_boxed_slice(),
        })
    }

    /// Returns the size of the memory block in units of `T`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    /// Extracts a slice over the entire memory block.
    #[inline]
    pub fn storage(&self) -> &[MaybeUninit<T>] {
        &self.block
    }

    /// Returns a pointer to the first slot of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block.as_ptr().cast()
    }

    /// Returns a mutable pointer to the first slot of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_mut_ptr().cast()
    }

    /// Returns a pointer to the slot at position `index`.
    ///
    /// The pointer may be one past the end of the block, and the value it
    /// points to may not be initialized.
    #[inline]
    pub fn get_ptr(&self, index: usize) -> *const T {
        debug_assert!(index <= self.capacity());
        self.as_ptr().wrapping_add(index)
    }

    /// Returns a mutable pointer to the slot at position `index`.
    ///
    /// The pointer may be one past the end of the block, and the value it
    /// points to may not be initialized.
    #[inline]
    pub fn get_mut_ptr(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity());
        self.as_mut_ptr().wrapping_add(index)
    }
}

impl<T> core::fmt::Debug for HeapStorage<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeapStorage")
            .field("capacity", &self.capacity())
            .finish()
    }
}
