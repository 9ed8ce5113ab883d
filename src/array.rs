//! A contiguous array type that grows its storage by doubling.
//!
//! [`GrowableArray`] has O(1) indexing and amortized O(1) push. Inserting or
//! removing at an arbitrary position is O(n), as all following elements are
//! shifted to keep the sequence contiguous.
//!
//! Reading and writing requires an index strictly less than the length, but
//! inserting at an index equal to the length is allowed, and appends:
//!
//! ```
//! use growable::{Error, GrowableArray};
//!
//! let mut array = GrowableArray::new();
//! array.push(1);
//! array.push(2);
//!
//! assert_eq!(array.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
//! assert!(array.try_insert(2, 3).is_ok());
//! assert!(array.try_insert(4, 4).is_err());
//! assert_eq!(array, [1, 2, 3]);
//! ```

use crate::storage::HeapStorage;
use crate::{Error, Result};

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};
use core::mem::ManuallyDrop;
use core::ptr;

/// The number of slots allocated when no initial capacity is requested.
pub const DEFAULT_CAPACITY: usize = 16;

/// A contiguous growable array type.
///
/// See the [module-level documentation](crate::array) for more.
pub struct GrowableArray<T> {
    len: usize,
    buf: HeapStorage<T>,
}

impl<T> GrowableArray<T> {
    /// Constructs a new, empty array with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Panics
    /// Panics if the storage cannot be allocated.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty array with room for `capacity` elements, or
    /// [`DEFAULT_CAPACITY`] elements if `capacity` is zero.
    ///
    /// Returns [`Error::AllocFailed`] if the storage cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// let array = growable::GrowableArray::<u64>::try_with_capacity(0).unwrap();
    /// assert_eq!(array.capacity(), 16);
    ///
    /// let array = growable::GrowableArray::<u64>::try_with_capacity(5).unwrap();
    /// assert_eq!(array.capacity(), 5);
    /// assert!(array.is_empty());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };

        Ok(GrowableArray {
            len: 0,
            buf: HeapStorage::try_with_capacity(capacity)?,
        })
    }

    /// Constructs a new, empty array with room for `capacity` elements, or
    /// [`DEFAULT_CAPACITY`] elements if `capacity` is zero.
    ///
    /// # Panics
    /// Panics if the storage cannot be allocated. See
    /// [`try_with_capacity`](GrowableArray::try_with_capacity) for a checked
    /// version that never panics.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(array) => array,
            Err(_) => alloc_failed(),
        }
    }

    /// Returns the number of elements the array can hold before it has to
    /// grow its storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements in the array, also referred to as its *length*.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extracts a slice containing the entire array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice of the entire array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the array's buffer.
    ///
    /// The pointer is invalidated by any operation that grows the array.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a raw mutable pointer to the array's buffer.
    ///
    /// The pointer is invalidated by any operation that grows the array.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns a reference to the element at position `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < self.len()`.
    ///
    /// # Examples
    /// ```
    /// # use growable::{Error, GrowableArray};
    /// let mut array = GrowableArray::new();
    /// array.push(10); array.push(20); array.push(30);
    /// assert_eq!(array.get(1), Ok(&20));
    /// assert_eq!(array.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        unsafe { Ok(&*self.buf.get_ptr(index)) }
    }

    /// Returns a mutable reference to the element at position `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < self.len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        unsafe { Ok(&mut *self.buf.get_mut_ptr(index)) }
    }

    /// Replaces the element at position `index` with `value`, dropping the
    /// previous element.
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < self.len()`, in which
    /// case the array is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let mut array = GrowableArray::new();
    /// array.push('a'); array.push('b');
    /// assert!(array.set(1, 'z').is_ok());
    /// assert!(array.set(2, 'c').is_err());
    /// assert_eq!(array, ['a', 'z']);
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Replaces the storage with a block twice its size, moving all elements
    /// to the same positions in the new block.
    ///
    /// The array is left unchanged if the new block cannot be allocated.
    fn try_enlarge(&mut self) -> Result<()> {
        let old_capacity = self.capacity();
        debug_assert!(old_capacity > 0);

        let new_capacity = old_capacity.checked_mul(2).ok_or(Error::AllocFailed)?;
        let mut buf = HeapStorage::try_with_capacity(new_capacity)?;
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), self.len);
        }
        self.buf = buf; // frees the old block without dropping its contents

        debug!(
            "grew storage from {} to {} slots ({} in use)",
            old_capacity,
            new_capacity,
            self.len
        );
        Ok(())
    }

    /// Inserts an element at position `index` within the array, shifting all
    /// elements after it to the right, and growing the storage if it is full.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > self.len()`, or
    /// [`Error::AllocFailed`] if the storage needed to grow but could not.
    /// In either case the array is left unchanged and `element` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let mut array = GrowableArray::new();
    /// array.push(1); array.push(3);
    ///
    /// assert!(array.try_insert(1, 2).is_ok());
    /// assert!(array.try_insert(3, 4).is_ok());
    /// assert!(array.try_insert(5, 6).is_err());
    /// assert_eq!(array, [1, 2, 3, 4]);
    /// ```
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<()> {
        let len = self.len;
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        if len == self.capacity() {
            self.try_enlarge()?;
        }

        unsafe {
            // ranges overlap; ptr::copy moves the tail starting from its end
            let p = self.buf.get_mut_ptr(index);
            ptr::copy(p, p.add(1), len - index);
            ptr::write(p, element);
        }

        self.len = len + 1;
        Ok(())
    }

    /// Inserts an element at position `index` within the array, shifting all
    /// elements after it to the right.
    ///
    /// # Panics
    /// Panics if `index > self.len()`, or if the storage cannot be grown.
    /// See [`try_insert`](GrowableArray::try_insert) for a checked version.
    #[track_caller]
    pub fn insert(&mut self, index: usize, element: T) {
        if let Err(e) = self.try_insert(index, element) {
            insertion_failed(e);
        }
    }

    /// Appends an element to the back of the array.
    ///
    /// Equivalent to `s.try_insert(s.len(), element)`.
    #[inline]
    pub fn try_push(&mut self, element: T) -> Result<()> {
        self.try_insert(self.len, element)
    }

    /// Appends an element to the back of the array.
    ///
    /// # Panics
    /// Panics if the storage cannot be grown. See
    /// [`try_push`](GrowableArray::try_push) for a checked version.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, element: T) {
        if let Err(e) = self.try_push(element) {
            insertion_failed(e);
        }
    }

    /// Inserts an element at the front of the array, shifting all elements
    /// to the right.
    ///
    /// Equivalent to `s.try_insert(0, element)`.
    #[inline]
    pub fn try_prepend(&mut self, element: T) -> Result<()> {
        self.try_insert(0, element)
    }

    /// Inserts an element at the front of the array, shifting all elements
    /// to the right.
    ///
    /// # Panics
    /// Panics if the storage cannot be grown. See
    /// [`try_prepend`](GrowableArray::try_prepend) for a checked version.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let mut array = GrowableArray::new();
    /// array.push(43);
    /// array.push(67);
    /// array.prepend(-11);
    /// array.prepend(683);
    /// assert_eq!(array, [683, -11, 43, 67]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn prepend(&mut self, element: T) {
        if let Err(e) = self.try_prepend(element) {
            insertion_failed(e);
        }
    }

    /// Removes `count` elements starting at position `index`, shifting all
    /// elements after them to the left.
    ///
    /// If the range does not lie within the array, i.e. if `index > self.len()`
    /// or `index + count > self.len()`, this silently does nothing.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let mut array: GrowableArray<u32> = (1..=6).collect();
    ///
    /// array.remove_range(1, 3);
    /// assert_eq!(array, [1, 5, 6]);
    ///
    /// array.remove_range(2, 2);
    /// assert_eq!(array, [1, 5, 6]);
    /// ```
    pub fn remove_range(&mut self, index: usize, count: usize) {
        let len = self.len;
        let end = match index.checked_add(count) {
            Some(end) if end <= len => end,
            _ => return,
        };

        if count == 0 {
            return;
        }

        unsafe {
            let p = self.buf.get_mut_ptr(index);

            // the tail leaks instead of being dropped twice if a destructor panics
            self.len = index;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(p, count));

            ptr::copy(p.add(count), p, len - end);
        }

        self.len = len - count;
    }

    /// Removes the element at position `index`, shifting all elements after
    /// it to the left.
    ///
    /// If `index >= self.len()`, this silently does nothing. See
    /// [`take`](GrowableArray::take) to get the removed element back.
    #[inline]
    pub fn remove(&mut self, index: usize) {
        self.remove_range(index, 1);
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it to the left, or returns [`None`] if `index` is out
    /// of bounds.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let mut array: GrowableArray<char> = "abc".chars().collect();
    /// assert_eq!(array.take(0), Some('a'));
    /// assert_eq!(array.take(2), None);
    /// assert_eq!(array, ['b', 'c']);
    /// ```
    pub fn take(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }

        unsafe {
            let p = self.buf.get_mut_ptr(index);
            let ret = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            Some(ret)
        }
    }

    /// Removes the last element from the array and returns it, or [`None`] if it is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        unsafe { Some(ptr::read(self.buf.get_ptr(self.len))) }
    }

    /// Shortens the array, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater than or equal to the array's current length, this
    /// has no effect. The capacity is not changed.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }

        self.len = len;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.get_mut_ptr(len),
                old_len - len,
            ));
        }
    }

    /// Clears the array, dropping all values but keeping the allocated storage.
    ///
    /// Equivalent to `s.truncate(0)`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Sorts the array with a strict less-than relation `is_less`.
    ///
    /// This sort is not stable, see the [`sort`](crate::sort) module for the
    /// exact algorithm.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let mut array: GrowableArray<&str> = ["bb", "a", "ccc"].iter().copied().collect();
    /// array.sort_by(|a, b| a.len() > b.len());
    /// assert_eq!(array, ["ccc", "bb", "a"]);
    /// ```
    #[inline]
    pub fn sort_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        crate::sort::quicksort_by(self.as_mut_slice(), is_less);
    }
}

impl<T: PartialOrd> GrowableArray<T> {
    /// Sorts the array in ascending order using `<`.
    ///
    /// This sort is not stable, see the [`sort`](crate::sort) module for the
    /// exact algorithm.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let mut array: GrowableArray<i32> = [4, 3, 11, 9, 6].iter().copied().collect();
    /// array.sort();
    /// assert_eq!(array, [3, 4, 6, 9, 11]);
    /// ```
    #[inline]
    pub fn sort(&mut self) {
        crate::sort::quicksort(self.as_mut_slice());
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Returns the index of the first element equal to `value`, or [`None`]
    /// if there is no such element.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let array: GrowableArray<u8> = b"hello".iter().copied().collect();
    /// assert_eq!(array.index_of(&b'l'), Some(2));
    /// assert_eq!(array.index_of(&b'z'), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().position(|e| e == value)
    }

    /// Returns `true` if the array contains an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Clones and appends all elements in a slice to the array.
    ///
    /// Returns [`Error::AllocFailed`] if the storage cannot be grown enough,
    /// in which case no elements are appended.
    ///
    /// # Examples
    /// ```
    /// # use growable::GrowableArray;
    /// let mut array = GrowableArray::<u32>::with_capacity(2);
    /// array.try_extend_from_slice(&[1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(array, [1, 2, 3, 4, 5]);
    /// assert_eq!(array.capacity(), 8);
    /// ```
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<()> {
        let new_len = self.len.checked_add(other.len()).ok_or(Error::AllocFailed)?;
        while self.capacity() < new_len {
            self.try_enlarge()?;
        }

        for element in other {
            // capacity is reserved, so this cannot fail
            self.try_push(element.clone())?;
        }

        Ok(())
    }

    /// Clones and appends all elements in a slice to the array.
    ///
    /// # Panics
    /// Panics if the storage cannot be grown. See
    /// [`try_extend_from_slice`](GrowableArray::try_extend_from_slice) for a
    /// checked version.
    #[track_caller]
    pub fn extend_from_slice(&mut self, other: &[T]) {
        if self.try_extend_from_slice(other).is_err() {
            alloc_failed();
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn alloc_failed() -> ! {
    panic!("failed to allocate storage")
}

#[cold]
#[inline(never)]
#[track_caller]
fn insertion_failed(error: Error) -> ! {
    match error {
        Error::IndexOutOfRange { index, len } => panic!(
            "insertion index (is {}) should be <= len (is {})",
            index, len
        ),
        Error::AllocFailed => alloc_failed(),
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::ops::Deref for GrowableArray<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> core::ops::DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("index (is {}) should be < len (is {})", index, len)
}

impl<T> core::ops::Index<usize> for GrowableArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(_) => index_out_of_range(index, self.len),
        }
    }
}

impl<T> core::ops::IndexMut<usize> for GrowableArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Ok(element) => element,
            Err(_) => index_out_of_range(index, len),
        }
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr(),
                self.len,
            ))
        }
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut ret = Self::with_capacity(self.capacity());
        ret.clone_from(self);
        ret
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from_slice(source);
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: Hash> Hash for GrowableArray<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state)
    }
}

impl<A: PartialEq<B>, B> PartialEq<GrowableArray<B>> for GrowableArray<A> {
    #[inline]
    fn eq(&self, other: &GrowableArray<B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<V, T: PartialEq<V>> PartialEq<&[V]> for GrowableArray<T> {
    #[inline]
    fn eq(&self, other: &&[V]) -> bool {
        self.as_slice() == *other
    }
}

impl<V, T: PartialEq<V>> PartialEq<[V]> for GrowableArray<T> {
    #[inline]
    fn eq(&self, other: &[V]) -> bool {
        self.as_slice() == other
    }
}

impl<V, T: PartialEq<V>, const N: usize> PartialEq<[V; N]> for GrowableArray<T> {
    #[inline]
    fn eq(&self, other: &[V; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: PartialOrd> PartialOrd for GrowableArray<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowableArray<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for GrowableArray<T> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for element in iter {
            self.push(*element);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut ret = Self::with_capacity(iter.size_hint().0);
        ret.extend(iter);
        ret
    }
}

/// An iterator that moves out of a [`GrowableArray`].
///
/// This `struct` is created by the `into_iter` method on `GrowableArray`
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<T> {
    start: usize,
    end: usize,
    buf: HeapStorage<T>,
}

impl<T> IntoIter<T> {
    /// Returns the remaining items of this iterator as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.buf.get_ptr(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.end - self.start;
        (size, Some(size))
    }

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start >= self.end {
            return None;
        }

        let ret = unsafe { ptr::read(self.buf.get_ptr(self.start)) };
        self.start += 1;
        Some(ret)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start >= self.end {
            return None;
        }

        self.end -= 1;
        unsafe { Some(ptr::read(self.buf.get_ptr(self.end))) }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let this = ManuallyDrop::new(self);
        let buf = unsafe { ptr::read(&this.buf) };

        IntoIter {
            start: 0,
            end: this.len,
            buf,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::DropCounter;
    use alloc::vec::Vec;

    #[test]
    fn capacity_hint_defaults_to_sixteen() {
        let array = GrowableArray::<u8>::new();
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
        assert_eq!(array.len(), 0);

        let array = GrowableArray::<u8>::with_capacity(3);
        assert_eq!(array.capacity(), 3);
    }

    #[test]
    fn appended_values_read_back_in_order() {
        let mut array = GrowableArray::new();
        for i in 0..100u32 {
            array.push(i * 3);
        }

        assert_eq!(array.len(), 100);
        for i in 0..100u32 {
            assert_eq!(array.get(i as usize), Ok(&(i * 3)));
        }
    }

    #[test]
    fn million_sequential_appends_survive_growth() {
        const N: usize = 1_000_001;

        let mut array = GrowableArray::new();
        for i in 0..N {
            array.push(i);
        }

        assert_eq!(array.len(), N);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY << 16);
        for i in 0..N {
            assert_eq!(array[i], i);
        }
    }

    #[test]
    fn capacity_doubles_only_when_full() {
        let mut array = GrowableArray::with_capacity(2);
        array.push('a');
        array.push('b');
        assert_eq!(array.capacity(), 2);

        array.push('c');
        assert_eq!(array.capacity(), 4);
        array.prepend('z');
        assert_eq!(array.capacity(), 4);
        array.insert(2, 'y');
        assert_eq!(array.capacity(), 8);
        assert_eq!(array, ['z', 'a', 'y', 'b', 'c']);

        array.remove_range(0, 5);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn reads_and_writes_require_index_below_len() {
        let mut array = GrowableArray::new();
        assert_eq!(
            array.get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );

        array.push(5);
        array.push(6);
        assert_eq!(
            array.get(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            array.set(2, 7),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(array.get_mut(usize::MAX).is_err());
        assert_eq!(array, [5, 6]);

        array.set(0, 1).unwrap();
        *array.get_mut(1).unwrap() += 1;
        array[1] *= 10;
        assert_eq!(array, [1, 70]);
    }

    #[test]
    #[should_panic(expected = "index (is 3) should be < len (is 3)")]
    fn indexing_past_the_end_panics() {
        let array: GrowableArray<i32> = (0..3).collect();
        let _value = array[3];
    }

    #[test]
    fn insert_shifts_the_tail() {
        let mut array: GrowableArray<u32> = (0..10).collect();
        array.insert(4, 99);

        assert_eq!(array.len(), 11);
        assert_eq!(array[4], 99);
        assert_eq!(&array.as_slice()[..4], &[0, 1, 2, 3]);
        assert_eq!(&array.as_slice()[5..], &[4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn insert_at_len_appends_and_past_len_fails() {
        let mut appended: GrowableArray<i32> = (0..5).collect();
        let mut inserted = appended.clone();

        appended.push(42);
        inserted.insert(inserted.len(), 42);
        assert_eq!(appended, inserted);

        let before = inserted.clone();
        let len = inserted.len();
        assert_eq!(
            inserted.try_insert(len + 1, 0),
            Err(Error::IndexOutOfRange {
                index: len + 1,
                len
            })
        );
        assert_eq!(inserted, before);
        assert_eq!(inserted.capacity(), before.capacity());
    }

    #[test]
    #[should_panic(expected = "insertion index (is 2) should be <= len (is 0)")]
    fn insert_past_len_panics() {
        let mut array = GrowableArray::new();
        array.insert(2, 'x');
    }

    #[test]
    fn append_prepend_and_clear() {
        let mut array = GrowableArray::new();
        array.push(43);
        array.push(67);
        array.prepend(-11);
        array.prepend(683);

        assert_eq!(array, [683, -11, 43, 67]);
        assert_eq!(array.len(), 4);
        assert_eq!(array.get(0), Ok(&683));

        array.clear();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn remove_shifts_the_tail_down() {
        let mut array: GrowableArray<u32> = (0..6).collect();
        array.remove(2);
        assert_eq!(array, [0, 1, 3, 4, 5]);

        array.remove(0);
        assert_eq!(array, [1, 3, 4, 5]);

        array.remove(3);
        assert_eq!(array, [1, 3, 4]);
    }

    #[test]
    fn out_of_range_removals_are_ignored() {
        let mut array: GrowableArray<u32> = (0..6).collect();
        let before = array.clone();

        array.remove(6);
        array.remove(100);
        array.remove_range(4, 3);
        array.remove_range(7, 0);
        array.remove_range(1, usize::MAX);
        array.remove_range(usize::MAX, 2);
        assert_eq!(array, before);

        array.remove_range(6, 0);
        array.remove_range(2, 0);
        assert_eq!(array, before);

        array.remove_range(3, 3);
        assert_eq!(array, [0, 1, 2]);
    }

    #[test]
    fn index_of_finds_the_first_match() {
        let array: GrowableArray<i32> = [7, 3, 9, 3, 7].iter().copied().collect();
        assert_eq!(array.index_of(&7), Some(0));
        assert_eq!(array.index_of(&3), Some(1));
        assert_eq!(array.index_of(&9), Some(2));
        assert_eq!(array.index_of(&4), None);
        assert!(array.contains(&9));
        assert!(!array.contains(&0));

        let empty = GrowableArray::<i32>::new();
        assert_eq!(empty.index_of(&0), None);
    }

    #[test]
    fn sort_orders_and_is_idempotent() {
        let mut array = GrowableArray::new();
        array.push(4);
        array.push(3);
        array.push(11);
        array.push(9);
        array.push(6);

        array.sort();
        assert_eq!(array, [3, 4, 6, 9, 11]);

        let once = array.clone();
        array.sort();
        assert_eq!(array, once);
    }

    #[test]
    fn sort_by_is_unstable_for_equal_keys() {
        let mut array = GrowableArray::new();
        array.push((0, 'x'));
        array.push((5, 'a'));
        array.push((5, 'b'));

        array.sort_by(|a, b| a.0 < b.0);
        assert_eq!(array, [(0, 'x'), (5, 'b'), (5, 'a')]);
    }

    #[test]
    fn extend_from_slice_grows_by_doubling() {
        let mut array = GrowableArray::with_capacity(3);
        array.extend_from_slice(&[1, 2]);
        assert_eq!(array.capacity(), 3);

        array.extend_from_slice(&[3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(array.capacity(), 12);
        assert_eq!(array, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        array.extend(&[11, 12]);
        assert_eq!(array.len(), 12);
        assert_eq!(array.capacity(), 12);
    }

    #[test]
    fn clone_keeps_capacity() {
        let mut array = GrowableArray::with_capacity(40);
        array.extend_from_slice(&["a", "b"]);

        let copy = array.clone();
        assert_eq!(copy, array);
        assert_eq!(copy.capacity(), 40);
    }

    #[test]
    fn elements_are_dropped_exactly_once() {
        let drop_count = DropCounter::new();

        let mut array = GrowableArray::with_capacity(2);
        for i in 0..10 {
            array.push(drop_count.new_droppable(i));
        }
        assert_eq!(drop_count.dropped(), 0);

        array.remove_range(2, 3);
        assert_eq!(drop_count.dropped(), 3);

        array.remove(0);
        assert_eq!(drop_count.dropped(), 4);

        array.set(0, drop_count.new_droppable(100)).unwrap();
        assert_eq!(drop_count.dropped(), 5);

        assert!(array.set(10, drop_count.new_droppable(0)).is_err());
        assert_eq!(drop_count.dropped(), 6);

        let taken = array.take(1).unwrap();
        assert_eq!(taken.value, 5);
        drop(taken);
        assert_eq!(drop_count.dropped(), 7);

        let values: Vec<i32> = array.iter().map(|d| d.value).collect();
        assert_eq!(values, [100, 6, 7, 8, 9]);

        array.truncate(3);
        assert_eq!(drop_count.dropped(), 9);

        drop(array);
        assert_eq!(drop_count.dropped(), 12);
    }

    #[test]
    fn iterators_take_and_drop_correctly() {
        let drop_count = DropCounter::new();

        let mut array = GrowableArray::new();
        for i in 1..=8 {
            array.push(drop_count.new_droppable(i));
        }

        let mut into_iter = array.into_iter();
        assert_eq!(into_iter.len(), 8);
        assert_eq!(into_iter.next().unwrap().value, 1);
        assert_eq!(into_iter.next_back().unwrap().value, 8);
        assert_eq!(into_iter.next().unwrap().value, 2);
        assert_eq!(drop_count.dropped(), 3);
        assert_eq!(into_iter.as_slice().len(), 5);

        drop(into_iter);
        assert_eq!(drop_count.dropped(), 8);
    }

    #[test]
    fn equal_arrays_hash_like_slices() {
        use core::hash::BuildHasher;
        use core::hash::BuildHasherDefault;
        use rustc_hash::FxHasher;

        let build = BuildHasherDefault::<FxHasher>::default();
        let hash_of = |value: &dyn Fn(&mut FxHasher)| {
            let mut hasher = build.build_hasher();
            value(&mut hasher);
            hasher.finish()
        };

        let a: GrowableArray<u16> = (0..50).collect();
        let mut b = GrowableArray::with_capacity(1);
        b.extend(0..50u16);

        assert_eq!(a, b);
        assert_ne!(a.capacity(), b.capacity());
        assert_eq!(hash_of(&|h| a.hash(h)), hash_of(&|h| b.hash(h)));
        assert_eq!(hash_of(&|h| a.hash(h)), hash_of(&|h| a.as_slice().hash(h)));
    }

    #[test]
    fn comparisons_follow_slice_order() {
        let a: GrowableArray<i32> = [1, 2, 3].iter().copied().collect();
        let b: GrowableArray<i32> = [1, 2, 4].iter().copied().collect();
        let c: GrowableArray<i32> = [1, 2].iter().copied().collect();

        assert!(a < b);
        assert!(c < a);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        assert_eq!(a, &[1, 2, 3][..]);
        assert_eq!(alloc::format!("{:?}", c), "[1, 2]");
    }

    #[test]
    fn zero_sized_elements() {
        let mut array = GrowableArray::with_capacity(1);
        for _ in 0..100 {
            array.push(());
        }
        assert_eq!(array.len(), 100);
        assert_eq!(array.capacity(), 128);

        array.remove_range(10, 50);
        assert_eq!(array.len(), 50);
        assert_eq!(array.pop(), Some(()));
        assert_eq!(array.into_iter().count(), 49);
    }

    #[test]
    fn matches_vec_on_randomized_operations() {
        use rand::{rngs::SmallRng, Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(crate::test_utils::RNG_SEED);
        let mut array = GrowableArray::with_capacity(1);
        let mut model: Vec<u32> = Vec::new();

        for _ in 0..10_000 {
            let len = model.len();
            match rng.gen_range(0..8) {
                0 | 1 => {
                    let x = rng.gen();
                    array.push(x);
                    model.push(x);
                }
                2 => {
                    let x = rng.gen();
                    array.prepend(x);
                    model.insert(0, x);
                }
                3 => {
                    let index = rng.gen_range(0..=len + 1);
                    let x = rng.gen();
                    let result = array.try_insert(index, x);
                    if index <= len {
                        assert!(result.is_ok());
                        model.insert(index, x);
                    } else {
                        assert_eq!(result, Err(Error::IndexOutOfRange { index, len }));
                    }
                }
                4 => {
                    let index = rng.gen_range(0..=len + 1);
                    array.remove(index);
                    if index < len {
                        model.remove(index);
                    }
                }
                5 => {
                    let index = rng.gen_range(0..=len + 1);
                    let count = rng.gen_range(0..=4);
                    array.remove_range(index, count);
                    if index + count <= len {
                        model.drain(index..index + count);
                    }
                }
                6 => {
                    if len > 0 {
                        let x = model[rng.gen_range(0..len)];
                        assert_eq!(array.index_of(&x), model.iter().position(|&y| y == x));
                    }
                }
                _ => {
                    array.sort();
                    model.sort_unstable();
                }
            }

            assert_eq!(array.as_slice(), model.as_slice());
            assert!(array.capacity() >= array.len());
            assert!(array.capacity().is_power_of_two());
        }
    }
}
