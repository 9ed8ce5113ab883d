//! In-place quicksort with a fixed last-element pivot.
//!
//! Each partition step takes the last element of the range as its pivot and
//! makes a single left-to-right pass, swapping every element strictly less
//! than the pivot to the front of the range. The pivot is then swapped into
//! the slot just past those elements, which is its final position.
//!
//! The sort is **not** stable. For example, sorting `[(0, 'x'), (5, 'a'),
//! (5, 'b')]` by the first field yields `[(0, 'x'), (5, 'b'), (5, 'a')]`.
//!
//! Already sorted and reverse sorted inputs make every pivot an extreme
//! value of its range, costing O(n²) comparisons. Stack usage stays
//! logarithmic regardless, because only the shorter side of each partition
//! is sorted recursively.

/// Sorts the slice in ascending order using `<`.
///
/// # Examples
/// ```
/// let mut v = [4, 3, 11, 9, 6];
/// growable::sort::quicksort(&mut v);
/// assert_eq!(v, [3, 4, 6, 9, 11]);
/// ```
#[inline]
pub fn quicksort<T: PartialOrd>(v: &mut [T]) {
    quicksort_by(v, |a, b| a < b);
}

/// Sorts the slice with a strict less-than relation `is_less`.
///
/// `is_less` should describe a strict weak ordering; if it does not, the
/// resulting order is unspecified, but the slice still holds exactly the
/// elements it held before. The same is true if `is_less` panics.
///
/// # Examples
/// ```
/// let mut v = ["delta", "alpha", "charlie", "bravo"];
/// growable::sort::quicksort_by(&mut v, |a, b| b < a);
/// assert_eq!(v, ["delta", "charlie", "bravo", "alpha"]);
/// ```
pub fn quicksort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    recurse(v, &mut is_less);
}

fn recurse<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let mid = partition(v, is_less);
        let (left, right) = core::mem::take(&mut v).split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            recurse(left, is_less);
            v = right;
        } else {
            recurse(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its last element and returns the pivot's new index.
///
/// Afterwards, everything before the returned index is less than the pivot,
/// and nothing after it is.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(!v.is_empty());
    let pivot = v.len() - 1;

    let mut boundary = 0;
    for i in 0..pivot {
        if is_less(&v[i], &v[pivot]) {
            v.swap(i, boundary);
            boundary += 1;
        }
    }

    v.swap(boundary, pivot);
    boundary
}
