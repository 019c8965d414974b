use std::marker::PhantomData;
use std::ptr;

use crate::map::ChunkPtr;
use crate::{is_zst, zst_mut, zst_ref};

/// A cursor into one chunk slot, able to cross chunk boundaries through the
/// map.
///
/// `node` points at the map slot of the chunk being visited; `first` and
/// `last` are recomputed from `node` on every rebind, never mutated on their
/// own. `current` is the live position, with `first <= current <= last`.
///
/// Equality is structural over all four fields, so cursors taken before a map
/// rebuild never compare equal to cursors taken after it, even if the
/// allocator reuses addresses.
#[derive(PartialEq, Eq, Debug)]
pub(crate) struct RawCursor<T, const N: usize> {
    pub(crate) current: *mut T,
    pub(crate) first: *mut T,
    pub(crate) last: *mut T,
    pub(crate) node: *mut ChunkPtr<T>,
}

// manual impls: the cursor is all pointers, copyable for any `T`
impl<T, const N: usize> Clone for RawCursor<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for RawCursor<T, N> {}

impl<T, const N: usize> RawCursor<T, N> {
    /// A cursor not yet bound to any chunk. Usable only as a placeholder.
    pub(crate) fn unbound() -> Self {
        RawCursor {
            current: ptr::null_mut(),
            first: ptr::null_mut(),
            last: ptr::null_mut(),
            node: ptr::null_mut(),
        }
    }

    /// Rebinds the cursor to another map slot, rederiving the chunk bounds.
    ///
    /// `current` is left untouched; the caller must set it afterward.
    ///
    /// # Safety
    /// `node` must point at an occupied slot of the deque's current map.
    pub(crate) unsafe fn set_node(&mut self, node: *mut ChunkPtr<T>) {
        let chunk = (*node).expect("cursor rebound to a vacant map slot");
        self.node = node;
        self.first = chunk.as_ptr();
        self.last = self.first.add(N);
    }

    /// Steps one element forward, migrating to the next chunk at the edge.
    ///
    /// # Safety
    /// The next position must be within the live range or the one-past-end
    /// position, whose chunk is guaranteed to exist.
    pub(crate) unsafe fn bump(&mut self) {
        self.current = self.current.add(1);
        if self.current == self.last {
            self.set_node(self.node.add(1));
            self.current = self.first;
        }
    }

    /// Steps one element backward, migrating to the previous chunk at the
    /// edge.
    ///
    /// # Safety
    /// The previous position must be within the live range.
    pub(crate) unsafe fn retreat(&mut self) {
        if self.current == self.first {
            self.set_node(self.node.sub(1));
            self.current = self.last;
        }
        self.current = self.current.sub(1);
    }

    /// Moves the cursor by `n` elements in either direction.
    ///
    /// Stays O(1) within the current chunk; otherwise rebinds to the chunk
    /// `offset.div_euclid(N)` slots away. Floor division is what keeps
    /// negative offsets in the right chunk; truncating division would be off
    /// by one whole chunk.
    ///
    /// # Safety
    /// The target position must be within the live range or the one-past-end
    /// position.
    pub(crate) unsafe fn advance(&mut self, n: isize) {
        let offset = n + self.current.offset_from(self.first);
        if 0 <= offset && offset < N as isize {
            self.current = self.current.offset(n);
        } else {
            let node_offset = if offset >= 0 {
                offset / N as isize
            } else {
                -((-offset - 1) / N as isize) - 1
            };
            self.set_node(self.node.offset(node_offset));
            self.current = self.first.offset(offset - node_offset * N as isize);
        }
    }

    /// Chunk-aware distance `self - other`, in elements.
    ///
    /// # Safety
    /// Both cursors must be bound to the same deque's current map.
    pub(crate) unsafe fn distance(&self, other: &Self) -> isize {
        self.node.offset_from(other.node) * N as isize
            + self.current.offset_from(self.first)
            - other.current.offset_from(other.first)
    }
}

/// An iterator over references to the elements of a `ChunkedDeque`.
///
/// This `struct` is created by the [`iter`] method on [`ChunkedDeque`]. See
/// its documentation for more.
///
/// [`iter`]: crate::ChunkedDeque::iter
/// [`ChunkedDeque`]: crate::ChunkedDeque
pub struct Iter<'a, T: 'a, const N: usize> {
    head: RawCursor<T, N>,
    tail: RawCursor<T, N>,
    len: usize,
    marker: PhantomData<&'a T>,
}

unsafe impl<T: Sync, const N: usize> Send for Iter<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for Iter<'_, T, N> {}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(head: RawCursor<T, N>, tail: RawCursor<T, N>, len: usize) -> Self {
        Iter {
            head,
            tail,
            len,
            marker: PhantomData,
        }
    }
}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    fn clone(&self) -> Self {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        if is_zst::<T>() {
            return Some(zst_ref());
        }
        unsafe {
            let elem = self.head.current;
            self.head.bump();
            Some(&*elem)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.len {
            self.len = 0;
            return None;
        }
        self.len -= n + 1;

        if is_zst::<T>() {
            return Some(zst_ref());
        }
        unsafe {
            self.head.advance(n as isize);
            let elem = self.head.current;
            self.head.bump();
            Some(&*elem)
        }
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        if is_zst::<T>() {
            return Some(zst_ref());
        }
        unsafe {
            self.tail.retreat();
            Some(&*self.tail.current)
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}
impl<T, const N: usize> std::iter::FusedIterator for Iter<'_, T, N> {}

/// An iterator over mutable references to the elements of a `ChunkedDeque`.
///
/// This `struct` is created by the [`iter_mut`] method on [`ChunkedDeque`].
/// See its documentation for more.
///
/// [`iter_mut`]: crate::ChunkedDeque::iter_mut
/// [`ChunkedDeque`]: crate::ChunkedDeque
pub struct IterMut<'a, T: 'a, const N: usize> {
    head: RawCursor<T, N>,
    tail: RawCursor<T, N>,
    len: usize,
    marker: PhantomData<&'a mut T>,
}

unsafe impl<T: Send, const N: usize> Send for IterMut<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for IterMut<'_, T, N> {}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    pub(crate) fn new(head: RawCursor<T, N>, tail: RawCursor<T, N>, len: usize) -> Self {
        IterMut {
            head,
            tail,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        if is_zst::<T>() {
            return Some(zst_mut());
        }
        unsafe {
            let elem = self.head.current;
            self.head.bump();
            Some(&mut *elem)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        if n >= self.len {
            self.len = 0;
            return None;
        }
        self.len -= n + 1;

        if is_zst::<T>() {
            return Some(zst_mut());
        }
        unsafe {
            self.head.advance(n as isize);
            let elem = self.head.current;
            self.head.bump();
            Some(&mut *elem)
        }
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for IterMut<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        if is_zst::<T>() {
            return Some(zst_mut());
        }
        unsafe {
            self.tail.retreat();
            Some(&mut *self.tail.current)
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {}
impl<T, const N: usize> std::iter::FusedIterator for IterMut<'_, T, N> {}
