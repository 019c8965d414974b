#![warn(missing_docs)]
#![doc(test(attr(deny(warnings))))]

//! A double-ended queue that stores its elements in fixed-size chunks.
//!
//! # [`ChunkedDeque`] vs [`VecDeque`]
//!
//! ## Growth
//!
//! The standard [`VecDeque`] keeps all elements in one contiguous ring
//! buffer. When it grows, the whole buffer is reallocated and every element
//! moves to a new address.
//!
//! [`ChunkedDeque`] instead spreads its elements over fixed-size chunks,
//! indexed through a small resizable array of chunk pointers (the map).
//! Growing at either end allocates one new chunk; only the pointer array is
//! ever reallocated, so an element keeps its address for as long as it stays
//! in the deque.
//!
//! ## Memory Usage
//!
//! The chunked layout wastes at most `CHUNK_SIZE - 1` element slots at each
//! end, plus the map's slack entries. A smaller `CHUNK_SIZE` means more
//! frequent chunk allocations and less wasted slack; a larger one means the
//! opposite.
//!
//! [`VecDeque`]: std::collections::VecDeque

use std::hash::Hash;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

use cursor::RawCursor;
use map::ChunkMap;

pub use cursor::{Iter, IterMut};

mod cursor;
mod map;

#[cfg(test)]
mod drop_log;

/// A double-ended queue implemented with fixed-size chunks indexed by a map
/// of chunk pointers.
///
/// A `ChunkedDeque` with a known list of items can be initialized from an
/// array:
///
/// ```
/// use chunked_deque::ChunkedDeque;
///
/// # #[allow(unused)]
/// let deq: ChunkedDeque<i32> = ChunkedDeque::from([-1, 0, 1]);
/// ```
///
/// `CHUNK_SIZE` is the number of elements per chunk. The default of 10 suits
/// small elements; pick a smaller value to bound slack for large elements,
/// or a larger one to fit more elements between allocations.
pub struct ChunkedDeque<T, const CHUNK_SIZE: usize = 10> {
    map: ChunkMap<T, CHUNK_SIZE>,
    start: RawCursor<T, CHUNK_SIZE>,
    finish: RawCursor<T, CHUNK_SIZE>,
    len: usize,
}

unsafe impl<T: Send, const CHUNK_SIZE: usize> Send for ChunkedDeque<T, CHUNK_SIZE> {}
unsafe impl<T: Sync, const CHUNK_SIZE: usize> Sync for ChunkedDeque<T, CHUNK_SIZE> {}

/// How a map growth request was satisfied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum MapGrowth {
    /// The occupied slot range was recentred within the existing map.
    Reused,
    /// A larger map was allocated and the slot range moved across.
    Reallocated,
}

impl<T, const CHUNK_SIZE: usize> ChunkedDeque<T, CHUNK_SIZE> {
    /// Creates an empty deque with one chunk already in place, ready to grow
    /// in both directions.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    /// # #[allow(unused)]
    /// let deque: ChunkedDeque<u32> = ChunkedDeque::new();
    /// ```
    pub fn new() -> Self {
        assert!(CHUNK_SIZE > 0, "chunk size must be nonzero");

        if is_zst::<T>() {
            return ChunkedDeque {
                map: ChunkMap::with_slots(0),
                start: RawCursor::unbound(),
                finish: RawCursor::unbound(),
                len: 0,
            };
        }

        let map = ChunkMap::with_slots(1);
        let mut start = RawCursor::unbound();
        unsafe {
            *map.slot(0) = Some(ChunkMap::<T, CHUNK_SIZE>::allocate_chunk());
            start.set_node(map.slot(0));
            start.current = start.first;
        }

        ChunkedDeque {
            map,
            start,
            finish: start,
            len: 0,
        }
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut deque = ChunkedDeque::<_>::new();
    /// deque.push_back(1);
    /// assert_eq!(deque.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of element slots per chunk.
    pub const fn chunk_capacity(&self) -> usize {
        CHUNK_SIZE
    }

    /// Provides a reference to the front element, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut d = ChunkedDeque::<_>::new();
    /// assert_eq!(d.front(), None);
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else if is_zst::<T>() {
            Some(zst_ref())
        } else {
            unsafe { Some(&*self.start.current) }
        }
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// deque is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else if is_zst::<T>() {
            Some(zst_mut())
        } else {
            unsafe { Some(&mut *self.start.current) }
        }
    }

    /// Provides a reference to the back element, or `None` if the deque is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut d = ChunkedDeque::<_>::new();
    /// assert_eq!(d.back(), None);
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(d.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        if is_zst::<T>() {
            return Some(zst_ref());
        }
        // finish is one-past-end; peek through a stepped-back copy
        let mut tmp = self.finish;
        unsafe {
            tmp.retreat();
            Some(&*tmp.current)
        }
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// deque is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        if is_zst::<T>() {
            return Some(zst_mut());
        }
        let mut tmp = self.finish;
        unsafe {
            tmp.retreat();
            Some(&mut *tmp.current)
        }
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds. The element at index 0 is the front of the queue.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let deque: ChunkedDeque<_, 2> = ChunkedDeque::from([4, 5, 6]);
    /// assert_eq!(deque.get(2), Some(&6));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        if is_zst::<T>() {
            return Some(zst_ref());
        }
        let mut cursor = self.start;
        unsafe {
            cursor.advance(index as isize);
            Some(&*cursor.current)
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        if is_zst::<T>() {
            return Some(zst_mut());
        }
        let mut cursor = self.start;
        unsafe {
            cursor.advance(index as isize);
            Some(&mut *cursor.current)
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let deque: ChunkedDeque<_, 2> = ChunkedDeque::from([1, 2, 3]);
    /// let collected: Vec<i32> = deque.iter().copied().collect();
    /// assert_eq!(collected, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, CHUNK_SIZE> {
        Iter::new(self.start, self.finish, self.len)
    }

    /// Returns a front-to-back iterator of mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, CHUNK_SIZE> {
        IterMut::new(self.start, self.finish, self.len)
    }

    /// Appends an element to the back of the deque.
    ///
    /// Amortized O(1): crossing a chunk edge allocates one chunk, and
    /// occasionally a bigger map of chunk pointers. Elements never move.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut buf = ChunkedDeque::<_>::new();
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(3, *buf.back().unwrap());
    /// ```
    pub fn push_back(&mut self, elem: T) {
        if is_zst::<T>() {
            mem::forget(elem);
            self.len += 1;
            return;
        }

        unsafe {
            ptr::write(self.finish.current, elem);
            if self.finish.current != self.finish.last.sub(1) {
                self.finish.bump();
            } else {
                self.grow_back();
            }
        }
        self.len += 1;
        self.debug_check_len();
    }

    /// Prepends an element to the deque.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut d = ChunkedDeque::<_>::new();
    /// d.push_front(1);
    /// d.push_front(2);
    /// assert_eq!(d.front(), Some(&2));
    /// ```
    pub fn push_front(&mut self, elem: T) {
        if is_zst::<T>() {
            mem::forget(elem);
            self.len += 1;
            return;
        }

        unsafe {
            if self.start.current != self.start.first {
                self.start.current = self.start.current.sub(1);
            } else {
                self.grow_front();
            }
            ptr::write(self.start.current, elem);
        }
        self.len += 1;
        self.debug_check_len();
    }

    /// Removes the last element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// A chunk fully vacated by the pop is released.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut buf = ChunkedDeque::<_>::new();
    /// assert_eq!(buf.pop_back(), None);
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(buf.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;

        if is_zst::<T>() {
            return Some(unsafe { ptr::read(NonNull::<T>::dangling().as_ptr()) });
        }

        let value = unsafe {
            if self.finish.current != self.finish.first {
                self.finish.current = self.finish.current.sub(1);
            } else {
                // finish's own chunk holds no live element; release it
                // before stepping back into the previous chunk
                if let Some(chunk) = (*self.finish.node).take() {
                    ChunkMap::<T, CHUNK_SIZE>::release_chunk(chunk);
                }
                self.finish.set_node(self.finish.node.sub(1));
                self.finish.current = self.finish.last.sub(1);
            }
            ptr::read(self.finish.current)
        };
        self.debug_check_len();
        Some(value)
    }

    /// Removes the first element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// A chunk fully vacated by the pop is released.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut d = ChunkedDeque::<_>::new();
    /// d.push_back(1);
    /// d.push_back(2);
    ///
    /// assert_eq!(d.pop_front(), Some(1));
    /// assert_eq!(d.pop_front(), Some(2));
    /// assert_eq!(d.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;

        if is_zst::<T>() {
            return Some(unsafe { ptr::read(NonNull::<T>::dangling().as_ptr()) });
        }

        let value = unsafe {
            let value = ptr::read(self.start.current);
            if self.start.current != self.start.last.sub(1) {
                self.start.current = self.start.current.add(1);
            } else {
                // the pop vacated start's chunk; release it and move on
                if let Some(chunk) = (*self.start.node).take() {
                    ChunkMap::<T, CHUNK_SIZE>::release_chunk(chunk);
                }
                self.start.set_node(self.start.node.add(1));
                self.start.current = self.start.first;
            }
            value
        };
        self.debug_check_len();
        Some(value)
    }

    /// Clears the deque, dropping all elements.
    ///
    /// Chunks and the map are kept for reuse; use [`shrink_to_fit`] to
    /// release them.
    ///
    /// [`shrink_to_fit`]: ChunkedDeque::shrink_to_fit
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut deque = ChunkedDeque::<_>::new();
    /// deque.push_back(1);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        if is_zst::<T>() {
            let n = self.len;
            self.len = 0;
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    NonNull::<T>::dangling().as_ptr(),
                    n,
                ));
            }
            return;
        }

        unsafe {
            if self.start.node == self.finish.node {
                let n = self.finish.current.offset_from(self.start.current) as usize;
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start.current, n));
            } else {
                let head = self.start.last.offset_from(self.start.current) as usize;
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start.current, head));

                let middle =
                    self.map.index_of(self.start.node) + 1..self.map.index_of(self.finish.node);
                for i in middle {
                    let chunk = (*self.map.slot(i)).expect("live range over a vacant map slot");
                    ptr::drop_in_place(ptr::slice_from_raw_parts_mut(chunk.as_ptr(), CHUNK_SIZE));
                }

                let tail = self.finish.current.offset_from(self.finish.first) as usize;
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.finish.first, tail));
            }
        }
        self.finish = self.start;
        self.len = 0;
        self.debug_check_len();
    }

    /// Shortens the deque, keeping the first `len` elements and dropping the
    /// rest.
    ///
    /// If `len` is greater than the deque's current length, this has no
    /// effect.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut buf: ChunkedDeque<_, 2> = ChunkedDeque::from([5, 10, 15]);
    /// buf.truncate(1);
    /// assert_eq!(buf, [5]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.pop_back();
        }
    }

    /// Reallocates the map to span exactly the occupied chunks, releasing
    /// slack map slots and any cached chunks outside the live range.
    ///
    /// Elements keep their order and their addresses.
    ///
    /// # Example
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let mut deque: ChunkedDeque<_, 2> = (0..20).collect();
    /// deque.truncate(3);
    /// deque.shrink_to_fit();
    /// assert_eq!(deque, [0, 1, 2]);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if is_zst::<T>() {
            return;
        }

        unsafe {
            let old_start = self.map.index_of(self.start.node);
            let occupied = self.map.index_of(self.finish.node) - old_start + 1;
            if occupied == self.map.len() {
                return;
            }

            let start_off = self.start.current.offset_from(self.start.first);
            let finish_off = self.finish.current.offset_from(self.finish.first);

            let new_map = ChunkMap::with_slots(occupied);
            for i in 0..occupied {
                *new_map.slot(i) = (*self.map.slot(old_start + i)).take();
            }
            // the old map drops here, releasing all slack chunks with it
            self.map = new_map;

            self.start.set_node(self.map.slot(0));
            self.start.current = self.start.first.offset(start_off);
            self.finish.set_node(self.map.slot(occupied - 1));
            self.finish.current = self.finish.first.offset(finish_off);
        }
        self.debug_check_len();
    }

    /// Makes the slot after `finish.node` available, then binds `finish` to
    /// a chunk there at its first element.
    ///
    /// # Safety
    /// `T` must not be zero-sized and the cursors must be bound.
    unsafe fn grow_back(&mut self) {
        self.reserve_map_slots(1, false);
        let next = self.finish.node.add(1);
        if (*next).is_none() {
            *next = Some(ChunkMap::<T, CHUNK_SIZE>::allocate_chunk());
        }
        self.finish.set_node(next);
        self.finish.current = self.finish.first;
    }

    /// Makes the slot before `start.node` available, then binds `start` to a
    /// chunk there at its last element.
    ///
    /// # Safety
    /// `T` must not be zero-sized and the cursors must be bound.
    unsafe fn grow_front(&mut self) {
        self.reserve_map_slots(1, true);
        let prev = self.start.node.sub(1);
        if (*prev).is_none() {
            *prev = Some(ChunkMap::<T, CHUNK_SIZE>::allocate_chunk());
        }
        self.start.set_node(prev);
        self.start.current = self.start.last.sub(1);
    }

    /// Ensures `nodes_to_add` map slots exist beyond the occupied range in
    /// the given direction, growing the map only when the slack there has
    /// run out.
    ///
    /// # Safety
    /// `T` must not be zero-sized and the cursors must be bound.
    unsafe fn reserve_map_slots(
        &mut self,
        nodes_to_add: usize,
        at_front: bool,
    ) -> Option<MapGrowth> {
        let slack = if at_front {
            self.map.index_of(self.start.node)
        } else {
            self.map.len() - 1 - self.map.index_of(self.finish.node)
        };

        if slack < nodes_to_add {
            Some(self.reallocate_map(nodes_to_add, at_front))
        } else {
            None
        }
    }

    /// Grows the map by `nodes_to_add` slots toward one end.
    ///
    /// With ample slack opposite the growth direction the occupied slot
    /// range is recentred within the existing map; otherwise a larger map is
    /// allocated with headroom and the range moved across, biased toward the
    /// growth direction. Start and finish are rebound either way, keeping
    /// their in-chunk offsets.
    ///
    /// # Safety
    /// `T` must not be zero-sized and the cursors must be bound.
    unsafe fn reallocate_map(&mut self, nodes_to_add: usize, at_front: bool) -> MapGrowth {
        let old_start = self.map.index_of(self.start.node);
        let old_finish = self.map.index_of(self.finish.node);
        let occupied = old_finish - old_start + 1;
        let wanted = occupied + nodes_to_add;

        let start_off = self.start.current.offset_from(self.start.first);
        let finish_off = self.finish.current.offset_from(self.finish.first);

        let growth;
        let new_start;
        if self.map.len() > 2 * wanted {
            new_start = (self.map.len() - wanted) / 2 + if at_front { nodes_to_add } else { 0 };

            // chunks cached outside the live range but inside the target
            // slots are about to be overwritten; release them first
            for i in new_start..new_start + occupied {
                if i < old_start || i > old_finish {
                    if let Some(chunk) = (*self.map.slot(i)).take() {
                        ChunkMap::<T, CHUNK_SIZE>::release_chunk(chunk);
                    }
                }
            }

            ptr::copy(self.map.slot(old_start), self.map.slot(new_start), occupied);

            // vacate the stale duplicates left behind by the move
            for i in old_start..=old_finish {
                if i < new_start || i >= new_start + occupied {
                    *self.map.slot(i) = None;
                }
            }
            growth = MapGrowth::Reused;
        } else {
            let new_len = self.map.len() + self.map.len().max(nodes_to_add) + 2;
            let new_map = ChunkMap::with_slots(new_len);
            new_start = (new_len - wanted) / 2 + if at_front { nodes_to_add } else { 0 };

            for i in 0..occupied {
                *new_map.slot(new_start + i) = (*self.map.slot(old_start + i)).take();
            }
            // the old map drops here, along with any chunks cached outside
            // the live range
            self.map = new_map;
            growth = MapGrowth::Reallocated;
        }

        self.start.set_node(self.map.slot(new_start));
        self.start.current = self.start.first.offset(start_off);
        self.finish.set_node(self.map.slot(new_start + occupied - 1));
        self.finish.current = self.finish.first.offset(finish_off);

        growth
    }

    /// The chunk-aware distance between the boundary cursors must agree with
    /// the running length at all times.
    fn debug_check_len(&self) {
        if cfg!(debug_assertions) && !is_zst::<T>() {
            let by_cursors = unsafe { self.finish.distance(&self.start) };
            assert!(
                by_cursors >= 0 && by_cursors as usize == self.len,
                "cursor distance out of sync with len",
            );
        }
    }
}

impl<T, const CHUNK_SIZE: usize> Default for ChunkedDeque<T, CHUNK_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CHUNK_SIZE: usize> Drop for ChunkedDeque<T, CHUNK_SIZE> {
    fn drop(&mut self) {
        // chunks and the slot array are freed by the map's own drop
        self.clear();
    }
}

impl<T: Clone, const CHUNK_SIZE: usize> Clone for ChunkedDeque<T, CHUNK_SIZE> {
    /// Deep-copies the elements into a freshly laid out deque; no chunks are
    /// shared with the source.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: std::fmt::Debug, const CHUNK_SIZE: usize> std::fmt::Debug for ChunkedDeque<T, CHUNK_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const CHUNK_SIZE: usize> IntoIterator for ChunkedDeque<T, CHUNK_SIZE> {
    type Item = T;

    type IntoIter = IntoIter<T, CHUNK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T, const CHUNK_SIZE: usize> IntoIterator for &'a ChunkedDeque<T, CHUNK_SIZE> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T, CHUNK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const CHUNK_SIZE: usize> IntoIterator for &'a mut ChunkedDeque<T, CHUNK_SIZE> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T, CHUNK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator over the elements of a `ChunkedDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`ChunkedDeque`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: ChunkedDeque::into_iter
pub struct IntoIter<T, const CHUNK_SIZE: usize> {
    deque: ChunkedDeque<T, CHUNK_SIZE>,
}

impl<T, const CHUNK_SIZE: usize> Iterator for IntoIter<T, CHUNK_SIZE> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T, const CHUNK_SIZE: usize> DoubleEndedIterator for IntoIter<T, CHUNK_SIZE> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T, const CHUNK_SIZE: usize> ExactSizeIterator for IntoIter<T, CHUNK_SIZE> {}
impl<T, const CHUNK_SIZE: usize> std::iter::FusedIterator for IntoIter<T, CHUNK_SIZE> {}

impl<T, const CHUNK_SIZE: usize> Extend<T> for ChunkedDeque<T, CHUNK_SIZE> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T, const CHUNK_SIZE: usize> FromIterator<T> for ChunkedDeque<T, CHUNK_SIZE> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, const CHUNK_SIZE: usize, const N: usize> From<[T; N]> for ChunkedDeque<T, CHUNK_SIZE> {
    /// Converts a `[T; N]` into a `ChunkedDeque<T>`.
    ///
    /// ```
    /// use chunked_deque::ChunkedDeque;
    ///
    /// let deq: ChunkedDeque<i32> = ChunkedDeque::from([1, 2, 3, 4]);
    /// assert_eq!(deq, [1, 2, 3, 4]);
    /// ```
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T, const CHUNK_SIZE: usize> From<Vec<T>> for ChunkedDeque<T, CHUNK_SIZE> {
    /// Turns a [`Vec<T>`] into a [`ChunkedDeque<T>`].
    fn from(value: Vec<T>) -> Self {
        Self::from_iter(value)
    }
}

macro_rules! impl_partial_eq {
    ([$($vars:tt)*] $rhs:ty) => {
        impl<T, U, const CHUNK_SIZE: usize, $($vars)*> PartialEq<$rhs> for ChunkedDeque<T, CHUNK_SIZE>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$rhs) -> bool {
                self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
            }
        }
    };
}

impl_partial_eq!([const N: usize] [U; N]);
impl_partial_eq!([const N: usize] &[U; N]);
impl_partial_eq!([] &[U]);
impl_partial_eq!([] Vec<U>);
impl_partial_eq!([const N: usize] ChunkedDeque<U, N>);

impl<T: Eq, const CHUNK_SIZE: usize> Eq for ChunkedDeque<T, CHUNK_SIZE> {}

impl<T: PartialOrd, const CHUNK_SIZE: usize> PartialOrd for ChunkedDeque<T, CHUNK_SIZE> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const CHUNK_SIZE: usize> Ord for ChunkedDeque<T, CHUNK_SIZE> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, const CHUNK_SIZE: usize> Hash for ChunkedDeque<T, CHUNK_SIZE> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl<T, const CHUNK_SIZE: usize> Index<usize> for ChunkedDeque<T, CHUNK_SIZE> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of bounds")
    }
}

impl<T, const CHUNK_SIZE: usize> IndexMut<usize> for ChunkedDeque<T, CHUNK_SIZE> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("index out of bounds")
    }
}

pub(crate) fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}

pub(crate) fn zst_ref<'a, T>() -> &'a T {
    debug_assert!(is_zst::<T>());
    unsafe { &*NonNull::dangling().as_ptr() }
}

pub(crate) fn zst_mut<'a, T>() -> &'a mut T {
    debug_assert!(is_zst::<T>());
    unsafe { &mut *NonNull::dangling().as_ptr() }
}
