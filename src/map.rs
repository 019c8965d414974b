use std::alloc::{self, Layout};
use std::mem;
use std::ptr::NonNull;

/// A map slot: an owning pointer to a chunk, or `None` for unreached slack.
pub(crate) type ChunkPtr<T> = Option<NonNull<T>>;

/// The deque's index of chunks: a heap array of owning chunk pointers.
///
/// Slots inside the occupied node range always hold `Some`; slack slots hold
/// `None` until growth first reaches them. The map owns its chunks: dropping
/// it frees every remaining chunk and then the slot array. Live elements must
/// already be dead by then.
#[derive(Debug)]
pub(crate) struct ChunkMap<T, const N: usize> {
    ptr: NonNull<ChunkPtr<T>>,
    len: usize,
}

unsafe impl<T: Send, const N: usize> Send for ChunkMap<T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for ChunkMap<T, N> {}

impl<T, const N: usize> ChunkMap<T, N> {
    /// Allocates a map with `len` vacant slots.
    pub(crate) fn with_slots(len: usize) -> Self {
        if len == 0 {
            return ChunkMap {
                ptr: NonNull::dangling(),
                len: 0,
            };
        }

        let layout = Self::slots_layout(len);
        let raw = unsafe { alloc::alloc(layout) } as *mut ChunkPtr<T>;
        let ptr = match NonNull::new(raw) {
            Some(p) => p,
            None => alloc::handle_alloc_error(layout),
        };
        for i in 0..len {
            unsafe { ptr.as_ptr().add(i).write(None) };
        }

        ChunkMap { ptr, len }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns a raw pointer to the slot at `index`.
    pub(crate) fn slot(&self, index: usize) -> *mut ChunkPtr<T> {
        debug_assert!(index < self.len);
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Converts a pointer into this map's slot array back to its index.
    pub(crate) fn index_of(&self, slot: *const ChunkPtr<T>) -> usize {
        let index = unsafe { slot.offset_from(self.ptr.as_ptr()) };
        debug_assert!(0 <= index && (index as usize) < self.len);
        index as usize
    }

    /// Allocates one chunk of `N` raw element slots.
    pub(crate) fn allocate_chunk() -> NonNull<T> {
        assert!(mem::size_of::<T>() != 0, "chunks of zero-sized elements");

        let layout = Self::chunk_layout();
        let raw = unsafe { alloc::alloc(layout) } as *mut T;
        match NonNull::new(raw) {
            Some(p) => p,
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// Frees one chunk previously obtained from [`allocate_chunk`].
    ///
    /// # Safety
    /// The chunk must not hold live elements and must not be referenced by
    /// any map slot afterward.
    ///
    /// [`allocate_chunk`]: ChunkMap::allocate_chunk
    pub(crate) unsafe fn release_chunk(chunk: NonNull<T>) {
        alloc::dealloc(chunk.as_ptr() as *mut u8, Self::chunk_layout());
    }

    fn chunk_layout() -> Layout {
        Layout::array::<T>(N).unwrap()
    }

    fn slots_layout(len: usize) -> Layout {
        Layout::array::<ChunkPtr<T>>(len).unwrap()
    }
}

impl<T, const N: usize> Drop for ChunkMap<T, N> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }

        unsafe {
            for i in 0..self.len {
                if let Some(chunk) = *self.ptr.as_ptr().add(i) {
                    Self::release_chunk(chunk);
                }
            }
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, Self::slots_layout(self.len));
        }
    }
}
