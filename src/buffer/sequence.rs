//! Core implementation of [`SequenceBuffer`].

use super::drain::{Drain, IntoIter};
use super::error::BufferError;
use std::fmt;
use std::mem;
use tracing::trace;

/// Outcome of the growth decision taken by [`SequenceBuffer::grow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Growth {
    /// Slide the live window to the front of the current store.
    Compact,
    /// Move the live window into a new store of the given size.
    Reallocate(usize),
}

/// A growable buffer that is written at one end and read at the other.
///
/// Elements live in a single contiguous backing store between a read cursor
/// and a write cursor. Writes append at the write cursor and grow the store
/// on demand; reads move values out at the read cursor. Once every written
/// element has been read, the next read attempt reports end-of-stream and
/// rewinds both cursors to the start of the store, so a long-running
/// producer/consumer pair keeps reusing the same slots.
///
/// Unused slots hold `T::default()`, which lets [`read`](Self::read) move
/// values out without requiring `T: Clone`.
///
/// The buffer has no internal synchronization. Share it between threads by
/// wrapping it in a `Mutex` or by handing ownership from one thread to the
/// next.
#[derive(Clone)]
pub struct SequenceBuffer<T> {
    /// Backing store. Its length is the buffer capacity.
    store: Vec<T>,
    /// Index of the next slot to read.
    read: usize,
    /// Index of the next slot to write.
    write: usize,
}

impl<T> SequenceBuffer<T> {
    /// Returns the number of unread elements.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.write - self.read
    }

    /// Returns `true` when every written element has been read.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Returns the allocated size of the backing store.
    ///
    /// This is neither the number of unread elements nor the free space; see
    /// [`len`](Self::len) and [`remaining`](Self::remaining).
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of slots that can be written before the next
    /// growth decision.
    #[must_use]
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.write
    }

    /// Returns the unread elements in write order.
    #[must_use]
    pub fn view(&self) -> &[T] {
        &self.store[self.read..self.write]
    }

    /// Rewinds both cursors to the start of the backing store.
    ///
    /// Any unread element is discarded. The backing store keeps its size and
    /// its old contents, which later writes overwrite. Returns how many
    /// unread elements were discarded.
    pub fn reset(&mut self) -> usize {
        let discarded = self.len();
        if discarded > 0 {
            trace!(discarded, "sequence buffer reset discarded unread elements");
        }
        self.read = 0;
        self.write = 0;
        discarded
    }
}

impl<T: Default> SequenceBuffer<T> {
    /// Creates an empty buffer with no backing store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty buffer whose backing store holds exactly `capacity`
    /// elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut store = Vec::with_capacity(capacity);
        store.resize_with(capacity, T::default);
        SequenceBuffer {
            store,
            read: 0,
            write: 0,
        }
    }

    /// Appends `value` after the last written element, growing the buffer
    /// by at least one slot when it is full.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows `usize` or `isize::MAX` bytes.
    pub fn write(&mut self, value: T) {
        if self.write == self.capacity() {
            self.grow(1);
        }
        self.put(value);
    }

    /// Fallible form of [`write`](Self::write).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError`] if the buffer is full and its backing store
    /// cannot be grown. The buffer contents are left untouched.
    pub fn try_write(&mut self, value: T) -> Result<(), BufferError> {
        if self.write == self.capacity() {
            self.try_grow(1)?;
        }
        self.put(value);
        Ok(())
    }

    /// Appends every element of `values`, in order, with a single growth
    /// decision for the whole batch.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows `usize` or `isize::MAX` bytes.
    pub fn write_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let count = values.len();
        if count == 0 {
            return;
        }
        if count > self.remaining() {
            self.grow(count);
        }
        self.put_all(values, count);
    }

    /// Fallible form of [`write_all`](Self::write_all).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError`] if the batch does not fit and the backing
    /// store cannot be grown. Nothing from `values` is written in that case.
    pub fn try_write_all<I>(&mut self, values: I) -> Result<(), BufferError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let count = values.len();
        if count == 0 {
            return Ok(());
        }
        if count > self.remaining() {
            self.try_grow(count)?;
        }
        self.put_all(values, count);
        Ok(())
    }

    /// Appends clones of every element of `values`, in order.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows `usize` or `isize::MAX` bytes.
    pub fn write_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        if values.is_empty() {
            return;
        }
        if values.len() > self.remaining() {
            self.grow(values.len());
        }
        let end = self.write + values.len();
        self.store[self.write..end].clone_from_slice(values);
        self.write = end;
    }

    /// Moves the oldest unread element out of the buffer.
    ///
    /// Returns `None` once every written element has been read. That call
    /// also rewinds both cursors to the start of the backing store.
    pub fn read(&mut self) -> Option<T> {
        if self.is_empty() {
            if self.write != 0 {
                trace!(
                    position = self.write,
                    "sequence buffer drained, rewinding cursors"
                );
            }
            self.read = 0;
            self.write = 0;
            return None;
        }
        let value = mem::take(&mut self.store[self.read]);
        self.read += 1;
        Some(value)
    }

    /// Returns an iterator that reads elements until end-of-stream.
    ///
    /// Elements the iterator does not reach stay unread in the buffer.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Makes room for at least `additional` writes past the write cursor.
    ///
    /// When the unread elements plus the request fit in half of the current
    /// capacity, the unread elements are slid to the front of the existing
    /// store. Otherwise they move into a new store of
    /// `additional + 2 * capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`, or if the new backing
    /// store would exceed `isize::MAX` bytes.
    pub fn grow(&mut self, additional: usize) {
        match self.plan_growth(additional) {
            Ok(Growth::Compact) => self.compact(),
            Ok(Growth::Reallocate(slots)) => self.relocate(Vec::with_capacity(slots), slots),
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`grow`](Self::grow).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::CapacityOverflow`] if the new capacity does not
    /// fit in `usize` or its size in bytes exceeds `isize::MAX`, or
    /// [`BufferError::AllocationFailed`] if the allocator refuses the new
    /// backing store.
    pub fn try_grow(&mut self, additional: usize) -> Result<(), BufferError> {
        match self.plan_growth(additional)? {
            Growth::Compact => self.compact(),
            Growth::Reallocate(slots) => {
                let mut store = Vec::new();
                store
                    .try_reserve_exact(slots)
                    .map_err(|_| BufferError::AllocationFailed { slots })?;
                self.relocate(store, slots);
            }
        }
        Ok(())
    }

    fn put(&mut self, value: T) {
        self.store[self.write] = value;
        self.write += 1;
    }

    /// Writes at most `count` values starting at the write cursor. The caller
    /// guarantees `count <= remaining()`.
    fn put_all<I: Iterator<Item = T>>(&mut self, values: I, count: usize) {
        let start = self.write;
        let mut written = 0;
        for (slot, value) in self.store[start..start + count].iter_mut().zip(values) {
            *slot = value;
            written += 1;
        }
        self.write += written;
    }

    fn plan_growth(&mut self, additional: usize) -> Result<Growth, BufferError> {
        let live = self.len();
        if live == 0 && self.write != 0 {
            self.read = 0;
            self.write = 0;
        }

        let capacity = self.capacity();
        if live
            .checked_add(additional)
            .is_some_and(|needed| needed <= capacity / 2)
        {
            trace!(live, additional, capacity, "sequence buffer compacting");
            return Ok(Growth::Compact);
        }

        let slots = capacity
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(additional))
            .filter(|&slots| {
                slots
                    .checked_mul(mem::size_of::<T>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(BufferError::CapacityOverflow {
                requested: additional,
                capacity,
            })?;
        trace!(
            live,
            additional,
            capacity,
            new_capacity = slots,
            "sequence buffer reallocating"
        );
        Ok(Growth::Reallocate(slots))
    }

    /// Slides the live window to the front of the current store.
    fn compact(&mut self) {
        let live = self.len();
        if self.read > 0 {
            for index in 0..live {
                self.store.swap(index, self.read + index);
            }
        }
        self.read = 0;
        self.write = live;
    }

    /// Moves the live window to the front of `store`, pads it to `slots`
    /// elements and adopts it as the backing store.
    fn relocate(&mut self, mut store: Vec<T>, slots: usize) {
        let live = self.len();
        store.extend(self.store[self.read..self.write].iter_mut().map(mem::take));
        store.resize_with(slots, T::default);
        self.store = store;
        self.read = 0;
        self.write = live;
    }
}

impl<T: Default> Default for SequenceBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceBuffer")
            .field("unread", &self.view())
            .field("read", &self.read)
            .field("write", &self.write)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: Default> Extend<T> for SequenceBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.write(value);
        }
    }
}

impl<T: Default> FromIterator<T> for SequenceBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = SequenceBuffer::new();
        buffer.extend(iter);
        buffer
    }
}

impl<T: Default> IntoIterator for SequenceBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T: Default> IntoIterator for &'a mut SequenceBuffer<T> {
    type Item = T;
    type IntoIter = Drain<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.drain()
    }
}
