//! Consuming iterators over a [`SequenceBuffer`].

use super::sequence::SequenceBuffer;
use std::iter::FusedIterator;

/// Iterator that reads unread elements out of a borrowed buffer.
///
/// Created by [`SequenceBuffer::drain`]. Every `next` call is a
/// [`read`](SequenceBuffer::read), so running the iterator to completion
/// leaves the buffer empty with both cursors rewound. Dropping it early
/// leaves the elements it did not reach in the buffer.
#[derive(Debug)]
pub struct Drain<'a, T: Default> {
    buffer: &'a mut SequenceBuffer<T>,
}

impl<'a, T: Default> Drain<'a, T> {
    pub(super) fn new(buffer: &'a mut SequenceBuffer<T>) -> Self {
        Drain { buffer }
    }

    /// Returns the elements this iterator has not yielded yet.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.view()
    }
}

impl<T: Default> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.buffer.read()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buffer.len();
        (len, Some(len))
    }
}

impl<T: Default> ExactSizeIterator for Drain<'_, T> {}

impl<T: Default> FusedIterator for Drain<'_, T> {}

/// Owning iterator over the unread elements of a buffer.
///
/// Created by `SequenceBuffer::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T: Default> {
    buffer: SequenceBuffer<T>,
}

impl<T: Default> IntoIter<T> {
    pub(super) fn new(buffer: SequenceBuffer<T>) -> Self {
        IntoIter { buffer }
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.buffer.read()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.buffer.len();
        (len, Some(len))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}
