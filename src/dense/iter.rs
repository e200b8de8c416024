use std::iter::FusedIterator;
use std::mem;

use crate::MatError;

// Forward cursors over the row-major element buffer of a `Mat`.
//
// Both cursors hold the unvisited tail of the buffer and step by splitting
// off its head. The exhausted sentinel is the empty tail; `remaining` is its
// length. `Iterator::next` is the usual option-returning protocol, while
// `advance` / `current` expose the checked protocol that reports misuse as
// `MatError::ExpiredIterator`.

#[derive(Clone, Debug)]
pub struct Iter<'a, R> {
    data: &'a [R]
}

impl<'a, R> Iter<'a, R> {
    pub(crate) fn new(data: &'a [R]) -> Self {
        Self { data }
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.data.is_empty()
    }

    pub fn current(&self) -> Result<&'a R, MatError> {
        self.data.first().ok_or(MatError::ExpiredIterator)
    }

    pub fn advance(&mut self) -> Result<(), MatError> {
        let (_, tail) = self.data.split_first().ok_or(MatError::ExpiredIterator)?;
        self.data = tail;
        Ok(())
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.data.split_first()?;
        self.data = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<'a, R> ExactSizeIterator for Iter<'a, R> {}
impl<'a, R> FusedIterator for Iter<'a, R> {}

// Cursors are equal iff they sit at the same position.
// All exhausted cursors compare equal, wherever they came from.
impl<'a, R> PartialEq for Iter<'a, R> {
    fn eq(&self, other: &Self) -> bool {
        cursor_eq(self.data, other.data)
    }
}

impl<'a, R> Eq for Iter<'a, R> {}

#[derive(Debug)]
pub struct IterMut<'a, R> {
    data: &'a mut [R]
}

impl<'a, R> IterMut<'a, R> {
    pub(crate) fn new(data: &'a mut [R]) -> Self {
        Self { data }
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.data.is_empty()
    }

    pub fn current(&self) -> Result<&R, MatError> {
        self.data.first().ok_or(MatError::ExpiredIterator)
    }

    pub fn current_mut(&mut self) -> Result<&mut R, MatError> {
        self.data.first_mut().ok_or(MatError::ExpiredIterator)
    }

    pub fn advance(&mut self) -> Result<(), MatError> {
        let data = mem::take(&mut self.data);
        let (_, tail) = data.split_first_mut().ok_or(MatError::ExpiredIterator)?;
        self.data = tail;
        Ok(())
    }
}

impl<'a, R> Iterator for IterMut<'a, R> {
    type Item = &'a mut R;

    fn next(&mut self) -> Option<Self::Item> {
        let data = mem::take(&mut self.data);
        let (head, tail) = data.split_first_mut()?;
        self.data = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<'a, R> ExactSizeIterator for IterMut<'a, R> {}
impl<'a, R> FusedIterator for IterMut<'a, R> {}

impl<'a, R> PartialEq for IterMut<'a, R> {
    fn eq(&self, other: &Self) -> bool {
        cursor_eq(&self.data, &other.data)
    }
}

impl<'a, R> Eq for IterMut<'a, R> {}

fn cursor_eq<R>(a: &[R], b: &[R]) -> bool {
    (a.is_empty() && b.is_empty()) ||
    (a.as_ptr() == b.as_ptr() && a.len() == b.len())
}
