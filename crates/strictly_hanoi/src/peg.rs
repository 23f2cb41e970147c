//! Fixed-capacity disk stack backing each peg.
//!
//! `PegStack` knows nothing about puzzle rules: it accepts any disk as long as
//! there is room. Ordering is enforced by [`crate::rules::validate`] before
//! anything is pushed.

use crate::{Disk, DiskCount};
use tracing::instrument;

/// Error raised by stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StackError {
    /// `top` or `pop` on an empty stack.
    #[display("Stack is empty")]
    Empty,

    /// `push` on a full stack.
    #[display("Stack capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Capacity the stack was built with.
        capacity: usize,
    },
}

impl std::error::Error for StackError {}

/// Last-in first-out stack of disks with a capacity fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegStack {
    /// Disks from bottom to top.
    disks: Vec<Disk>,
    capacity: usize,
}

impl PegStack {
    /// Creates an empty stack.
    pub fn new(capacity: usize) -> Self {
        Self {
            disks: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a stack holding a full tower `count, count - 1, ..., 1`.
    ///
    /// The capacity is [`DiskCount::slots`], so the tower always fits.
    #[instrument]
    pub fn tower(count: DiskCount) -> Self {
        let mut disks = Vec::with_capacity(count.slots());
        disks.extend((1..=count.get()).rev().map(Disk::new));
        Self {
            disks,
            capacity: count.slots(),
        }
    }

    /// Number of disks resting on the stack.
    pub fn size(&self) -> usize {
        self.disks.len()
    }

    /// Returns true when no disk rests on the stack.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Maximum number of disks.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Disks from bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Returns the topmost disk.
    pub fn top(&self) -> Result<Disk, StackError> {
        self.disks.last().copied().ok_or(StackError::Empty)
    }

    /// Places a disk on top.
    pub fn push(&mut self, disk: Disk) -> Result<(), StackError> {
        if self.disks.len() == self.capacity {
            return Err(StackError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.disks.push(disk);
        Ok(())
    }

    /// Removes and returns the topmost disk.
    pub fn pop(&mut self) -> Result<Disk, StackError> {
        self.disks.pop().ok_or(StackError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack = PegStack::new(5);
        assert!(stack.is_empty());
        assert_eq!(stack.size(), 0);
        assert_eq!(stack.capacity(), 5);
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = PegStack::new(3);
        stack.push(Disk::new(3)).unwrap();
        stack.push(Disk::new(1)).unwrap();
        assert_eq!(stack.top(), Ok(Disk::new(1)));
        assert_eq!(stack.pop(), Ok(Disk::new(1)));
        assert_eq!(stack.pop(), Ok(Disk::new(3)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_ordering_not_enforced() {
        let mut stack = PegStack::new(2);
        stack.push(Disk::new(1)).unwrap();
        assert!(stack.push(Disk::new(4)).is_ok());
        assert_eq!(stack.top(), Ok(Disk::new(4)));
    }

    #[test]
    fn test_empty_errors() {
        let mut stack = PegStack::new(1);
        assert_eq!(stack.top(), Err(StackError::Empty));
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut stack = PegStack::new(1);
        stack.push(Disk::new(2)).unwrap();
        assert_eq!(
            stack.push(Disk::new(1)),
            Err(StackError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_tower() {
        let stack = PegStack::tower(DiskCount::default());
        let weights: Vec<u8> = stack.disks().iter().map(|d| d.weight()).collect();
        assert_eq!(weights, vec![4, 3, 2, 1]);
        assert_eq!(stack.top(), Ok(Disk::new(1)));
        assert_eq!(stack.capacity(), 5);
    }

    #[test]
    fn test_tower_has_one_spare_slot() {
        let mut stack = PegStack::tower(DiskCount::new(8).unwrap());
        assert!(stack.push(Disk::new(1)).is_ok());
        assert!(stack.push(Disk::new(1)).is_err());
    }
}
