//! Recency lock over the last two touched cells.

use crate::game::Position;

/// Two-slot FIFO of recently touched positions.
///
/// Every accepted move pushes exactly one entry. Reinforcements and attacks
/// push their target; claims push an empty slot, which still evicts the
/// older entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrozenPair {
    slots: [Option<Position>; 2],
}

impl FrozenPair {
    /// An empty lock.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: [None, None] }
    }

    /// Build a lock from explicit slots, oldest first.
    #[must_use]
    pub const fn from_slots(older: Option<Position>, newer: Option<Position>) -> Self {
        Self {
            slots: [older, newer],
        }
    }

    /// Slots, oldest first.
    #[must_use]
    pub const fn slots(&self) -> [Option<Position>; 2] {
        self.slots
    }

    /// Check whether `pos` is currently frozen.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.slots.contains(&Some(pos))
    }

    /// Push a touch, dropping the oldest slot.
    pub fn touch(&mut self, pos: Option<Position>) {
        self.slots = [self.slots[1], pos];
    }

    /// Frozen positions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.slots.iter().flatten().copied()
    }
}
