//! Generation-checked handles into resource arenas
//!
//! Handles are lightweight (8 bytes) references into an `Arena`. The generation
//! counter is bumped every time a slot is freed, so a handle kept past the
//! removal of its value fails validation instead of aliasing a new resource.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Typed arena handle.
///
/// Slot index plus the generation the slot had when the handle was issued.
pub struct Handle<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    const fn new(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot arena with free-list reuse.
///
/// Freed slots are recycled LIFO; each reuse carries a fresh generation.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T) -> Handle<T> {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return Handle::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        Handle::new(index, 0)
    }

    /// Remove the value behind `handle`.
    ///
    /// Returns `None` for stale or foreign handles.
    pub fn remove(&mut self, handle: Handle<T>) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_ne!(a, b);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_stale_handle_is_rejected() {
        let mut arena = Arena::new();
        let a = arena.insert(1u32);
        assert_eq!(arena.remove(a), Some(1));

        // Slot is recycled with a new generation
        let b = arena.insert(2u32);
        assert_eq!(format!("{a:?}"), "Handle(0v0)");
        assert_eq!(format!("{b:?}"), "Handle(0v1)");

        assert_eq!(arena.get(a), None);
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.get(b), Some(&2));
    }

    #[test]
    fn test_freed_slots_recycle_lifo() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        arena.remove(a);
        arena.remove(b);
        assert!(arena.is_empty());

        let c = arena.insert('c');
        let d = arena.insert('d');
        assert_eq!(format!("{c:?}"), "Handle(1v1)");
        assert_eq!(format!("{d:?}"), "Handle(0v1)");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(b), None);
    }
}
