//! Detail overlay state and the body scroll lock it holds while open.
//!
//! The lock is owned by a [`ScrollLockGuard`] that releases on drop, so every
//! exit path (explicit close, backdrop, Escape, the page unmounting) unlocks
//! the page exactly once.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::types::Character;

/// Something that can stop and restore page scrolling.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Holds a [`ScrollLock`] engaged until released or dropped.
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
    released: bool,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        Self {
            lock,
            released: false,
        }
    }

    /// Unlock now. Further calls and the eventual drop do nothing.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.lock.unlock();
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.release();
    }
}

/// In-process scroll flag, shared between clones.
///
/// Counts lock/unlock calls so callers can check pairing.
#[derive(Clone, Default, Debug)]
pub struct ScrollFlag {
    locked: Arc<AtomicBool>,
    locks: Arc<AtomicUsize>,
    unlocks: Arc<AtomicUsize>,
}

impl ScrollFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    pub fn lock_count(&self) -> usize {
        self.locks.load(Ordering::SeqCst)
    }

    pub fn unlock_count(&self) -> usize {
        self.unlocks.load(Ordering::SeqCst)
    }
}

impl ScrollLock for ScrollFlag {
    fn lock(&self) {
        self.locks.fetch_add(1, Ordering::SeqCst);
        self.locked.store(true, Ordering::SeqCst);
    }

    fn unlock(&self) {
        self.unlocks.fetch_add(1, Ordering::SeqCst);
        self.locked.store(false, Ordering::SeqCst);
    }
}

/// Ways the user can dismiss the overlay. All of them behave the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The round "×" button over the portrait
    HeaderButton,
    /// The "Cerrar portal" button under the details
    FooterButton,
    /// A click on the blurred backdrop
    Backdrop,
    /// Escape pressed while the overlay is mounted
    Escape,
}

/// Which record (if any) the overlay shows, plus the scroll lock it holds.
pub struct DetailOverlay<L: ScrollLock + Clone> {
    lock: L,
    open: Option<(Character, ScrollLockGuard<L>)>,
}

impl<L: ScrollLock + Clone> DetailOverlay<L> {
    pub fn new(lock: L) -> Self {
        Self { lock, open: None }
    }

    /// Show `character`. If already open, swap the record and keep the
    /// existing lock.
    pub fn open(&mut self, character: Character) {
        match self.open.as_mut() {
            Some((current, _)) => *current = character,
            None => {
                let guard = ScrollLockGuard::acquire(self.lock.clone());
                self.open = Some((character, guard));
            }
        }
    }

    /// Dismiss the overlay. Returns whether it was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        match self.open.take() {
            Some((character, mut guard)) => {
                guard.release();
                tracing::debug!(id = character.id, ?trigger, "Detail overlay closed");
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&Character> {
        self.open.as_ref().map(|(character, _)| character)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Place;

    fn rick() -> Character {
        Character {
            id: 1,
            name: "Rick Sanchez".to_string(),
            image: String::new(),
            species: "Human".to_string(),
            gender: "Male".to_string(),
            status: "Alive".to_string(),
            episode: vec![],
            origin: Place::named("Earth (C-137)"),
            location: Place::named("Citadel of Ricks"),
            kind: None,
            created: "2017-11-04T18:48:46.250Z".to_string(),
        }
    }

    #[test]
    fn guard_releases_once() {
        let flag = ScrollFlag::new();
        let mut guard = ScrollLockGuard::acquire(flag.clone());
        assert!(flag.is_locked());

        guard.release();
        guard.release();
        drop(guard);

        assert!(!flag.is_locked());
        assert_eq!(flag.lock_count(), 1);
        assert_eq!(flag.unlock_count(), 1);
    }

    #[test]
    fn guard_releases_on_drop() {
        let flag = ScrollFlag::new();
        {
            let _guard = ScrollLockGuard::acquire(flag.clone());
            assert!(flag.is_locked());
        }
        assert!(!flag.is_locked());
    }

    #[test]
    fn open_locks_and_close_unlocks() {
        let flag = ScrollFlag::new();
        let mut overlay = DetailOverlay::new(flag.clone());
        assert!(!overlay.is_open());

        overlay.open(rick());
        assert!(overlay.is_open());
        assert!(flag.is_locked());
        assert_eq!(overlay.selected().map(|c| c.id), Some(1));

        assert!(overlay.close(CloseTrigger::HeaderButton));
        assert!(!overlay.is_open());
        assert!(!flag.is_locked());
    }

    #[test]
    fn close_when_closed_is_noop() {
        let flag = ScrollFlag::new();
        let mut overlay = DetailOverlay::new(flag.clone());
        assert!(!overlay.close(CloseTrigger::Backdrop));
        assert_eq!(flag.unlock_count(), 0);
    }

    #[test]
    fn every_trigger_closes_and_repeats_are_noops() {
        for trigger in [
            CloseTrigger::HeaderButton,
            CloseTrigger::FooterButton,
            CloseTrigger::Backdrop,
            CloseTrigger::Escape,
        ] {
            let flag = ScrollFlag::new();
            let mut overlay = DetailOverlay::new(flag.clone());
            overlay.open(rick());

            assert!(overlay.close(trigger));
            assert!(!overlay.close(trigger));
            assert!(!flag.is_locked());
            assert_eq!(flag.unlock_count(), 1);
        }
    }

    #[test]
    fn reopen_swaps_record_without_double_lock() {
        let flag = ScrollFlag::new();
        let mut overlay = DetailOverlay::new(flag.clone());
        overlay.open(rick());

        let mut morty = rick();
        morty.id = 2;
        morty.name = "Morty Smith".to_string();
        overlay.open(morty);

        assert_eq!(overlay.selected().map(|c| c.id), Some(2));
        assert_eq!(flag.lock_count(), 1);
    }

    #[test]
    fn dropping_open_overlay_unlocks() {
        let flag = ScrollFlag::new();
        {
            let mut overlay = DetailOverlay::new(flag.clone());
            overlay.open(rick());
            assert!(flag.is_locked());
        }
        assert!(!flag.is_locked());
        assert_eq!(flag.unlock_count(), 1);
    }
}
