use std::sync::atomic::{AtomicU32, Ordering};

use crate::clazz::Clazz;
use crate::error::ClazzError;
use crate::repository::FindAll;

/// Process-local, monotonically increasing id counter.
#[derive(Debug)]
pub struct IdSequence {
    last: AtomicU32,
}

impl IdSequence {
    /// The first call to [`IdSequence::next`] returns `last + 1`.
    pub fn starting_after(last: u32) -> Self {
        Self {
            last: AtomicU32::new(last),
        }
    }

    /// Start above both `floor` and every id already stored in `repo`, so
    /// generated ids never collide with seeded ones.
    pub fn above<R: FindAll + ?Sized>(repo: &R, floor: u32) -> Result<Self, ClazzError> {
        let highest = repo
            .find_all()?
            .iter()
            .map(|clazz| clazz.id())
            .max()
            .unwrap_or(0);
        Ok(Self::starting_after(highest.max(floor)))
    }

    /// Issue the next id. Fails once `u32::MAX` has been issued; the
    /// counter never wraps back onto low, possibly seeded, ids.
    pub fn next(&self) -> Result<u32, ClazzError> {
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| last + 1)
            .map_err(|_| ClazzError::IdsExhausted {
                entity: Clazz::ENTITY,
            })
    }

    /// The most recently issued id (or the starting point).
    pub fn current(&self) -> u32 {
        self.last.load(Ordering::SeqCst)
    }
}
