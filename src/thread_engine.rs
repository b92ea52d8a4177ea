//! Per-thread convenience engine.
//!
//! For call sites that do not want to thread a [`RandomEngine`] through
//! their code. Each thread lazily gets its own engine seeded from the
//! clock; nothing is shared between threads, so there is no locking and
//! no cross-thread interleaving of draws.
//!
//! # Examples
//! ```
//! use seedsample::thread_engine;
//!
//! thread_engine::set_seed(42);
//! let a = thread_engine::with(|e| e.uniform_int(100)).unwrap();
//! thread_engine::set_seed(42);
//! let b = thread_engine::with(|e| e.uniform_int(100)).unwrap();
//! assert_eq!(a, b);
//! ```

use std::cell::RefCell;

use crate::engine::RandomEngine;

thread_local! {
    static ENGINE: RefCell<RandomEngine> = RefCell::new(RandomEngine::new());
}

/// Runs `f` against this thread's engine.
///
/// # Panics
/// If called re-entrantly from inside another `with` closure on the same
/// thread.
pub fn with<T>(f: impl FnOnce(&mut RandomEngine) -> T) -> T {
    ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

/// Reseeds this thread's engine.
pub fn set_seed(seed: u64) {
    with(|engine| engine.reseed(seed));
}

/// Seed of this thread's engine.
pub fn seed() -> u64 {
    ENGINE.with(|engine| engine.borrow().seed())
}
