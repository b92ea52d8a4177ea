//! # seedsample
//!
//! Deterministic pseudorandom sampling from a seeded generator.
//!
//! The crate is layered: a raw bit-stream feeds the uniform primitives,
//! and everything else (derived distributions, weighted discrete
//! sampling, shuffles and permutations) is built only from those
//! primitives. No layer calls back into a higher one.
//!
//! ## Modules
//!
//! - [`engine`] — [`RandomEngine`], the seeded entry point owning one stream
//! - [`uniform`] — uniform integers and reals, including the unbiased
//!   64-bit rejection sampler
//! - [`distributions`] — Bernoulli, Gaussian, geometric, Poisson, Pareto,
//!   Cauchy and exponential distributions
//! - [`discrete`] — sampling from probability or frequency vectors
//! - [`shuffle`] — Fisher–Yates shuffles, full and partial permutations
//! - [`sequence`] — container abstraction accepted by shuffles and
//!   discrete samplers
//! - [`thread_engine`] — per-thread convenience engine
//!
//! ## Design Philosophy
//!
//! - **Reproducible**: same seed, same call sequence, same output
//! - **Validate first**: a call that returns `Err` never consumes randomness
//! - **Explicit state**: sampling takes `&mut self`; there is no hidden
//!   global generator
//!
//! ## Example
//!
//! ```
//! use seedsample::RandomEngine;
//!
//! let mut engine = RandomEngine::with_seed(42);
//! let i = engine.discrete(&[0.5, 0.3, 0.1, 0.1]).unwrap();
//! assert!(i < 4);
//! let sample = engine.permutation_of(1_000_000, 5).unwrap();
//! assert_eq!(sample.len(), 5);
//! ```

pub mod config;
pub mod discrete;
pub mod distributions;
pub mod engine;
pub mod error;
pub mod sequence;
pub mod shuffle;
#[cfg(test)]
mod test_rng;
pub mod thread_engine;
pub mod uniform;

pub use config::EngineConfig;
pub use discrete::{DiscreteSampler, FrequencySampler};
pub use distributions::{Bernoulli, Cauchy, Exponential, Gaussian, Geometric, Pareto, Poisson};
pub use engine::{create_rng, RandomEngine};
pub use error::{ErrorKind, Result, SampleError};
pub use sequence::{Sequence, SequenceMut};
