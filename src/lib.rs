//! # u-quant
//!
//! Small quantitative helpers over plain values.
//!
//! Every operation is a free function taking its subject explicitly, with
//! thin extension traits ([`numeric::NumberExt`], [`time::DurationExt`])
//! for method syntax. Nothing mutates shared state; the wall clock and the
//! random source are passed in.
//!
//! ## Modules
//!
//! - [`numeric`] — Rounding, range tests, linear remapping
//! - [`stats`] — Sum, mean, population variance, standard deviation
//! - [`random`] — Seeded RNG, Fisher-Yates shuffle, swap
//! - [`time`] — Unit constants, durations, instants, relative-time phrases
//! - [`error`] — Parse errors
//!
//! ## Design Philosophy
//!
//! - **Value-level failure**: degenerate input yields NaN or a fixed
//!   sentinel, never a panic or an error
//! - **Injected non-determinism**: [`time::Clock`] and [`rand::Rng`]
//!   make shuffles and phrases reproducible under test
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod error;
pub mod numeric;
pub mod random;
pub mod stats;
pub mod time;

pub use error::{Error, Result};
