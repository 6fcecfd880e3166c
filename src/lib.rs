//! Symbolic regression by random sampling of arithmetic expression trees.
//!
//! Given `(x, y)` samples, [`approximate`] repeatedly draws a fresh random [`Expression`] over
//! `* / + - ^ log`, the constants `-1 0 1 2` and the variable `X`, scores it by its total
//! absolute error on the samples, and keeps the best one. There is no mutation or crossover:
//! every candidate is sampled independently and the search relies on volume alone.
//!
//! Good places to look are [`Expression`] and [`search`].
//!
//! # Examples
//!
//! ```
//! use approximator::{search, Outcome, SearchParams};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let pairs = [(1.0, 2.0), (2.0, 3.0), (3.0, 4.0)];
//! let params = SearchParams {
//!     iterations: 200_000,
//!     ..SearchParams::default()
//! };
//! let rng = &mut SmallRng::seed_from_u64(1);
//!
//! let mut errors = Vec::new();
//! let approximation = search(&params, &pairs, rng, |improvement| {
//!     errors.push(improvement.error)
//! });
//!
//! // every reported improvement is strictly better than the last
//! assert!(errors.windows(2).all(|w| w[1] < w[0]));
//! assert_ne!(approximation.outcome(params.threshold), Outcome::NotFound);
//! println!("{}", approximation.best.unwrap());
//! ```

pub mod expression;
pub mod pairs;
mod search;

pub use crate::expression::{BinaryOp, Expression, UnaryOp};
pub use crate::search::*;
