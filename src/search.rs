//! Random-restart search for an expression fitting a set of samples.

use log::{debug, info, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::expression::Expression;

/// Parameters for [`search`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchParams {
    /// The number of candidates sampled before giving up.
    #[serde(alias = "iters")]
    pub iterations: usize,
    /// The search stops as soon as a candidate's total error is below this value.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// The generation depth at which every candidate's root is sampled.
    #[serde(default = "default_start_depth")]
    pub start_depth: usize,
}
impl Default for SearchParams {
    /// The defaults are:
    ///
    /// ```
    /// # use approximator::SearchParams;
    /// SearchParams {
    ///     iterations: 100_000_000,
    ///     threshold: 1e-6,
    ///     start_depth: 1,
    /// }
    /// # ;
    /// ```
    fn default() -> Self {
        SearchParams {
            iterations: 100_000_000,
            threshold: default_threshold(),
            start_depth: default_start_depth(),
        }
    }
}

fn default_threshold() -> f64 {
    1e-6
}

fn default_start_depth() -> usize {
    1
}

/// Reported to the caller of [`search`] every time the best error strictly decreases.
#[derive(Debug, Clone, Copy)]
pub struct Improvement<'a> {
    /// Zero-based index of the candidate.
    pub iteration: usize,
    pub error: f64,
    pub expression: &'a Expression,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The best candidate's error is below the threshold.
    Exact,
    /// A candidate was accepted, but none reached the threshold.
    Approximate,
    /// No candidate scored a finite error lower than the initial infinity, e.g. because every
    /// candidate evaluated to NaN somewhere.
    NotFound,
}

/// The result of a search.
#[derive(Debug, Clone)]
pub struct Approximation {
    pub best: Option<Expression>,
    /// The total error of `best`, or infinity if there is none.
    pub error: f64,
    /// The number of candidates that were sampled, including the last one.
    pub iterations_used: usize,
}
impl Approximation {
    pub fn outcome(&self, threshold: f64) -> Outcome {
        match self.best {
            None => Outcome::NotFound,
            Some(_) if self.error < threshold => Outcome::Exact,
            Some(_) => Outcome::Approximate,
        }
    }
    /// The best expression in its display form.
    pub fn formula(&self) -> Option<String> {
        self.best.as_ref().map(Expression::to_string)
    }
}

/// The response envelope of the approximation service.
///
/// `function` is `null` when no candidate was found. Non-finite errors serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub function: Option<String>,
    pub error: f64,
    pub iterations: usize,
}
impl From<&Approximation> for Response {
    fn from(approximation: &Approximation) -> Self {
        Response {
            function: approximation.formula(),
            error: approximation.error,
            iterations: approximation.iterations_used,
        }
    }
}

/// The sum of absolute differences between `expr` evaluated at each `x` and the target `y`.
///
/// This is not normalized by the number of samples, and is `0` for no samples.
pub fn total_error(expr: &Expression, pairs: &[(f64, f64)]) -> f64 {
    pairs.iter().map(|&(x, y)| (expr.eval(x) - y).abs()).sum()
}

/// Sample up to `iters` random expressions and keep the one with the smallest
/// [`total_error`], stopping early once it falls below `1e-6`.
///
/// # Examples
///
/// ```
/// use approximator::{approximate, Outcome};
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let pairs = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)];
/// let rng = &mut SmallRng::seed_from_u64(42);
///
/// let approximation = approximate(&pairs, 200_000, rng);
/// assert_eq!(approximation.outcome(1e-6), Outcome::Exact);
/// let best = approximation.best.unwrap();
/// for (x, y) in pairs {
///     assert!((best.eval(x) - y).abs() < 1e-6, "{}", best);
/// }
/// ```
pub fn approximate<R: Rng>(pairs: &[(f64, f64)], iters: usize, rng: &mut R) -> Approximation {
    let params = SearchParams {
        iterations: iters,
        ..SearchParams::default()
    };
    search(&params, pairs, rng, |_| ())
}

/// The configurable form of [`approximate`]. `on_improvement` is called whenever a candidate
/// beats the best error seen so far, before the early exit is considered.
///
/// Candidates are sampled independently: nothing of a previous best is reused.
pub fn search<R, F>(
    params: &SearchParams,
    pairs: &[(f64, f64)],
    rng: &mut R,
    mut on_improvement: F,
) -> Approximation
where
    R: Rng,
    F: FnMut(&Improvement),
{
    debug!(
        "searching {} samples using up to {} iterations",
        pairs.len(),
        params.iterations
    );
    let start = Instant::now();
    let mut best = None;
    let mut best_error = f64::INFINITY;
    for iteration in 0..params.iterations {
        let candidate = Expression::sample(params.start_depth, rng);
        let error = total_error(&candidate, pairs);
        trace!("candidate {} has error {}", candidate, error);
        // NaN never compares less, so such candidates are never kept
        if error < best_error {
            info!(
                "found better function {} at iteration {} after {} ms with error {}",
                candidate,
                iteration,
                start.elapsed().as_millis(),
                error
            );
            on_improvement(&Improvement {
                iteration,
                error,
                expression: &candidate,
            });
            best_error = error;
            best = Some(candidate);
            if best_error < params.threshold {
                debug!("error below {}, stopping early", params.threshold);
                return Approximation {
                    best,
                    error: best_error,
                    iterations_used: iteration + 1,
                };
            }
        }
    }
    debug!("exhausted {} iterations", params.iterations);
    Approximation {
        best,
        error: best_error,
        iterations_used: params.iterations,
    }
}
