// Throughput, completion estimate and the status-line text.

use std::time::Duration;

/// Shuffles per second so far.
///
/// Zero elapsed time gives `inf` (or `NaN` with zero iterations); the value
/// is only ever displayed.
pub fn ops_per_second(iterations: u64, elapsed: Duration) -> f64 {
    iterations as f64 / elapsed.as_secs_f64()
}

/// `n!`, or `None` once it no longer fits in a `u128`.
pub fn factorial(n: u64) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// Seconds to try every ordering of `len` elements at the current speed.
///
/// A naive average-case figure (`len! / ops`), not a bound. The speed is
/// truncated to an integer before dividing; `None` when that leaves zero
/// (no throughput yet, or `NaN`) or when `len!` overflows.
pub fn estimated_seconds(len: usize, ops_per_second: f64) -> Option<u128> {
    // `as` saturates: NaN -> 0, inf -> u128::MAX.
    let divisor = ops_per_second as u128;
    factorial(len as u64)?.checked_div(divisor)
}

/// Elapsed time as a short human-readable duration.
///
/// Under a minute this is `Duration`'s own notation (`4.00s`, `350.00ms`);
/// longer runs split off hours and minutes: `1m23.46s`, `2h0m5.00s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    if total < 60 {
        return format!("{elapsed:.2?}");
    }
    let hours = total / 3600;
    let minutes = total / 60 % 60;
    let seconds = (total % 60) as f64 + f64::from(elapsed.subsec_nanos()) / 1e9;
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds:.2}s")
    } else {
        format!("{minutes}m{seconds:.2}s")
    }
}

/// The status block drawn below the bars, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLines {
    pub speed: String,
    pub iteration: String,
    pub elapsed: String,
    pub estimate: Option<String>,
}

impl StatusLines {
    pub fn new(len: usize, iterations: u64, elapsed: Duration, show_estimate: bool) -> Self {
        let ops = ops_per_second(iterations, elapsed);
        let estimate = show_estimate.then(|| match estimated_seconds(len, ops) {
            Some(secs) => format!("Estimated time: {secs}s"),
            None => "Estimated time: ∞".to_string(),
        });
        StatusLines {
            speed: format!("Speed: {ops:.2} ops/sec"),
            iteration: format!("Iteration: {iterations}"),
            elapsed: format_elapsed(elapsed),
            estimate,
        }
    }

    /// Lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [&self.speed, &self.iteration, &self.elapsed]
            .into_iter()
            .map(String::as_str)
            .chain(self.estimate.as_deref())
    }
}
