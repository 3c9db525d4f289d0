//! Progress reporting for exhaustive enumeration.
//!
//! [`EnumerationObserver`] is handed to the aggregation loop in
//! `statistics::streak_stats`. With the `obs_slog` feature and
//! `StatsOptions::verbose` set, it writes start, progress and completion
//! records to an asynchronous terminal `slog` logger. Otherwise every method
//! is a no-op and the observer holds no logger.
#[cfg(feature = "obs_slog")]
use slog::{Drain, Logger, info, o};
#[cfg(feature = "obs_slog")]
use std::time::Instant;

use crate::statistics::options::StatsOptions;

/// Observer for one enumeration run.
#[derive(Debug)]
pub struct EnumerationObserver {
    progress_every: Option<u64>,
    #[cfg(feature = "obs_slog")]
    logger: Option<Logger>,
    #[cfg(feature = "obs_slog")]
    started_at: Option<Instant>,
}

impl EnumerationObserver {
    /// Build an observer for `opts`; a logger is attached only when logging
    /// is compiled in and `opts.verbose` is true.
    pub fn new(opts: &StatsOptions) -> Self {
        EnumerationObserver {
            progress_every: opts.progress_every,
            #[cfg(feature = "obs_slog")]
            logger: opts.verbose.then(term_logger),
            #[cfg(feature = "obs_slog")]
            started_at: None,
        }
    }

    /// Whether records are actually emitted.
    #[cfg(feature = "obs_slog")]
    pub fn is_active(&self) -> bool {
        self.logger.is_some()
    }

    /// Whether records are actually emitted; always `false` without
    /// `obs_slog`.
    #[cfg(not(feature = "obs_slog"))]
    pub fn is_active(&self) -> bool {
        false
    }

    /// Record the start of an enumeration over `total` permutations of {1..n}.
    pub fn started(&mut self, n: usize, total: usize) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            self.started_at = Some(Instant::now());
            info!(logger, "enumeration started"; "n" => n, "permutations" => total);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = (n, total);
    }

    /// Record that `done` permutations have been processed. Emits only on
    /// multiples of the configured interval; a zero interval emits nothing.
    pub fn progress(&self, done: u64) {
        let Some(every) = self.progress_every.filter(|&every| every > 0) else {
            return;
        };
        if done % every != 0 {
            return;
        }
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            info!(logger, "enumeration progress"; "permutations" => done);
        }
    }

    /// Record completion with the grand total of streaks counted.
    pub fn finished(&self, grand_total: u64) {
        #[cfg(feature = "obs_slog")]
        if let Some(logger) = &self.logger {
            let elapsed_ms = self.started_at.map(|t| t.elapsed().as_millis()).unwrap_or_default();
            info!(logger, "enumeration finished";
                "streaks" => grand_total, "elapsed_ms" => elapsed_ms as u64);
        }
        #[cfg(not(feature = "obs_slog"))]
        let _ = grand_total;
    }
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn term_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("component" => "streak_stats"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Quiet options never attach a logger.
    // - Observer methods can be called in any order without a logger.
    //
    // They intentionally DO NOT cover:
    // - The formatted terminal output, which belongs to `slog-term`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure default (quiet) options produce an inactive observer whose
    // methods are harmless.
    //
    // Given
    // -----
    // - `StatsOptions::default()` and an interval of 1.
    //
    // Expect
    // ------
    // - `is_active()` is false; start/progress/finish do not panic.
    fn quiet_observer_is_inactive() {
        // Arrange
        let opts = StatsOptions { verbose: false, progress_every: Some(1) };
        let mut observer = EnumerationObserver::new(&opts);

        // Act
        observer.started(3, 6);
        for done in 1..=6 {
            observer.progress(done);
        }
        observer.finished(11);

        // Assert
        assert!(!observer.is_active());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a zero interval never reaches the modulo in `progress`.
    //
    // Given
    // -----
    // - `progress_every = Some(0)` built as a struct literal.
    //
    // Expect
    // ------
    // - `progress` returns without panicking for any count.
    fn zero_interval_progress_is_a_no_op() {
        // Arrange
        let opts = StatsOptions { verbose: true, progress_every: Some(0) };
        let observer = EnumerationObserver::new(&opts);

        // Act / Assert
        for done in 0..4 {
            observer.progress(done);
        }
    }

    #[test]
    #[cfg(not(feature = "obs_slog"))]
    // Purpose
    // -------
    // Verify that `verbose` has no effect when logging is compiled out.
    //
    // Given
    // -----
    // - `verbose = true` without the `obs_slog` feature.
    //
    // Expect
    // ------
    // - The observer stays inactive.
    fn verbose_without_feature_is_inactive() {
        let opts = StatsOptions { verbose: true, progress_every: None };
        assert!(!EnumerationObserver::new(&opts).is_active());
    }
}
