//! Sweep runner.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use queenbeam_core::QueenbeamError;
use queenbeam_search::run_search_with;

use crate::config::{ConfigError, SweepConfig};
use crate::result::{SweepResult, WidthResult};

/// Errors raised while running a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Search(#[from] QueenbeamError),
}

/// Sweep runner generic over the search function.
///
/// The search is stored as a concrete generic parameter, not a trait
/// object; the runner never inspects anything beyond the boolean outcome.
///
/// # Type Parameters
///
/// * `F` - Search function: `FnMut(board_size, beam_width, rng) -> Result<bool>`
pub struct Sweep<F>
where
    F: FnMut(usize, usize, &mut StdRng) -> queenbeam_core::Result<bool>,
{
    config: SweepConfig,
    search: F,
}

impl<F> Sweep<F>
where
    F: FnMut(usize, usize, &mut StdRng) -> queenbeam_core::Result<bool>,
{
    /// Creates a sweep over a custom search function.
    ///
    /// Useful for testing the orchestration with a stub, or for sweeping a
    /// different solver behind the same interface.
    pub fn with_search(config: SweepConfig, search: F) -> Self {
        Sweep { config, search }
    }

    /// Runs the full sweep: every configured beam width, `run_count`
    /// runs of `problems_per_run` searches each.
    ///
    /// A configured `random_seed` makes the whole sweep reproducible; the
    /// generator is threaded through every search sequentially.
    ///
    /// # Errors
    ///
    /// Fails fast on an invalid configuration or on a search error. A
    /// search that merely finds no solution is counted, not an error.
    pub fn run(mut self) -> Result<SweepResult, SweepError> {
        self.config.validate()?;

        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        tracing::info!(
            board_size = self.config.board_size,
            widths = self.config.beam_widths.len(),
            attempts_per_width = self.config.attempts_per_width(),
            "starting sweep"
        );

        let mut result = SweepResult::new(self.config.board_size);
        for &beam_width in &self.config.beam_widths {
            let mut tally = WidthResult::new(beam_width);
            for _run in 0..self.config.run_count {
                for _problem in 0..self.config.problems_per_run {
                    let solved = (self.search)(self.config.board_size, beam_width, &mut rng)?;
                    tally.record(solved);
                }
            }

            tracing::info!(
                beam_width,
                successes = tally.successes,
                attempts = tally.attempts,
                "sweep width complete"
            );
            result.push(tally);
        }

        Ok(result)
    }
}

/// Runs a sweep of the beam search engine itself.
pub fn run_sweep(config: SweepConfig) -> Result<SweepResult, SweepError> {
    Sweep::with_search(config, run_search_with).run()
}
