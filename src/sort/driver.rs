//! Retry-driven sort driver.
//!
//! Each trial builds a fresh deck from the caller's cards, hands it to the
//! deal strategy, and checks whether the returned stack is ordered. The first
//! ordered result is copied back over the caller's slice. If every trial
//! fails, the slice is left exactly as it was.
//!
//! ## Usage
//!
//! ```
//! use solitaire_sort::core::{Card, SortConfig};
//! use solitaire_sort::sort::{SolitaireSorter, SortStatus};
//!
//! let mut data = Card::cards_from_str("15253969704").unwrap();
//! let original = data.clone();
//!
//! let mut sorter = SolitaireSorter::new(SortConfig::default());
//! let report = sorter.sort(&mut data).unwrap();
//!
//! // The default strategy never reorders, so this input can't be sorted
//! assert_eq!(report.status, SortStatus::Failure);
//! assert_eq!(report.attempts, 3);
//! assert_eq!(data, original);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::board::{cards_conserved, DealStrategy, VerbatimDeal};
use crate::core::{Card, DeckRng, DeckRngState, SortConfig, SortError};
use crate::stack::CardStack;

use super::is_ordered;

/// Outcome of a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortStatus {
    /// An ordered arrangement was found and written back.
    Success,
    /// Every trial failed; the input is unchanged.
    Failure,
}

impl SortStatus {
    /// Numeric status: 0 for success, 1 for failure.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            SortStatus::Success => 0,
            SortStatus::Failure => 1,
        }
    }

    /// Check for success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, SortStatus::Success)
    }
}

/// Status, the number of trials it took, and how to replay each trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport {
    /// Final status.
    pub status: SortStatus,
    /// Trials run (at most `max_retries`).
    pub attempts: usize,
    /// RNG state each trial started from, in trial order.
    /// Pass one to [`SolitaireSorter::replay`] to rerun that trial.
    pub trials: Vec<DeckRngState>,
}

/// Sort driver.
///
/// Owns the configuration, the deal strategy and the RNG that seeds every
/// trial. Each trial forks its own generator, so trials share no state.
#[derive(Clone, Debug)]
pub struct SolitaireSorter<S = VerbatimDeal> {
    config: SortConfig,
    strategy: S,
    rng: DeckRng,
}

impl SolitaireSorter<VerbatimDeal> {
    /// Create a sorter with the default strategy.
    #[must_use]
    pub fn new(config: SortConfig) -> Self {
        Self::with_strategy(config, VerbatimDeal)
    }
}

impl<S: DealStrategy> SolitaireSorter<S> {
    /// Create a sorter with a custom deal strategy.
    #[must_use]
    pub fn with_strategy(config: SortConfig, strategy: S) -> Self {
        let rng = DeckRng::new(config.seed);
        Self {
            config,
            strategy,
            rng,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Get the deal strategy.
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Run a single trial on `data`.
    ///
    /// Returns whether the result is ordered, together with the result stack
    /// (ordered or not). `data` itself is never modified.
    ///
    /// ## Errors
    ///
    /// - Any error raised while building the deck or by the strategy
    /// - `CardsNotConserved` if the strategy's result isn't a permutation of `data`
    pub fn try_sort(&mut self, data: &[Card]) -> Result<(bool, CardStack), SortError> {
        let mut trial_rng = self.rng.fork();
        self.run_trial(data, &mut trial_rng)
    }

    /// Rerun the trial that started from `state`.
    ///
    /// With the same data and strategy this returns the same result the
    /// original trial produced. The sorter's own RNG is not advanced.
    pub fn replay(
        &mut self,
        data: &[Card],
        state: &DeckRngState,
    ) -> Result<(bool, CardStack), SortError> {
        let mut trial_rng = DeckRng::from_state(state);
        self.run_trial(data, &mut trial_rng)
    }

    fn run_trial(
        &mut self,
        data: &[Card],
        trial_rng: &mut DeckRng,
    ) -> Result<(bool, CardStack), SortError> {
        let deck = CardStack::construct(data, data.len(), 0)?;

        let result = self.strategy.deal(deck, &self.config.rules, trial_rng)?;
        if !cards_conserved(data, result.as_slice()) {
            return Err(SortError::CardsNotConserved);
        }

        Ok((is_ordered(result.as_slice()), result))
    }

    /// Sort `data` in place, trying at most `max_retries` times.
    ///
    /// On `Failure`, and on error, `data` is unchanged.
    pub fn sort(&mut self, data: &mut [Card]) -> Result<SortReport, SortError> {
        let max_retries = self.config.max_retries;
        let mut trials = Vec::new();

        for attempt in 1..=max_retries {
            debug!("Trial {} of {} on {} cards", attempt, max_retries, data.len());
            let mut trial_rng = self.rng.fork();
            trials.push(trial_rng.state());
            let (ordered, mut result) = self.run_trial(data, &mut trial_rng)?;

            if ordered {
                data.copy_from_slice(result.as_slice());
                result.destruct();
                debug!("Trial {} produced an ordered result", attempt);
                return Ok(SortReport {
                    status: SortStatus::Success,
                    attempts: attempt,
                    trials,
                });
            }
            result.destruct();
        }

        warn!("No ordered result after {} trials", max_retries);
        Ok(SortReport {
            status: SortStatus::Failure,
            attempts: max_retries,
            trials,
        })
    }
}

/// Sort `data` in place with the default configuration and strategy.
///
/// ```
/// use solitaire_sort::core::Card;
/// use solitaire_sort::sort::{solitaire_sort, SortStatus};
///
/// let mut data = Card::cards_from_str("0011").unwrap();
/// assert_eq!(solitaire_sort(&mut data).unwrap(), SortStatus::Success);
/// ```
pub fn solitaire_sort(data: &mut [Card]) -> Result<SortStatus, SortError> {
    let mut sorter = SolitaireSorter::new(SortConfig::default());
    Ok(sorter.sort(data)?.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ScrambleDeal;
    use crate::core::Rules;

    fn cards(text: &str) -> Vec<Card> {
        Card::cards_from_str(text).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(SortStatus::Success.code(), 0);
        assert_eq!(SortStatus::Failure.code(), 1);
        assert!(SortStatus::Success.is_success());
        assert!(!SortStatus::Failure.is_success());
    }

    #[test]
    fn test_already_sorted_succeeds_first_try() {
        let mut data = cards("0123");
        let mut sorter = SolitaireSorter::new(SortConfig::default());

        let report = sorter.sort(&mut data).unwrap();

        assert_eq!(report.status, SortStatus::Success);
        assert_eq!(report.attempts, 1);
        assert_eq!(report.trials.len(), 1);
        assert_eq!(data, cards("0123"));
    }

    #[test]
    fn test_try_sort_leaves_input() {
        let data = cards("321");
        let mut sorter = SolitaireSorter::new(SortConfig::default());

        let (ordered, result) = sorter.try_sort(&data).unwrap();

        assert!(!ordered);
        assert_eq!(result.as_slice(), &data[..]);
    }

    #[test]
    fn test_zero_retries() {
        let mut data = cards("0123");
        let mut sorter = SolitaireSorter::new(SortConfig::default().with_max_retries(0));

        let report = sorter.sort(&mut data).unwrap();
        assert_eq!(
            report,
            SortReport { status: SortStatus::Failure, attempts: 0, trials: Vec::new() }
        );
    }

    #[test]
    fn test_empty_input() {
        let mut data: Vec<Card> = Vec::new();
        assert_eq!(solitaire_sort(&mut data).unwrap(), SortStatus::Success);
    }

    #[test]
    fn test_lossy_strategy_rejected() {
        let drop_top = |mut deck: CardStack, _: &Rules, _: &mut DeckRng| -> Result<CardStack, SortError> {
            deck.pop(1)?;
            Ok(deck)
        };
        let mut data = cards("21");
        let mut sorter = SolitaireSorter::with_strategy(SortConfig::default(), drop_top);

        assert_eq!(sorter.sort(&mut data), Err(SortError::CardsNotConserved));
        assert_eq!(data, cards("21"));
    }

    #[test]
    fn test_scramble_single_card_succeeds() {
        let mut data = cards("7");
        let mut sorter = SolitaireSorter::with_strategy(SortConfig::default(), ScrambleDeal);

        let report = sorter.sort(&mut data).unwrap();
        assert_eq!(report.status, SortStatus::Success);
        assert_eq!(report.attempts, 1);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let config = SortConfig::default().with_seed(11).with_max_retries(5);
        let mut first = cards("bca");
        let mut second = cards("bca");

        let a = SolitaireSorter::with_strategy(config.clone(), ScrambleDeal).sort(&mut first).unwrap();
        let b = SolitaireSorter::with_strategy(config, ScrambleDeal).sort(&mut second).unwrap();

        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_replay_reproduces_each_trial() {
        let config = SortConfig::default().with_seed(21);
        let data = cards("15253969704");
        let mut sorted = data.clone();

        let mut sorter = SolitaireSorter::with_strategy(config.clone(), ScrambleDeal);
        let report = sorter.sort(&mut sorted).unwrap();
        assert_eq!(report.trials.len(), report.attempts);

        // A fresh sorter with the same seed runs the same trials in order
        let mut fresh = SolitaireSorter::with_strategy(config, ScrambleDeal);
        for state in &report.trials {
            let expected = fresh.try_sort(&data).unwrap();
            let replayed = sorter.replay(&data, state).unwrap();
            assert_eq!(replayed, expected);
        }
    }

    #[test]
    fn test_replay_failed_trial() {
        let mut data = cards("321");
        let mut sorter = SolitaireSorter::new(SortConfig::default());

        let report = sorter.sort(&mut data).unwrap();
        assert_eq!(report.status, SortStatus::Failure);
        assert_eq!(report.trials.len(), 3);

        let (ordered, result) = sorter.replay(&data, &report.trials[2]).unwrap();
        assert!(!ordered);
        assert_eq!(result.as_slice(), &data[..]);
    }
}
