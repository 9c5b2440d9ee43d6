//! Deal strategies.
//!
//! A strategy takes a trial's deck and produces that trial's result stack.
//! The driver checks the result and decides whether the trial succeeded.
//!
//! No strategy here sorts anything:
//!
//! - [`VerbatimDeal`] hands the deck back unchanged.
//! - [`ScrambleDeal`] shuffles the deck and plays it across the board.
//!
//! Any closure with the right signature is also a strategy.

use log::trace;

use crate::core::{DeckRng, Pile, Rules, SortError};
use crate::stack::CardStack;

use super::Board;

/// Turns a deck into a result stack.
///
/// Implementations own the deck and must return a stack holding the same
/// cards (the driver rejects anything else). They may use `rng` freely; each
/// trial gets its own.
pub trait DealStrategy {
    /// Play one trial.
    fn deal(
        &mut self,
        deck: CardStack,
        rules: &Rules,
        rng: &mut DeckRng,
    ) -> Result<CardStack, SortError>;
}

impl<F> DealStrategy for F
where
    F: FnMut(CardStack, &Rules, &mut DeckRng) -> Result<CardStack, SortError>,
{
    fn deal(
        &mut self,
        deck: CardStack,
        rules: &Rules,
        rng: &mut DeckRng,
    ) -> Result<CardStack, SortError> {
        self(deck, rules, rng)
    }
}

/// Returns a copy of the deck in its original order.
#[derive(Clone, Copy, Debug, Default)]
pub struct VerbatimDeal;

impl DealStrategy for VerbatimDeal {
    fn deal(
        &mut self,
        deck: CardStack,
        _rules: &Rules,
        _rng: &mut DeckRng,
    ) -> Result<CardStack, SortError> {
        Ok(CardStack::from_cards(deck.as_slice())?)
    }
}

/// Shuffles the deck, then plays it through the hand onto the field and
/// gathers the field onto the first ordered pile.
///
/// The deck is drawn into the hand `hand_size_max` cards at a time. Hand
/// cards go one at a time, top first, onto the field piles in rotation.
/// With no hand or no field piles the corresponding step is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrambleDeal;

impl DealStrategy for ScrambleDeal {
    fn deal(
        &mut self,
        mut deck: CardStack,
        rules: &Rules,
        rng: &mut DeckRng,
    ) -> Result<CardStack, SortError> {
        deck.shuffle(rng);
        let mut board = Board::new(deck, rules);
        let target = Pile::Ordered(0);
        board.pile(target)?;

        if rules.field_piles == 0 {
            let len = board.deck().len();
            board.move_cards(Pile::Deck, target, 0, len)?;
            return board.into_result();
        }

        let mut next_field = 0;
        while !board.deck().is_empty() {
            let deck_len = board.deck().len();
            if rules.hand_size_max == 0 {
                board.move_cards(Pile::Deck, Pile::Field(next_field), deck_len - 1, 1)?;
                next_field = (next_field + 1) % rules.field_piles;
                continue;
            }

            let draw = rules.hand_size_max.min(deck_len);
            board.move_cards(Pile::Deck, Pile::Hand, deck_len - draw, draw)?;
            while !board.hand().is_empty() {
                let top = board.hand().len() - 1;
                board.move_cards(Pile::Hand, Pile::Field(next_field), top, 1)?;
                next_field = (next_field + 1) % rules.field_piles;
            }
        }

        for i in 0..rules.field_piles {
            let len = board.pile(Pile::Field(i))?.len();
            if len > 0 {
                board.move_cards(Pile::Field(i), target, 0, len)?;
            }
        }

        trace!("Scrambled {} cards across {} field piles", board.total_cards(), rules.field_piles);
        board.into_result()
    }
}
