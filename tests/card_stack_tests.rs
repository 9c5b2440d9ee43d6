//! CardStack integration tests.
//!
//! These tests verify the stack lifecycle (construct, push, pop, destruct)
//! and the transfer primitive, including property tests over random inputs.

use proptest::prelude::*;

use solitaire_sort::core::{Card, StackError};
use solitaire_sort::stack::{transfer, CardStack};

fn cards(text: &str) -> Vec<Card> {
    Card::cards_from_str(text).unwrap()
}

fn card_vec(max_len: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(any::<u8>().prop_map(Card), 0..max_len)
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Constructing then destructing returns to the zero state.
#[test]
fn test_construct_destruct_round_trip() {
    let mut stack = CardStack::construct(&cards("abc"), 3, 2).unwrap();
    assert!(stack.is_allocated());

    stack.destruct();

    assert_eq!(stack, CardStack::default());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.visible(), 0);
    assert!(!stack.is_allocated());
}

/// A destructed stack can be reused as an empty stack.
#[test]
fn test_destructed_stack_is_reusable() {
    let mut stack = CardStack::from_cards(&cards("abc")).unwrap();
    stack.destruct();

    stack.push(&cards("xy"), 0, 2).unwrap();
    assert_eq!(stack.as_slice(), &cards("xy")[..]);
}

/// Each push reallocates to exactly the live size.
#[test]
fn test_push_allocates_exactly() {
    let mut stack = CardStack::new();
    let src = cards("abcdef");

    for (i, _) in src.iter().enumerate() {
        stack.push(&src, i, 1).unwrap();
        assert_eq!(stack.buffered_len(), i + 1);
    }
    assert_eq!(stack.as_slice(), &src[..]);
}

/// Popped cards never resurface through the live view.
#[test]
fn test_pop_then_push_hides_tail() {
    let mut stack = CardStack::from_cards(&cards("abcdef")).unwrap();

    stack.pop(4).unwrap();
    assert_eq!(stack.buffered_len(), 6);

    stack.push(&cards("z"), 0, 1).unwrap();
    assert_eq!(stack.as_slice(), &cards("abz")[..]);
    assert!(!stack.as_slice().contains(&Card(b'c')));
}

/// Contract violations are reported, not undefined.
#[test]
fn test_contract_violations() {
    let mut stack = CardStack::from_cards(&cards("ab")).unwrap();
    let mut other = CardStack::new();

    assert_eq!(
        CardStack::construct(&cards("ab"), 2, 3).unwrap_err(),
        StackError::VisibleExceedsCount { visible: 3, count: 2 }
    );
    assert_eq!(stack.pop(5).unwrap_err(), StackError::PopUnderflow { count: 5, len: 2 });
    assert_eq!(
        transfer(1, 2, &mut stack, &mut other).unwrap_err(),
        StackError::RangeOutOfBounds { start: 1, count: 2, len: 2 }
    );

    assert_eq!(stack.as_slice(), &cards("ab")[..]);
    assert!(other.is_empty());
}

// =============================================================================
// Transfer
// =============================================================================

/// Cards can travel through a chain of stacks and come back.
#[test]
fn test_transfer_chain() {
    let mut deck = CardStack::from_cards(&cards("abcdef")).unwrap();
    let mut hand = CardStack::new();
    let mut pile = CardStack::new();

    transfer(3, 3, &mut deck, &mut hand).unwrap();
    transfer(1, 2, &mut hand, &mut pile).unwrap();
    transfer(0, 2, &mut pile, &mut deck).unwrap();
    transfer(0, 1, &mut hand, &mut deck).unwrap();

    assert_eq!(deck.as_slice(), &cards("abcefd")[..]);
    assert!(hand.is_empty());
    assert!(pile.is_empty());
}

/// Zero-card transfers are allowed and change nothing visible.
#[test]
fn test_empty_transfer() {
    let mut source = CardStack::from_cards(&cards("ab")).unwrap();
    let mut destination = CardStack::new();

    transfer(2, 0, &mut source, &mut destination).unwrap();

    assert_eq!(source.len(), 2);
    assert!(destination.is_empty());
}

proptest! {
    /// Pushing keeps the existing cards as a prefix.
    #[test]
    fn prop_push_preserves_prefix(
        existing in card_vec(32),
        src in card_vec(32),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let (start, count) = if src.is_empty() {
            (0, 0)
        } else {
            let start = a % src.len();
            (start, b % (src.len() - start + 1))
        };
        let mut stack = CardStack::from_cards(&existing).unwrap();

        stack.push(&src, start, count).unwrap();

        prop_assert_eq!(stack.len(), existing.len() + count);
        prop_assert_eq!(&stack.as_slice()[..existing.len()], &existing[..]);
        prop_assert_eq!(&stack.as_slice()[existing.len()..], &src[start..start + count]);
    }

    /// Pop shrinks the live count by exactly `k` and keeps the buffer.
    #[test]
    fn prop_pop_truncates_logically(src in card_vec(32), k in any::<usize>()) {
        let k = k % (src.len() + 1);
        let mut stack = CardStack::from_cards(&src).unwrap();

        stack.pop(k).unwrap();

        prop_assert_eq!(stack.len(), src.len() - k);
        prop_assert_eq!(stack.buffered_len(), src.len());
        prop_assert_eq!(stack.as_slice(), &src[..src.len() - k]);
    }

    /// Transfer moves counts and values from source to destination.
    #[test]
    fn prop_transfer_conservation(
        src in card_vec(32),
        dst in card_vec(16),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let (start, count) = if src.is_empty() {
            (0, 0)
        } else {
            let start = a % src.len();
            (start, b % (src.len() - start + 1))
        };
        let mut source = CardStack::from_cards(&src).unwrap();
        let mut destination = CardStack::from_cards(&dst).unwrap();

        transfer(start, count, &mut source, &mut destination).unwrap();

        prop_assert_eq!(source.len(), src.len() - count);
        prop_assert_eq!(destination.len(), dst.len() + count);
        prop_assert_eq!(&destination.as_slice()[dst.len()..], &src[start..start + count]);
    }
}
