//! Card stacks and the transfer primitive.
//!
//! Every pile on a board is a [`CardStack`]. The only way cards cross
//! between stacks is [`transfer`] (push onto the destination, then pop from
//! the source).

mod card_stack;

pub use card_stack::{transfer, CardStack};
