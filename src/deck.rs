//! The 52-card dataset the demo pushes through a stack.

/// Suits in the order they are stacked.
pub const SUITS: [&str; 4] = ["Spades", "Hearts", "Diamonds", "Clubs"];

/// Ranks in the order they are stacked within a suit.
pub const RANKS: [&str; 13] = [
  "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();

/// Returns every card label, e.g. `"Queen of Hearts"`, in stacking order.
pub fn labels() -> Vec<String> {
  SUITS.iter()
    .flat_map(|suit| RANKS.iter().map(move |rank| format!("{} of {}", rank, suit)))
    .collect()
}
