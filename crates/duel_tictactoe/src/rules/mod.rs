//! Whole-board rules, independent of the incremental counters.

mod win;

pub use win::scan_winner;
