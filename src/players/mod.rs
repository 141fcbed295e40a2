//! Sources of moves for either side of the table.
//!
//! [`Robot`] samples uniformly and never runs dry. [`Reader`] and [`Human`]
//! prompt for a number until they get a valid one, and yield `None` once
//! input is closed or the optional attempt cap is spent.
#[cfg(feature = "cli")]
pub mod human;
pub mod reader;
pub mod robot;

#[cfg(feature = "cli")]
pub use human::Human;
pub use reader::Reader;
pub use robot::Robot;

use crate::moves::Move;
use std::fmt::Debug;
use std::num::NonZeroUsize;

pub trait Player: Debug {
    /// Next move, or `None` if this player has no more moves to give.
    fn choose(&mut self) -> Option<Move>;
}

/// Shared retry loop for prompting players.
///
/// `ask` yields one raw answer per call, `Ok(None)` at end of input.
/// Invalid answers are reported and asked again until `attempts`
/// consecutive failures, if a cap is set.
pub(crate) fn retry<F>(attempts: Option<NonZeroUsize>, mut ask: F) -> Option<Move>
where
    F: FnMut() -> anyhow::Result<Option<String>>,
{
    let mut failures = 0usize;
    loop {
        let raw = match ask() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::warn!("input closed before a move was chosen");
                return None;
            }
            Err(e) => {
                log::error!("failed to read selection: {}", e);
                return None;
            }
        };
        match Move::try_from(raw.as_str()) {
            Ok(choice) => return Some(choice),
            Err(reason) => {
                log::debug!("{}", reason);
                log::warn!(
                    "Your selection ({}) was invalid. Please enter an integer (1, 2, or 3).",
                    raw
                );
                failures += 1;
            }
        }
        if attempts.is_some_and(|cap| failures >= cap.get()) {
            log::warn!("giving up after {} invalid selections", failures);
            return None;
        }
    }
}
