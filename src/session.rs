use crate::Probability;
use crate::Tally;
use crate::outcome::Outcome;

/// Configuration and running tallies of one process invocation.
///
/// Counters only move through [`Session::record`], so
/// `wins + losses + draws` is always the number of rounds played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    count: usize,
    autoplay: bool,
    wins: Tally,
    losses: Tally,
    draws: Tally,
}

impl Session {
    pub fn new(count: usize, autoplay: bool) -> Self {
        Self {
            count,
            autoplay,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }
    pub fn wins(&self) -> Tally {
        self.wins
    }
    pub fn losses(&self) -> Tally {
        self.losses
    }
    pub fn draws(&self) -> Tally {
        self.draws
    }

    pub fn played(&self) -> usize {
        self.wins + self.losses + self.draws
    }
    pub fn finished(&self) -> bool {
        self.played() >= self.count
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Wins over rounds actually played. Zero when nothing was played.
    pub fn win_rate(&self) -> Probability {
        match self.played() {
            0 => 0.,
            n => self.wins as Probability / n as Probability,
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Results")?;
        writeln!(f)?;
        writeln!(f, "Games Played: {}", self.played())?;
        writeln!(f, "Wins: {}", self.wins)?;
        writeln!(f, "Losses: {}", self.losses)?;
        writeln!(f, "Draws: {}", self.draws)?;
        write!(f, "Win Percentage {:.2}%", self.win_rate() * 100.)
    }
}
