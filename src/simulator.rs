use crate::moves::Move;
use crate::outcome::Outcome;
use crate::players::Player;
use crate::session::Session;

/// Whether each round is narrated as it is played.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        match verbose {
            true => Self::Verbose,
            false => Self::Quiet,
        }
    }
}

/// One exchange of moves and its outcome for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub user: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}

impl From<(Move, Move)> for Round {
    fn from((user, opponent): (Move, Move)) -> Self {
        Self {
            user,
            opponent,
            outcome: Outcome::resolve(user, opponent),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "You selected {}. The bot selected {}. {}",
            self.user, self.opponent, self.outcome
        )
    }
}

/// Plays a user against an opponent and keeps the tally.
#[derive(Debug)]
pub struct Simulator {
    session: Session,
    user: Box<dyn Player>,
    opponent: Box<dyn Player>,
    verbosity: Verbosity,
}

impl Simulator {
    pub fn new(
        session: Session,
        user: Box<dyn Player>,
        opponent: Box<dyn Player>,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            session,
            user,
            opponent,
            verbosity,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Play and record one round. `None` if the user had no move to give,
    /// in which case nothing is recorded.
    pub fn simulate_round(&mut self) -> Option<Round> {
        let user = self.user.choose()?;
        let opponent = self.opponent.choose()?;
        let round = Round::from((user, opponent));
        self.session.record(round.outcome);
        if self.verbosity == Verbosity::Verbose {
            log::info!("{}", round);
        }
        Some(round)
    }

    /// Play until the configured count is reached or the user stops answering.
    pub fn simulate_session(&mut self) -> &Session {
        while !self.session.finished() {
            if self.simulate_round().is_none() {
                log::warn!(
                    "session stopped after {} of {} rounds",
                    self.session.played(),
                    self.session.count()
                );
                break;
            }
        }
        &self.session
    }
}
