use crate::moves::Move;
use colored::*;

/// Result of one round from the user's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn resolve(user: Move, opponent: Move) -> Self {
        match (user == opponent, user.beats(&opponent)) {
            (true, _) => Self::Draw,
            (false, true) => Self::Win,
            (false, false) => Self::Loss,
        }
    }

    /// Same round seen from the opponent's side.
    pub fn inverse(&self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((user, opponent): (Move, Move)) -> Self {
        Self::resolve(user, opponent)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "{}", "You win!".green()),
            Outcome::Loss => write!(f, "{}", "You lose.".red()),
            Outcome::Draw => write!(f, "{}", "It's a draw!".yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples() {
        assert!(Outcome::resolve(Move::Rock, Move::Scissors) == Outcome::Win);
        assert!(Outcome::resolve(Move::Rock, Move::Paper) == Outcome::Loss);
        assert!(Outcome::resolve(Move::Scissors, Move::Scissors) == Outcome::Draw);
        assert!(Outcome::resolve(Move::Paper, Move::Rock) == Outcome::Win);
        assert!(Outcome::resolve(Move::Scissors, Move::Paper) == Outcome::Win);
    }

    #[test]
    fn mirrors_draw() {
        for m in Move::all() {
            assert!(Outcome::resolve(m, m) == Outcome::Draw);
        }
    }

    #[test]
    fn antisymmetric() {
        for a in Move::all() {
            for b in Move::all().into_iter().filter(|b| *b != a) {
                let forward = Outcome::from((a, b));
                let reverse = Outcome::from((b, a));
                assert!(forward != Outcome::Draw);
                assert!(forward == reverse.inverse());
            }
        }
    }

    #[test]
    fn every_move_wins_exactly_once() {
        for a in Move::all() {
            let wins = Move::all()
                .into_iter()
                .filter(|b| Outcome::resolve(a, *b) == Outcome::Win)
                .count();
            assert!(wins == 1);
        }
    }
}
