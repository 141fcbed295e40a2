use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// One of the three hand shapes. Discriminants are the prompt numbers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 1,
    Paper = 2,
    Scissors = 3,
}

impl Move {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }

    /// The move this one defeats. Rock > Scissors > Paper > Rock.
    pub const fn prey(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    pub fn beats(&self, other: &Self) -> bool {
        self.prey() == *other
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }

    /// Numbered menu shown by the interactive prompt.
    pub fn menu() -> String {
        Self::all()
            .iter()
            .map(|m| format!("{}. {}", u8::from(*m), m))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

impl TryFrom<u8> for Move {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Rock),
            2 => Ok(Self::Paper),
            3 => Ok(Self::Scissors),
            _ => Err(format!("no move numbered {}", n)),
        }
    }
}

/// Parses the prompt answer: an integer in 1..=3, surrounding whitespace ignored.
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("{} is not an integer: {}", s.trim(), e))
            .and_then(|n| u8::try_from(n).map_err(|_| format!("no move numbered {}", n)))
            .and_then(|n| Self::try_from(n))
    }
}

impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        match rng.random_range(0..3) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}

impl crate::Arbitrary for Move {
    fn random() -> Self {
        rand::rng().random()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
