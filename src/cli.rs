use crate::DEFAULT_COUNT;
use crate::players::Human;
use crate::players::Player;
use crate::players::Reader;
use crate::players::Robot;
use crate::session::Session;
use crate::simulator::Simulator;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::IsTerminal;
use std::num::NonZeroUsize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = DEFAULT_COUNT, help = "Number of games to simulate")]
    pub count: usize,
    #[arg(long, help = "Allows user to simulate without input")]
    pub autoplay: bool,
    #[arg(long, help = "Print out more info about each game as they are simulated")]
    pub verbose: bool,
    #[arg(long, help = "Seed the random moves for a reproducible run")]
    pub seed: Option<u64>,
    #[arg(long, help = "Stop after this many invalid selections in a row")]
    pub attempts: Option<NonZeroUsize>,
}

impl Args {
    /// Wire players and session from the command line.
    /// Interactive runs read from the terminal, or line by line when stdin is piped.
    pub fn simulator(&self) -> Simulator {
        let ref mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let user = self.user(rng, std::io::stdin().is_terminal());
        let opponent = Box::new(Robot::from(&mut *rng));
        Simulator::new(
            Session::new(self.count, self.autoplay),
            user,
            opponent,
            self.verbose.into(),
        )
    }

    /// User side: a robot under autoplay, otherwise a prompt suited to stdin.
    fn user(&self, rng: &mut SmallRng, terminal: bool) -> Box<dyn Player> {
        match (self.autoplay, terminal) {
            (true, _) => Box::new(Robot::from(rng)),
            (false, true) => Box::new(Human::new(self.attempts)),
            (false, false) => Box::new(Reader::new(
                std::io::stdin().lock(),
                std::io::stdout(),
                self.attempts,
            )),
        }
    }
}
