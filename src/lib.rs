//! Rock, paper, scissors against a uniformly random opponent.
//!
//! A [`simulator::Simulator`] owns the [`session::Session`] tallies and two
//! [`players::Player`]s. Every round asks both players for a [`moves::Move`],
//! resolves the pair into an [`outcome::Outcome`], and records it.
#[cfg(feature = "cli")]
pub mod cli;
pub mod moves;
pub mod outcome;
pub mod players;
pub mod session;
pub mod simulator;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, loss, and draw tallies.
pub type Tally = usize;
/// Win rate in [0, 1].
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and autoplay.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Rounds played when `--count` is not given.
pub const DEFAULT_COUNT: usize = 1;
/// Header of the interactive prompt, followed by the numbered moves.
pub const PROMPT: &str = "Choose your move (enter the number)!";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. Warnings and errors go to stderr.
/// Verbose runs lower the filter to DEBUG.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
