//! Rock, paper, scissors simulator.
//!
//! Options: --count, --autoplay, --verbose, --seed, --attempts

use clap::Parser;
use roshambo::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log(args.verbose)?;
    let ref mut simulator = args.simulator();
    log::debug!(
        "using verbose logging, {} rounds, autoplay {}",
        simulator.session().count(),
        simulator.session().autoplay()
    );
    println!("{}", simulator.simulate_session());
    Ok(())
}
