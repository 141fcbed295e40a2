criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        resolving_every_pair,
        sampling_random_move,
        simulating_autoplay_session,
}

fn resolving_every_pair(c: &mut criterion::Criterion) {
    c.bench_function("resolve all 9 Move pairs", |b| {
        b.iter(|| {
            Move::all()
                .into_iter()
                .flat_map(|u| Move::all().into_iter().map(move |o| Outcome::resolve(u, o)))
                .filter(|o| *o == Outcome::Win)
                .count()
        })
    });
}

fn sampling_random_move(c: &mut criterion::Criterion) {
    let ref mut robot = Robot::seeded(0);
    c.bench_function("sample a Robot Move", |b| b.iter(|| robot.choose()));
}

fn simulating_autoplay_session(c: &mut criterion::Criterion) {
    c.bench_function("simulate a 10k round autoplay Session", |b| {
        b.iter(|| {
            Simulator::new(
                Session::new(10_000, true),
                Box::new(Robot::seeded(1)),
                Box::new(Robot::seeded(2)),
                Verbosity::Quiet,
            )
            .simulate_session()
            .wins()
        })
    });
}

use roshambo::moves::Move;
use roshambo::outcome::Outcome;
use roshambo::players::Player;
use roshambo::players::Robot;
use roshambo::session::Session;
use roshambo::simulator::Simulator;
use roshambo::simulator::Verbosity;
