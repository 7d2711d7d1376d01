use criterion::{black_box, criterion_group, criterion_main, Criterion};
use racket_score::core::{ScoreRng, Settings, Side};
use racket_score::rally::{RallyMatch, RallyMatchEngine, RallyScoreState};
use racket_score::rules::ScoringEngine;
use racket_score::session::{MatchSetup, Sport};
use racket_score::sim::{MatchSimulator, SimConfig};
use racket_score::tennis::{TennisEngine, TennisScoreState};

fn random_points(seed: u64, n: usize) -> Vec<Side> {
    let mut rng = ScoreRng::new(seed);
    (0..n).map(|_| rng.rally_winner(Side::One, 0.5)).collect()
}

fn bench_tennis_points(c: &mut Criterion) {
    let engine = TennisEngine::default();
    let start = TennisScoreState::new(Side::One);
    let points = random_points(1, 400);

    c.bench_function("tennis_replay_400", |b| {
        b.iter(|| engine.replay(black_box(&start), points.iter().copied()))
    });
}

fn bench_rally_points(c: &mut Criterion) {
    let engine = RallyMatchEngine::badminton(false);
    let start = RallyMatch::new(RallyScoreState::new(Side::One));
    let points = random_points(2, 200);

    c.bench_function("badminton_replay_200", |b| {
        b.iter(|| engine.replay(black_box(&start), points.iter().copied()))
    });
}

fn bench_table_tennis_points(c: &mut Criterion) {
    let engine = RallyMatchEngine::table_tennis(&Settings::default(), false);
    let start = RallyMatch::new(RallyScoreState::new(Side::One));
    let points = random_points(3, 200);

    c.bench_function("table_tennis_replay_200", |b| {
        b.iter(|| engine.replay(black_box(&start), points.iter().copied()))
    });
}

fn bench_simulated_session(c: &mut Criterion) {
    let settings = Settings::default();

    c.bench_function("simulate_tennis_session", |b| {
        let mut sim = MatchSimulator::new(SimConfig::new().with_seed(4));
        b.iter(|| {
            sim.simulate(MatchSetup::singles(Sport::Tennis, "A", "B"), black_box(&settings))
        })
    });

    c.bench_function("simulate_pickleball_session", |b| {
        let mut sim = MatchSimulator::new(SimConfig::new().with_seed(5));
        b.iter(|| {
            sim.simulate(MatchSetup::singles(Sport::Pickleball, "A", "B"), black_box(&settings))
        })
    });
}

criterion_group!(
    benches,
    bench_tennis_points,
    bench_rally_points,
    bench_table_tennis_points,
    bench_simulated_session
);
criterion_main!(benches);
