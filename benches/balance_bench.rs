use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use teamforge::config::Config;
use teamforge::optimizer::best_role_assignment;
use teamforge::optimizer::runner::Balancer;
use teamforge::player::Player;
use teamforge::rank::{Rank, Tier};
use teamforge::scorer::Scorer;

fn setup_roster() -> Vec<Player> {
    (0..10u64)
        .map(|i| {
            let tier = Tier::from_index((i % 8) as usize);
            let division = (i % 5) as u8 + 1;
            Player::new(
                i,
                format!("bench{}#{}", i, 1000 + i),
                Rank::new(tier, division, i == 3),
                Rank::new(Tier::from_index(((i + 2) % 8) as usize), 6 - division, false),
                Rank::new(Tier::from_index(((i + 5) % 8) as usize), division, i == 7),
            )
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let players = setup_roster();

    let mut config = Config::default();
    config.search.exhaustive = true;
    let balancer = Balancer::from_config(&config);

    c.bench_function("balance (126 splits, exhaustive)", |b| {
        b.iter(|| balancer.run(black_box(&players)))
    });

    let scorer = Scorer::from_config(&config);
    let table = scorer.placement_table(&players);
    c.bench_function("best_role_assignment (30 partitions)", |b| {
        b.iter(|| best_role_assignment(black_box(&[0, 2, 4, 6, 8]), &table, false))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
