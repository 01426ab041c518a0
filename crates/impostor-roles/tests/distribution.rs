//! Statistical checks on the impostor draw.
//!
//! Seeded so the counts are reproducible; the margins are wide enough that
//! any reasonable seed passes.

use impostor_roles::{FIRST_PLAYER_WEIGHT, Role, RoleAssigner};
use rand::SeedableRng;
use rand::rngs::StdRng;

const DRAWS: usize = 10_000;

fn impostor_counts(players: usize, impostors: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = vec![0; players];
    for _ in 0..DRAWS {
        let roles = RoleAssigner::assign_with(&mut rng, players, impostors);
        for i in roles.impostor_indices() {
            counts[i] += 1;
        }
    }
    counts
}

#[test]
fn test_first_player_chosen_less_than_every_other() {
    let counts = impostor_counts(6, 1, 2024);

    for (i, &count) in counts.iter().enumerate().skip(1) {
        assert!(
            counts[0] < count,
            "player 0 picked {} times, player {i} only {count}",
            counts[0]
        );
    }
}

#[test]
fn test_first_player_share_matches_weight() {
    // Expected share of player 0 with one impostor among six:
    // 0.75 / (0.75 + 5.0) ≈ 0.1304.
    let counts = impostor_counts(6, 1, 7);
    let share = counts[0] as f64 / DRAWS as f64;
    let expected = FIRST_PLAYER_WEIGHT / (FIRST_PLAYER_WEIGHT + 5.0);

    assert!(
        (share - expected).abs() < 0.02,
        "share {share:.4}, expected about {expected:.4}"
    );
}

#[test]
fn test_every_player_can_be_impostor() {
    let counts = impostor_counts(10, 2, 99);
    assert!(counts.iter().all(|&c| c > 0));
    assert_eq!(counts.iter().sum::<usize>(), DRAWS * 2);
}

#[test]
fn test_thread_rng_assign_keeps_count() {
    for _ in 0..200 {
        let roles = RoleAssigner::assign(6, 2);
        assert_eq!(roles.len(), 6);
        assert_eq!(roles.iter().filter(|&r| r == Role::Impostor).count(), 2);
    }
}
