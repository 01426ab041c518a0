//! Weighted sampling of impostor indices.

use rand::Rng;

use crate::RoleVector;

/// Draw weight of player 0. Every other player weighs `1.0`.
pub const FIRST_PLAYER_WEIGHT: f64 = 0.75;

/// Assigns roles for one round.
///
/// Stateless: every call is an independent draw. Callers validate the
/// counts first (`players >= 3`, `1 <= impostors < players`); asking for
/// more impostors than players simply makes everyone an impostor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAssigner;

impl RoleAssigner {
    /// Draws `impostors` distinct players with the thread RNG.
    pub fn assign(players: usize, impostors: usize) -> RoleVector {
        Self::assign_with(&mut rand::rng(), players, impostors)
    }

    /// Draws `impostors` distinct players with `rng`.
    ///
    /// Each draw is an inverse-CDF walk over the current weights: pick
    /// `r` in `[0, total)`, subtract weights in index order, and take the
    /// first index that brings `r` to zero or below. The chosen player's
    /// weight then drops to zero so they can't be picked again.
    pub fn assign_with<R: Rng>(rng: &mut R, players: usize, impostors: usize) -> RoleVector {
        let mut weights: Vec<f64> = (0..players)
            .map(|i| if i == 0 { FIRST_PLAYER_WEIGHT } else { 1.0 })
            .collect();
        let mut flags = vec![false; players];

        for _ in 0..impostors {
            let total: f64 = weights.iter().sum();
            if total <= 0.0 {
                break;
            }
            let r = rng.random_range(0.0..total);
            let Some(pick) = walk(&weights, r) else {
                break;
            };
            flags[pick] = true;
            weights[pick] = 0.0;
        }

        let roles = RoleVector::from(flags);
        tracing::debug!(
            players,
            impostors = roles.impostor_count(),
            "roles assigned"
        );
        roles
    }
}

/// Index selected by `r`, skipping players already picked.
///
/// Falls back to the first live index when rounding leaves `r` just above
/// zero after the last weight.
fn walk(weights: &[f64], mut r: f64) -> Option<usize> {
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        r -= w;
        if r <= 0.0 {
            return Some(i);
        }
    }
    weights.iter().position(|&w| w > 0.0)
}
