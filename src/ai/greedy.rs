use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;
use web_time::SystemTime;

use super::{MoveSelector, ScoringMode};
use crate::board::Board;
use crate::types::{Coord, Player};

/// Maximizes immediate flips and breaks ties uniformly at random.
#[derive(Debug, Clone)]
pub struct GreedySelector {
    scoring: ScoringMode,
    rng: ChaCha8Rng,
}

impl GreedySelector {
    /// Reproducible selector; the same seed replays the same tie-breaks.
    pub fn seeded(scoring: ScoringMode, seed: u64) -> Self {
        Self {
            scoring,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeds from the wall clock.
    pub fn from_clock(scoring: ScoringMode) -> Self {
        let seed = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(scoring, seed)
    }

    /// Moves that tie for the best score, in the order given.
    pub fn candidates(&self, board: &Board, player: Player, moves: &[Coord]) -> Vec<Coord> {
        let scored = moves
            .iter()
            .map(|&mv| (mv, board.count_flips_if_place(mv.x, mv.y, player).0));
        match self.scoring {
            ScoringMode::ArgMax => arg_max(scored),
            ScoringMode::Legacy => legacy_best(scored),
        }
    }
}

impl MoveSelector for GreedySelector {
    fn select_move(&mut self, board: &Board, player: Player, moves: &[Coord]) -> Option<Coord> {
        let best = self.candidates(board, player, moves);
        if best.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..best.len());
        trace!(candidates = best.len(), pick, "greedy tie-break");
        best.get(pick).copied()
    }
}

fn arg_max(scored: impl Iterator<Item = (Coord, usize)>) -> Vec<Coord> {
    let mut best_flips = 0usize;
    let mut best = Vec::new();
    for (mv, flips) in scored {
        if flips > best_flips {
            best_flips = flips;
            best.clear();
            best.push(mv);
        } else if flips == best_flips && flips > 0 {
            best.push(mv);
        }
    }
    best
}

// Running best starts below any score and is pinned to 1 on each new
// maximum, so later moves flipping more than one disc keep replacing the set.
fn legacy_best(scored: impl Iterator<Item = (Coord, usize)>) -> Vec<Coord> {
    let mut best_flips: i64 = -1;
    let mut best = Vec::new();
    for (mv, flips) in scored {
        let flips = flips as i64;
        if flips > best_flips {
            best_flips = 1;
            best.clear();
            best.push(mv);
        } else if flips == best_flips {
            best.push(mv);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(counts: &[usize]) -> Vec<(Coord, usize)> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| (Coord::new(i as i32, 0), n))
            .collect()
    }

    #[test]
    fn arg_max_keeps_every_tied_maximum() {
        let best = arg_max(scored(&[1, 3, 2, 3]).into_iter());
        assert_eq!(best, vec![Coord::new(1, 0), Coord::new(3, 0)]);
    }

    #[test]
    fn legacy_pins_best_to_one() {
        // 3 wins first, then 1 ties the pinned best, then 2 replaces both.
        let best = legacy_best(scored(&[3, 1, 2]).into_iter());
        assert_eq!(best, vec![Coord::new(2, 0)]);

        let best = legacy_best(scored(&[3, 1, 1]).into_iter());
        assert_eq!(
            best,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn modes_agree_when_all_moves_flip_one() {
        let input = scored(&[1, 1, 1, 1]);
        assert_eq!(
            arg_max(input.clone().into_iter()),
            legacy_best(input.into_iter())
        );
    }

    #[test]
    fn seeded_selector_is_reproducible() {
        let board = Board::new(8);
        let moves = vec![
            Coord::new(3, 2),
            Coord::new(2, 3),
            Coord::new(5, 4),
            Coord::new(4, 5),
        ];

        let picks = |seed| {
            let mut selector = GreedySelector::seeded(ScoringMode::ArgMax, seed);
            (0..8)
                .map(|_| selector.select_move(&board, Player::Black, &moves))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(7), picks(7));
        assert!(picks(7).iter().all(|mv| mv.is_some_and(|m| moves.contains(&m))));
    }

    #[test]
    fn empty_move_list_selects_nothing() {
        let mut selector = GreedySelector::seeded(ScoringMode::Legacy, 1);
        assert_eq!(selector.select_move(&Board::new(8), Player::Black, &[]), None);
    }
}
