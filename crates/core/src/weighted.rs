use crate::RngState;

/// Draw one candidate with probability proportional to its weight.
///
/// Empty candidate list yields `None`. A zero (or non-positive) total weight
/// falls back to the first candidate so a degenerate pool never errors.
/// Negative individual weights are treated as zero.
pub fn pick_weighted<'a, T>(
    candidates: &'a [T],
    weights: &[f64],
    rng: &mut RngState,
) -> Option<&'a T> {
    pick_weighted_index(candidates.len(), weights, rng).map(|idx| &candidates[idx])
}

/// Index-returning variant for callers that remove the picked element.
pub fn pick_weighted_index(len: usize, weights: &[f64], rng: &mut RngState) -> Option<usize> {
    if len == 0 {
        return None;
    }
    debug_assert_eq!(len, weights.len());
    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if total <= 0.0 {
        return Some(0);
    }
    let mut roll = rng.next_f64() * total;
    for (idx, weight) in weights.iter().enumerate() {
        let weight = weight.max(0.0);
        if roll < weight {
            return Some(idx);
        }
        roll -= weight;
    }
    // Float underflow on the last subtraction lands here.
    Some(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = RngState::from_seed(1);
        let picked: Option<&i32> = pick_weighted(&[], &[], &mut rng);
        assert!(picked.is_none());
    }

    #[test]
    fn zero_total_weight_falls_back_to_first() {
        let mut rng = RngState::from_seed(1);
        for _ in 0..32 {
            let picked = pick_weighted(&["a", "b", "c"], &[0.0, 0.0, 0.0], &mut rng);
            assert_eq!(picked, Some(&"a"));
        }
    }

    #[test]
    fn zero_weight_candidate_never_drawn() {
        let mut rng = RngState::from_seed(9);
        for _ in 0..1000 {
            let picked = pick_weighted(&["a", "b"], &[0.0, 1.0], &mut rng);
            assert_eq!(picked, Some(&"b"));
        }
    }

    #[test]
    fn identical_seed_gives_identical_picks() {
        let candidates = ["a", "b", "c", "d"];
        let weights = [1.0, 2.0, 3.0, 4.0];
        let mut first = RngState::from_seed(77);
        let mut second = RngState::from_seed(77);
        for _ in 0..200 {
            assert_eq!(
                pick_weighted(&candidates, &weights, &mut first),
                pick_weighted(&candidates, &weights, &mut second)
            );
        }
    }
}
