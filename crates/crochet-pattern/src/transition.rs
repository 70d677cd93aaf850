//! Row transitions - the stitch actions that turn one row count into the next.

use std::ops::RangeInclusive;

use crate::error::RowError;
use crate::stitch::{DecreaseStyle, StitchAction};

/// Counts reachable from a row of `previous` stitches in a single row.
///
/// At most every stitch can be increased (`2P`) and at most every pair can
/// be decreased (`ceil(P/2)`).
pub fn feasible_range(previous: u32) -> RangeInclusive<u32> {
    previous.div_ceil(2)..=previous.saturating_mul(2)
}

/// Plan the actions that work `previous` stitches into `target` stitches.
///
/// Increases are placed at previous-stitch indices `floor(k * P / delta)`.
/// Decreases are placed the same way over the `floor(P / 2)` consecutive
/// pairs of the previous row. Every previous stitch is worked exactly once,
/// so `consumed(actions) == previous` and `emitted(actions) == target`.
///
/// # Errors
///
/// - `OverIncrease` if `target > 2 * previous`
/// - `OverDecrease` if `2 * (previous - target) > previous`
/// - `DegenerateRow` if either count is zero
pub fn plan_transition(
    previous: u32,
    target: u32,
    style: DecreaseStyle,
) -> Result<Vec<StitchAction>, RowError> {
    if previous == 0 {
        return Err(RowError::DegenerateRow { count: 0 });
    }
    if target == 0 {
        return Err(RowError::DegenerateRow { count: 0 });
    }

    if target >= previous {
        plan_increases(previous, target)
    } else {
        plan_decreases(previous, target, style)
    }
}

fn plan_increases(previous: u32, target: u32) -> Result<Vec<StitchAction>, RowError> {
    let delta = target - previous;
    if delta > previous {
        return Err(RowError::OverIncrease { previous, target });
    }

    let mut actions = vec![StitchAction::SingleCrochet; previous as usize];
    for idx in even_spread(previous, delta) {
        actions[idx] = StitchAction::Increase;
    }
    Ok(actions)
}

fn plan_decreases(
    previous: u32,
    target: u32,
    style: DecreaseStyle,
) -> Result<Vec<StitchAction>, RowError> {
    let k = previous - target;
    let slots = previous / 2;
    if k > slots {
        return Err(RowError::OverDecrease { previous, target });
    }

    let mut chosen = vec![false; slots as usize];
    for slot in even_spread(slots, k) {
        chosen[slot] = true;
    }

    let mut actions = Vec::with_capacity(target as usize);
    for &dec in &chosen {
        if dec {
            actions.push(style.action());
        } else {
            actions.push(StitchAction::SingleCrochet);
            actions.push(StitchAction::SingleCrochet);
        }
    }
    if previous % 2 == 1 {
        actions.push(StitchAction::SingleCrochet);
    }
    Ok(actions)
}

/// `picks` distinct indices in `[0, slots)`, evenly spaced from index 0.
///
/// Requires `picks <= slots`; the step `slots / picks` is then at least one,
/// so consecutive indices never collide.
fn even_spread(slots: u32, picks: u32) -> impl Iterator<Item = usize> {
    (0..u64::from(picks)).map(move |k| (k * u64::from(slots) / u64::from(picks)) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stitch::{consumed, emitted};

    fn count(actions: &[StitchAction], action: StitchAction) -> usize {
        actions.iter().filter(|a| **a == action).count()
    }

    #[test]
    fn test_no_change() {
        let actions = plan_transition(12, 12, DecreaseStyle::Invisible).unwrap();
        assert_eq!(actions, vec![StitchAction::SingleCrochet; 12]);
    }

    #[test]
    fn test_increase_placement() {
        let actions = plan_transition(12, 18, DecreaseStyle::Invisible).unwrap();
        assert_eq!(actions.len(), 12);
        assert_eq!(emitted(&actions), 18);
        let positions: Vec<usize> = actions
            .iter()
            .enumerate()
            .filter(|(_, a)| **a == StitchAction::Increase)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions, vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(count(&actions, StitchAction::SingleCrochet), 6);
    }

    #[test]
    fn test_decrease_placement() {
        let actions = plan_transition(18, 12, DecreaseStyle::Invisible).unwrap();
        assert_eq!(consumed(&actions), 18);
        assert_eq!(emitted(&actions), 12);
        assert_eq!(count(&actions, StitchAction::InvisibleDecrease), 6);
        use StitchAction::{InvisibleDecrease as D, SingleCrochet as S};
        // Pair slots 0, 1, 3, 4, 6, 7 of 9 are decreased.
        assert_eq!(actions, vec![D, D, S, S, D, D, S, S, D, D, S, S]);
    }

    #[test]
    fn test_decrease_style() {
        let actions = plan_transition(12, 6, DecreaseStyle::Standard).unwrap();
        assert_eq!(actions, vec![StitchAction::Decrease; 6]);
    }

    #[test]
    fn test_odd_previous_trailing_stitch() {
        let actions = plan_transition(7, 5, DecreaseStyle::Invisible).unwrap();
        assert_eq!(consumed(&actions), 7);
        assert_eq!(emitted(&actions), 5);
        assert_eq!(actions.last(), Some(&StitchAction::SingleCrochet));
    }

    #[test]
    fn test_over_increase() {
        assert_eq!(
            plan_transition(10, 21, DecreaseStyle::Invisible),
            Err(RowError::OverIncrease {
                previous: 10,
                target: 21
            })
        );
        assert!(plan_transition(10, 20, DecreaseStyle::Invisible).is_ok());
    }

    #[test]
    fn test_over_decrease() {
        assert_eq!(
            plan_transition(5, 1, DecreaseStyle::Invisible),
            Err(RowError::OverDecrease {
                previous: 5,
                target: 1
            })
        );
        assert!(plan_transition(5, 3, DecreaseStyle::Invisible).is_ok());
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(matches!(
            plan_transition(0, 4, DecreaseStyle::Invisible),
            Err(RowError::DegenerateRow { .. })
        ));
        assert!(matches!(
            plan_transition(4, 0, DecreaseStyle::Invisible),
            Err(RowError::DegenerateRow { .. })
        ));
    }

    #[test]
    fn test_all_valid_increases() {
        for p in 1..=60u32 {
            for n in p..=2 * p {
                let actions = plan_transition(p, n, DecreaseStyle::Invisible).unwrap();
                assert_eq!(actions.len(), p as usize, "P={p} N={n}");
                assert_eq!(count(&actions, StitchAction::Increase), (n - p) as usize);
                assert_eq!(emitted(&actions), n, "P={p} N={n}");
            }
        }
    }

    #[test]
    fn test_all_valid_decreases() {
        for p in 1..=60u32 {
            for n in p.div_ceil(2)..p {
                let actions = plan_transition(p, n, DecreaseStyle::Invisible).unwrap();
                let decs: Vec<_> = actions.iter().filter(|a| a.is_decrease()).collect();
                assert_eq!(decs.len(), (p - n) as usize, "P={p} N={n}");
                assert!(decs.iter().all(|a| a.consumes() == 2));
                assert_eq!(consumed(&actions), p, "P={p} N={n}");
                assert_eq!(emitted(&actions), n, "P={p} N={n}");
            }
        }
    }

    #[test]
    fn test_increases_never_adjacent_when_sparse() {
        for p in 2..=60u32 {
            for delta in 1..=p / 2 {
                let actions = plan_transition(p, p + delta, DecreaseStyle::Invisible).unwrap();
                for pair in actions.windows(2) {
                    assert!(
                        !(pair[0] == StitchAction::Increase && pair[1] == StitchAction::Increase),
                        "clustered increases for P={p} delta={delta}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_feasible_range_matches_planner() {
        for p in 1..=40u32 {
            let range = feasible_range(p);
            for n in 1..=2 * p + 2 {
                let ok = plan_transition(p, n, DecreaseStyle::Invisible).is_ok();
                assert_eq!(ok, range.contains(&n), "P={p} N={n}");
            }
        }
    }
}
