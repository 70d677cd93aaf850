//! Compact, repeat-aware instruction strings for rows.
//!
//! A row whose actions are an exact repetition of a shorter block is written
//! as `[<block>] repeat R times`; anything else is run-length encoded as
//! `<count> <stitch>` items separated by `", "`. [`expand`] parses either
//! form back into actions.

use thiserror::Error;

use crate::stitch::StitchAction;

const SEPARATOR: &str = ", ";
const REPEAT: &str = "] repeat ";

/// Longest row [`expand`] accepts; stitch counts are `u32`.
const MAX_ACTIONS: usize = u32::MAX as usize;

/// Errors from parsing an instruction string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompressError {
    /// The text does not follow the instruction grammar.
    #[error("malformed instruction: {0:?}")]
    Malformed(String),

    /// A stitch abbreviation was not recognised.
    #[error("unknown stitch: {0:?}")]
    UnknownStitch(String),
}

/// Compress a row using standard US abbreviations.
pub fn compress(actions: &[StitchAction]) -> String {
    compress_with(actions, StitchAction::abbreviation)
}

/// Compress a row using a custom abbreviation for each action.
pub fn compress_with(actions: &[StitchAction], name: impl Fn(StitchAction) -> &'static str) -> String {
    match smallest_period(actions) {
        Some(p) => format!(
            "[{}] repeat {} times",
            run_length(&actions[..p], &name),
            actions.len() / p
        ),
        None => run_length(actions, &name),
    }
}

/// Smallest `p` with `len % p == 0` such that `actions` is `len / p` copies
/// of its first `p` actions. `None` if the row does not repeat.
fn smallest_period(actions: &[StitchAction]) -> Option<usize> {
    let len = actions.len();
    (1..=len / 2)
        .filter(|p| len % p == 0)
        .find(|&p| actions.chunks(p).all(|chunk| chunk == &actions[..p]))
}

fn run_length(actions: &[StitchAction], name: &impl Fn(StitchAction) -> &'static str) -> String {
    let mut runs: Vec<(StitchAction, usize)> = Vec::new();
    for &action in actions {
        match runs.last_mut() {
            Some((last, n)) if *last == action => *n += 1,
            _ => runs.push((action, 1)),
        }
    }
    runs.iter()
        .map(|(action, n)| format!("{} {}", n, name(*action)))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Expand a string produced by [`compress`] back into actions.
pub fn expand(text: &str) -> Result<Vec<StitchAction>, CompressError> {
    expand_with(text, StitchAction::from_abbreviation)
}

/// Expand a string produced by [`compress_with`], given the inverse naming.
pub fn expand_with(
    text: &str,
    parse: impl Fn(&str) -> Option<StitchAction>,
) -> Result<Vec<StitchAction>, CompressError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let Some(rest) = text.strip_prefix('[') else {
        return expand_runs(text, &parse);
    };

    let malformed = || CompressError::Malformed(text.to_string());
    let (block, tail) = rest.split_once(REPEAT).ok_or_else(malformed)?;
    let times = tail
        .strip_suffix(" times")
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or_else(malformed)?;

    let block = expand_runs(block, &parse)?;
    block
        .len()
        .checked_mul(times)
        .filter(|&len| len <= MAX_ACTIONS)
        .ok_or_else(malformed)?;
    Ok(block.repeat(times))
}

fn expand_runs(
    text: &str,
    parse: &impl Fn(&str) -> Option<StitchAction>,
) -> Result<Vec<StitchAction>, CompressError> {
    let mut actions = Vec::new();
    for item in text.split(SEPARATOR) {
        let malformed = || CompressError::Malformed(item.to_string());
        let (n, name) = item.split_once(' ').ok_or_else(malformed)?;
        let n: usize = n.parse().map_err(|_| malformed())?;
        let action = parse(name).ok_or_else(|| CompressError::UnknownStitch(name.to_string()))?;
        actions
            .len()
            .checked_add(n)
            .filter(|&len| len <= MAX_ACTIONS)
            .ok_or_else(malformed)?;
        actions.extend(std::iter::repeat(action).take(n));
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stitch::DecreaseStyle;
    use crate::transition::plan_transition;
    use StitchAction::{Increase as I, InvisibleDecrease as D, SingleCrochet as S};

    #[test]
    fn test_uniform_row_repeats() {
        assert_eq!(compress(&[S; 6]), "[1 sc] repeat 6 times");
    }

    #[test]
    fn test_repeated_block() {
        let actions = [I, S, I, S, I, S, I, S, I, S, I, S];
        assert_eq!(compress(&actions), "[1 inc, 1 sc] repeat 6 times");
    }

    #[test]
    fn test_smallest_period_chosen() {
        let actions = [D, D, S, S, D, D, S, S, D, D, S, S];
        assert_eq!(compress(&actions), "[2 invdec, 2 sc] repeat 3 times");
    }

    #[test]
    fn test_run_length_fallback() {
        let actions = [I, S, S, I, S, S, S];
        assert_eq!(compress(&actions), "1 inc, 2 sc, 1 inc, 3 sc");
        assert_eq!(compress(&[S]), "1 sc");
        assert_eq!(compress(&[]), "");
    }

    #[test]
    fn test_custom_names() {
        let uk = |a: StitchAction| match a {
            StitchAction::SingleCrochet => "dc",
            other => other.abbreviation(),
        };
        assert_eq!(compress_with(&[I, S], uk), "1 inc, 1 dc");
    }

    #[test]
    fn test_expand_forms() {
        assert_eq!(expand("[1 inc, 1 sc] repeat 2 times").unwrap(), vec![I, S, I, S]);
        assert_eq!(expand("2 sc, 1 invdec").unwrap(), vec![S, S, D]);
        assert!(expand("").unwrap().is_empty());
    }

    #[test]
    fn test_expand_errors() {
        assert!(matches!(expand("two sc"), Err(CompressError::Malformed(_))));
        assert!(matches!(expand("[1 sc] repeat x times"), Err(CompressError::Malformed(_))));
        assert!(matches!(expand("[1 sc"), Err(CompressError::Malformed(_))));
        assert_eq!(expand("3 hdc"), Err(CompressError::UnknownStitch("hdc".into())));
    }

    #[test]
    fn test_expand_rejects_oversized_counts() {
        let huge = format!("[1 sc, 1 inc] repeat {} times", usize::MAX);
        assert_eq!(expand(&huge), Err(CompressError::Malformed(huge.clone())));

        let too_long = format!("[1 sc] repeat {} times", u64::from(u32::MAX) + 1);
        assert!(matches!(expand(&too_long), Err(CompressError::Malformed(_))));

        let runs = format!("{} sc, {} inc", usize::MAX, usize::MAX);
        assert_eq!(
            expand(&runs),
            Err(CompressError::Malformed(format!("{} sc", usize::MAX)))
        );

        let overflowing_sum = format!("2 sc, {} inc", usize::MAX - 1);
        assert!(matches!(expand(&overflowing_sum), Err(CompressError::Malformed(_))));
    }

    #[test]
    fn test_round_trip_planned_rows() {
        for p in 1..=40u32 {
            for n in p.div_ceil(2)..=2 * p {
                let actions = plan_transition(p, n, DecreaseStyle::Invisible).unwrap();
                let text = compress(&actions);
                assert_eq!(expand(&text).unwrap(), actions, "P={p} N={n}: {text}");
            }
        }
    }

    #[test]
    fn test_round_trip_irregular_rows() {
        let rows: [&[StitchAction]; 3] = [
            &[S, I, D, S, S, D],
            &[D, D, D, S],
            &[I, I, S, I, I, S, I, I, S, I],
        ];
        for row in rows {
            assert_eq!(expand(&compress(row)).unwrap(), row.to_vec());
        }
    }
}
