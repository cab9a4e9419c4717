//! Text rendering of solutions and replays.

use std::fmt::Write;

use game_core::Step;

use crate::Solution;
use crate::replay::Trace;

/// Comma-separated step descriptions.
pub fn render_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .map(Step::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Solution: a, b, c`, or `Empty solution` when there is nothing to show.
pub fn render_solution(solution: Option<&Solution>) -> String {
    match solution {
        Some(solution) if !solution.steps.is_empty() => {
            format!("Solution: {}", render_steps(&solution.steps))
        }
        _ => "Empty solution".to_owned(),
    }
}

/// One line per resolved step with its outcome, then a summary line.
pub fn render_trace(trace: &Trace) -> String {
    let mut out = String::new();
    for (index, entry) in trace.entries.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} -> {}", index + 1, entry.step, entry.outcome);
    }
    let state = &trace.final_state;
    let _ = write!(
        out,
        "Hero level {} at {}/{} HP, {} monster(s) left",
        state.hero.level,
        state.hero.hp.current(),
        state.hero.hp.maximum(),
        state.living_monsters().count()
    );
    out
}

#[cfg(test)]
mod tests {
    use game_core::{Convertible, Item, Spell};

    use super::*;

    #[test]
    fn renders_solution_line() {
        let solution = Solution {
            steps: vec![
                Step::Attack,
                Step::CastSpell(Spell::Burndayraz),
                Step::UncoverTiles(3),
                Step::ConvertItem(Convertible::Item(Item::FineSword)),
            ],
            seed: 0,
        };
        assert_eq!(
            render_solution(Some(&solution)),
            "Solution: Attack, Cast Burndayraz, Uncover 3 tile(s), Convert Fine Sword"
        );
    }

    #[test]
    fn renders_missing_or_empty_solution() {
        assert_eq!(render_solution(None), "Empty solution");
        let empty = Solution {
            steps: Vec::new(),
            seed: 0,
        };
        assert_eq!(render_solution(Some(&empty)), "Empty solution");
    }
}
