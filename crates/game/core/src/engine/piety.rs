//! Deferred piety bookkeeping.

use crate::state::{Faith, PietyEvent};

/// Collects piety events during a step and commits them once at the end.
///
/// Handlers only record; nothing touches [`Faith`] until [`commit`] runs,
/// so a step's piety delta is computed against a single, consistent god.
///
/// [`commit`]: PietyAccumulator::commit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PietyAccumulator {
    events: Vec<PietyEvent>,
    flat: i32,
}

impl PietyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: PietyEvent) {
        self.events.push(event);
    }

    /// Piety change independent of the followed god's preferences.
    pub fn adjust(&mut self, delta: i32) {
        self.flat += delta;
    }

    /// Raw delta these events would cause for `faith`, before clamping.
    pub fn pending(&self, faith: &Faith) -> i32 {
        let Some(god) = faith.god else {
            return 0;
        };
        self.flat
            + self
                .events
                .iter()
                .map(|event| god.piety_for(*event))
                .sum::<i32>()
    }

    /// Applies the collected delta to `faith`; returns the clamped change.
    pub fn commit(self, faith: &mut Faith) -> i32 {
        let delta = self.pending(faith);
        if delta == 0 {
            return 0;
        }
        faith.adjust(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::God;

    #[test]
    fn nothing_happens_without_a_god() {
        let mut acc = PietyAccumulator::new();
        acc.record(PietyEvent::SpellCast);
        acc.adjust(10);
        let mut faith = Faith::default();
        assert_eq!(acc.commit(&mut faith), 0);
    }

    #[test]
    fn events_are_weighed_by_the_followed_god() {
        let mut faith = Faith::default();
        faith.follow(God::Taurog);
        faith.adjust(5);

        let mut acc = PietyAccumulator::new();
        acc.record(PietyEvent::MonsterKilled { higher_level: false, undead: false });
        acc.record(PietyEvent::SpellCast);
        acc.record(PietyEvent::SpellCast);
        assert_eq!(acc.pending(&faith), -1);
        assert_eq!(acc.commit(&mut faith), -1);
        assert_eq!(faith.piety, 4);
    }
}
