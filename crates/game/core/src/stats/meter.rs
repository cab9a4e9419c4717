//! Bounded resource meters (hit points, mana).

use crate::config::GameConfig;

/// Integer resource meter tracked per actor.
///
/// `current` never exceeds `maximum`, except after an explicit [`overheal`]
/// which may raise it up to [`GameConfig::OVERHEAL_PERCENT`] of `maximum`.
///
/// [`overheal`]: ResourceMeter::overheal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        debug_assert!(current <= maximum, "meter created above its maximum");
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    /// Upper bound for overhealing.
    pub fn overheal_cap(&self) -> u32 {
        self.maximum * GameConfig::OVERHEAL_PERCENT / 100
    }

    /// Removes up to `amount`, returning how much was actually lost.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current);
        self.current -= lost;
        lost
    }

    /// Restores up to `amount` without exceeding the maximum.
    ///
    /// An overhealed meter is left untouched rather than clamped down.
    pub fn restore(&mut self, amount: u32) -> u32 {
        if self.current >= self.maximum {
            return 0;
        }
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    /// Restores up to `amount`, allowing the meter to exceed its maximum up to
    /// the overheal cap.
    pub fn overheal(&mut self, amount: u32) -> u32 {
        let cap = self.overheal_cap();
        if self.current >= cap {
            return 0;
        }
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(cap);
        self.current - before
    }

    pub fn refill(&mut self) {
        self.current = self.current.max(self.maximum);
    }

    pub fn set_current(&mut self, value: u32) {
        debug_assert!(value <= self.overheal_cap(), "meter set above overheal cap");
        self.current = value.min(self.overheal_cap());
    }

    /// Raises the maximum and grants the same amount to the current value.
    pub fn raise_maximum(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
        self.current = self.current.saturating_add(amount);
    }

    /// Lowers the maximum, clamping the current value into the new bounds.
    pub fn lower_maximum(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_sub(amount).max(1);
        self.current = self.current.min(self.maximum);
    }

    /// Current value as a percentage of the maximum (0 for an empty maximum).
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        self.current * 100 / self.maximum
    }
}
