//! Step navigation shared by every multi-step configuration wizard.

use serde::{Deserialize, Serialize};

/// Visual state of a single step relative to the navigator's cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

/// Cursor over a fixed number of wizard steps.
///
/// The navigator never validates a step. Callers check their own
/// per-step predicate before calling [`StepNavigator::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepNavigator {
    current: usize,
    total: usize,
}

impl StepNavigator {
    /// Create a navigator positioned on the first step.
    ///
    /// A total of zero is treated as a single step.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self::with_initial(total, 0)
    }

    /// Create a navigator positioned on `initial`, clamped into range.
    #[must_use]
    pub const fn with_initial(total: usize, initial: usize) -> Self {
        let total = if total == 0 { 1 } else { total };
        let current = if initial >= total { total - 1 } else { initial };
        Self { current, total }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// Advance one step. No-op on the last step.
    pub const fn next(&mut self) {
        if self.current + 1 < self.total {
            self.current += 1;
        }
    }

    /// Retreat one step. No-op on the first step.
    pub const fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jump to `index`. Out-of-range requests leave the cursor untouched.
    pub const fn go_to(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
        }
    }

    /// Classify `index` for the step indicator.
    #[must_use]
    pub const fn step_state(&self, index: usize) -> StepState {
        if index < self.current {
            StepState::Completed
        } else if index == self.current {
            StepState::Current
        } else {
            StepState::Upcoming
        }
    }
}

/// Wizard step enumerations implement this to expose their labels and order.
pub trait WizardStep: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    #[must_use]
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|step| step.label()).collect()
    }

    #[must_use]
    fn navigator() -> StepNavigator {
        StepNavigator::new(Self::ALL.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn next_is_noop_on_last_step() {
        let mut nav = StepNavigator::with_initial(3, 2);
        assert!(nav.is_last());
        nav.next();
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn previous_is_noop_on_first_step() {
        let mut nav = StepNavigator::new(4);
        assert!(nav.is_first());
        nav.previous();
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn go_to_out_of_range_leaves_index_unchanged() {
        let mut nav = StepNavigator::new(5);
        nav.go_to(3);
        assert_eq!(nav.current(), 3);
        nav.go_to(5);
        assert_eq!(nav.current(), 3);
        nav.go_to(usize::MAX);
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn initial_index_is_clamped_and_zero_total_is_single_step() {
        let nav = StepNavigator::with_initial(3, 9);
        assert_eq!(nav.current(), 2);
        let empty = StepNavigator::new(0);
        assert_eq!(empty.total(), 1);
        assert!(empty.is_first() && empty.is_last());
    }

    #[test]
    fn step_states_split_around_cursor() {
        let nav = StepNavigator::with_initial(4, 2);
        assert_eq!(nav.step_state(0), StepState::Completed);
        assert_eq!(nav.step_state(1), StepState::Completed);
        assert_eq!(nav.step_state(2), StepState::Current);
        assert_eq!(nav.step_state(3), StepState::Upcoming);
    }

    #[test]
    fn random_operation_sequences_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        for total in 1..12 {
            let mut nav = StepNavigator::new(total);
            for _ in 0..500 {
                match rng.gen_range(0..3) {
                    0 => nav.next(),
                    1 => nav.previous(),
                    _ => nav.go_to(rng.gen_range(0..total * 2)),
                }
                assert!(nav.current() < total);
            }
        }
    }
}
