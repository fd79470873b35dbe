//! FAQ accordion state: a radio-style disclosure set where at most one entry
//! is expanded at a time.

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// All entries collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse everything, then expand `id` unless it was the open entry.
    /// Activating the open entry closes it; activating another closes the
    /// previous one and opens the new one.
    pub fn toggle(&self, id: usize) -> Self {
        Self {
            open: if self.open == Some(id) { None } else { Some(id) },
        }
    }

    pub fn is_expanded(&self, id: usize) -> bool {
        self.open == Some(id)
    }

    pub fn open_entry(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded_count(state: &AccordionState, ids: &[usize]) -> usize {
        ids.iter().filter(|id| state.is_expanded(**id)).count()
    }

    #[test]
    fn starts_all_collapsed() {
        let state = AccordionState::new();
        assert_eq!(state.open_entry(), None);
    }

    #[test]
    fn toggle_twice_returns_to_collapsed() {
        let state = AccordionState::new().toggle(0).toggle(0);
        assert_eq!(state.open_entry(), None);
    }

    #[test]
    fn toggling_another_entry_moves_the_open_one() {
        let state = AccordionState::new().toggle(0).toggle(1);
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(1));
    }

    #[test]
    fn at_most_one_open_over_any_sequence() {
        let ids = [0usize, 1, 2];
        let mut state = AccordionState::new();
        for &id in &[0, 1, 1, 2, 0, 2, 2, 1, 0, 0] {
            state = state.toggle(id);
            assert!(expanded_count(&state, &ids) <= 1);
        }
    }
}
