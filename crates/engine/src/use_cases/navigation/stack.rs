//! Per-session dialog history.

/// Errors from stack transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Popping would leave the stack empty, or the stack was torn down.
    #[error("Navigation stack is empty")]
    EmptyStack,
}

/// Ordered dialog history, most recent last.
///
/// Strictly LIFO. While a session is open the stack holds at least one
/// element; only [`NavigationStack::teardown`] may empty it.
#[derive(Debug)]
pub struct NavigationStack<T> {
    entries: Vec<T>,
}

impl<T> NavigationStack<T> {
    pub fn new(root: T) -> Self {
        Self {
            entries: vec![root],
        }
    }

    /// Make `entry` the new top.
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Pop the top, re-activating the entry below it.
    ///
    /// Fails without mutating when only one entry remains.
    pub fn go_back(&mut self) -> Result<T, NavigationError> {
        if self.entries.len() <= 1 {
            return Err(NavigationError::EmptyStack);
        }
        self.entries.pop().ok_or(NavigationError::EmptyStack)
    }

    pub fn current(&self) -> Result<&T, NavigationError> {
        self.entries.last().ok_or(NavigationError::EmptyStack)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, most recent first. Ends the stack's life.
    pub fn teardown(&mut self) -> Vec<T> {
        let mut removed = std::mem::take(&mut self.entries);
        removed.reverse();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_makes_entry_current() {
        let mut stack = NavigationStack::new("hub");
        stack.push("budget");
        assert_eq!(stack.current(), Ok(&"budget"));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn go_back_reactivates_prior_entry() {
        let mut stack = NavigationStack::new("hub");
        stack.push("budget");
        assert_eq!(stack.go_back(), Ok("budget"));
        assert_eq!(stack.current(), Ok(&"hub"));
    }

    #[test]
    fn when_single_entry_then_go_back_fails_without_mutation() {
        let mut stack = NavigationStack::new("hub");
        assert_eq!(stack.go_back(), Err(NavigationError::EmptyStack));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Ok(&"hub"));
    }

    #[test]
    fn never_empty_across_transitions() {
        let mut stack = NavigationStack::new(0);
        for step in 1..=5 {
            stack.push(step);
            assert!(!stack.is_empty());
        }
        while stack.go_back().is_ok() {
            assert!(!stack.is_empty());
        }
        assert_eq!(stack.current(), Ok(&0));
    }

    #[test]
    fn teardown_empties_most_recent_first() {
        let mut stack = NavigationStack::new("a");
        stack.push("b");
        assert_eq!(stack.teardown(), vec!["b", "a"]);
        assert_eq!(stack.current(), Err(NavigationError::EmptyStack));
    }
}
