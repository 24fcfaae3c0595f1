/// Save/restore stack of backend state.
///
/// The base state is always present; `depth() == 0` is the top level.
/// Popping at the top level is a caller bug: it is logged and ignored so the
/// base state can never be lost.
#[derive(Debug, Clone)]
pub struct StateStack<T> {
    base: T,
    saved: Vec<T>,
}

impl<T> StateStack<T> {
    pub fn new(base: T) -> Self {
        Self { base, saved: Vec::new() }
    }

    /// The innermost state.
    #[inline]
    pub fn current(&self) -> &T {
        self.saved.last().unwrap_or(&self.base)
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut T {
        self.saved.last_mut().unwrap_or(&mut self.base)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.saved.is_empty()
    }

    pub fn push(&mut self, state: T) {
        self.saved.push(state);
    }

    /// Removes the innermost saved state, or returns `None` at top level.
    pub fn pop(&mut self) -> Option<T> {
        let popped = self.saved.pop();
        if popped.is_none() {
            log::warn!("restore without matching save; ignored");
        }
        popped
    }

    /// Iterates saved states from the outermost to the innermost, base first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.base).chain(self.saved.iter())
    }

    /// Drops every saved state and replaces the base.
    pub fn reset(&mut self, base: T) {
        self.saved.clear();
        self.base = base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_tracks_depth() {
        let mut s = StateStack::new(0);
        assert!(s.is_top_level());
        s.push(1);
        s.push(2);
        assert_eq!(s.depth(), 2);
        assert_eq!(*s.current(), 2);
        assert_eq!(s.pop(), Some(2));
        assert_eq!(*s.current(), 1);
        assert_eq!(s.pop(), Some(1));
        assert!(s.is_top_level());
    }

    #[test]
    fn pop_at_top_level_keeps_base() {
        let mut s = StateStack::new("base");
        assert_eq!(s.pop(), None);
        assert_eq!(*s.current(), "base");
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn current_mut_edits_innermost() {
        let mut s = StateStack::new(0);
        s.push(5);
        *s.current_mut() += 1;
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![0, 6]);
    }
}
