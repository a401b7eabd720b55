//! Top-level interaction mode and its transition guards.

/// The gallery's interaction state. Exactly one is active; `Transitioning`
/// is never a rest state, it is always bounded by a fixed-duration
/// choreography that ends in one of the other two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Overview,
    Transitioning,
    Preview,
}

/// Serializes mode changes: while a transition is in flight all further
/// select/dismiss requests are refused, so no two choreographies ever
/// overlap. The guard is cleared exactly once, by the matching `finish_*`.
#[derive(Clone, Debug)]
pub struct ModeMachine {
    mode: Mode,
    selected: Option<usize>,
}

impl Default for ModeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeMachine {
    pub fn new() -> Self {
        Self {
            mode: Mode::Overview,
            selected: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Selected card index; `Some` iff the mode is not `Overview`.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Accept a card click. Only valid from `Overview`.
    pub fn begin_select(&mut self, index: usize) -> bool {
        if self.mode != Mode::Overview {
            return false;
        }
        self.mode = Mode::Transitioning;
        self.selected = Some(index);
        true
    }

    /// Select choreography completed; the detail view is now authoritative.
    pub fn finish_select(&mut self) {
        debug_assert_eq!(self.mode, Mode::Transitioning);
        debug_assert!(self.selected.is_some());
        self.mode = Mode::Preview;
    }

    /// Accept a dismiss request. Only valid from `Preview`.
    pub fn begin_dismiss(&mut self) -> bool {
        if self.mode != Mode::Preview {
            return false;
        }
        self.mode = Mode::Transitioning;
        true
    }

    /// Dismiss choreography completed; back to the overview ring.
    pub fn finish_dismiss(&mut self) {
        debug_assert_eq!(self.mode, Mode::Transitioning);
        self.mode = Mode::Overview;
        self.selected = None;
    }
}
