use crate::core::data::view::View;
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Bounded undo/redo stack of view snapshots.
#[derive(Debug, Clone)]
pub struct ViewHistory {
    current: View,
    undo: VecDeque<View>,
    redo: Vec<View>,
    capacity: usize,
}

impl ViewHistory {
    #[must_use]
    pub fn new(initial: View) -> Self {
        Self::with_capacity(initial, DEFAULT_HISTORY_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(initial: View, capacity: usize) -> Self {
        Self {
            current: initial,
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    #[must_use]
    pub fn current(&self) -> View {
        self.current
    }

    /// Records a new view. Pushing the current view again is a no-op.
    pub fn push(&mut self, view: View) {
        if view == self.current {
            return;
        }

        if self.undo.len() == self.capacity {
            self.undo.pop_front();
        }

        self.undo.push_back(self.current);
        self.current = view;
        self.redo.clear();
    }

    pub fn undo(&mut self) -> Option<View> {
        let previous = self.undo.pop_back()?;
        self.redo.push(self.current);
        self.current = previous;

        Some(previous)
    }

    pub fn redo(&mut self) -> Option<View> {
        let next = self.redo.pop()?;
        self.undo.push_back(self.current);
        self.current = next;

        Some(next)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
