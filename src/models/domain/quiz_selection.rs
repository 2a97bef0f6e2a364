use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected option per question. A question without an entry is unanswered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSelection {
    selected: BTreeMap<usize, usize>,
}

impl QuizSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `option_index` for the question, replacing any earlier pick.
    pub fn select(&mut self, question_index: usize, option_index: usize) {
        self.selected.insert(question_index, option_index);
    }

    pub fn selected(&self, question_index: usize) -> Option<usize> {
        self.selected.get(&question_index).copied()
    }

    pub fn is_selected(&self, question_index: usize, option_index: usize) -> bool {
        self.selected(question_index) == Some(option_index)
    }

    pub fn answered_count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.selected.iter().map(|(q, o)| (*q, *o))
    }
}
