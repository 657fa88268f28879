//! Cursor-based quiz flow over the fixed question bank.
//!
//! Answers accumulate in a map keyed by question id; re-answering a
//! question overwrites, backward navigation restores the earlier choice,
//! and nothing is ever removed from the map.

use std::collections::BTreeMap;

use crate::quiz::questions::{question_bank, Question};

/// Question id → chosen option value.
#[allow(dead_code)]
pub type QuizAnswers = BTreeMap<u32, String>;

/// What `next()` did: moved the cursor, or finalized the quiz.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Advanced to the next question.
    Moved,
    /// `next()` on an unanswered question is a no-op (the UI disables the
    /// button; the flow enforces it too).
    Blocked,
    /// Last question answered; the full answer map is emitted.
    Completed(QuizAnswers),
}

#[allow(dead_code)]
pub struct QuizFlow {
    questions: Vec<Question>,
    cursor: usize,
    answers: QuizAnswers,
    selected: Option<String>,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl QuizFlow {
    pub fn new() -> Self {
        QuizFlow {
            questions: question_bank(),
            cursor: 0,
            answers: QuizAnswers::new(),
            selected: None,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor]
    }

    pub fn is_last_question(&self) -> bool {
        self.cursor == self.questions.len() - 1
    }

    /// Fraction of the quiz reached, counting the question on screen.
    pub fn progress(&self) -> f64 {
        (self.cursor + 1) as f64 / self.questions.len() as f64
    }

    /// The option currently highlighted for the question on screen.
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn can_advance(&self) -> bool {
        self.selected.is_some()
    }

    /// Records `value` as the answer to the current question. Unknown
    /// values are ignored; a repeat selection overwrites the earlier one.
    pub fn select_option(&mut self, value: &str) {
        let question = self.current_question();
        if !question.options.iter().any(|o| o.value == value) {
            return;
        }
        let id = question.id;
        self.selected = Some(value.to_string());
        self.answers.insert(id, value.to_string());
    }

    /// Advances the cursor, or finalizes when already on the last question.
    pub fn next(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }
        if self.is_last_question() {
            return Advance::Completed(self.answers.clone());
        }
        self.cursor += 1;
        self.selected = self.answers.get(&self.current_question().id).cloned();
        Advance::Moved
    }

    /// Steps back one question, restoring its earlier answer as the
    /// current selection. No-op on the first question.
    pub fn previous(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.selected = self.answers.get(&self.current_question().id).cloned();
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }
}
