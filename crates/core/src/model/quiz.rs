use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// The presentation style of a test question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice,
    FillBlank,
    Translation,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("question has no options")]
    NoOptions,

    #[error("correct answer index {index} is out of range for {options} options")]
    CorrectOutOfRange { index: usize, options: usize },

    #[error("test paper has no questions")]
    EmptyPaper,
}

/// One question on a test paper, with its options and correct index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    id: QuestionId,
    kind: QuestionKind,
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl QuizQuestion {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the prompt is blank, there are no options, or
    /// the correct index falls outside the option list.
    pub fn new(
        id: QuestionId,
        kind: QuestionKind,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuizError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuizError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuizError::NoOptions);
        }
        if correct >= options.len() {
            return Err(QuizError::CorrectOutOfRange {
                index: correct,
                options: options.len(),
            });
        }
        Ok(Self {
            id,
            kind,
            prompt,
            options,
            correct,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }

    /// The display text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }
}

//
// ─── TEST PAPER & SITTING ──────────────────────────────────────────────────────
//

/// A fixed, ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPaper {
    questions: Vec<QuizQuestion>,
}

impl TestPaper {
    /// # Errors
    ///
    /// Returns `QuizError::EmptyPaper` if no questions are provided.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyPaper);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }
}

/// Result of grading one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_index: usize,
}

/// One run through a test paper: linear navigation, one graded answer per
/// question, an aggregate score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSitting {
    paper: TestPaper,
    current: usize,
    selections: Vec<Option<usize>>,
    outcomes: Vec<Option<AnswerOutcome>>,
}

impl TestSitting {
    #[must_use]
    pub fn new(paper: TestPaper) -> Self {
        let len = paper.len();
        Self {
            paper,
            current: 0,
            selections: vec![None; len],
            outcomes: vec![None; len],
        }
    }

    #[must_use]
    pub fn paper(&self) -> &TestPaper {
        &self.paper
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.paper.questions()[self.current]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.paper.len()
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selections[self.current]
    }

    /// The grading outcome for the current question, if already submitted.
    #[must_use]
    pub fn outcome(&self) -> Option<AnswerOutcome> {
        self.outcomes[self.current]
    }

    /// Number of correctly answered questions so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.outcomes
            .iter()
            .flatten()
            .filter(|outcome| outcome.correct)
            .count() as u32
    }

    /// Record a choice for the current question. Choices out of range for
    /// the question's options are ignored.
    pub fn select(&mut self, choice: usize) {
        if choice < self.current_question().options().len() {
            self.selections[self.current] = Some(choice);
        }
    }

    /// Grade the current question against the recorded selection.
    ///
    /// Returns `None` when nothing is selected. A question grades once; a
    /// second submit returns the original outcome without rescoring.
    pub fn submit_current(&mut self) -> Option<AnswerOutcome> {
        if let Some(existing) = self.outcomes[self.current] {
            return Some(existing);
        }
        let choice = self.selections[self.current]?;
        let question = &self.paper.questions()[self.current];
        let outcome = AnswerOutcome {
            correct: question.is_correct(choice),
            correct_index: question.correct_index(),
        };
        self.outcomes[self.current] = Some(outcome);
        Some(outcome)
    }

    /// Move to the next question; stops at the last one.
    pub fn next_question(&mut self) {
        if self.current + 1 < self.paper.len() {
            self.current += 1;
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn two_question_paper() -> TestPaper {
        TestPaper::new(vec![
            QuizQuestion::new(
                QuestionId::new(1),
                QuestionKind::MultipleChoice,
                "Pick the meaning of \"painless\"",
                vec!["causing pain".into(), "free of pain".into()],
                1,
            )
            .unwrap(),
            QuizQuestion::new(
                QuestionId::new(2),
                QuestionKind::FillBlank,
                "The vaccination was ______.",
                vec!["painful".into(), "painless".into(), "loud".into()],
                1,
            )
            .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        let err = QuizQuestion::new(
            QuestionId::new(1),
            QuestionKind::MultipleChoice,
            "prompt",
            vec!["a".into()],
            3,
        )
        .unwrap_err();
        assert!(matches!(err, QuizError::CorrectOutOfRange { index: 3, .. }));
    }

    #[test]
    fn empty_paper_is_rejected() {
        let err = TestPaper::new(Vec::new()).unwrap_err();
        assert_eq!(err, QuizError::EmptyPaper);
    }

    #[test]
    fn submit_without_selection_returns_none() {
        let mut sitting = TestSitting::new(two_question_paper());
        assert_eq!(sitting.submit_current(), None);
        assert_eq!(sitting.score(), 0);
    }

    #[test]
    fn grading_scores_once_per_question() {
        let mut sitting = TestSitting::new(two_question_paper());
        sitting.select(1);
        let outcome = sitting.submit_current().unwrap();
        assert!(outcome.correct);
        assert_eq!(sitting.score(), 1);

        // Re-submitting returns the same outcome without rescoring.
        let again = sitting.submit_current().unwrap();
        assert_eq!(again, outcome);
        assert_eq!(sitting.score(), 1);
    }

    #[test]
    fn wrong_answer_reports_correct_index() {
        let mut sitting = TestSitting::new(two_question_paper());
        sitting.select(0);
        let outcome = sitting.submit_current().unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_index, 1);
        assert_eq!(sitting.score(), 0);
    }

    #[test]
    fn navigation_stops_at_last_question() {
        let mut sitting = TestSitting::new(two_question_paper());
        assert!(!sitting.is_last_question());
        sitting.next_question();
        assert!(sitting.is_last_question());
        sitting.next_question();
        assert_eq!(sitting.current_index(), 1);
    }

    #[test]
    fn selections_are_tracked_per_question() {
        let mut sitting = TestSitting::new(two_question_paper());
        sitting.select(1);
        sitting.next_question();
        assert_eq!(sitting.selection(), None);
        sitting.select(1);
        sitting.submit_current();
        assert_eq!(sitting.score(), 1);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut sitting = TestSitting::new(two_question_paper());
        sitting.select(9);
        assert_eq!(sitting.selection(), None);
    }
}
