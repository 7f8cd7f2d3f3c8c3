use rand::seq::SliceRandom;
use rand::thread_rng;

use vocab_core::model::{QuestionId, QuestionKind, QuizQuestion, TestPaper, TestSitting};

use crate::error::TestServiceError;

/// Builds the built-in vocabulary test and opens sittings over it.
#[derive(Clone)]
pub struct TestService {
    shuffle_options: bool,
}

impl Default for TestService {
    fn default() -> Self {
        Self::new()
    }
}

impl TestService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shuffle_options: true,
        }
    }

    /// Deterministic option order, used by tests and screenshots.
    #[must_use]
    pub fn without_shuffle() -> Self {
        Self {
            shuffle_options: false,
        }
    }

    /// The built-in three-question paper covering the starter word list.
    ///
    /// # Errors
    ///
    /// Returns `TestServiceError::Quiz` if a question fails validation.
    pub fn builtin_paper(&self) -> Result<TestPaper, TestServiceError> {
        let questions = vec![
            QuizQuestion::new(
                QuestionId::new(1),
                QuestionKind::MultipleChoice,
                "选择 \"painless\" 的正确释义",
                vec![
                    "引起疼痛的".into(),
                    "无痛的".into(),
                    "困难的".into(),
                    "愉快的".into(),
                ],
                1,
            )?,
            QuizQuestion::new(
                QuestionId::new(2),
                QuestionKind::FillBlank,
                "The vaccination was ______, I hardly felt a thing.",
                vec![
                    "painful".into(),
                    "painless".into(),
                    "difficult".into(),
                    "easy".into(),
                ],
                1,
            )?,
            QuizQuestion::new(
                QuestionId::new(3),
                QuestionKind::Translation,
                "翻译 \"painless\" 到中文",
                vec![
                    "无痛的".into(),
                    "痛苦的".into(),
                    "容易的".into(),
                    "不舒服的".into(),
                ],
                0,
            )?,
        ];
        Ok(TestPaper::new(questions)?)
    }

    /// Open a fresh sitting, shuffling option order unless disabled.
    ///
    /// # Errors
    ///
    /// Returns `TestServiceError::Quiz` if a question fails validation.
    pub fn start_sitting(&self) -> Result<TestSitting, TestServiceError> {
        let paper = self.builtin_paper()?;
        let paper = if self.shuffle_options {
            shuffle_paper(&paper)?
        } else {
            paper
        };
        Ok(TestSitting::new(paper))
    }
}

fn shuffle_paper(paper: &TestPaper) -> Result<TestPaper, TestServiceError> {
    let mut rng = thread_rng();
    let questions = paper
        .questions()
        .iter()
        .map(|question| {
            let mut order: Vec<usize> = (0..question.options().len()).collect();
            order.shuffle(&mut rng);

            let options: Vec<String> = order
                .iter()
                .map(|&i| question.options()[i].clone())
                .collect();
            // order is a permutation, so the original correct index is in it.
            let correct = order
                .iter()
                .position(|&i| i == question.correct_index())
                .unwrap_or(question.correct_index());

            Ok(QuizQuestion::new(
                question.id(),
                question.kind(),
                question.prompt(),
                options,
                correct,
            )?)
        })
        .collect::<Result<Vec<_>, TestServiceError>>()?;

    Ok(TestPaper::new(questions)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_paper_has_three_graded_questions() {
        let paper = TestService::without_shuffle().builtin_paper().unwrap();
        assert_eq!(paper.len(), 3);
        assert_eq!(paper.questions()[0].correct_option(), "无痛的");
        assert_eq!(paper.questions()[1].correct_option(), "painless");
        assert_eq!(paper.questions()[2].correct_option(), "无痛的");
    }

    #[test]
    fn shuffling_keeps_the_correct_option_text() {
        let service = TestService::new();
        for _ in 0..20 {
            let sitting = service.start_sitting().unwrap();
            for question in sitting.paper().questions() {
                match question.id().value() {
                    1 | 3 => assert_eq!(question.correct_option(), "无痛的"),
                    2 => assert_eq!(question.correct_option(), "painless"),
                    other => panic!("unexpected question id {other}"),
                }
            }
        }
    }

    #[test]
    fn full_sitting_scores_each_correct_answer() {
        let mut sitting = TestService::without_shuffle().start_sitting().unwrap();

        sitting.select(1);
        assert!(sitting.submit_current().unwrap().correct);
        sitting.next_question();

        sitting.select(0);
        assert!(!sitting.submit_current().unwrap().correct);
        sitting.next_question();

        sitting.select(0);
        assert!(sitting.submit_current().unwrap().correct);
        assert!(sitting.is_last_question());
        assert_eq!(sitting.score(), 2);
    }
}
