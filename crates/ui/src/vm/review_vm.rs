use vocab_core::model::{ReviewMode, ReviewSession, WordId};

/// UI commands against the review session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewIntent {
    Start(ReviewMode),
    Exit,
    ToggleReveal,
    Advance,
    Retreat,
    MarkReviewed(WordId),
}

/// Side effect the view should run after an intent was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewEffect {
    None,
    Persist(WordId),
}

/// View-model over the review session: translates UI intents into session
/// operations and exposes display strings.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewVm {
    session: ReviewSession,
}

impl ReviewVm {
    #[must_use]
    pub fn new(session: ReviewSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn apply(&mut self, intent: ReviewIntent) -> ReviewEffect {
        match intent {
            ReviewIntent::Start(mode) => self.session.start_mode(mode),
            ReviewIntent::Exit => self.session.exit_mode(),
            ReviewIntent::ToggleReveal => self.session.toggle_reveal(),
            ReviewIntent::Advance => self.session.advance(),
            ReviewIntent::Retreat => self.session.retreat(),
            ReviewIntent::MarkReviewed(id) => {
                self.session.mark_reviewed(id);
                return ReviewEffect::Persist(id);
            }
        }
        ReviewEffect::None
    }

    #[must_use]
    pub fn mode_title(&self) -> Option<&'static str> {
        self.session.mode().map(|mode| match mode {
            ReviewMode::Flashcard => "闪卡模式",
            ReviewMode::Dictation => "听写模式",
            ReviewMode::Quiz => "选择题模式",
        })
    }

    #[must_use]
    pub fn due_label(&self) -> String {
        format!("根据记忆曲线，今天需要复习 {} 个单词", self.session.len())
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}%", self.session.progress_percent())
    }

    /// "3/5" style position inside an active mode.
    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.session
            .mode()
            .map(|_| format!("{}/{}", self.session.cursor() + 1, self.session.len()))
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.session.mode().is_some() && self.session.cursor() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::model::{Phonetic, WordDraft, WordEntry};

    fn words(count: u64) -> Vec<WordEntry> {
        (1..=count)
            .map(|id| {
                WordDraft::new(format!("word-{id}"), Phonetic::default())
                    .validate(WordId::new(id))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn mark_reviewed_asks_the_view_to_persist() {
        let mut vm = ReviewVm::new(ReviewSession::new(words(3)));
        let effect = vm.apply(ReviewIntent::MarkReviewed(WordId::new(2)));
        assert_eq!(effect, ReviewEffect::Persist(WordId::new(2)));
        assert_eq!(vm.session().reviewed_count(), 1);
    }

    #[test]
    fn navigation_intents_drive_the_session() {
        let mut vm = ReviewVm::new(ReviewSession::new(words(2)));
        assert_eq!(
            vm.apply(ReviewIntent::Start(ReviewMode::Flashcard)),
            ReviewEffect::None
        );
        assert_eq!(vm.mode_title(), Some("闪卡模式"));
        assert_eq!(vm.position_label().as_deref(), Some("1/2"));
        assert!(!vm.can_retreat());

        vm.apply(ReviewIntent::Advance);
        assert_eq!(vm.position_label().as_deref(), Some("2/2"));
        assert!(vm.can_retreat());

        // Terminal advance drops back to the list view.
        vm.apply(ReviewIntent::Advance);
        assert_eq!(vm.mode_title(), None);
        assert_eq!(vm.position_label(), None);
    }

    #[test]
    fn progress_label_rounds_to_whole_percent() {
        let mut vm = ReviewVm::new(ReviewSession::new(words(3)));
        vm.apply(ReviewIntent::MarkReviewed(WordId::new(1)));
        assert_eq!(vm.progress_label(), "33%");
    }

    #[test]
    fn due_label_counts_the_whole_list() {
        let vm = ReviewVm::new(ReviewSession::new(words(5)));
        assert_eq!(vm.due_label(), "根据记忆曲线，今天需要复习 5 个单词");
    }
}
