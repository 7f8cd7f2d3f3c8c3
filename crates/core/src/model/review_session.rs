use crate::model::ids::WordId;
use crate::model::word::WordEntry;

/// Active practice sub-flow within a review session.
///
/// The session itself holds `Option<ReviewMode>`; `None` is the word-list
/// view, both the initial state and the only state reachable by exiting a
/// mode. Modes never transition directly into one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewMode {
    Flashcard,
    Dictation,
    Quiz,
}

/// In-memory review session over a fixed word list.
///
/// The word list is supplied at construction and never grows, shrinks, or
/// reorders for the session's lifetime. Every command is synchronous and
/// total: calls that make no sense in the current state (unknown id, wrong
/// mode, cursor at a boundary) are defined no-ops rather than errors, since
/// the driving UI only offers commands valid for the state it renders.
///
/// Invariant: `0 <= cursor < words.len()` whenever a mode is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSession {
    words: Vec<WordEntry>,
    mode: Option<ReviewMode>,
    cursor: usize,
    revealed: bool,
}

impl ReviewSession {
    /// Create a session in the list view over the given words.
    #[must_use]
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self {
            words,
            mode: None,
            cursor: 0,
            revealed: false,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn mode(&self) -> Option<ReviewMode> {
        self.mode
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// The word the active mode is presenting, if any mode is active.
    #[must_use]
    pub fn current_word(&self) -> Option<&WordEntry> {
        self.mode.and(self.words.get(self.cursor))
    }

    #[must_use]
    pub fn reviewed_count(&self) -> usize {
        self.words.iter().filter(|w| w.reviewed()).count()
    }

    /// Fraction of words marked reviewed, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }
        self.reviewed_count() as f64 / self.words.len() as f64
    }

    /// Progress as a whole percentage for display, `0..=100`.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        (self.progress() * 100.0).round() as u8
    }

    /// Mark the word with the given id as reviewed.
    ///
    /// Idempotent; the UI's "re-review" action routes here as well. An
    /// unknown id leaves the session untouched.
    pub fn mark_reviewed(&mut self, id: WordId) {
        if let Some(entry) = self.words.iter_mut().find(|w| w.id() == id) {
            entry.mark_reviewed();
        }
    }

    /// Enter a practice mode at the first word with the answer face hidden.
    ///
    /// No-op on an empty word list, so the cursor invariant holds.
    pub fn start_mode(&mut self, mode: ReviewMode) {
        if self.words.is_empty() {
            return;
        }
        self.mode = Some(mode);
        self.cursor = 0;
        self.revealed = false;
    }

    /// Return to the list view. Cursor and reveal state are meaningless
    /// until the next `start_mode`.
    pub fn exit_mode(&mut self) {
        self.mode = None;
        self.revealed = false;
    }

    /// Flip the answer face. Only meaningful in flashcard mode; a no-op in
    /// any other state.
    pub fn toggle_reveal(&mut self) {
        if self.mode == Some(ReviewMode::Flashcard) {
            self.revealed = !self.revealed;
        }
    }

    /// Step to the next word, hiding the answer face. Advancing past the
    /// last word ends the modal flow and returns to the list view.
    pub fn advance(&mut self) {
        if self.mode.is_none() {
            return;
        }
        if self.cursor + 1 < self.words.len() {
            self.cursor += 1;
            self.revealed = false;
        } else {
            self.exit_mode();
        }
    }

    /// Step back to the previous word, hiding the answer face. Floors at
    /// the first word and never changes the mode.
    pub fn retreat(&mut self) {
        if self.mode.is_none() {
            return;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
            self.revealed = false;
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::word::{Phonetic, WordDraft};

    fn build_word(id: u64, text: &str) -> WordEntry {
        WordDraft::new(text, Phonetic::new("/us/", "/uk/"))
            .validate(WordId::new(id))
            .unwrap()
    }

    fn five_word_session() -> ReviewSession {
        ReviewSession::new(vec![
            build_word(1, "painless"),
            build_word(2, "example"),
            build_word(3, "vaccination"),
            build_word(4, "difficult"),
            build_word(5, "unpleasant"),
        ])
    }

    #[test]
    fn starts_in_list_view_with_zero_progress() {
        let session = five_word_session();
        assert_eq!(session.mode(), None);
        assert_eq!(session.progress_percent(), 0);
        assert!(session.current_word().is_none());
    }

    #[test]
    fn flashcard_walkthrough() {
        let mut session = five_word_session();

        session.start_mode(ReviewMode::Flashcard);
        assert_eq!(session.mode(), Some(ReviewMode::Flashcard));
        assert_eq!(session.cursor(), 0);
        assert!(!session.revealed());

        // Retreat at the first word is a no-op.
        session.retreat();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.mode(), Some(ReviewMode::Flashcard));

        session.toggle_reveal();
        assert!(session.revealed());

        // Four advances walk to the last word; each hides the answer face.
        for expected in 1..=4 {
            session.advance();
            assert_eq!(session.cursor(), expected);
            assert!(!session.revealed());
            assert_eq!(session.mode(), Some(ReviewMode::Flashcard));
        }

        // Advancing from the last index ends the mode.
        session.advance();
        assert_eq!(session.mode(), None);
    }

    #[test]
    fn advance_count_short_of_last_keeps_mode() {
        let mut session = five_word_session();
        session.start_mode(ReviewMode::Dictation);
        session.advance();
        session.advance();
        assert_eq!(session.mode(), Some(ReviewMode::Dictation));
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn terminal_advance_exits_after_visiting_every_word() {
        let mut session = five_word_session();
        session.start_mode(ReviewMode::Quiz);
        for _ in 0..4 {
            session.advance();
        }
        assert_eq!(session.mode(), Some(ReviewMode::Quiz));
        assert_eq!(session.cursor(), 4);
        session.advance();
        assert_eq!(session.mode(), None);
    }

    #[test]
    fn cursor_stays_in_range_under_command_storm() {
        let mut session = five_word_session();
        session.start_mode(ReviewMode::Flashcard);
        for step in 0..64 {
            match step % 5 {
                0 | 3 => session.advance(),
                1 => session.retreat(),
                2 => session.toggle_reveal(),
                _ => session.mark_reviewed(WordId::new(step % 7)),
            }
            if session.mode().is_some() {
                assert!(session.cursor() < session.len());
            }
            if session.mode().is_none() {
                session.start_mode(ReviewMode::Flashcard);
            }
        }
    }

    #[test]
    fn retreat_at_zero_is_idempotent() {
        let mut session = five_word_session();
        session.start_mode(ReviewMode::Flashcard);
        session.toggle_reveal();
        let before = session.clone();
        // retreat still hides the answer face only when it moves; at the
        // floor the whole state is unchanged.
        session.retreat();
        assert_eq!(session, before);
    }

    #[test]
    fn mark_reviewed_is_idempotent() {
        let mut session = five_word_session();
        session.mark_reviewed(WordId::new(3));
        assert_eq!(session.progress_percent(), 20);
        session.mark_reviewed(WordId::new(3));
        assert_eq!(session.progress_percent(), 20);
        assert_eq!(session.reviewed_count(), 1);
    }

    #[test]
    fn mark_reviewed_unknown_id_is_noop() {
        let mut session = five_word_session();
        let before = session.clone();
        session.mark_reviewed(WordId::new(999));
        assert_eq!(session, before);
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn progress_reaches_exactly_one_hundred() {
        let mut session = five_word_session();
        for id in 1..=5 {
            session.mark_reviewed(WordId::new(id));
        }
        assert!((session.progress() - 1.0).abs() < f64::EPSILON);
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn progress_is_exact_fraction_for_odd_lengths() {
        let mut session = ReviewSession::new(vec![
            build_word(1, "a"),
            build_word(2, "b"),
            build_word(3, "c"),
        ]);
        session.mark_reviewed(WordId::new(1));
        assert!((session.progress() - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(session.progress_percent(), 33);
    }

    #[test]
    fn toggle_reveal_outside_flashcard_has_no_effect() {
        let mut session = five_word_session();
        session.start_mode(ReviewMode::Dictation);
        session.toggle_reveal();
        assert!(!session.revealed());

        session.exit_mode();
        session.toggle_reveal();
        assert!(!session.revealed());
    }

    #[test]
    fn modes_only_reach_each_other_through_list_view() {
        let mut session = five_word_session();
        session.start_mode(ReviewMode::Flashcard);
        session.advance();
        session.exit_mode();
        assert_eq!(session.mode(), None);

        // Re-entering another mode restarts at the first word.
        session.start_mode(ReviewMode::Quiz);
        assert_eq!(session.cursor(), 0);
        assert!(!session.revealed());
    }

    #[test]
    fn single_word_session_advance_exits_immediately() {
        let mut session = ReviewSession::new(vec![build_word(1, "painless")]);
        session.start_mode(ReviewMode::Flashcard);
        assert_eq!(session.current_word().map(WordEntry::word), Some("painless"));
        session.advance();
        assert_eq!(session.mode(), None);
    }

    #[test]
    fn empty_session_never_enters_a_mode() {
        let mut session = ReviewSession::new(Vec::new());
        session.start_mode(ReviewMode::Flashcard);
        assert_eq!(session.mode(), None);
        session.advance();
        session.retreat();
        session.toggle_reveal();
        assert_eq!(session.mode(), None);
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn commands_in_list_view_do_not_move_cursor() {
        let mut session = five_word_session();
        session.advance();
        session.retreat();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.mode(), None);
    }

    #[test]
    fn marking_reviewed_does_not_disturb_active_mode() {
        let mut session = five_word_session();
        session.start_mode(ReviewMode::Flashcard);
        session.advance();
        session.toggle_reveal();
        session.mark_reviewed(WordId::new(2));
        assert_eq!(session.mode(), Some(ReviewMode::Flashcard));
        assert_eq!(session.cursor(), 1);
        assert!(session.revealed());
        assert_eq!(session.progress_percent(), 20);
    }
}
