use services::PracticeTopic;
use vocab_core::model::WordEntry;

/// Selection state for the practice tab: one word from the book, one topic.
#[derive(Clone, Debug, PartialEq)]
pub struct PracticeVm {
    words: Vec<WordEntry>,
    selected: usize,
    topic: PracticeTopic,
}

impl PracticeVm {
    #[must_use]
    pub fn new(words: Vec<WordEntry>) -> Self {
        Self {
            words,
            selected: 0,
            topic: PracticeTopic::Phrase,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[must_use]
    pub fn topic(&self) -> PracticeTopic {
        self.topic
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_word(&self) -> Option<&WordEntry> {
        self.words.get(self.selected)
    }

    /// Out-of-range indexes are ignored.
    pub fn select_word(&mut self, index: usize) {
        if index < self.words.len() {
            self.selected = index;
        }
    }

    pub fn select_topic(&mut self, topic: PracticeTopic) {
        self.topic = topic;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::model::{Phonetic, WordDraft, WordId};

    fn vm() -> PracticeVm {
        let words = ["painless", "example"]
            .iter()
            .enumerate()
            .map(|(i, word)| {
                WordDraft::new(*word, Phonetic::default())
                    .validate(WordId::new(i as u64 + 1))
                    .unwrap()
            })
            .collect();
        PracticeVm::new(words)
    }

    #[test]
    fn defaults_to_first_word_and_phrase_topic() {
        let vm = vm();
        assert_eq!(vm.selected_word().unwrap().word(), "painless");
        assert_eq!(vm.topic(), PracticeTopic::Phrase);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut vm = vm();
        vm.select_word(7);
        assert_eq!(vm.selected_index(), 0);
        vm.select_word(1);
        assert_eq!(vm.selected_word().unwrap().word(), "example");
    }

    #[test]
    fn empty_book_has_no_selection() {
        let vm = PracticeVm::new(Vec::new());
        assert!(vm.selected_word().is_none());
    }
}
