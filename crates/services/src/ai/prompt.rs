//! Prompt construction for the practice and chat features.
//!
//! The mock backend parses the word and topic back out of the prompt text,
//! so the quoting convention here is part of its contract with `mock`.

/// Practice content categories offered on the practice tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PracticeTopic {
    Phrase,
    Synonym,
    Root,
    Related,
}

impl PracticeTopic {
    pub const ALL: [Self; 4] = [Self::Phrase, Self::Synonym, Self::Root, Self::Related];

    /// Display label used by the UI topic chips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Phrase => "短语搭配",
            Self::Synonym => "同义词/反义词",
            Self::Root => "词根词缀",
            Self::Related => "相关词汇",
        }
    }
}

/// Build the generation prompt for a word and topic.
#[must_use]
pub fn practice_prompt(word: &str, topic: PracticeTopic) -> String {
    match topic {
        PracticeTopic::Phrase => {
            format!("为单词 \"{word}\" 生成5个常用短语搭配，每个短语搭配包含中文翻译和例句。")
        }
        PracticeTopic::Synonym => {
            format!("为单词 \"{word}\" 生成5个同义词和5个反义词，每个词包含中文翻译。")
        }
        PracticeTopic::Root => {
            format!("分析单词 \"{word}\" 的词根词缀，解释其构成，并生成相关词汇。")
        }
        PracticeTopic::Related => {
            format!("为单词 \"{word}\" 生成10个相关词汇，每个词包含中文翻译和简短解释。")
        }
    }
}

/// Wrap a free-form learner question in the tutor persona used by the chat
/// tab.
#[must_use]
pub fn tutor_prompt(question: &str) -> String {
    format!("你是一个专业的英语学习助手，请详细回答以下问题：{question}")
}

/// Pull the quoted word back out of a prompt built by [`practice_prompt`].
pub(crate) fn quoted_word(prompt: &str) -> Option<&str> {
    let start = prompt.find('"')? + 1;
    let rest = &prompt[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// Classify a prompt by the topic keyword embedded in it. Prompts without a
/// keyword fall through to `Related`.
pub(crate) fn detect_topic(prompt: &str) -> PracticeTopic {
    if prompt.contains("短语搭配") {
        PracticeTopic::Phrase
    } else if prompt.contains("同义词") {
        PracticeTopic::Synonym
    } else if prompt.contains("词根词缀") {
        PracticeTopic::Root
    } else {
        PracticeTopic::Related
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_word_survives_the_round_trip() {
        for topic in PracticeTopic::ALL {
            let prompt = practice_prompt("painless", topic);
            assert_eq!(quoted_word(&prompt), Some("painless"));
            assert_eq!(detect_topic(&prompt), topic);
        }
    }

    #[test]
    fn unquoted_prompt_has_no_word() {
        assert_eq!(quoted_word("no quotes here"), None);
    }

    #[test]
    fn tutor_prompt_classifies_as_related() {
        let prompt = tutor_prompt("什么是过去分词？");
        assert_eq!(detect_topic(&prompt), PracticeTopic::Related);
    }
}
