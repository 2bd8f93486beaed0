use super::types::{Blacklist, Word, is_word_char};

/// Splits lowercased text into Cyrillic words, skipping blacklisted ones.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    blacklist: Blacklist,
}

impl Tokenizer {
    pub fn new(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    /// Repeated words are kept; the caller relies on them for frequencies.
    pub fn tokenize(&self, text: &str) -> Vec<Word> {
        text.split(|ch: char| !is_word_char(ch))
            .filter(|fragment| !fragment.is_empty())
            .filter(|fragment| !self.blacklist.contains(fragment))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_duplicates() {
        let tokenizer = Tokenizer::default();
        let words = tokenizer.tokenize("бежать, бежал!\nбежать");
        assert_eq!(words, vec!["бежать", "бежал", "бежать"]);
    }

    #[test]
    fn splits_on_latin_digits_and_markup() {
        let tokenizer = Tokenizer::default();
        let words = tokenizer.tokenize("## задача1: `npm test` ёжик-кот");
        assert_eq!(words, vec!["задача", "ёжик", "кот"]);
    }

    #[test]
    fn drops_blacklisted_words_regardless_of_frequency() {
        let tokenizer = Tokenizer::new(Blacklist::new(["и", "в"]));
        let words = tokenizer.tokenize("и кот и пёс в доме и");
        assert_eq!(words, vec!["кот", "пёс", "доме"]);
    }

    #[test]
    fn empty_and_non_cyrillic_input_yield_nothing() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("hello, world 42").is_empty());
    }
}
