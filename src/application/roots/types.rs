use crate::application::tokenizer::Word;
use std::collections::HashMap;

pub type Root = String;

/// Concurrent aggregation target. Locked only for the append itself.
pub type SharedRootMap = parking_lot::Mutex<RootMap>;

/// Words grouped by root. Roots keep their discovery order and each group
/// keeps its insertion order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootMap {
    groups: Vec<(Root, Vec<Word>)>,
    index: HashMap<Root, usize>,
}

impl RootMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, root: Root, word: Word) {
        match self.index.get(&root) {
            Some(&slot) => self.groups[slot].1.push(word),
            None => {
                self.index.insert(root.clone(), self.groups.len());
                self.groups.push((root, vec![word]));
            }
        }
    }

    pub fn get(&self, root: &str) -> Option<&[Word]> {
        self.index
            .get(root)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Occurrences of exactly `word` among the words filed under `root`.
    pub fn count_exact(&self, root: &str, word: &str) -> usize {
        self.get(root)
            .map(|words| words.iter().filter(|w| w.as_str() == word).count())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(|(_, words)| words.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Word])> {
        self.groups
            .iter()
            .map(|(root, words)| (root.as_str(), words.as_slice()))
    }

    /// Groups by descending size. Equal sizes keep discovery order.
    pub fn ranked(&self) -> Vec<(&str, &[Word])> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        ranked
    }

    /// `"<first word>: <group size>"` for the `n` largest groups.
    pub fn top(&self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(_, words)| format!("{}: {}", words[0], words.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> RootMap {
        let mut map = RootMap::new();
        for (root, word) in pairs {
            map.push(root.to_string(), word.to_string());
        }
        map
    }

    #[test]
    fn groups_keep_insertion_order_and_duplicates() {
        let map = map_of(&[("бег", "бежать"), ("кот", "кот"), ("бег", "бежал"), ("бег", "бежать")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.word_count(), 4);
        assert_eq!(map.get("бег").unwrap(), ["бежать", "бежал", "бежать"]);
        assert_eq!(map.iter().map(|(r, _)| r).collect::<Vec<_>>(), ["бег", "кот"]);
    }

    #[test]
    fn count_exact_distinguishes_inflected_forms() {
        let map = map_of(&[("бег", "бежать"), ("бег", "бежал"), ("бег", "бежать")]);
        assert_eq!(map.count_exact("бег", "бежать"), 2);
        assert_eq!(map.count_exact("бег", "бежал"), 1);
        assert_eq!(map.count_exact("бег", "бегун"), 0);
        assert_eq!(map.count_exact("лет", "летать"), 0);
    }

    #[test]
    fn top_is_stable_on_ties() {
        let map = map_of(&[
            ("дом", "дом"),
            ("кот", "кот"),
            ("бег", "бежать"),
            ("кот", "коты"),
            ("дом", "дома"),
            ("бег", "бежал"),
            ("бег", "бег"),
        ]);
        assert_eq!(map.top(3), ["бежать: 3", "дом: 2", "кот: 2"]);
    }

    #[test]
    fn top_returns_min_of_n_and_group_count() {
        let map = map_of(&[("дом", "дом"), ("кот", "кот")]);
        assert_eq!(map.top(10).len(), 2);
        assert_eq!(map.top(1).len(), 1);
        assert!(map.top(0).is_empty());
        assert!(RootMap::new().top(5).is_empty());
    }
}
