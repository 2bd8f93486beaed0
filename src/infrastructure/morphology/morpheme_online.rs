//! morphemeonline.ru: one page per word under `/<FIRST LETTER>/<word>`,
//! morpheme breakdown rendered as `беж — корень; а — суффикс; ...`.

use super::config::{MORPHEME_ONLINE_BASE, ROOT_SEPARATOR};
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref ROOT_RE: Regex =
        Regex::new(r"(?i)([а-яё]+)(?:\s|&nbsp;)*(?:&mdash;|&#8212;|&ndash;|—|–|-)(?:\s|&nbsp;)*корень")
            .unwrap();
}

pub fn build_url(word: &str) -> String {
    let first: String = word.chars().take(1).flat_map(char::to_uppercase).collect();
    let mut url = Url::parse(MORPHEME_ONLINE_BASE).expect("valid morphemeonline base url");
    url.path_segments_mut()
        .expect("http url has path segments")
        .pop_if_empty()
        .push(&first)
        .push(word);
    url.into()
}

/// Compound words list several roots; they are joined in page order.
pub fn parse_root(body: &str) -> String {
    let mut roots: Vec<String> = Vec::new();
    for captures in ROOT_RE.captures_iter(body) {
        let root = captures[1].to_lowercase();
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    roots.join(ROOT_SEPARATOR)
}
