//! vnutrislova.net: `/разбор/по-составу/<word>`, morphemes listed as
//! labelled rows (`Корень: беж`, `Суффикс: а`, ...).

use super::config::{ROOT_SEPARATOR, VNUTRI_SLOVA_BASE};
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref ROOT_RE: Regex =
        Regex::new(r"(?i)(?:корень|корни)(?:\s|&nbsp;)*:(?:\s|&nbsp;|<[^>]*>)*([а-яё]+)").unwrap();
}

pub fn build_url(word: &str) -> String {
    let mut url = Url::parse(VNUTRI_SLOVA_BASE).expect("valid vnutrislova base url");
    url.path_segments_mut()
        .expect("http url has path segments")
        .pop_if_empty()
        .push(word);
    url.into()
}

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_word_to_breakdown_path() {
        let url = build_url("кот");
        assert!(url.starts_with("http://vnutrislova.net/"));
        assert!(url.ends_with("/%D0%BA%D0%BE%D1%82"));
        assert!(!url.contains("//%D0%BA"));
    }

    #[test]
    fn parses_labelled_root_through_markup() {
        let body = "<tr><td>Корень:</td><td><b>беж</b></td></tr><tr><td>Суффикс:</td><td>а</td></tr>";
        assert_eq!(parse_root(body), "беж");
    }

    #[test]
    fn heading_without_label_is_ignored() {
        let body = "<h2>Корень слова</h2><p>Приставка: при</p>";
        assert_eq!(parse_root(body), "");
    }

    #[test]
    fn repeated_root_rows_collapse() {
        let body = "Корень: ход <br> Корень: ход";
        assert_eq!(parse_root(body), "ход");
    }
}
