use super::config::NOT_FOUND_MARKER;
use super::{morpheme_online, vnutri_slova};
use crate::infrastructure::http::{FetchError, Page};
use std::fmt;
use std::str::FromStr;

/// External morphology site used to look up word roots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MorphologyService {
    MorphemeOnline,
    VnutriSlova,
}

/// What a service page says about a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Parsed root. Empty when the page had no recognizable breakdown.
    Found(String),
    NotFound,
}

impl MorphologyService {
    pub const ALL: [MorphologyService; 2] =
        [MorphologyService::MorphemeOnline, MorphologyService::VnutriSlova];

    pub fn key(self) -> &'static str {
        match self {
            MorphologyService::MorphemeOnline => "MORPHEME_ONLINE",
            MorphologyService::VnutriSlova => "VNUTRI_SLOVA",
        }
    }

    pub fn build_url(self, word: &str) -> String {
        match self {
            MorphologyService::MorphemeOnline => morpheme_online::build_url(word),
            MorphologyService::VnutriSlova => vnutri_slova::build_url(word),
        }
    }

    pub fn parse_root(self, body: &str) -> String {
        match self {
            MorphologyService::MorphemeOnline => morpheme_online::parse_root(body),
            MorphologyService::VnutriSlova => vnutri_slova::parse_root(body),
        }
    }

    /// 404 and the localized "no such page" text both mean the word is
    /// unknown. Any other non-2xx status is an error.
    pub fn interpret(self, url: &str, page: &Page) -> Result<Lookup, FetchError> {
        if page.is_not_found() || page.body.contains(NOT_FOUND_MARKER) {
            return Ok(Lookup::NotFound);
        }
        if !page.is_success() {
            return Err(FetchError::status(url, page.status));
        }
        Ok(Lookup::Found(self.parse_root(&page.body)))
    }
}

impl fmt::Display for MorphologyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MorphologyService {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MorphologyService::ALL
            .into_iter()
            .find(|service| service.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown morphology service '{}', expected one of: {}",
                    s,
                    MorphologyService::ALL.map(MorphologyService::key).join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for service in MorphologyService::ALL {
            assert_eq!(service.key().parse::<MorphologyService>(), Ok(service));
        }
        assert_eq!(
            "vnutri_slova".parse::<MorphologyService>(),
            Ok(MorphologyService::VnutriSlova)
        );
        assert!("WIKTIONARY".parse::<MorphologyService>().is_err());
    }

    #[test]
    fn status_404_is_not_found() {
        let page = Page::new(404, "");
        let lookup = MorphologyService::MorphemeOnline
            .interpret("https://morphemeonline.ru/К/кот", &page)
            .unwrap();
        assert_eq!(lookup, Lookup::NotFound);
    }

    #[test]
    fn marker_in_body_is_not_found_even_with_200() {
        let page = Page::new(200, "<h1>Нет такой страницы</h1>");
        let lookup = MorphologyService::VnutriSlova
            .interpret("http://vnutrislova.net/x", &page)
            .unwrap();
        assert_eq!(lookup, Lookup::NotFound);
    }

    #[test]
    fn server_error_is_reported() {
        let page = Page::new(502, "bad gateway");
        let err = MorphologyService::VnutriSlova
            .interpret("http://vnutrislova.net/x", &page)
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 502, .. }));
    }

    #[test]
    fn dispatches_to_service_parser() {
        let page = Page::new(200, "Корень: кот");
        assert_eq!(
            MorphologyService::VnutriSlova
                .interpret("http://vnutrislova.net/x", &page)
                .unwrap(),
            Lookup::Found("кот".to_string())
        );
        assert_eq!(
            MorphologyService::MorphemeOnline
                .interpret("https://morphemeonline.ru/x", &page)
                .unwrap(),
            Lookup::Found(String::new())
        );
    }
}
