pub const MORPHEME_ONLINE_BASE: &str = "https://morphemeonline.ru/";
pub const VNUTRI_SLOVA_BASE: &str = "http://vnutrislova.net/разбор/по-составу/";

/// Both sites render this on their "no such word" page.
pub const NOT_FOUND_MARKER: &str = "Нет такой страницы";

pub const ROOT_SEPARATOR: &str = "-";
