//! UI strings behind a dictionary lookup.

use std::collections::HashMap;

/// Key for every user-facing string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    ApiError,
    NotFound,
    Repeat,
    AbbrIbu,
    Order,
    Glass,
    Can,
    Box,
}

impl TextKey {
    /// Canonical key name, shown verbatim when a dictionary has no entry
    pub fn name(self) -> &'static str {
        match self {
            TextKey::ApiError => "apiError",
            TextKey::NotFound => "notFound",
            TextKey::Repeat => "repeat",
            TextKey::AbbrIbu => "abbrIBU",
            TextKey::Order => "order",
            TextKey::Glass => "glass",
            TextKey::Can => "can",
            TextKey::Box => "box",
        }
    }
}

/// Dictionary-backed string lookup.
///
/// A missing entry degrades to the key's canonical name instead of
/// panicking, so a hole in a dictionary still renders something readable.
#[derive(Debug, Clone)]
pub struct Locale {
    dictionary: HashMap<TextKey, String>,
}

impl Locale {
    /// The built-in English dictionary
    pub fn en() -> Self {
        let dictionary = HashMap::from([
            (TextKey::ApiError, "Some error while fetching the data"),
            (TextKey::NotFound, "Not Found"),
            (TextKey::Repeat, "Repeat"),
            (TextKey::AbbrIbu, "IBU"),
            (TextKey::Order, "Order"),
            (TextKey::Glass, "Glass"),
            (TextKey::Can, "Can"),
            (TextKey::Box, "Box"),
        ]);

        Self::with_dictionary(
            dictionary
                .into_iter()
                .map(|(key, text)| (key, text.to_string()))
                .collect(),
        )
    }

    /// Build a locale from an arbitrary, possibly incomplete dictionary
    pub fn with_dictionary(dictionary: HashMap<TextKey, String>) -> Self {
        Self { dictionary }
    }

    pub fn get(&self, key: TextKey) -> &str {
        self.dictionary
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.name())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_dictionary_translates_known_keys() {
        let locale = Locale::en();

        assert_eq!(locale.get(TextKey::ApiError), "Some error while fetching the data");
        assert_eq!(locale.get(TextKey::NotFound), "Not Found");
        assert_eq!(locale.get(TextKey::AbbrIbu), "IBU");
        assert_eq!(locale.get(TextKey::Box), "Box");
    }

    #[test]
    fn missing_entries_fall_back_to_the_key_name() {
        let locale = Locale::with_dictionary(HashMap::new());

        assert_eq!(locale.get(TextKey::ApiError), "apiError");
        assert_eq!(locale.get(TextKey::AbbrIbu), "abbrIBU");
        assert_eq!(locale.get(TextKey::Glass), "glass");
    }
}
