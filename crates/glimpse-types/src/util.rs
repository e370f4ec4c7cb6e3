use once_cell::sync::Lazy;
use regex::Regex;

static MODULE_PATHS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[A-Za-z_][A-Za-z0-9_]*::)+").expect("hard-coded pattern compiles")
});

/// Strip module paths from a `std::any::type_name` string.
///
/// Generic arguments and tuple punctuation are preserved:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn display_name(full: &str) -> String {
    MODULE_PATHS.replace_all(full, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(display_name("Coordinate"), "Coordinate");
        assert_eq!(display_name("str"), "str");
    }

    #[test]
    fn test_single_path_stripped() {
        assert_eq!(display_name("alloc::string::String"), "String");
    }

    #[test]
    fn test_generic_arguments_shortened() {
        assert_eq!(
            display_name("alloc::vec::Vec<alloc::string::String>"),
            "Vec<String>"
        );
        assert_eq!(
            display_name("std::collections::BTreeMap<u8, my_app::model::Entry>"),
            "BTreeMap<u8, Entry>"
        );
    }

    #[test]
    fn test_tuple_names_keep_parentheses() {
        assert_eq!(
            display_name("(u8, alloc::string::String)"),
            "(u8, String)"
        );
    }
}
