//! Delimiter sets used to separate list items.

/// Immutable set of separator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    chars: &'static [char],
}

/// Separators for numeric list attributes: space, tab, newline, carriage return, comma.
pub const LIST_DELIMITERS: Delimiters = Delimiters::new(&[' ', '\t', '\n', '\r', ',']);

impl Delimiters {
    pub const fn new(chars: &'static [char]) -> Self {
        Delimiters { chars }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_chars(&self) -> &'static [char] {
        self.chars
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        LIST_DELIMITERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_delimiters() {
        for c in [' ', '\t', '\n', '\r', ','] {
            assert!(LIST_DELIMITERS.contains(c), "{c:?} should be a delimiter");
        }
        assert!(!LIST_DELIMITERS.contains(';'));
        assert!(!LIST_DELIMITERS.contains('.'));
        assert!(!LIST_DELIMITERS.contains('-'));
    }

    #[test]
    fn test_custom_set() {
        let semis = Delimiters::new(&[';']);
        assert!(semis.contains(';'));
        assert!(!semis.contains(' '));
        assert_eq!(semis.as_chars(), &[';']);
    }
}
