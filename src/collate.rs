/// Locale-aware, numeric-aware string collation
///
/// Approximates the default English collation with numeric ordering turned on.
/// Both strings are decomposed (NFD) first, so an accented letter is its base
/// letter followed by combining marks. Strings are then compared level by
/// level:
///
/// 1. base characters: runs of ASCII digits by numeric value
///    (`"rec2" < "rec10"`), whitespace and punctuation before digits, digits
///    before letters, letters case-insensitively (`"éclair" < "zebra"`)
/// 2. accents: an unaccented letter sorts before the same letter with marks
/// 3. case: lowercase ahead of uppercase
///
/// Strings that tie on every level compare `Equal`, e.g. `"007"` and `"7"`,
/// so a stable sort keeps them in input order.

use std::borrow::Cow;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::{is_nfd, UnicodeNormalization};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Ignorable,
    Punctuation,
    Digit,
    Letter,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() || c.is_control() {
        CharClass::Ignorable
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_alphanumeric() {
        CharClass::Letter
    } else {
        CharClass::Punctuation
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    /// A run of ASCII digits, kept as text so length is unbounded
    Number(&'a str),
    /// A base character and the combining marks that follow it
    Char { base: char, marks: &'a str },
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let c = self.rest.chars().next()?;
        if c.is_ascii_digit() {
            let end = self
                .rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (run, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Token::Number(run))
        } else {
            let after = &self.rest[c.len_utf8()..];
            let end = after
                .find(|ch: char| !is_combining_mark(ch))
                .unwrap_or(after.len());
            let (marks, rest) = after.split_at(end);
            self.rest = rest;
            Some(Token::Char { base: c, marks })
        }
    }
}

fn tokens(s: &str) -> Tokens<'_> {
    Tokens { rest: s }
}

fn decompose(s: &str) -> Cow<'_, str> {
    if is_nfd(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.nfd().collect())
    }
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn fold(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase()
}

fn compare_primary(a: &Token<'_>, b: &Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Number(x), Token::Number(y)) => compare_digit_runs(x, y),
        (Token::Number(_), Token::Char { base, .. }) => CharClass::Digit.cmp(&classify(*base)),
        (Token::Char { base, .. }, Token::Number(_)) => classify(*base).cmp(&CharClass::Digit),
        (Token::Char { base: x, .. }, Token::Char { base: y, .. }) => classify(*x)
            .cmp(&classify(*y))
            .then_with(|| fold(*x).cmp(fold(*y))),
    }
}

/// Accent differences; no marks sorts first.
fn compare_accents(a: &Token<'_>, b: &Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Char { marks: x, .. }, Token::Char { marks: y, .. }) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Case differences; lowercase first.
fn compare_case(a: &Token<'_>, b: &Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Char { base: x, .. }, Token::Char { base: y, .. }) if x != y => {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        }
        _ => Ordering::Equal,
    }
}

fn first_difference<F>(a: &str, b: &str, level: F) -> Ordering
where
    F: Fn(&Token<'_>, &Token<'_>) -> Ordering,
{
    tokens(a)
        .zip(tokens(b))
        .map(|(x, y)| level(&x, &y))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Compare two strings with numeric-aware, accent- and case-insensitive-first
/// collation.
///
/// # Examples
///
/// ```
/// use tablestore::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("rec2", "rec10"), Ordering::Less);
/// assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(natural_cmp("éclair", "zebra"), Ordering::Less);
/// assert_eq!(natural_cmp("", "0"), Ordering::Less);
/// assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = decompose(a);
    let b = decompose(b);

    first_difference(&a, &b, compare_primary)
        .then_with(|| tokens(&a).count().cmp(&tokens(&b).count()))
        .then_with(|| first_difference(&a, &b, compare_accents))
        .then_with(|| first_difference(&a, &b, compare_case))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        items.sort_by(|a, b| natural_cmp(a, b));
        items
    }

    #[test]
    fn test_numeric_runs() {
        assert_eq!(natural_cmp("rec2", "rec10"), Ordering::Less);
        assert_eq!(natural_cmp("rec10", "rec2"), Ordering::Greater);
        assert_eq!(natural_cmp("14", "16"), Ordering::Less);
        assert_eq!(natural_cmp("9", "10"), Ordering::Less);
        assert_eq!(
            natural_cmp("123456789012345678901234567890", "99"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_leading_zeros_compare_equal() {
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("a01", "a1"), Ordering::Equal);
        assert_eq!(natural_cmp("007", "8"), Ordering::Less);
        assert_eq!(natural_cmp("file007", "file8"), Ordering::Less);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("", "0"), Ordering::Less);
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(
            sorted(vec!["banana", "Apple", "cherry", "apple"]),
            vec!["apple", "Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_accented_letters_sort_with_base_letter() {
        assert_eq!(natural_cmp("éclair", "zebra"), Ordering::Less);
        assert_eq!(natural_cmp("Ä", "B"), Ordering::Less);
        assert_eq!(
            sorted(vec!["Zebra", "Émile", "Adam"]),
            vec!["Adam", "Émile", "Zebra"]
        );
    }

    #[test]
    fn test_accent_breaks_ties_before_case() {
        assert_eq!(natural_cmp("e", "é"), Ordering::Less);
        assert_eq!(natural_cmp("é", "f"), Ordering::Less);
        assert_eq!(natural_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(natural_cmp("E", "é"), Ordering::Less);
    }

    #[test]
    fn test_composed_and_decomposed_are_equal() {
        assert_eq!(natural_cmp("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn test_class_ordering() {
        assert_eq!(natural_cmp("-", "1"), Ordering::Less);
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
        assert_eq!(natural_cmp("a b", "ab"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("rec", "rec1"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "abcd"), Ordering::Less);
    }

    #[test]
    fn test_ordering_is_antisymmetric() {
        let items = ["a1", "A1", "a01", "a10", "a2", "", "b", "B", "é", "É", "e"];
        for x in items {
            assert_eq!(natural_cmp(x, x), Ordering::Equal);
            for y in items {
                assert_eq!(natural_cmp(x, y), natural_cmp(y, x).reverse());
            }
        }
    }
}
