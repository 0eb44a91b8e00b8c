//! Slug generation for notes submitted without an explicit slug.

use crate::models::SLUG_MAX_LENGTH;

/// Latin spelling of a lowercase Cyrillic letter, if it has one.
fn transliterate(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        'і' => "i",
        'ї' => "yi",
        'є' => "ye",
        'ґ' => "g",
        _ => return None,
    };
    Some(latin)
}

/// Turn a free-form title into a URL slug.
///
/// Cyrillic is transliterated, everything is lowercased, characters outside
/// `[a-z0-9_-]` are dropped and runs of whitespace or hyphens collapse into a
/// single hyphen. The result is at most [`SLUG_MAX_LENGTH`] characters long.
pub fn slugify(title: &str) -> String {
    let mut latin = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        if let Some(s) = transliterate(c) {
            latin.push_str(s);
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            latin.push(c);
        } else if c.is_whitespace() {
            latin.push(' ');
        }
    }

    let mut slug = String::with_capacity(latin.len());
    for c in latin.chars() {
        if c == ' ' || c == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else {
            slug.push(c);
        }
    }

    let slug = slug.trim_matches(|c| c == '-' || c == '_');
    slug.chars().take(SLUG_MAX_LENGTH).collect()
}

/// Whether `value` only contains letters, digits, underscores and hyphens.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_latin() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
        assert_eq!(slugify("keep_under-scores"), "keep_under-scores");
    }

    #[test]
    fn test_slugify_cyrillic() {
        assert_eq!(slugify("Заголовок"), "zagolovok");
        assert_eq!(slugify("Щука и ёж"), "schuka-i-yozh");
        assert_eq!(slugify("Объявление"), "obyavlenie");
    }

    #[test]
    fn test_slugify_truncates() {
        let title = "a".repeat(250);
        assert_eq!(slugify(&title).chars().count(), SLUG_MAX_LENGTH);
    }

    #[test]
    fn test_slugify_nothing_left() {
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("slug_one"));
        assert!(is_valid_slug("a-b-c"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug("слаг"));
        assert!(!is_valid_slug("a/b"));
    }
}
