//! Small word-shaping helpers used to derive labels, ids and paths.

/// Make a machine token human readable: `published_at` -> `Published at`,
/// `author_id` -> `Author`.
pub fn humanize(word: &str) -> String {
    let word = word.strip_suffix("_id").unwrap_or(word);
    upper_first(&word.replace('_', " "))
}

/// Split a camel-cased name into capitalised words: `PostComment` -> `Post Comment`
pub fn camel2words(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| !p.is_uppercase() && p != ' ') {
            spaced.push(' ');
        }
        spaced.push(match c {
            '-' | '_' | '.' => ' ',
            _ => c,
        });
        prev = Some(c);
    }

    spaced
        .split_whitespace()
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a camel-cased name into a dashed id: `PostComment` -> `post-comment`
pub fn camel2id(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + 4);
    let mut prev_upper = false;
    for c in name.chars() {
        if c.is_uppercase() && !prev_upper {
            id.push('-');
        }
        prev_upper = c.is_uppercase();
        id.extend(c.to_lowercase());
    }
    id.trim_matches('-').to_string()
}

/// Pluralize the last word of a phrase: `Post Category` -> `Post Categories`
pub fn pluralize(phrase: &str) -> String {
    match phrase.rsplit_once(' ') {
        Some((head, last)) => format!("{} {}", head, pluralize_word(last)),
        None => pluralize_word(phrase),
    }
}

pub fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    let consonant_y = lower.ends_with('y')
        && !lower
            .chars()
            .rev()
            .nth(1)
            .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));

    if consonant_y && word.len() > 1 {
        format!("{}ies", &word[..word.len() - 1])
    } else if ["s", "sh", "ch", "x", "z"].iter().any(|s| lower.ends_with(s)) {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

/// Map a namespaced class name onto a relative file path: `app\models\Post` -> `app/models/Post.php`
pub fn class_to_path(class: &str) -> String {
    format!("{}.php", class.trim_start_matches('\\').replace('\\', "/"))
}

/// Namespace part of a class name; empty for a global class
pub fn class_namespace(class: &str) -> &str {
    class
        .trim_start_matches('\\')
        .rsplit_once('\\')
        .map(|(ns, _)| ns)
        .unwrap_or("")
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
