use component_protocol::fold_key;
use unicode_segmentation::UnicodeSegmentation;

const MAX_PHRASE_WORDS: usize = 2;

/// Connectives skipped between a cue and the phrase it introduces
const LEADING_SKIP: &[&str] = &[
    "the", "a", "an", "with", "by", "for", "to", "using", "use", "alongside", "of",
];

/// Words that end a captured phrase; generic nouns are dropped ("modal component" -> "modal")
const STOP_WORDS: &[&str] = &[
    "and", "or", "but", "nor", "with", "to", "for", "in", "on", "at", "when", "if", "is", "are",
    "be", "was", "were", "which", "that", "as", "it", "its", "this", "these", "because", "so",
    "than", "then", "while", "component", "components", "element", "elements", "plugin",
    "plugins", "class", "classes", "module", "modules",
];

const CLAUSE_BREAKS: &[char] = &[',', ';', ':', '(', ')', '[', ']', '"'];

/// Capture the noun phrase at the start of `rest` (the text after a cue).
///
/// Capture is limited to the current sentence and clause and never exceeds
/// two words. Returns `None` when nothing usable follows the cue.
pub fn capture_phrase(rest: &str) -> Option<String> {
    let sentence = rest.split_sentence_bounds().next().unwrap_or_default();
    let clause = sentence.split(CLAUSE_BREAKS).next().unwrap_or_default();

    let mut captured: Vec<&str> = Vec::with_capacity(MAX_PHRASE_WORDS);
    for raw in clause.split_whitespace() {
        // inner hyphens survive ("off-canvas"), edge dashes do not
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            // bare punctuation or a lone dash ends the phrase
            break;
        }
        if captured.is_empty() && LEADING_SKIP.contains(&word) {
            continue;
        }
        if STOP_WORDS.contains(&word) {
            break;
        }
        captured.push(word);
        let ends_token = raw.ends_with(|c: char| matches!(c, '.' | '!' | '?'));
        if captured.len() == MAX_PHRASE_WORDS || ends_token {
            break;
        }
    }

    if captured.is_empty() {
        None
    } else {
        Some(captured.join(" "))
    }
}

/// Append `value` unless an entry equal under case folding already exists.
pub fn push_unique(list: &mut Vec<String>, value: impl Into<String>) -> bool {
    let value = value.into();
    let key = fold_key(&value);
    if key.is_empty() || list.iter().any(|existing| fold_key(existing) == key) {
        return false;
    }
    list.push(value);
    true
}

/// Truncate `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((boundary, _)) => format!("{}...", text[..boundary].trim_end()),
        None => text.to_string(),
    }
}
