use std::sync::LazyLock;

use regex::Regex;

/// Matches a word run (possibly with internal apostrophes) or a single
/// non-word, non-space character. Clitic splitting happens afterwards.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:'\w+)*|[^\w\s]").expect("token regex is valid"));

/// Contraction suffixes that split off their stem as a separate token.
const CLITICS: [&str; 6] = ["'s", "'m", "'d", "'ll", "'re", "'ve"];

/// Split free text into word tokens.
///
/// Word segmentation in the style of common NLP tokenizers: alphanumeric
/// runs are tokens, each punctuation character is its own token, and
/// contractions split into stem + clitic ("don't" becomes `do` + `n't`,
/// "it's" becomes `it` + `'s`). Deterministic for identical input; empty
/// input yields no tokens.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for token in TOKEN_RE.find_iter(text).map(|m| m.as_str()) {
        if !token.contains('\'') {
            tokens.push(token.to_string());
            continue;
        }
        let lower = token.to_lowercase();
        if lower.len() > 3 && lower.ends_with("n't") {
            let split = token.len() - 3;
            tokens.push(token[..split].to_string());
            tokens.push(token[split..].to_string());
        } else if let Some(clitic) = CLITICS.iter().find(|c| lower.ends_with(*c)) {
            let split = token.len() - clitic.len();
            if split > 0 {
                tokens.push(token[..split].to_string());
                tokens.push(token[split..].to_string());
            } else {
                tokens.push(token.to_string());
            }
        } else {
            // Internal apostrophe with no known clitic ("o'clock") stays whole.
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Number of word tokens in `text`. Empty or missing content counts as 0.
pub fn count_words(text: &str) -> usize {
    word_tokenize(text).len()
}
