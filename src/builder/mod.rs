/*!
Tokenization and grammar construction helpers.

The tokenizer splits on single space characters only.
Consecutive separators yield empty-string tokens, and these are valid lookups, matching the phonologically-null items of the lexicon.
No trimming, casing, or punctuation handling happens here.
*/

pub mod fragment;

use crate::structures::{feature::Feature, formula::Formula, lexicon::LexicalItem};

/// The tokens of `input`, split on single spaces.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split(' ').map(str::to_owned).collect()
}

/// A lexical item from a compact description: a token, feature codes, and a meaning.
///
/// Each code is a category prefixed with `+` (licensor), `-` (licensee), or `~` (adjunct).
/// Codes without a recognized prefix are skipped with a warning.
pub fn item(token: &str, codes: &[&str], meaning: Formula) -> LexicalItem {
    let mut features = Vec::default();
    for code in codes {
        if code.len() < 2 {
            log::warn!("Unrecognized feature code \"{code}\"");
            continue;
        }
        let feature = match code.split_at(1) {
            ("+", category) => Feature::licensor(category),
            ("-", category) => Feature::licensee(category),
            ("~", category) => Feature::adjunct(category),
            _ => {
                log::warn!("Unrecognized feature code \"{code}\"");
                continue;
            }
        };
        features.push(feature);
    }
    LexicalItem::new(token, features, meaning)
}
