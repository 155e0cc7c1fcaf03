use unicode_normalization::UnicodeNormalization;

/// Class digit for `A..=Z`. `0` marks vowels (dropped after collapsing),
/// `9` marks `H`/`W` (dropped before collapsing, so they do not separate duplicates).
const SOUNDEX_CLASSES: &[u8; 26] = b"01230129022455012623019202";

pub const SOUNDEX_LEN: usize = 4;

/// American Soundex: first letter plus three class digits, zero padded.
///
/// Accented letters are decomposed (NFKD) to their base letter; anything else
/// outside `A..=Z` is ignored. A token with no such letter encodes as `0000`.
pub fn soundex(word: &str) -> String {
    let letters = word
        .to_uppercase()
        .nfkd()
        .filter(|c| c.is_ascii_uppercase())
        .collect::<Vec<_>>();
    let Some(&first) = letters.first() else {
        return "0".repeat(SOUNDEX_LEN);
    };

    let mut classes = letters
        .iter()
        .map(|&c| SOUNDEX_CLASSES[(c as u8 - b'A') as usize])
        .filter(|&d| d != b'9')
        .collect::<Vec<_>>();
    classes.dedup();

    // An initial H or W has no digit of its own, so nothing is consumed by the letter.
    let tail = if first == 'H' || first == 'W' {
        &classes[..]
    } else {
        &classes[1..]
    };

    let mut code = String::with_capacity(SOUNDEX_LEN + tail.len());
    code.push(first);
    for &d in tail {
        if d != b'0' {
            code.push(d as char);
        }
    }
    while code.len() < SOUNDEX_LEN {
        code.push('0');
    }
    code.truncate(SOUNDEX_LEN);
    code
}

#[cfg(test)]
#[path = "../../tests/src_inline/phonetic/soundex.rs"]
mod tests;
