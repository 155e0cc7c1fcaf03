use serde::{Deserialize, Serialize};

/// Which rule set to run. `Original` pads to 6 characters, `Revised` (Caverphone 2.0) to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaverphoneVersion {
    #[default]
    Original,
    Revised,
}

impl CaverphoneVersion {
    pub fn code_len(self) -> usize {
        match self {
            CaverphoneVersion::Original => 6,
            CaverphoneVersion::Revised => 10,
        }
    }
}

const BASE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("cq", "2q"),
    ("ci", "si"),
    ("ce", "se"),
    ("cy", "sy"),
    ("tch", "2ch"),
    ("c", "k"),
    ("q", "k"),
    ("x", "k"),
    ("v", "f"),
    ("dg", "2g"),
    ("tio", "sio"),
    ("tia", "sia"),
    ("d", "t"),
    ("ph", "fh"),
    ("b", "p"),
    ("sh", "s2"),
    ("z", "s"),
];

/// Caverphone code using the original six-character rule set.
pub fn caverphone(word: &str) -> String {
    caverphone_versioned(word, CaverphoneVersion::Original)
}

/// Caverphone code for the given rule set. `2` marks a deleted letter,
/// `3` a vowel placeholder; both are removed before padding with `1`.
pub fn caverphone_versioned(word: &str, version: CaverphoneVersion) -> String {
    let revised = version == CaverphoneVersion::Revised;
    let mut w = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect::<String>();

    if revised && w.ends_with('e') {
        w.pop();
    }

    if !w.is_empty() {
        w = replace_prefix(w, "cough", "cou2f");
        w = replace_prefix(w, "rough", "rou2f");
        w = replace_prefix(w, "tough", "tou2f");
        w = replace_prefix(w, "enough", "enou2f");
        if revised {
            w = replace_prefix(w, "trough", "trou2f");
        }
        w = replace_prefix(w, "gn", "2n");
        w = replace_suffix(w, "mb", "m2");

        for (from, to) in BASE_SUBSTITUTIONS {
            w = w.replace(from, to);
        }

        if w.starts_with(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            w.replace_range(..1, "A");
        }
        for vowel in ["a", "e", "i", "o", "u"] {
            w = w.replace(vowel, "3");
        }
        if revised {
            w = w.replace('j', "y");
            w = replace_prefix(w, "y3", "Y3");
            w = replace_prefix(w, "y", "A");
            w = w.replace('y', "3");
        }
        w = w.replace("3gh3", "3kh3");
        w = w.replace("gh", "22");
        w = w.replace('g', "k");

        for letter in ['s', 't', 'p', 'k', 'f', 'm', 'n'] {
            w = squeeze_upper(w, letter);
        }

        w = w.replace("w3", "W3");
        if !revised {
            w = w.replace("wy", "Wy");
        }
        w = w.replace("wh3", "Wh3");
        if !revised {
            w = w.replace("why", "Why");
        }
        if revised {
            w = replace_suffix(w, "w", "3");
        }
        w = w.replace('w', "2");
        w = replace_prefix(w, "h", "A");
        w = w.replace('h', "2");

        w = w.replace("r3", "R3");
        if revised {
            w = replace_suffix(w, "r", "3");
        } else {
            w = w.replace("ry", "Ry");
        }
        w = w.replace('r', "2");

        w = w.replace("l3", "L3");
        if revised {
            w = replace_suffix(w, "l", "3");
        } else {
            w = w.replace("ly", "Ly");
        }
        w = w.replace('l', "2");

        if !revised {
            w = w.replace('j', "y");
            w = w.replace("y3", "Y3");
            w = w.replace('y', "2");
        }
        w = w.replace('2', "");
        if revised {
            w = replace_suffix(w, "3", "A");
        }
        w = w.replace('3', "");
    }

    let len = version.code_len();
    w.extend(std::iter::repeat_n('1', len));
    w.truncate(len);
    w
}

fn replace_prefix(word: String, from: &str, to: &str) -> String {
    match word.strip_prefix(from) {
        Some(rest) => format!("{to}{rest}"),
        None => word,
    }
}

fn replace_suffix(word: String, from: &str, to: &str) -> String {
    match word.strip_suffix(from) {
        Some(rest) => format!("{rest}{to}"),
        None => word,
    }
}

/// Collapse runs of `letter` to one and mark it as kept by upper-casing it.
fn squeeze_upper(word: String, letter: char) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if c == letter && out.ends_with(letter) {
            continue;
        }
        out.push(c);
    }
    out.replace(letter, &letter.to_ascii_uppercase().to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/phonetic/caverphone.rs"]
mod tests;
