pub const NYSIIS_MAX_LEN: usize = 6;

/// NYSIIS key, truncated to six characters.
pub fn nysiis(word: &str) -> String {
    let mut w = word
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphabetic())
        .collect::<Vec<_>>();
    if w.is_empty() {
        return String::new();
    }

    if w.starts_with(&['M', 'A', 'C']) {
        w[1] = 'C';
    } else if w.starts_with(&['K', 'N']) {
        w[0] = 'N';
    } else if w[0] == 'K' {
        w[0] = 'C';
    } else if w.starts_with(&['P', 'H']) || w.starts_with(&['P', 'F']) {
        w[0] = 'F';
        w[1] = 'F';
    } else if w.starts_with(&['S', 'C', 'H']) {
        w[1] = 'S';
        w[2] = 'S';
    }

    let n = w.len();
    if n >= 2 {
        match (w[n - 2], w[n - 1]) {
            ('E' | 'I', 'E') => {
                w.truncate(n - 2);
                w.push('Y');
            }
            ('D' | 'R' | 'N', 'T') | ('R' | 'N', 'D') => {
                w.truncate(n - 2);
                w.push('D');
            }
            _ => {}
        }
    }

    let mut key = vec![w[0]];
    let mut skip = 0usize;
    let initial_len = w.len();
    for i in 1..initial_len {
        // KN -> N shortens the word as we go
        if i >= w.len() {
            continue;
        }
        if skip > 0 {
            skip -= 1;
            continue;
        }

        if w[i..].starts_with(&['E', 'V']) {
            w[i] = 'A';
            w[i + 1] = 'F';
            skip = 1;
        } else if is_vowel(w[i]) {
            w[i] = 'A';
        } else if w[i] == 'Q' {
            w[i] = 'G';
        } else if w[i] == 'Z' {
            w[i] = 'S';
        } else if w[i] == 'M' {
            w[i] = 'N';
        } else if w[i..].starts_with(&['K', 'N']) {
            w.remove(i);
        } else if w[i] == 'K' {
            w[i] = 'C';
        } else if w[i..].starts_with(&['S', 'C', 'H']) {
            w[i + 1] = 'S';
            w[i + 2] = 'S';
            skip = 2;
        } else if w[i..].starts_with(&['P', 'H']) {
            w[i] = 'F';
            w[i + 1] = 'F';
            skip = 1;
        } else if w[i] == 'H'
            && (!is_vowel(w[i - 1]) || !w.get(i + 1).copied().is_some_and(is_vowel))
        {
            w[i] = w[i - 1];
        } else if w[i] == 'W' && is_vowel(w[i - 1]) {
            w[i] = w[i - 1];
        }

        // rewrites such as EV -> AF emit their whole span
        for &c in &w[i..=i + skip] {
            if key.last() != Some(&c) {
                key.push(c);
            }
        }
    }

    if key.last() == Some(&'S') {
        key.pop();
    }
    if key.ends_with(&['A', 'Y']) {
        let len = key.len();
        key.remove(len - 2);
    }
    if key.last() == Some(&'A') {
        key.pop();
    }

    key.truncate(NYSIIS_MAX_LEN);
    key.into_iter().collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

#[cfg(test)]
#[path = "../../tests/src_inline/phonetic/nysiis.rs"]
mod tests;
