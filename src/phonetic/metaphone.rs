/// Upper bound on code length; long enough that ordinary words are never cut.
pub const METAPHONE_MAX_LEN: usize = 64;

const INITIAL_SILENT: [[char; 2]; 5] = [['P', 'N'], ['A', 'E'], ['K', 'N'], ['G', 'N'], ['W', 'R']];

/// Original (Lawrence Philips) Metaphone. `0` stands for the `TH` sound.
pub fn metaphone(word: &str) -> String {
    metaphone_bounded(word, METAPHONE_MAX_LEN)
}

pub fn metaphone_bounded(word: &str, max_len: usize) -> String {
    let max_len = max_len.max(4);
    let mut name = word
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphanumeric())
        .collect::<Vec<_>>();
    if name.is_empty() {
        return String::new();
    }

    if name.len() >= 2 && INITIAL_SILENT.contains(&[name[0], name[1]]) {
        name.remove(0);
    } else if name[0] == 'X' {
        name[0] = 'S';
    } else if name.starts_with(&['W', 'H']) {
        name.remove(1);
    }

    let last = name.len() - 1;
    let at = |i: usize| name.get(i).copied();
    let mut code = String::new();

    for i in 0..name.len() {
        if code.len() >= max_len {
            break;
        }
        let c = name[i];
        let prev = if i > 0 { Some(name[i - 1]) } else { None };
        let next = at(i + 1);
        let next2 = at(i + 2);

        if c != 'G' && c != 'T' && prev == Some(c) {
            continue;
        }

        match c {
            _ if i == 0 && is_vowel(c) => code.push(c),
            'B' => {
                // silent in a trailing MB
                if i != last || prev != Some('M') {
                    code.push('B');
                }
            }
            'C' => {
                let soft_after_s = prev == Some('S') && next.is_some_and(is_front_vowel);
                if !soft_after_s {
                    if next == Some('I') && next2 == Some('A') {
                        code.push('X');
                    } else if next.is_some_and(is_front_vowel) {
                        code.push('S');
                    } else if prev == Some('S') && next == Some('H') {
                        code.push('K');
                    } else if next == Some('H') {
                        if i == 0 && i + 1 < last && !next2.is_some_and(is_vowel) {
                            code.push('K');
                        } else {
                            code.push('X');
                        }
                    } else {
                        code.push('K');
                    }
                }
            }
            'D' => {
                if next == Some('G') && next2.is_some_and(is_front_vowel) {
                    code.push('J');
                } else {
                    code.push('T');
                }
            }
            'G' => {
                let silent_gh =
                    next == Some('H') && !(i + 1 == last || !next2.is_some_and(is_vowel));
                let silent_gn = i > 0
                    && ((i + 1 == last && next == Some('N'))
                        || (i + 3 == last && name[i + 1..=i + 3] == ['N', 'E', 'D']));
                let silent_dge = i > 1
                    && i < last
                    && prev == Some('D')
                    && next.is_some_and(is_front_vowel);
                if silent_gh || silent_gn || silent_dge || next == Some('G') {
                    // dropped
                } else if next.is_some_and(is_front_vowel) {
                    if i == 0 || prev != Some('G') {
                        code.push('J');
                    } else {
                        code.push('K');
                    }
                } else {
                    code.push('K');
                }
            }
            'H' => {
                let after_vowel = prev.is_some_and(is_vowel) && !next.is_some_and(is_vowel);
                let after_varson = prev.is_some_and(is_varson);
                if !after_vowel && !after_varson {
                    code.push('H');
                }
            }
            'F' | 'J' | 'L' | 'M' | 'N' | 'R' => code.push(c),
            'K' => {
                if prev != Some('C') {
                    code.push('K');
                }
            }
            'P' => code.push(if next == Some('H') { 'F' } else { 'P' }),
            'Q' => code.push('K'),
            'S' => {
                if i > 0 && i + 2 <= last && next == Some('I') && matches!(next2, Some('O' | 'A')) {
                    code.push('X');
                } else if next == Some('H') {
                    code.push('X');
                } else {
                    code.push('S');
                }
            }
            'T' => {
                if i > 0 && i + 2 <= last && next == Some('I') && matches!(next2, Some('O' | 'A')) {
                    code.push('X');
                } else if next == Some('H') {
                    code.push('0');
                } else if !(next == Some('C') && next2 == Some('H')) && prev != Some('T') {
                    code.push('T');
                }
            }
            'V' => code.push('F'),
            'W' | 'Y' => {
                if next.is_some_and(is_vowel) {
                    code.push(c);
                }
            }
            'X' => code.push_str("KS"),
            'Z' => code.push('S'),
            _ => {}
        }
    }

    code
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

fn is_front_vowel(c: char) -> bool {
    matches!(c, 'E' | 'I' | 'Y')
}

/// Letters that absorb a following `H` (`CH`, `GH`, `PH`, `SH`, `TH`).
fn is_varson(c: char) -> bool {
    matches!(c, 'C' | 'G' | 'P' | 'S' | 'T')
}

#[cfg(test)]
#[path = "../../tests/src_inline/phonetic/metaphone.rs"]
mod tests;
