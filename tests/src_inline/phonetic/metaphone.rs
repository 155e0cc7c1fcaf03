use super::*;

#[test]
fn test_reference_vectors() {
    assert_eq!(metaphone("Aubrey"), "ABR");
    assert_eq!(metaphone("Cathy"), "K0");
    assert_eq!(metaphone("Frances"), "FRNSS");
    assert_eq!(metaphone("Michael"), "MXL");
    assert_eq!(metaphone("Smith"), "SM0");
    assert_eq!(metaphone("Taylor"), "TLR");
    assert_eq!(metaphone("Katie"), "KT");
}

#[test]
fn test_initial_rules() {
    // silent first letter
    assert_eq!(metaphone("Knee"), "N");
    assert_eq!(metaphone("Gnome"), "NM");
    // X at the start sounds like S
    assert_eq!(metaphone("Xavier"), "SFR");
    // WH collapses to W
    assert_eq!(metaphone("Whale"), "WL");
}

#[test]
fn test_trailing_mb() {
    assert_eq!(metaphone("Thumb"), "0M");
}

#[test]
fn test_doubled_letters_collapse() {
    assert_eq!(metaphone("Lloyd"), "LT");
    assert_eq!(metaphone("Abbot"), "ABT");
}

#[test]
fn test_empty_and_symbols() {
    assert_eq!(metaphone(""), "");
    assert_eq!(metaphone("!?"), "");
    assert_eq!(metaphone("42"), "");
}

#[test]
fn test_bounded_length() {
    let code = metaphone_bounded("Supercalifragilistic", 4);
    assert!(code.len() <= 5);
    assert!(metaphone("Supercalifragilistic").starts_with(&code[..4]));
}
