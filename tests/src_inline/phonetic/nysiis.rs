use super::*;

#[test]
fn test_reference_vectors() {
    assert_eq!(nysiis("Dougal"), "DAGAL");
    assert_eq!(nysiis("Dowell"), "DAL");
    assert_eq!(nysiis("Doughty"), "DAGTY");
    assert_eq!(nysiis("MacIntosh"), "MCANT");
    assert_eq!(nysiis("Schmidt"), "SNAD");
}

#[test]
fn test_prefix_rules() {
    assert_eq!(nysiis("Knight"), "NAGT");
    assert_eq!(nysiis("Phillipson"), "FALAPS");
}

#[test]
fn test_ev_keeps_both_letters() {
    assert_eq!(nysiis("Stevens"), "STAFAN");
    assert_eq!(nysiis("Devon"), "DAFAN");
    assert_eq!(nysiis("Bevan"), "BAFAN");
    assert_eq!(nysiis("Levy"), "LAFY");
}

#[test]
fn test_truncated_to_six() {
    for word in ["Phillipson", "Wolstenholme", "Bartholomew"] {
        assert!(nysiis(word).chars().count() <= NYSIIS_MAX_LEN);
    }
}

#[test]
fn test_empty_and_symbols() {
    assert_eq!(nysiis(""), "");
    assert_eq!(nysiis("12-"), "");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(nysiis("dougal"), nysiis("DOUGAL"));
}
