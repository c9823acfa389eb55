use super::*;

#[test]
fn short_text_is_unchanged() {
    assert_eq!(excerpt("  Workshop de Solidity  ", 50), "Workshop de Solidity");
}

#[test]
fn long_text_is_cut_at_a_word() {
    assert_eq!(excerpt("Introdução a contratos inteligentes", 20), "Introdução a...");
}

#[test]
fn single_long_word_is_cut_hard() {
    assert_eq!(excerpt("abcdefghij", 4), "abcd...");
}
