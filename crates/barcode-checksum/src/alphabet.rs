//! Alphabet-indexed check characters.
//!
//! These algorithms sum the position of every input character inside a
//! symbology alphabet and map the result back into that alphabet.
//! Characters outside the alphabet contribute nothing.

/// CODE 39 character set, in check-value order.
pub const CODE39_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Codabar data characters.
pub const CODABAR_ALPHABET: &str = "0123456789-$:/.+";

/// Codabar data characters followed by the A-D start/stop characters.
pub const NW7_ALPHABET: &str = "0123456789-$:/.+ABCD";

/// Codabar characters including the alternate T, N, * and E start/stop set.
pub const NW7_EXTENDED_ALPHABET: &str = "0123456789-$:/.+ABCDTN*E";

/// Sum of alphabet indices, reduced modulo `modulus` as it goes.
fn index_sum(input: &str, alphabet: &str, modulus: usize) -> usize {
    input
        .chars()
        .filter_map(|c| alphabet.find(c))
        .fold(0, |sum, index| (sum + index) % modulus)
}

/// Alphabet character at `index`. All alphabets are ASCII, so byte and
/// character positions coincide.
fn symbol(alphabet: &str, index: usize) -> char {
    char::from(alphabet.as_bytes()[index])
}

/// Modulo 43 check character for CODE 39. Input is upper-cased first.
pub fn mod43(input: &str) -> char {
    let sum = index_sum(&input.to_uppercase(), CODE39_ALPHABET, 43);
    symbol(CODE39_ALPHABET, sum % 43)
}

/// Modulo 16 check character for Codabar. Matching is case-sensitive.
pub fn mod16(input: &str) -> char {
    let sum = index_sum(input, CODABAR_ALPHABET, 16);
    symbol(CODABAR_ALPHABET, sum % 16)
}

/// Japan NW-7 check character: the modulo 16 complement of the index sum.
pub fn japan_nw7(input: &str) -> char {
    let sum = index_sum(&input.to_uppercase(), NW7_ALPHABET, 16);
    symbol(NW7_ALPHABET, (16 - sum % 16) % 16)
}

/// Modulo 16 over the extended NW-7 alphabet.
///
/// Start/stop letters contribute their index, but the result always falls
/// in the first sixteen (data) characters.
pub fn mod16_japan(input: &str) -> char {
    let sum = index_sum(&input.to_uppercase(), NW7_EXTENDED_ALPHABET, 16);
    symbol(NW7_EXTENDED_ALPHABET, sum % 16)
}
