//! Master alphabet shared by every password type
//!
//! The order is fixed: uppercase letters, lowercase letters, digits, symbols.
//! Password types address it by inclusive index ranges, so reordering any
//! band changes what every type generates.

/// Number of characters in the master alphabet
pub const ALPHABET_LEN: usize = 97;

/// First index of the uppercase band
pub const UPPERCASE_START: usize = 0;

/// First index of the lowercase band
pub const LOWERCASE_START: usize = 26;

/// First index of the digit band
pub const DIGITS_START: usize = 52;

/// First index of the symbol band
pub const SYMBOLS_START: usize = 62;

/// Last valid index
pub const LAST_INDEX: usize = ALPHABET_LEN - 1;

/// All drawable characters. The last three symbols are not ASCII, so password
/// lengths are counted in `char`s, not bytes.
#[rustfmt::skip]
pub const ALPHABET: [char; ALPHABET_LEN] = [
    // Uppercase
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    // Lowercase
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    // Digits
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    // Symbols
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`',
    '{', '|', '}', '~', '£', '€', '§',
];
