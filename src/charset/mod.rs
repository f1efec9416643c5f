//! Character-set policies
//!
//! A fixed master alphabet and the named password types that select
//! contiguous ranges of it.

mod alphabet;
mod policy;

pub use alphabet::{
    ALPHABET, ALPHABET_LEN, DIGITS_START, LAST_INDEX, LOWERCASE_START, SYMBOLS_START,
    UPPERCASE_START,
};
pub use policy::PasswordType;
