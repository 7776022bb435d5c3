//! At the heart of a [`Dictionary`](crate::Dictionary) is a [`Token`]. In fact, this is just a
//! String. But we make a distinction here: A Token is a contiguous run of non-whitespace text,
//! kept exactly as it appeared in the corpus. `"word,"` and `"word"` are different tokens.
//!
//! A token whose last character is a [`FULL_STOP`] is *terminal*; it ends a sentence.

use crate::error::Result;

/// Representation of a string segment.
pub type Token = String;

/// A borrowed version of [`Token`]; if [`Token`] is [`String`], then [`TokenRef`] is `&str`.
pub type TokenRef<'a> = &'a str;

/// The character that marks the end of a sentence.
pub const FULL_STOP: char = '.';

/// Checks if this token ends a sentence.
///
/// ```
/// # use tweetish::token::is_terminal;
/// assert!(is_terminal("sat."));
/// assert!(!is_terminal("sat"));
/// assert!(!is_terminal("sat.\""));
/// ```
pub fn is_terminal(token: TokenRef<'_>) -> bool {
    token.ends_with(FULL_STOP)
}

/// Splits `content` into tokens. Spaces and newlines (and any other whitespace) separate
/// tokens, and are never part of one.
pub fn tokenize(content: &str) -> impl Iterator<Item = TokenRef<'_>> {
    content.split_whitespace()
}

/// Copies a borrowed token into an owned one, reporting allocation failure instead of aborting.
pub(crate) fn to_owned_token(token: TokenRef<'_>) -> Result<Token> {
    let mut owned = Token::new();
    owned.try_reserve_exact(token.len())?;
    owned.push_str(token);
    Ok(owned)
}
