//! Errors that can happen while building a [`Dictionary`](crate::Dictionary) or generating
//! sentences from it.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

use crate::token::Token;

#[derive(Error, Debug)]
pub enum Error {
    /// Storage for a word, the dictionary or a successor list could not be grown.
    #[error("allocation failure: allocation has failed")]
    Allocation,

    #[error("word `{0}` is already in the dictionary")]
    DuplicateWord(Token),

    /// Every word in the dictionary ends a sentence, so there is nothing to start one with.
    #[error("the dictionary has no words that can start a sentence")]
    NoStartWords,

    #[error("word `{word}` has no recorded successors")]
    NoSuccessors { word: Token },

    /// The successors of `word` only account for `covered` of its occurrences, but position
    /// `position` was drawn.
    #[error("successors of `{word}` cover {covered} occurrences, but position {position} was drawn")]
    MalformedDrawState {
        word: Token,
        position: usize,
        covered: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::Allocation
    }
}

impl From<hashbrown::TryReserveError> for Error {
    fn from(_: hashbrown::TryReserveError) -> Self {
        Error::Allocation
    }
}
