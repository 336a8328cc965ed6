use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A vote row holds a direction other than `"up"` or `"down"`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown vote direction '{0}' stored in database")]
    InvalidVoteDirection(String),

    /// A message's score does not fit the `message.vote_count` column.
    #[error("Vote score {0} does not fit the stored vote count")]
    VoteCountOutOfRange(i64),

    /// Hashing or parsing a stored password hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
