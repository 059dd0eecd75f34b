use derive_more::{Display, Error};
use reqwest::StatusCode;

/// Precondition failures caught before anything is sent
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[display("no drink selected")]
    MissingDrink,
    #[display("custom drink has no ingredients")]
    NoSelections,
    #[display("ingredient #{index} is incomplete")]
    IncompleteSelection { index: usize },
    #[display("delivery address is required")]
    MissingAddress,
    #[display("branch is required")]
    MissingBranch,
    #[display("member id is required")]
    MissingMember,
    #[display("party size {_0} is out of range")]
    PeopleOutOfRange(#[error(not(source))] u8),
    #[display("unknown time slot {_0}")]
    UnknownTimeSlot(#[error(not(source))] String),
    #[display("email and password are required")]
    IncompleteLogin,
    #[display("please fill in all fields")]
    IncompleteSignUp,
}

#[derive(Debug, Display, Error)]
pub enum ClientError {
    #[display("transport error, {_0}")]
    Transport(reqwest::Error),
    #[display("unexpected response body, {_0}")]
    Decode(#[error(not(source))] String),
    #[display("got unexpected status code, {_0}")]
    Status(#[error(not(source))] StatusCode),
    #[display("invalid request, {_0}")]
    Validation(ValidationError),
    #[display("login rejected")]
    LoginRejected,
    #[display("session error, {_0}")]
    Session(#[error(not(source))] String),
    #[display("order not ready, {_0}")]
    Stage(#[error(not(source))] String),
    #[display("io error, {_0}")]
    Io(std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<ValidationError> for ClientError {
    fn from(e: ValidationError) -> Self {
        ClientError::Validation(e)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Io(e)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn validation_is_the_source() {
        let err = ClientError::from(ValidationError::IncompleteSelection { index: 2 });
        assert_eq!(err.to_string(), "invalid request, ingredient #2 is incomplete");
        assert!(err.source().is_some());
    }

    #[test]
    fn status_has_no_source() {
        let err = ClientError::Status(StatusCode::BAD_REQUEST);
        assert!(err.source().is_none());
        assert!(err.to_string().contains("400"));
    }
}
