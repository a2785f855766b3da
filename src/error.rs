use thiserror::Error as ThisError;

/// Broad category of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind
{   /// Rejected before any network I/O
    Precondition
  , /// Request body could not be serialized
    Encoding
  , /// Connection, DNS, TLS, timeout or body read failure
    Transport
  , /// Response body did not match the expected shape
    Decoding
}

/// Custom error type for gptcall operations
/// Implements Clone so results can be handed across tasks
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error
{   /// Required field is empty or whitespace only
    #[error("empty {0}")]
    EmptyField(&'static str)
  , /// Field is present but not usable
    #[error("invalid parameter: {0}")]
    InvalidParameter(String)
  , /// More stop sequences than the remote service accepts
    #[error("too many stop sequences: {0} (at most {max})"
      , max = crate::request::MAX_STOP_SEQUENCES)]
    TooManyStopSequences(usize)
  , /// Transport settings could not be applied
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String)
  , /// Failed to serialize the request body
    #[error("encode error: {0}")]
    EncodeError(String)
  , /// HTTP request error
    #[error("HTTP error: {0}")]
    HttpError(String)
  , /// Call exceeded its time bound
    #[error("request timed out")]
    Timeout
  , /// Failed to read the response body
    #[error("read error: {0}")]
    ReadError(String)
  , /// Failed to parse API response
    #[error("parse error: {0}")]
    ParseError(String)
}

impl Error
{   /// Category of this error
    pub fn kind(&self) -> ErrorKind
    {   match self
        {   Error::EmptyField(_)
          | Error::InvalidParameter(_)
          | Error::TooManyStopSequences(_)
          | Error::InvalidConfiguration(_) => ErrorKind::Precondition
          , Error::EncodeError(_) => ErrorKind::Encoding
          , Error::HttpError(_)
          | Error::Timeout
          | Error::ReadError(_) => ErrorKind::Transport
          , Error::ParseError(_) => ErrorKind::Decoding
        }
    }

    /// True when the call failed before reaching the network
    pub fn is_precondition(&self) -> bool
    {   self.kind() == ErrorKind::Precondition
    }
}

/// Fails with `EmptyField` when `value` is blank after trimming
pub(crate) fn require_non_blank(
  field: &'static str
, value: &str
) -> Result<(), Error>
{   if value.trim().is_empty()
    {   log::error!("Rejected call: empty {}", field);
        return Err(Error::EmptyField(field));
    }
    Ok(())
}
