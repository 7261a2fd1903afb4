//! The wire codec error module.

use failure::Fail;

/// Returned by the message codecs.
///
/// Every failure is local and synchronous; nothing is retried here and no
/// partially decoded message is ever returned.
#[derive(Debug, Fail)]
pub enum Error {
    /// The buffer ends before the fixed part of the message does.
    #[fail(
        display = "Buffer is {} bytes long but at least {} are required",
        actual, expected
    )]
    MalformedInput { expected: usize, actual: usize },

    /// The options magic cookie is absent from the buffer.
    #[fail(display = "Magic cookie not found")]
    MissingFraming,

    /// An option length octet points past the end of the buffer.
    #[fail(
        display = "Option {} declares {} value bytes but only {} remain",
        tag, length, remaining
    )]
    TruncatedOption {
        tag: u8,
        length: usize,
        remaining: usize,
    },

    /// A field value does not fit its wire format slot.
    #[fail(
        display = "Field {} is {} bytes long but the wire format holds {}",
        field, actual, expected
    )]
    UnsupportedFieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
