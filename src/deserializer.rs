//! DHCP message deserialization module.

use std::{io, mem};

use bytes::Buf;

use crate::{
    constants::*,
    error::Error,
    options::{OptionTag, Options},
    Header, Offer,
};

/// Checks if there are enough bytes left in the options region.
macro_rules! check_remaining(
    ($cursor:expr, $tag:expr, $length:expr) => (
        if $cursor.remaining() < $length {
            return Err(Error::TruncatedOption {
                tag: $tag,
                length: $length,
                remaining: $cursor.remaining(),
            });
        }
    );
);

/// Reads a fixed-width header field off the cursor.
macro_rules! get_field(
    ($cursor:expr, $size:expr) => ({
        let mut field = [0u8; $size];
        $cursor.copy_to_slice(&mut field);
        field
    });
);

impl Header {
    /// Slices the fixed header off the front of `src`.
    ///
    /// # Errors
    /// `Error::MalformedInput` if fewer than `SIZE_HEADER` bytes are
    /// available.
    pub fn from_bytes(src: &[u8]) -> Result<Self, Error> {
        if src.len() < SIZE_HEADER {
            return Err(Error::MalformedInput {
                expected: SIZE_HEADER,
                actual: src.len(),
            });
        }

        let mut cursor = io::Cursor::new(src);
        Ok(Header {
            operation_code: cursor.get_u8(),
            hardware_type: cursor.get_u8(),
            hardware_address_length: cursor.get_u8(),
            hardware_options: cursor.get_u8(),
            transaction_id: get_field!(cursor, SIZE_TRANSACTION_ID),
            seconds: get_field!(cursor, SIZE_SECONDS),
            flags: get_field!(cursor, SIZE_FLAGS),
            client_ip_address: get_field!(cursor, SIZE_IP_ADDRESS),
            your_ip_address: get_field!(cursor, SIZE_IP_ADDRESS),
            server_ip_address: get_field!(cursor, SIZE_IP_ADDRESS),
            gateway_ip_address: get_field!(cursor, SIZE_IP_ADDRESS),
            client_hardware_address: get_field!(cursor, SIZE_HARDWARE_ADDRESS),
        })
    }
}

impl Offer {
    /// DHCP message deserialization.
    ///
    /// Decodes the fixed header from the front of `src` and the
    /// recognized options from the region after the magic cookie. The
    /// region's trailing octet is the end marker and is discarded.
    ///
    /// # Errors
    /// `Error::MalformedInput` if the header is truncated,
    /// `Error::MissingFraming` if the magic cookie is absent and
    /// `Error::TruncatedOption` if a length octet points past the end of
    /// the buffer.
    pub fn from_bytes(src: &[u8]) -> Result<Self, Error> {
        let header = Header::from_bytes(src)?;

        let cookie = src
            .windows(MAGIC_COOKIE.len())
            .position(|window| window == MAGIC_COOKIE)
            .ok_or(Error::MissingFraming)?;
        let region = &src[cookie + MAGIC_COOKIE.len()..];
        let region = match region.split_last() {
            Some((_, head)) => head,
            None => region,
        };

        let mut options = Options::default();
        let mut cursor = io::Cursor::new(region);
        while cursor.remaining() > 0 {
            let tag = cursor.get_u8();
            match OptionTag::from(tag) {
                OptionTag::End => break,
                OptionTag::Pad => continue,
                recognized => {
                    check_remaining!(cursor, tag, mem::size_of::<u8>());
                    let length = cursor.get_u8() as usize;
                    check_remaining!(cursor, tag, length);
                    let value = cursor.bytes()[..length].to_vec();
                    cursor.advance(length);

                    if let OptionTag::Unknown = recognized {
                        trace!("Skipping unknown option {}", tag);
                    } else {
                        options.set(recognized, value);
                    }
                }
            }
        }

        Ok(Offer { header, options })
    }
}
