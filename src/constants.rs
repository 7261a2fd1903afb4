//! DHCP wire format constants.
//!
//! The single place the fixed header layout is written down; both the
//! serializer and the deserializer consume it.

/// The fixed header size in bytes.
pub const SIZE_HEADER: usize = 44;

/// `transaction_id` size in bytes.
pub const SIZE_TRANSACTION_ID: usize = 4;

/// `seconds` size in bytes.
pub const SIZE_SECONDS: usize = 2;

/// `flags` size in bytes.
pub const SIZE_FLAGS: usize = 2;

/// Size of each of the four header address fields in bytes.
pub const SIZE_IP_ADDRESS: usize = 4;

/// `client_hardware_address` size in bytes.
///
/// Oversized to accommodate link layers other than Ethernet.
pub const SIZE_HARDWARE_ADDRESS: usize = 16;

/// The `transaction_id` field offset in bytes.
pub const OFFSET_TRANSACTION_ID: usize = 4;

/// The option code and length octets preceding each option value.
pub const SIZE_OPTION_PREFIX: usize = 2;

/// The largest option value a one-octet length can describe.
pub const SIZE_OPTION_MAX: usize = 255;

/// The minimal message size the client MUST be able to accept.
pub const SIZE_MESSAGE_MINIMAL: usize = 576;

/// Only the highest bit of the `flags` field is used in DHCP.
pub const FLAG_BROADCAST: u16 = 0b1000000000000000;

/// The magic number before the DHCP options.
pub const MAGIC_COOKIE: &[u8] = &[0x63, 0x82, 0x53, 0x63];
