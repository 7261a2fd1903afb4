//! DHCP message serialization module.

use std::io;

use bytes::{Buf, BufMut};

use crate::{constants::*, error::Error, options::OptionTag, Discover, Header};

/// Checks if there is enough space in the buffer to put a value.
macro_rules! check_remaining(
    ($cursor:expr, $length:expr) => (
        if $cursor.remaining() < $length {
            return Err(Error::MalformedInput {
                expected: $cursor.position() as usize + $length,
                actual: $cursor.get_ref().len(),
            });
        }
    );
);

impl Header {
    /// Writes the fixed header octets in wire order.
    ///
    /// # Errors
    /// `Error::MalformedInput` if the buffer cannot hold `SIZE_HEADER` bytes.
    pub fn to_bytes(&self, cursor: &mut io::Cursor<&mut [u8]>) -> Result<(), Error> {
        check_remaining!(cursor, SIZE_HEADER);
        cursor.put_u8(self.operation_code);
        cursor.put_u8(self.hardware_type);
        cursor.put_u8(self.hardware_address_length);
        cursor.put_u8(self.hardware_options);
        cursor.put(&self.transaction_id[..]);
        cursor.put(&self.seconds[..]);
        cursor.put(&self.flags[..]);
        cursor.put(&self.client_ip_address[..]);
        cursor.put(&self.your_ip_address[..]);
        cursor.put(&self.server_ip_address[..]);
        cursor.put(&self.gateway_ip_address[..]);
        cursor.put(&self.client_hardware_address[..]);
        Ok(())
    }
}

impl Discover {
    /// DHCP message serialization.
    ///
    /// Writes the header, the magic cookie, the populated options and the
    /// end octet into `dst` and returns the number of bytes written.
    /// Options are written in ascending code order; receivers must not
    /// rely on it.
    ///
    /// # Errors
    /// `Error::MalformedInput` if the buffer is too small and
    /// `Error::UnsupportedFieldLength` if an option value cannot be
    /// described by its one-octet length.
    pub fn to_bytes(&self, dst: &mut [u8]) -> Result<usize, Error> {
        let mut cursor = io::Cursor::new(dst);
        self.header.to_bytes(&mut cursor)?;

        check_remaining!(cursor, MAGIC_COOKIE.len());
        cursor.put(MAGIC_COOKIE);

        Self::put_option(&mut cursor, OptionTag::SubnetMask, &self.options.subnet_mask)?;
        Self::put_option(&mut cursor, OptionTag::Routers, &self.options.routers)?;
        Self::put_option(
            &mut cursor,
            OptionTag::DomainNameServers,
            &self.options.domain_name_servers,
        )?;
        Self::put_option(
            &mut cursor,
            OptionTag::AddressTime,
            &self.options.address_time,
        )?;
        Self::put_option(
            &mut cursor,
            OptionTag::DhcpMessageType,
            &self.options.dhcp_message_type,
        )?;
        Self::put_option(
            &mut cursor,
            OptionTag::DhcpServerId,
            &self.options.dhcp_server_id,
        )?;
        Self::put_option(
            &mut cursor,
            OptionTag::ParameterList,
            &self.options.parameter_list,
        )?;
        Self::put_option(&mut cursor, OptionTag::ClientId, &self.options.client_id)?;

        check_remaining!(cursor, 1);
        cursor.put_u8(OptionTag::End as u8);
        Ok(cursor.position() as usize)
    }

    fn put_option(
        cursor: &mut io::Cursor<&mut [u8]>,
        tag: OptionTag,
        value: &Option<Vec<u8>>,
    ) -> Result<(), Error> {
        if let Some(ref value) = value {
            if value.len() > SIZE_OPTION_MAX {
                return Err(Error::UnsupportedFieldLength {
                    field: tag.name(),
                    expected: SIZE_OPTION_MAX,
                    actual: value.len(),
                });
            }
            check_remaining!(cursor, SIZE_OPTION_PREFIX + value.len());
            cursor.put_u8(tag as u8);
            cursor.put_u8(value.len() as u8);
            cursor.put(&value[..]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eui48::MacAddress;

    const MAC: [u8; 6] = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];

    fn discover() -> Discover {
        Discover::new(MacAddress::new(MAC))
    }

    #[test]
    fn discover_wire_layout() {
        let message = discover();
        let mut buffer = [0u8; SIZE_MESSAGE_MINIMAL];
        let size = message.to_bytes(&mut buffer).unwrap();

        assert_eq!(size, 65);
        assert_eq!(&buffer[..4], &[0x01, 0x01, 0x06, 0x00]);
        assert_eq!(&buffer[4..8], &message.header.transaction_id[..]);
        assert_eq!(&buffer[8..12], &[0x00, 0x00, 0x80, 0x00]);
        assert_eq!(&buffer[12..28], &[0u8; 16][..]);
        assert_eq!(
            &buffer[28..44],
            &[
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x00
            ][..]
        );
        assert_eq!(&buffer[44..48], MAGIC_COOKIE);
        assert_eq!(&buffer[48..51], &[0x35, 0x01, 0x01]);
        assert_eq!(&buffer[51..56], &[0x37, 0x03, 0x03, 0x01, 0x06]);
        assert_eq!(
            &buffer[56..64],
            &[0x3d, 0x06, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55][..]
        );
        assert_eq!(buffer[64], 0xff);
    }

    #[test]
    fn discovers_differ_only_in_transaction_id() {
        let mut first = [0u8; SIZE_MESSAGE_MINIMAL];
        let mut second = [0u8; SIZE_MESSAGE_MINIMAL];
        let first_size = discover().to_bytes(&mut first).unwrap();
        let second_size = discover().to_bytes(&mut second).unwrap();

        assert_eq!(first_size, second_size);
        let xid = OFFSET_TRANSACTION_ID..OFFSET_TRANSACTION_ID + SIZE_TRANSACTION_ID;
        for position in 0..first_size {
            if xid.contains(&position) {
                continue;
            }
            assert_eq!(first[position], second[position], "byte {}", position);
        }
    }

    #[test]
    fn oversized_option_value_is_rejected() {
        let mut message = discover();
        message.options.parameter_list = Some(vec![0u8; SIZE_OPTION_MAX + 1]);

        let mut buffer = [0u8; SIZE_MESSAGE_MINIMAL];
        match message.to_bytes(&mut buffer) {
            Err(Error::UnsupportedFieldLength {
                field, expected, ..
            }) => {
                assert_eq!(field, "PARAMETER_REQUEST_LIST");
                assert_eq!(expected, SIZE_OPTION_MAX);
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn undersized_buffer_is_rejected() {
        let mut buffer = [0u8; SIZE_HEADER - 1];
        match discover().to_bytes(&mut buffer) {
            Err(Error::MalformedInput { .. }) => {}
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
