//! The DHCP discovery wire format implementation.
//!
//! Builds DHCPDISCOVER packets from a client hardware address and parses
//! DHCPOFFER packets received in response. Transport, retries and lease
//! bookkeeping belong to the caller; this crate only exchanges raw byte
//! buffers with it.

#[macro_use]
extern crate log;

mod constants;
mod deserializer;
mod error;
mod hardware_type;
mod operation_code;
mod options;
mod serializer;

pub use self::{
    constants::*,
    error::Error,
    hardware_type::HardwareType,
    operation_code::OperationCode,
    options::{MessageType, OptionTag, Options},
};

use std::fmt;

use eui48::{MacAddress, EUI48LEN};
use rand::Rng;

/// The fixed part of a DHCP message.
///
/// Fields are kept as raw octets in wire order. Multi-byte fields are
/// network order on the wire but are never interpreted numerically here.
#[derive(Debug, Clone)]
pub struct Header {
    pub operation_code: u8,
    pub hardware_type: u8,
    pub hardware_address_length: u8,
    pub hardware_options: u8,
    pub transaction_id: [u8; SIZE_TRANSACTION_ID],
    pub seconds: [u8; SIZE_SECONDS],
    pub flags: [u8; SIZE_FLAGS],
    pub client_ip_address: [u8; SIZE_IP_ADDRESS],
    pub your_ip_address: [u8; SIZE_IP_ADDRESS],
    pub server_ip_address: [u8; SIZE_IP_ADDRESS],
    pub gateway_ip_address: [u8; SIZE_IP_ADDRESS],
    pub client_hardware_address: [u8; SIZE_HARDWARE_ADDRESS],
}

/// An outbound DHCPDISCOVER message.
///
/// Built once from the client hardware address. The transaction ID is
/// drawn at construction and serialization is deterministic afterwards.
pub struct Discover {
    pub header: Header,
    pub options: Options,
}

/// An inbound DHCPOFFER message.
///
/// A structural decomposition of whatever bytes were received; checking
/// the operation code and the message type is left to the caller.
pub struct Offer {
    pub header: Header,
    pub options: Options,
}

impl Discover {
    /// Constructs a broadcast DHCPDISCOVER for `client_hardware_address`.
    ///
    /// The transaction ID octets are drawn independently at random. They
    /// keep concurrent exchanges apart and are not a secret.
    pub fn new(client_hardware_address: MacAddress) -> Self {
        let transaction_id = rand::thread_rng().gen::<[u8; SIZE_TRANSACTION_ID]>();
        trace!("Transaction ID {:02x?}", transaction_id);

        let mut hardware_address = [0u8; SIZE_HARDWARE_ADDRESS];
        hardware_address[..EUI48LEN].copy_from_slice(client_hardware_address.as_bytes());

        let header = Header {
            operation_code: OperationCode::BootRequest as u8,
            hardware_type: HardwareType::Ethernet as u8,
            hardware_address_length: EUI48LEN as u8,
            hardware_options: 0u8,
            transaction_id,
            seconds: [0u8; SIZE_SECONDS],
            flags: FLAG_BROADCAST.to_be_bytes(),
            client_ip_address: [0u8; SIZE_IP_ADDRESS],
            your_ip_address: [0u8; SIZE_IP_ADDRESS],
            server_ip_address: [0u8; SIZE_IP_ADDRESS],
            gateway_ip_address: [0u8; SIZE_IP_ADDRESS],
            client_hardware_address: hardware_address,
        };

        let options = Options {
            dhcp_message_type: Some(vec![MessageType::DhcpDiscover as u8]),
            // The length octet covers the six MAC octets only, without the
            // RFC 2132 hardware type prefix.
            client_id: Some(client_hardware_address.as_bytes().to_vec()),
            parameter_list: Some(vec![
                OptionTag::Routers as u8,
                OptionTag::SubnetMask as u8,
                OptionTag::DomainNameServers as u8,
            ]),
            ..Options::default()
        };

        Discover { header, options }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:32} | {}",
            "Operation code",
            OperationCode::from(self.operation_code)
        )?;
        writeln!(
            f,
            "{:32} | {}",
            "Hardware type",
            HardwareType::from(self.hardware_type)
        )?;
        writeln!(
            f,
            "{:32} | {}",
            "Hardware address length", self.hardware_address_length
        )?;
        writeln!(f, "{:32} | {}", "Hardware options", self.hardware_options)?;
        writeln!(f, "{:32} | {:02x?}", "Transaction ID", self.transaction_id)?;
        writeln!(f, "{:32} | {:02x?}", "Seconds", self.seconds)?;
        writeln!(f, "{:32} | {:02x?}", "Flags", self.flags)?;
        writeln!(
            f,
            "{:32} | {:?}",
            "Client IP address", self.client_ip_address
        )?;
        writeln!(f, "{:32} | {:?}", "Your IP address", self.your_ip_address)?;
        writeln!(
            f,
            "{:32} | {:?}",
            "Server IP address", self.server_ip_address
        )?;
        writeln!(
            f,
            "{:32} | {:?}",
            "Gateway IP address", self.gateway_ip_address
        )?;
        writeln!(
            f,
            "{:32} | {:02x?}",
            "Client hardware address", self.client_hardware_address
        )?;
        Ok(())
    }
}

fn fmt_message(f: &mut fmt::Formatter, header: &Header, options: &Options) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}HEADER{}", "_".repeat(30), "_".repeat(39))?;
    write!(f, "{}", header)?;
    writeln!(f, "{}OPTIONS{}", "_".repeat(30), "_".repeat(38))?;
    write!(f, "{}", options)
}

impl fmt::Display for Discover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_message(f, &self.header, &self.options)
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_message(f, &self.header, &self.options)
    }
}
