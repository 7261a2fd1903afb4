//! DHCP options module.

mod message_type;
mod option_tag;

pub use self::{message_type::MessageType, option_tag::OptionTag};

use std::fmt;

/// The recognized DHCP options of a message.
///
/// Values are kept as raw octets exactly as they appear on the wire and
/// are never interpreted here; the length octet is the only thing the
/// codecs read numerically.
#[derive(Debug, Default)]
pub struct Options {
    pub subnet_mask: Option<Vec<u8>>,
    pub routers: Option<Vec<u8>>,
    pub domain_name_servers: Option<Vec<u8>>,
    pub address_time: Option<Vec<u8>>,
    pub dhcp_message_type: Option<Vec<u8>>,
    pub dhcp_server_id: Option<Vec<u8>>,
    pub parameter_list: Option<Vec<u8>>,
    pub client_id: Option<Vec<u8>>,
}

impl Options {
    /// The option catalog, in wire code order.
    pub const RECOGNIZED: [OptionTag; 8] = [
        OptionTag::SubnetMask,
        OptionTag::Routers,
        OptionTag::DomainNameServers,
        OptionTag::AddressTime,
        OptionTag::DhcpMessageType,
        OptionTag::DhcpServerId,
        OptionTag::ParameterList,
        OptionTag::ClientId,
    ];

    /// The raw value of an option, if it is set.
    pub fn get(&self, tag: OptionTag) -> Option<&[u8]> {
        use self::OptionTag::*;
        match tag {
            SubnetMask => self.subnet_mask.as_ref().map(|value| value.as_slice()),
            Routers => self.routers.as_ref().map(|value| value.as_slice()),
            DomainNameServers => self
                .domain_name_servers
                .as_ref()
                .map(|value| value.as_slice()),
            AddressTime => self.address_time.as_ref().map(|value| value.as_slice()),
            DhcpMessageType => self
                .dhcp_message_type
                .as_ref()
                .map(|value| value.as_slice()),
            DhcpServerId => self.dhcp_server_id.as_ref().map(|value| value.as_slice()),
            ParameterList => self.parameter_list.as_ref().map(|value| value.as_slice()),
            ClientId => self.client_id.as_ref().map(|value| value.as_slice()),

            _ => None,
        }
    }

    /// Records an option value. A later value for the same tag replaces
    /// the earlier one; tags outside the catalog are dropped.
    pub fn set(&mut self, tag: OptionTag, value: Vec<u8>) {
        use self::OptionTag::*;
        match tag {
            SubnetMask => self.subnet_mask = Some(value),
            Routers => self.routers = Some(value),
            DomainNameServers => self.domain_name_servers = Some(value),
            AddressTime => self.address_time = Some(value),
            DhcpMessageType => self.dhcp_message_type = Some(value),
            DhcpServerId => self.dhcp_server_id = Some(value),
            ParameterList => self.parameter_list = Some(value),
            ClientId => self.client_id = Some(value),

            _ => {}
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &tag in Self::RECOGNIZED.iter() {
            if let Some(value) = self.get(tag) {
                writeln!(f, "[{:03}] {:24}| {:02x?}", tag as u8, tag.name(), value)?;
            }
        }
        Ok(())
    }
}
