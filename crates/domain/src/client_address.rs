//! Client address resolution for requests arriving through proxies and CDNs.
//!
//! The forwarded header is the only source that carries the real client
//! address behind a proxy, so it wins over everything else. Private and
//! loopback results are swapped for [`INTERNAL_ADDRESS`] before storage so
//! infrastructure hops never show up as visitors.

use crate::visitor::{INTERNAL_ADDRESS, UNKNOWN_ADDRESS};

pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
pub const REAL_IP_HEADER: &str = "x-real-ip";

const IPV4_MAPPED_PREFIX: &str = "::ffff:";

/// Raw address sources captured from one inbound request.
#[derive(Debug, Clone, Default)]
pub struct RequestOrigin {
    pub forwarded_for: Option<String>,
    pub real_ip: Option<String>,
    /// Connection-level peer address.
    pub peer_addr: Option<String>,
    /// Socket-level peer address, used when the connection one is absent.
    pub socket_addr: Option<String>,
}

impl RequestOrigin {
    pub fn with_forwarded_for(mut self, value: impl Into<String>) -> Self {
        self.forwarded_for = Some(value.into());
        self
    }

    pub fn with_real_ip(mut self, value: impl Into<String>) -> Self {
        self.real_ip = Some(value.into());
        self
    }

    pub fn with_peer_addr(mut self, value: impl Into<String>) -> Self {
        self.peer_addr = Some(value.into());
        self
    }

    pub fn with_socket_addr(mut self, value: impl Into<String>) -> Self {
        self.socket_addr = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressClass {
    Private,
    Public,
}

/// An address picked from a [`RequestOrigin`] together with its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub address: String,
    pub class: AddressClass,
}

impl ResolvedAddress {
    pub fn is_private(&self) -> bool {
        self.class == AddressClass::Private
    }

    /// The value that may be persisted: private addresses never leave here.
    pub fn storable(&self) -> &str {
        match self.class {
            AddressClass::Private => INTERNAL_ADDRESS,
            AddressClass::Public => &self.address,
        }
    }
}

/// Picks the best-effort client address using the fixed priority chain
/// forwarded-for, real-ip, peer, socket, then [`UNKNOWN_ADDRESS`].
pub fn resolve(origin: &RequestOrigin) -> ResolvedAddress {
    let picked = origin
        .forwarded_for
        .as_deref()
        .and_then(first_forwarded)
        .or_else(|| non_blank(origin.real_ip.as_deref()))
        .or_else(|| non_blank(origin.peer_addr.as_deref()))
        .or_else(|| non_blank(origin.socket_addr.as_deref()));

    match picked {
        Some(raw) => {
            let address = normalize(raw);
            let class = classify(&address);
            ResolvedAddress { address, class }
        }
        None => ResolvedAddress {
            address: UNKNOWN_ADDRESS.to_string(),
            class: AddressClass::Public,
        },
    }
}

/// Prefix test for loopback (127/8, ::1, localhost) and RFC 1918 ranges.
pub fn classify(address: &str) -> AddressClass {
    let lower = address.trim().to_ascii_lowercase();

    let private = lower.starts_with("127.")
        || lower.starts_with("10.")
        || lower.starts_with("192.168.")
        || lower.starts_with("::1")
        || lower.starts_with("localhost")
        || is_172_private(&lower);

    if private {
        AddressClass::Private
    } else {
        AddressClass::Public
    }
}

/// Rewrites IPv4-mapped IPv6 literals (`::ffff:1.2.3.4`) to dotted IPv4.
pub fn normalize(address: &str) -> String {
    let trimmed = address.trim();
    let lower = trimmed.to_ascii_lowercase();

    if let Some(v4) = lower.strip_prefix(IPV4_MAPPED_PREFIX) {
        if v4.parse::<std::net::Ipv4Addr>().is_ok() {
            return v4.to_string();
        }
    }

    trimmed.to_string()
}

fn first_forwarded(header: &str) -> Option<&str> {
    header.split(',').next().map(str::trim).filter(|s| !s.is_empty())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// 172.16.0.0/12 spans second octets 16 through 31.
fn is_172_private(lower: &str) -> bool {
    let Some(rest) = lower.strip_prefix("172.") else {
        return false;
    };
    let Some((octet, _)) = rest.split_once('.') else {
        return false;
    };
    matches!(octet.parse::<u8>(), Ok(16..=31)) && octet.len() == 2
}
