#![allow(dead_code)]

/// Builds raw DNS query messages without going through a DNS library, so the
/// exact bytes on the wire are under the test's control.
pub struct QueryBytesBuilder {
    id: u16,
    name: String,
    qtype: u16,
    qclass: u16,
    recursion_desired: bool,
    with_edns: bool,
}

impl QueryBytesBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: 0x1234,
            name: name.to_string(),
            qtype: 1,
            qclass: 1,
            recursion_desired: true,
            with_edns: false,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn qclass(mut self, qclass: u16) -> Self {
        self.qclass = qclass;
        self
    }

    pub fn no_recursion(mut self) -> Self {
        self.recursion_desired = false;
        self
    }

    pub fn with_edns(mut self) -> Self {
        self.with_edns = true;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.push(if self.recursion_desired { 0x01 } else { 0x00 });
        buf.push(0x00);
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&(self.with_edns as u16).to_be_bytes());

        for label in self.name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());

        if self.with_edns {
            buf.extend_from_slice(&[0x00, 0x00, 0x29, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        }
        buf
    }
}

pub fn client(last_octet: u8) -> std::net::IpAddr {
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(192, 168, 1, last_octet))
}

/// UDP A query for `name` from `client_ip`.
pub fn request(name: &str, client_ip: std::net::IpAddr) -> ghost_dns_domain::DnsRequest {
    ghost_dns_domain::DnsRequest::from_wire(
        QueryBytesBuilder::new(name).build(),
        client_ip,
        ghost_dns_domain::TransportProtocol::Udp,
    )
    .expect("valid query")
}
