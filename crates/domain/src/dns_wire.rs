//! Minimal DNS wire handling for the filter's own replies.
//!
//! Only the header and the first question of an incoming query are decoded;
//! allowed queries are forwarded byte-for-byte, so nothing else needs parsing.
//! Replies synthesized here (sinkhole answers and error responses) echo the
//! question section exactly as the client sent it.

use crate::{DomainError, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

pub const HEADER_LEN: usize = 12;

/// Wire length of a name, length octets and root label included.
const MAX_NAME_WIRE_LEN: usize = 255;

const FLAG_QR: u16 = 0x8000;
const MASK_OPCODE: u16 = 0x7800;
const FLAG_AA: u16 = 0x0400;
const FLAG_RD: u16 = 0x0100;
const FLAG_RA: u16 = 0x0080;

const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
}

impl ResponseCode {
    pub fn code(&self) -> u8 {
        match self {
            Self::NoError => 0,
            Self::FormErr => 1,
            Self::ServFail => 2,
            Self::NXDomain => 3,
            Self::NotImp => 4,
            Self::Refused => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::NoError),
            1 => Some(Self::FormErr),
            2 => Some(Self::ServFail),
            3 => Some(Self::NXDomain),
            4 => Some(Self::NotImp),
            5 => Some(Self::Refused),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoError => "NOERROR",
            Self::FormErr => "FORMERR",
            Self::ServFail => "SERVFAIL",
            Self::NXDomain => "NXDOMAIN",
            Self::NotImp => "NOTIMP",
            Self::Refused => "REFUSED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header and first question of an incoming query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub id: u16,
    flags: u16,
    pub qtype: u16,
    pub qclass: u16,
    name: String,
    /// Raw question section (QNAME, QTYPE, QCLASS) as received.
    question: Vec<u8>,
}

impl ParsedQuery {
    /// Decodes the header and first question of `buf`.
    ///
    /// Rejects responses (QR set), messages without a question, compressed or
    /// truncated question names, and names longer than 255 octets on the wire.
    pub fn parse(buf: &[u8]) -> Result<Self, DomainError> {
        if buf.len() < HEADER_LEN {
            return Err(DomainError::MalformedQuery(format!(
                "message is {} bytes, shorter than the header",
                buf.len()
            )));
        }

        let id = u16::from_be_bytes([buf[0], buf[1]]);
        let flags = u16::from_be_bytes([buf[2], buf[3]]);
        if flags & FLAG_QR != 0 {
            return Err(DomainError::MalformedQuery(
                "QR bit set, message is a response".to_string(),
            ));
        }

        let qdcount = u16::from_be_bytes([buf[4], buf[5]]);
        if qdcount == 0 {
            return Err(DomainError::MalformedQuery(
                "query has no question".to_string(),
            ));
        }

        let mut pos = HEADER_LEN;
        let mut name = String::new();

        loop {
            let label_len = *buf.get(pos).ok_or_else(|| truncated("question name"))? as usize;
            pos += 1;
            if label_len == 0 {
                break;
            }
            if label_len & 0xC0 != 0 {
                return Err(DomainError::MalformedQuery(
                    "compressed or extended label in question".to_string(),
                ));
            }
            if pos + label_len + 1 - HEADER_LEN > MAX_NAME_WIRE_LEN {
                return Err(DomainError::MalformedQuery(format!(
                    "question name exceeds {} octets",
                    MAX_NAME_WIRE_LEN
                )));
            }
            let label = buf
                .get(pos..pos + label_len)
                .ok_or_else(|| truncated("question label"))?;
            push_label(&mut name, label);
            name.push('.');
            pos += label_len;
        }

        if name.is_empty() {
            name.push('.');
        }

        let fixed = buf.get(pos..pos + 4).ok_or_else(|| truncated("question type"))?;
        let qtype = u16::from_be_bytes([fixed[0], fixed[1]]);
        let qclass = u16::from_be_bytes([fixed[2], fixed[3]]);
        pos += 4;

        Ok(Self {
            id,
            flags,
            qtype,
            qclass,
            name,
            question: buf[HEADER_LEN..pos].to_vec(),
        })
    }

    /// Fully-qualified query name in presentation form, e.g. `"example.com."`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from_u16(self.qtype)
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    /// Answer for a blocked name: the original question plus exactly one A
    /// record pointing the queried name at `addr`.
    pub fn sinkhole_response(&self, addr: Ipv4Addr, ttl: u32) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.question.len() + 16);
        buf.extend_from_slice(&self.response_header(ResponseCode::NoError, 1, true));
        buf.extend_from_slice(&self.question);

        // Name is a compression pointer to the question at offset 12.
        buf.extend_from_slice(&[0xC0, 0x0C]);
        buf.extend_from_slice(&RecordType::A.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());
        buf.extend_from_slice(&ttl.to_be_bytes());
        buf.extend_from_slice(&4u16.to_be_bytes());
        buf.extend_from_slice(&addr.octets());
        buf
    }

    /// Error reply carrying the question and no records.
    pub fn error_response(&self, rcode: ResponseCode) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.question.len());
        buf.extend_from_slice(&self.response_header(rcode, 0, false));
        buf.extend_from_slice(&self.question);
        buf
    }

    fn response_header(&self, rcode: ResponseCode, ancount: u16, authoritative: bool) -> [u8; 12] {
        let mut flags = FLAG_QR | (self.flags & (MASK_OPCODE | FLAG_RD)) | FLAG_RA;
        if authoritative {
            flags |= FLAG_AA;
        }
        flags |= rcode.code() as u16;

        let mut header = [0u8; HEADER_LEN];
        header[0..2].copy_from_slice(&self.id.to_be_bytes());
        header[2..4].copy_from_slice(&flags.to_be_bytes());
        header[4..6].copy_from_slice(&1u16.to_be_bytes());
        header[6..8].copy_from_slice(&ancount.to_be_bytes());
        header
    }
}

/// Header-only error reply for a query whose question could not be decoded.
///
/// Returns `None` when there is no complete header or the message is itself a
/// response; such packets are dropped rather than answered.
pub fn header_only_response(buf: &[u8], rcode: ResponseCode) -> Option<Vec<u8>> {
    if buf.len() < HEADER_LEN {
        return None;
    }
    let flags = u16::from_be_bytes([buf[2], buf[3]]);
    if flags & FLAG_QR != 0 {
        return None;
    }

    let out_flags = FLAG_QR | (flags & (MASK_OPCODE | FLAG_RD)) | FLAG_RA | rcode.code() as u16;
    let mut header = vec![0u8; HEADER_LEN];
    header[0..2].copy_from_slice(&buf[0..2]);
    header[2..4].copy_from_slice(&out_flags.to_be_bytes());
    Some(header)
}

/// Response code of a raw DNS message, or `None` if it has no header.
pub fn response_code(buf: &[u8]) -> Option<u8> {
    buf.get(3).map(|flags_lo| flags_lo & 0x0F)
}

fn push_label(name: &mut String, label: &[u8]) {
    for &b in label {
        if b.is_ascii_graphic() && b != b'.' && b != b'\\' {
            name.push(b as char);
        } else {
            name.push_str(&format!("\\{:03}", b));
        }
    }
}

fn truncated(what: &str) -> DomainError {
    DomainError::MalformedQuery(format!("truncated {}", what))
}
