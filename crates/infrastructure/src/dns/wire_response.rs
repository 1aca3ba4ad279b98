//! Conversion from resolver answers to hickory resource records, and the wire codec.

use hickory_proto::op::Message;
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use stubzone_domain::{AnswerData, DnsAnswer, DomainError};

/// Builds an IN-class answer record. Fails only when a name is not a valid DNS name.
pub fn to_record(answer: &DnsAnswer) -> Result<Record, DomainError> {
    let name = parse_name(&answer.name)?;

    let rdata = match &answer.data {
        AnswerData::A(address) => RData::A(A(*address)),
        AnswerData::Cname(target) => RData::CNAME(CNAME(parse_name(target)?)),
    };

    let mut record = Record::from_rdata(name, answer.ttl, rdata);
    record.set_dns_class(DNSClass::IN);
    Ok(record)
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_ascii(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", name, e)))
}

pub fn decode_message(datagram: &[u8]) -> Result<Message, DomainError> {
    Message::from_vec(datagram).map_err(|e| DomainError::DecodeError(e.to_string()))
}

pub fn encode_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::TransportError(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}
