#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

pub struct QueryBuilder {
    id: u16,
    recursion_desired: bool,
    message_type: MessageType,
    op_code: OpCode,
    questions: Vec<(String, RecordType)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            recursion_desired: true,
            message_type: MessageType::Query,
            op_code: OpCode::Query,
            questions: Vec::new(),
        }
    }

    pub fn a(name: &str) -> Self {
        Self::new().question(name, RecordType::A)
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn recursion_desired(mut self, rd: bool) -> Self {
        self.recursion_desired = rd;
        self
    }

    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn op_code(mut self, op_code: OpCode) -> Self {
        self.op_code = op_code;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions.push((name.to_string(), record_type));
        self
    }

    pub fn message(&self) -> Message {
        let mut message = Message::new();
        message
            .set_id(self.id)
            .set_message_type(self.message_type)
            .set_op_code(self.op_code)
            .set_recursion_desired(self.recursion_desired);

        for (name, record_type) in &self.questions {
            message.add_query(Query::query(Name::from_ascii(name).unwrap(), *record_type));
        }

        message
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.message().to_vec().unwrap()
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends `query` to `server` and waits briefly for a reply. `None` means no reply arrived.
pub async fn exchange(server: SocketAddr, query: &[u8]) -> Option<Message> {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(query, server).await.unwrap();

    let mut buf = [0u8; 4096];
    match tokio::time::timeout(Duration::from_millis(500), client.recv_from(&mut buf)).await {
        Ok(Ok((len, _))) => Some(Message::from_vec(&buf[..len]).unwrap()),
        _ => None,
    }
}
