use super::record_type_map::RecordTypeMapper;
use super::wire_response;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use std::sync::Arc;
use stubzone_application::use_cases::ResolveQueryUseCase;
use stubzone_domain::{DnsQuery, DomainError};
use tracing::{debug, info, warn};

/// Turns one inbound datagram into at most one reply. Stateless across datagrams.
pub struct DnsRequestHandler {
    resolver: Arc<ResolveQueryUseCase>,
}

impl DnsRequestHandler {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolver }
    }

    /// Returns the encoded reply, or `None` when the datagram must be dropped.
    pub async fn handle_datagram(&self, datagram: &[u8]) -> Option<Vec<u8>> {
        let request = match Self::decode_query(datagram) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, len = datagram.len(), "Dropping undecodable datagram");
                return None;
            }
        };

        let response = self.handle_message(&request).await;

        match wire_response::encode_message(&response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, id = request.id(), "Failed to encode response");
                None
            }
        }
    }

    /// Builds the authoritative reply for an already decoded query.
    pub async fn handle_message(&self, request: &Message) -> Message {
        let mut response = Self::reply_to(request);

        if request.op_code() != OpCode::Query {
            debug!(op_code = ?request.op_code(), "Unsupported opcode");
            response.set_response_code(ResponseCode::NotImp);
            return response;
        }

        let mut record_found = false;

        for query in request.queries() {
            let domain = query.name().to_ascii();
            let query_type = query.query_type();

            info!(domain = %domain, record_type = %query_type, "DNS query received");

            let dns_query = DnsQuery::new(&domain, RecordTypeMapper::from_hickory(query_type));
            let resolution = self.resolver.execute(&dns_query).await;
            record_found |= resolution.record_found;

            for answer in &resolution.answers {
                match wire_response::to_record(answer) {
                    Ok(mut record) => {
                        // Echo the question's spelling, 0x20 case included.
                        if *answer.name == *dns_query.domain {
                            record.set_name(query.name().clone());
                        }
                        response.add_answer(record);
                    }
                    Err(e) => warn!(error = %e, domain = %answer.name, "Skipping unencodable answer"),
                }
            }
        }

        // Unsupported types are indistinguishable from missing names under this policy.
        if !record_found {
            response.set_response_code(ResponseCode::NXDomain);
        }

        debug!(
            id = response.id(),
            answers = response.answers().len(),
            rcode = ?response.response_code(),
            "Sending response"
        );

        response
    }

    fn decode_query(datagram: &[u8]) -> Result<Message, DomainError> {
        let message = wire_response::decode_message(datagram)?;
        if message.message_type() != MessageType::Query {
            return Err(DomainError::DecodeError(
                "datagram is a response, not a query".to_string(),
            ));
        }
        Ok(message)
    }

    fn reply_to(request: &Message) -> Message {
        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_authoritative(true)
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(false)
            .set_response_code(ResponseCode::NoError);

        for query in request.queries() {
            response.add_query(query.clone());
        }

        response
    }
}
