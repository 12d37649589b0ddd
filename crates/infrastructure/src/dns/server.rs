use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper};
use berth_dns_application::use_cases::ResolveQueryUseCase;
use berth_dns_domain::DnsQuery;
use hickory_proto::op::{Message, MessageType, OpCode};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error};

/// Turns inbound datagrams into replies.
///
/// Reply header: request ID and opcode, QR set, RA set, RD and CD copied
/// for `QUERY`. Only the first question is echoed. Opcodes other than
/// `QUERY` get that header and nothing else.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Reply bytes for one datagram, or `None` when nothing should be sent
    /// back (undecodable input, or a message that is itself a response).
    pub async fn handle_raw_udp(&self, buf: &[u8], from: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(buf) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %from, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        if request.message_type() == MessageType::Response {
            debug!(client = %from, "Dropping unsolicited response");
            return None;
        }

        let mut reply = Self::build_reply(&request);

        if request.op_code() == OpCode::Query {
            let queries: Vec<DnsQuery> = request
                .queries()
                .iter()
                .map(|q| {
                    DnsQuery::new(
                        q.name().to_ascii(),
                        RecordTypeMapper::from_hickory(q.query_type()),
                    )
                })
                .collect();

            let answers = self.use_case.execute(&queries, from).await;
            reply.add_answers(answers);
        } else {
            debug!(client = %from, op_code = ?request.op_code(), "Unsupported opcode, empty reply");
        }

        match MessageBuilder::serialize_message(&reply) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(client = %from, error = %e, "Failed to serialize reply");
                None
            }
        }
    }

    /// Reply skeleton for `request`, with no answers yet.
    pub fn build_reply(request: &Message) -> Message {
        let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());

        if request.op_code() == OpCode::Query {
            reply.set_recursion_desired(request.recursion_desired());
            reply.set_checking_disabled(request.checking_disabled());
        }
        reply.set_recursion_available(true);

        if let Some(question) = request.queries().first() {
            reply.add_query(question.clone());
        }

        reply
    }
}
