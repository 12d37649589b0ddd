#![allow(dead_code)]
use super::http_stub::{respond, serve, StubResponse};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum DohBehavior {
    /// One A record per question with this address.
    Answer(Ipv4Addr),
    /// Reply with this HTTP status and an empty body.
    Status(u16),
    /// 200 with a body that is not a DNS message.
    Garbage,
    /// Accept the request and never reply.
    Hang,
    /// A valid answer carrying a different message ID.
    WrongId(Ipv4Addr),
}

/// Plain-HTTP DoH server speaking the GET form on `/dns-query`.
pub struct MockDohServer {
    addr: SocketAddr,
    queries: Arc<Mutex<Vec<Message>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start(behavior: DohBehavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let queries = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let seen = queries.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let behavior = behavior.clone();
                        let seen = seen.clone();
                        tokio::spawn(serve(stream, move |target: String| {
                            let behavior = behavior.clone();
                            let seen = seen.clone();
                            async move { Self::answer(&target, behavior, &seen).await }
                        }));
                    }
                }
            }
        });

        Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/dns-query", self.addr)
    }

    /// Decoded query messages received so far.
    pub fn queries(&self) -> Vec<Message> {
        self.queries.lock().unwrap().clone()
    }

    async fn answer(
        target: &str,
        behavior: DohBehavior,
        seen: &Mutex<Vec<Message>>,
    ) -> StubResponse {
        let Some(query) = Self::decode_query(target) else {
            return respond(400, "text/plain", "bad query");
        };
        seen.lock().unwrap().push(query.clone());

        match behavior {
            DohBehavior::Answer(ip) => respond(
                200,
                "application/dns-message",
                Self::build_answer(&query, query.id(), ip),
            ),
            DohBehavior::WrongId(ip) => respond(
                200,
                "application/dns-message",
                Self::build_answer(&query, query.id().wrapping_add(1), ip),
            ),
            DohBehavior::Status(status) => respond(status, "text/plain", ""),
            DohBehavior::Garbage => respond(200, "application/dns-message", vec![0xde, 0xad]),
            DohBehavior::Hang => {
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                respond(504, "text/plain", "")
            }
        }
    }

    fn decode_query(target: &str) -> Option<Message> {
        let (path, params) = target.split_once('?')?;
        if path != "/dns-query" {
            return None;
        }
        let encoded = params
            .split('&')
            .find_map(|param| param.strip_prefix("dns="))?;
        let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
        Message::from_vec(&bytes).ok()
    }

    fn build_answer(query: &Message, id: u16, ip: Ipv4Addr) -> Vec<u8> {
        let mut response = Message::new(id, MessageType::Response, query.op_code());
        response.set_recursion_desired(query.recursion_desired());
        response.set_recursion_available(true);
        for question in query.queries() {
            response.add_query(question.clone());
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                300,
                RData::A(A(ip)),
            ));
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        response.emit(&mut encoder).unwrap();
        buf
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
