use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use rift_dns_application::use_cases::ResolveDomainUseCase;
use rift_dns_domain::Resolution;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Answer TTL handed to clients, independent of how long we cache upstream
/// results ourselves.
const ANSWER_TTL: u32 = 60;

/// Wire adapter: extracts the question from an incoming DNS message, runs
/// the resolution pipeline for A questions and assembles the reply.
///
/// An unresolved name is an empty answer section with NOERROR, never
/// NXDOMAIN or SERVFAIL — the pipeline has no failure mode at request scope.
pub struct DnsServerHandler {
    use_case: Arc<ResolveDomainUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveDomainUseCase>) -> Self {
        Self { use_case }
    }

    /// Answer records for a single question. This is the wire-independent
    /// core of the adapter: non-A questions, unresolved names and rule IPs
    /// that fail to encode all yield an empty answer section.
    pub async fn answers_for(&self, query_type: RecordType, domain: &str) -> Vec<Record> {
        // Only A questions are intercepted; everything else gets an empty
        // answer section rather than NOTIMP, so clients fall back quietly.
        if query_type != RecordType::A {
            debug!(domain = %domain, record_type = ?query_type, "non-A query, empty answer");
            return Vec::new();
        }

        let resolution = match self.use_case.execute(domain).await {
            Some(r) => r,
            None => {
                debug!(domain = %domain, "unresolved, empty answer");
                return Vec::new();
            }
        };

        info!(
            domain = %domain,
            ip = %resolution.ip,
            source = %resolution.source,
            "resolved domain"
        );

        match encode_a_record(domain, &resolution) {
            Some(record) => vec![record],
            None => {
                warn!(domain = %domain, ip = %resolution.ip, "answer is not a valid IPv4 address");
                Vec::new()
            }
        }
    }
}

/// Rule IPs are configured strings; one that fails to parse cannot be
/// encoded into a record and degrades to an empty answer.
fn encode_a_record(domain: &str, resolution: &Resolution) -> Option<Record> {
    let addr = Ipv4Addr::from_str(&resolution.ip).ok()?;
    let owner = Name::from_str(domain).unwrap_or_else(|_| Name::root());
    Some(Record::from_rdata(
        owner,
        ANSWER_TTL,
        RData::A(hickory_proto::rr::rdata::A(addr)),
    ))
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let domain = query.name().to_utf8();
        let query_type = query.query_type();
        let client_ip = request.src().ip();

        info!(domain = %domain, record_type = ?query_type, client = %client_ip, "DNS query received");

        let answers = self.answers_for(query_type, &domain).await;

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_recursion_available(true);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
