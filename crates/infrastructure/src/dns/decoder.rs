use super::name::render_name;
use a_reply_application::ports::MessageDecoder;
use a_reply_domain::{AddressNode, CnameLink, DecodeError, DecodedAnswer, DecoderConfig};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use tracing::debug;

/// Decodes wire-format DNS responses with `hickory-proto` and follows the CNAME
/// chain that starts at the question name.
///
/// Records are taken in answer-section order. A CNAME or A record counts only when
/// its owner is the current chain name (case-insensitive); a CNAME then moves the
/// chain to its target. Authority and additional sections are not read.
///
/// An A or CNAME record whose data hickory could not read as that type (an empty
/// RDATA arrives as `RData::Update0`) fails the whole message as malformed, whoever
/// owns it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryMessageDecoder {
    config: DecoderConfig,
}

impl HickoryMessageDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> DecoderConfig {
        self.config
    }

    fn check_header(&self, message: &Message) -> Result<(), DecodeError> {
        if self.config.reject_non_response && message.message_type() != MessageType::Response {
            return Err(DecodeError::NotAResponse);
        }

        let rcode = message.response_code();
        if self.config.reject_error_rcode && rcode != ResponseCode::NoError {
            return Err(DecodeError::ResponseCode(format!("{:?}", rcode)));
        }

        Ok(())
    }
}

impl MessageDecoder for HickoryMessageDecoder {
    fn decode(&self, message: &[u8]) -> Result<DecodedAnswer, DecodeError> {
        let message = Message::from_vec(message).map_err(|e| {
            debug!(error = %e, "Failed to parse DNS message");
            DecodeError::Malformed(e.to_string())
        })?;

        self.check_header(&message)?;

        let question = match message.queries() {
            [query] => query.name(),
            queries => return Err(DecodeError::QuestionCount(queries.len())),
        };

        let mut decoded = DecodedAnswer::new(render_name(question));
        let mut current: Name = question.clone();
        let mut foreign_owner: Option<String> = None;
        let mut skipped = 0usize;

        for record in message.answers() {
            if record.dns_class() != DNSClass::IN {
                skipped += 1;
                continue;
            }

            let owned_by_chain = record.name() == &current;
            match record.data() {
                RData::CNAME(cname) if owned_by_chain => {
                    let link = CnameLink::new(
                        render_name(record.name()),
                        render_name(&cname.0),
                        ttl_from_wire(record.ttl()),
                    );
                    if link.is_self_reference() {
                        debug!(alias = %link.alias, "Self-referencing CNAME kept");
                    }
                    current = cname.0.clone();
                    decoded = decoded.with_cname(link);
                }
                RData::A(a) if owned_by_chain => {
                    let node = AddressNode::inet(a.0, ttl_from_wire(record.ttl()));
                    decoded = decoded.with_address(node);
                }
                RData::CNAME(_) | RData::A(_) => {
                    debug!(
                        owner = %record.name(),
                        expected = %current,
                        "Skipping record outside the CNAME chain"
                    );
                    foreign_owner.get_or_insert_with(|| render_name(record.name()));
                    skipped += 1;
                }
                _ if matches!(record.record_type(), RecordType::A | RecordType::CNAME) => {
                    debug!(
                        owner = %record.name(),
                        record_type = %record.record_type(),
                        "Record data does not match its type"
                    );
                    return Err(DecodeError::Malformed(format!(
                        "invalid {} record data for {}",
                        record.record_type(),
                        render_name(record.name())
                    )));
                }
                _ => {
                    skipped += 1;
                }
            }
        }

        if decoded.is_empty() {
            if let Some(owner) = foreign_owner {
                return Err(DecodeError::NameMismatch {
                    question: decoded.question_name,
                    owner,
                });
            }
            if !message.answers().is_empty() {
                return Err(DecodeError::NoMatchingRecords);
            }
        }

        debug!(
            question = %decoded.question_name,
            links = decoded.cname_links.len(),
            addresses = decoded.address_nodes.len(),
            skipped = skipped,
            "DNS answer decoded"
        );

        Ok(decoded)
    }
}

/// Wire TTLs are unsigned; values with the top bit set are read as zero (RFC 2181 §8).
///
/// Resolvers that read the field as a signed `int` report such TTLs as negative instead.
fn ttl_from_wire(ttl: u32) -> i32 {
    i32::try_from(ttl).unwrap_or(0)
}
