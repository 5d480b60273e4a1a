//! Hand-assembled DNS messages, so fixtures do not depend on the decoder under test.

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_MX: u16 = 15;
pub const TYPE_AAAA: u16 = 28;

pub const CLASS_IN: u16 = 1;
pub const CLASS_CH: u16 = 3;

const FLAG_QR: u16 = 0x8000;
const FLAG_AA: u16 = 0x0400;
const FLAG_RD: u16 = 0x0100;
const FLAG_RA: u16 = 0x0080;

/// Encodes a presentation-form name without compression.
///
/// `\x` puts `x` into the current label verbatim, so `a\.b.com` has two labels.
/// An empty name or `"."` is the root.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    let mut label = Vec::new();
    let mut chars = name.bytes();

    while let Some(b) = chars.next() {
        match b {
            b'\\' => {
                if let Some(escaped) = chars.next() {
                    label.push(escaped);
                }
            }
            b'.' => {
                if !label.is_empty() {
                    out.push(label.len() as u8);
                    out.append(&mut label);
                }
            }
            _ => label.push(b),
        }
    }
    if !label.is_empty() {
        out.push(label.len() as u8);
        out.append(&mut label);
    }
    out.push(0);
    out
}

fn encode_record(name: &str, rtype: u16, class: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = encode_name(name);
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&class.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

#[derive(Debug, Clone, Default)]
pub struct PacketBuilder {
    id: u16,
    flags: u16,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl PacketBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn response(mut self) -> Self {
        self.flags |= FLAG_QR;
        self
    }

    pub fn query(mut self) -> Self {
        self.flags &= !FLAG_QR;
        self
    }

    pub fn aa(mut self) -> Self {
        self.flags |= FLAG_AA;
        self
    }

    pub fn rd(mut self) -> Self {
        self.flags |= FLAG_RD;
        self
    }

    pub fn ra(mut self) -> Self {
        self.flags |= FLAG_RA;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags = (self.flags & !0x000f) | u16::from(rcode & 0x0f);
        self
    }

    pub fn question(mut self, name: &str) -> Self {
        let mut q = encode_name(name);
        q.extend_from_slice(&TYPE_A.to_be_bytes());
        q.extend_from_slice(&CLASS_IN.to_be_bytes());
        self.questions.push(q);
        self
    }

    pub fn clear_questions(mut self) -> Self {
        self.questions.clear();
        self
    }

    pub fn clear_answers(mut self) -> Self {
        self.answers.clear();
        self
    }

    pub fn answer(mut self, name: &str, rtype: u16, class: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.answers.push(encode_record(name, rtype, class, ttl, rdata));
        self
    }

    pub fn answer_a(self, name: &str, ttl: u32, octets: [u8; 4]) -> Self {
        self.answer(name, TYPE_A, CLASS_IN, ttl, &octets)
    }

    pub fn answer_aaaa(self, name: &str, ttl: u32, octets: [u8; 16]) -> Self {
        self.answer(name, TYPE_AAAA, CLASS_IN, ttl, &octets)
    }

    pub fn answer_cname(self, name: &str, ttl: u32, target: &str) -> Self {
        self.answer(name, TYPE_CNAME, CLASS_IN, ttl, &encode_name(target))
    }

    pub fn answer_mx(self, name: &str, ttl: u32, preference: u16, exchange: &str) -> Self {
        let mut rdata = preference.to_be_bytes().to_vec();
        rdata.extend_from_slice(&encode_name(exchange));
        self.answer(name, TYPE_MX, CLASS_IN, ttl, &rdata)
    }

    pub fn auth_ns(mut self, name: &str, ttl: u32, target: &str) -> Self {
        self.authority
            .push(encode_record(name, TYPE_NS, CLASS_IN, ttl, &encode_name(target)));
        self
    }

    pub fn additional_a(mut self, name: &str, ttl: u32, octets: [u8; 4]) -> Self {
        self.additional.push(encode_record(name, TYPE_A, CLASS_IN, ttl, &octets));
        self
    }

    pub fn additional_aaaa(mut self, name: &str, ttl: u32, octets: [u8; 16]) -> Self {
        self.additional.push(encode_record(name, TYPE_AAAA, CLASS_IN, ttl, &octets));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        for section in [
            &self.questions,
            &self.answers,
            &self.authority,
            &self.additional,
        ] {
            out.extend_from_slice(&(section.len() as u16).to_be_bytes());
        }
        for section in [
            &self.questions,
            &self.answers,
            &self.authority,
            &self.additional,
        ] {
            for entry in section {
                out.extend_from_slice(entry);
            }
        }
        out
    }
}
