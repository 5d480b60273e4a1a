use serde::{Deserialize, Serialize};

/// Header checks applied by the message decoder on top of wire validation.
///
/// Both checks are off by default: a reply is judged only by its question and
/// answer sections.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Reject messages whose QR bit marks them as queries.
    #[serde(default)]
    pub reject_non_response: bool,

    /// Treat any response code other than NOERROR as "no data".
    #[serde(default)]
    pub reject_error_rcode: bool,
}

impl DecoderConfig {
    pub fn strict() -> Self {
        Self {
            reject_non_response: true,
            reject_error_rcode: true,
        }
    }
}
