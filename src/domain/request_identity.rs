use serde_json::{Map, Value};

/// Identity of the authenticated caller, attached to request extensions by
/// the authentication gate after a successful access-token verification.
/// Written once by the gate, read-only downstream, dropped with the request.
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    pub subject: String,
    pub extra: Map<String, Value>,
}

impl RequestIdentity {
    pub fn new(subject: String, extra: Map<String, Value>) -> Self {
        Self { subject, extra }
    }
}
