use userflow_core::FlowResponseBuilder;

/// Response builder that records what the responders asked for.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedResponse {
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

impl FlowResponseBuilder for RecordedResponse {
    type Response = RecordedResponse;

    fn status(mut self, code: u16) -> Self {
        self.status = code;
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn body(mut self, body: String) -> Self {
        self.body = body;
        self
    }

    fn build(self) -> Self::Response {
        self
    }
}
