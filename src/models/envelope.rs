use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The top-level envelope returned by a successful search call.
///
/// Wraps the raw record list plus whatever envelope-level metadata the
/// service sent alongside it (status, pagination hints, ...). Dereferences
/// to the record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// The raw record objects, in the order the service returned them.
    data: Vec<Value>,

    /// Any other top-level fields of the envelope.
    #[serde(flatten)]
    meta: Map<String, Value>,
}

impl ApiResponse {
    /// Returns the envelope-level metadata fields.
    pub fn meta(&self) -> &Map<String, Value> {
        &self.meta
    }

    /// Consumes the envelope, yielding the raw record list.
    pub(crate) fn into_data(self) -> Vec<Value> {
        self.data
    }
}

impl std::ops::Deref for ApiResponse {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
