use poem_openapi::{OpenApi, payload::PlainText};

use crate::presentation::http::endpoints::root::{Endpoints, EndpointsTags};

#[OpenApi]
impl Endpoints {
    /// Liveness probe. Answers without consulting the store.
    #[oai(path = "/health", method = "get", tag = EndpointsTags::Health)]
    pub async fn liveness(&self) -> PlainText<&'static str> {
        PlainText("OK")
    }
}
