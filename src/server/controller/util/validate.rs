use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::error::{validation::ValidationError, Error};

/// Deserializes a raw JSON body into a typed insert payload.
///
/// Runs before any store mutation, so a schema violation leaves the target
/// collection and its identifier counter untouched. The serde error message
/// names the offending field and becomes the client-visible 400 body.
pub fn validate_payload<T: DeserializeOwned>(payload: Value) -> Result<T, Error> {
    serde_json::from_value(payload)
        .map_err(|err| ValidationError::InvalidPayload(err.to_string()).into())
}
