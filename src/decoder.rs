use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Content type that selects the JSON strategy.
pub const APPLICATION_JSON: &str = "application/json";
/// Content type that selects the XML strategy.
pub const TEXT_XML: &str = "text/xml";

/// Body decoding strategy, selected from a declared content type.
///
/// Selection is stateless: the same content type always yields the same
/// strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoder {
    #[default]
    Json,
    Xml,
}

impl Decoder {
    /// Select the strategy for a declared content type.
    ///
    /// Only the first comma-separated candidate is honored. Any value
    /// outside the table below — an empty string included — selects JSON,
    /// the system-wide default format.
    pub fn for_content_type(value: &str) -> Self {
        let declared = value.split(',').next().unwrap_or_default().trim();
        match declared {
            APPLICATION_JSON => Decoder::Json,
            TEXT_XML => Decoder::Xml,
            _ => Decoder::Json,
        }
    }

    /// Decode `data` into `T`. The input is never mutated.
    ///
    /// # Errors
    /// Returns [`ClientError::Decode`] when the payload is not a valid
    /// document of the selected format; an empty payload is not a valid
    /// document in either format.
    pub fn decode<T: DeserializeOwned>(self, data: &[u8]) -> Result<T, ClientError> {
        match self {
            Decoder::Json => Ok(serde_json::from_slice(data)?),
            Decoder::Xml => {
                let text = std::str::from_utf8(data)
                    .map_err(|e| ClientError::Decode(format!("invalid UTF-8 in XML body: {e}")))?;
                quick_xml::de::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        key: String,
    }

    #[test]
    fn json_content_type_selects_json() {
        assert_eq!(Decoder::for_content_type(APPLICATION_JSON), Decoder::Json);
    }

    #[test]
    fn xml_content_type_selects_xml() {
        assert_eq!(Decoder::for_content_type(TEXT_XML), Decoder::Xml);
    }

    #[test]
    fn unknown_and_empty_content_types_fall_back_to_json() {
        for value in ["", "text/plain", "application/octet-stream", "nonsense"] {
            assert_eq!(Decoder::for_content_type(value), Decoder::Json);
        }
    }

    #[test]
    fn only_the_first_candidate_is_honored() {
        assert_eq!(
            Decoder::for_content_type("text/xml, application/json"),
            Decoder::Xml
        );
        assert_eq!(
            Decoder::for_content_type("application/json, text/xml"),
            Decoder::Json
        );
    }

    #[test]
    fn json_decodes_into_mapping() {
        let value: serde_json::Value = Decoder::Json.decode(br#"{"key":"value"}"#).unwrap();
        assert_eq!(value["key"], "value");

        let payload: Payload = Decoder::Json.decode(br#"{"key":"value"}"#).unwrap();
        assert_eq!(payload.key, "value");
    }

    #[test]
    fn xml_decodes_into_declared_shape() {
        let payload: Payload = Decoder::Xml
            .decode(b"<payload><key>value</key></payload>")
            .unwrap();
        assert_eq!(payload.key, "value");
    }

    #[test]
    fn malformed_payloads_surface_decode_errors() {
        assert!(matches!(
            Decoder::Json.decode::<Payload>(b"not json"),
            Err(ClientError::Decode(_))
        ));
        assert!(matches!(
            Decoder::Xml.decode::<Payload>(b"<unclosed>"),
            Err(ClientError::Decode(_))
        ));
    }

    #[test]
    fn empty_payload_is_a_decode_error() {
        assert!(matches!(
            Decoder::Json.decode::<serde_json::Value>(b""),
            Err(ClientError::Decode(_))
        ));
        assert!(matches!(
            Decoder::Xml.decode::<Payload>(b""),
            Err(ClientError::Decode(_))
        ));
    }
}
