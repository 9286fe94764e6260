use serde::{Deserialize, Serialize};

use crate::endpoint;

// forward a contact form submission to the mail relay
//
// the relay is expected to accept the three fields verbatim; it owns any validation beyond
// presence, as well as rate limiting
endpoint!(SendContact);

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct SendContactReq {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct SendContactResp {
    // relays that queue mail may hand back an id; nothing depends on it
    #[serde(default)]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_plain_field_names() {
        let req = SendContactReq {
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            message: String::from("hello"),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["message"], "hello");
    }

    #[test]
    fn empty_response_body_is_accepted() {
        let resp: SendContactResp = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, SendContactResp::default());

        let resp: SendContactResp = serde_json::from_str(r#"{"id":"q-17"}"#).unwrap();
        assert_eq!(resp.id.as_deref(), Some("q-17"));
    }
}
