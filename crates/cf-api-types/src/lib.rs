use serde::{Deserialize, Serialize};

/// Form snapshot sent to `POST /generate_cf`.
///
/// Every field travels as a string, exactly as captured from the page
/// controls; the backend owns all semantic validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCfRequest {
    pub name: String,
    pub surname: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub sex: String,
    pub place_of_birth: String,
}

/// Reply from `POST /generate_cf`.
///
/// The canonical field is `codiceFiscale`. The aliases absorb the two other
/// spellings the backend has been observed to send: `codice_fiscale`, and
/// `codiceFiscale exist` when the person is already on record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCfResponse {
    #[serde(
        rename = "codiceFiscale",
        alias = "codice_fiscale",
        alias = "codiceFiscale exist"
    )]
    pub codice_fiscale: String,
}

/// Body for `POST /chatbot`. The reply is an arbitrary JSON value and has
/// no struct here; the client renders it via its string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_serializes_all_seven_fields() {
        let request = GenerateCfRequest {
            name: "Mario".to_owned(),
            surname: "Rossi".to_owned(),
            day: "1".to_owned(),
            month: "1".to_owned(),
            year: "1990".to_owned(),
            sex: "M".to_owned(),
            place_of_birth: "Roma".to_owned(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Mario",
                "surname": "Rossi",
                "day": "1",
                "month": "1",
                "year": "1990",
                "sex": "M",
                "placeOfBirth": "Roma",
            })
        );
    }

    #[test]
    fn generate_response_reads_canonical_field() {
        let response: GenerateCfResponse =
            serde_json::from_str(r#"{"codiceFiscale":"RSSMRA90A01H501X"}"#).unwrap();
        assert_eq!(response.codice_fiscale, "RSSMRA90A01H501X");
    }

    #[test]
    fn generate_response_reads_snake_case_alias() {
        let response: GenerateCfResponse =
            serde_json::from_str(r#"{"codice_fiscale":"RSSMRA90A01H501X"}"#).unwrap();
        assert_eq!(response.codice_fiscale, "RSSMRA90A01H501X");
    }

    #[test]
    fn generate_response_reads_duplicate_person_alias() {
        let response: GenerateCfResponse =
            serde_json::from_str(r#"{"codiceFiscale exist":"RSSMRA90A01H501X"}"#).unwrap();
        assert_eq!(response.codice_fiscale, "RSSMRA90A01H501X");
    }

    #[test]
    fn generate_response_rejects_unknown_shape() {
        let result = serde_json::from_str::<GenerateCfResponse>(r#"{"code":"RSSMRA90A01H501X"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn chat_request_uses_the_message_key() {
        let request = ChatMessageRequest {
            message: "Hello".to_owned(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "Hello" }));
    }
}
