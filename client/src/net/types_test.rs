use super::*;

#[test]
fn api_error_messages_include_detail() {
    assert_eq!(ApiError::Status(401).to_string(), "unexpected status: 401");
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "invalid response body: eof");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
