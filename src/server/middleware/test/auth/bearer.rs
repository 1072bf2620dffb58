use super::*;

#[test]
fn extracts_token_after_scheme() {
    let headers = bearer_headers("abc.def.ghi");

    assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
}

#[test]
fn rejects_missing_header() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}

#[test]
fn rejects_other_schemes_and_empty_tokens() {
    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer    ", "abc.def.ghi"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));

        assert_eq!(bearer_token(&headers), None, "value {:?}", value);
    }
}
