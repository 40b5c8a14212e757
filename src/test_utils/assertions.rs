use actix_web::http::header::{HeaderMap, HeaderName};

pub fn assert_header(headers: &HeaderMap, name: HeaderName, expected: &str) {
    let value = headers
        .get(&name)
        .unwrap_or_else(|| panic!("missing header {name}"));
    assert_eq!(value.to_str().expect("header should be ASCII"), expected);
}
