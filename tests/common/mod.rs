pub mod test_context;

/// Returns the first value of the named header on a recorded request.
pub fn header_value(request: &wiremock::Request, name: &str) -> Option<String> {
    request
        .headers
        .iter()
        .find(|(header, _)| header.as_str().eq_ignore_ascii_case(name))
        .and_then(|(_, values)| values.get(0))
        .map(|value| value.as_str().to_owned())
}
