//! Identifier derivation for generated mocks

/// Uppercase the first character and leave the rest untouched, so
/// `HTTPServer` stays `HTTPServer` and `reader` becomes `Reader`.
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `mock<Name>`
pub fn mock_struct_name(interface: &str) -> String {
    format!("mock{}", title_case(interface))
}

/// `m<Method>`
pub fn field_name(method: &str) -> String {
    format!("m{}", title_case(method))
}

/// Lowercased first character of the interface name followed by `m`
pub fn receiver_name(interface: &str) -> String {
    let first: String = interface
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default();
    format!("{first}m")
}
