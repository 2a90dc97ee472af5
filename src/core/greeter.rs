pub const GREETING_PREFIX: &str = "Hello, ";

/// Builds the greeting for `name`. Any text is accepted as-is.
pub fn greet(name: &str) -> String {
    let mut message = String::with_capacity(GREETING_PREFIX.len() + name.len());
    message.push_str(GREETING_PREFIX);
    message.push_str(name);
    message
}
