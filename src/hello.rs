/// Text shown by the greeting widget.
pub const GREETING: &str = "Hello from PH Components!";

pub fn greeting() -> &'static str {
    GREETING
}
