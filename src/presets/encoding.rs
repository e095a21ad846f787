use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Whether the value already is canonical base64 (standard alphabet,
/// correct padding). The check is a heuristic: plain text that happens to
/// decode cleanly is treated as already encoded and stored as-is.
pub fn is_encoded(value: &str) -> bool {
    STANDARD.decode(value).is_ok()
}

pub fn encode(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Canonicalize a credential for the session: encode non-empty plain
/// values, pass everything else through. Applying this to its own output
/// is a no-op.
pub fn ensure_encoded(value: &str) -> String {
    if !value.is_empty() && !is_encoded(value) {
        encode(value)
    } else {
        value.to_string()
    }
}
