//! ID generation utilities for todos
//!
//! Todo and category ids are opaque strings; callers must not parse them.

use rand::Rng;

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a unique record ID
///
/// Format: `{timestamp_ms}-{random_hex}`
/// Example: `1738300800123-a1b2c3d4`
pub fn generate_id() -> String {
    let random: [u8; 4] = rand::rng().random();
    format!("{}-{}", now_ms(), hex::encode(random))
}

/// Generate an ID that is not already taken.
///
/// Retries on collision with anything `taken` reports as in use.
pub fn generate_unique_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_id();
        if !taken(&id) {
            return id;
        }
    }
}
