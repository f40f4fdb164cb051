//! Test fixtures for creating request bodies.

use serde_json::{json, Value};

/// A registration body with every field valid.
pub fn registration(name: &str, skills: &str, city: &str, whatsapp_number: &str) -> Value {
    json!({
        "name": name,
        "skills": skills,
        "city": city,
        "whatsapp_number": whatsapp_number,
    })
}

/// The canonical example registration.
pub fn ahmad() -> Value {
    registration("Ahmad", "Listrik", "Jakarta", "08123456789")
}
