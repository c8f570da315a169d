use actix_cors::Cors;

// Preflight cache lifetime in seconds
const MAX_AGE: usize = 600;

/// Any origin, method and header, with credentials. The caller's origin is
/// echoed back since `*` is not allowed alongside credentials.
pub fn policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(MAX_AGE)
}
