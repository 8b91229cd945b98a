//! `User-Agent` header construction.

/// Library identifier sent with every request, e.g. `connpass_api/1.0.0`.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Runtime identifier appended to the library identifier.
pub fn runtime_id() -> String {
    format!("({}; {})", std::env::consts::OS, std::env::consts::ARCH)
}

/// Full header value: the client's user agent followed by the runtime identifier.
pub fn get_user_agent(user_agent: &str) -> String {
    format!("{} {}", user_agent, runtime_id())
}
