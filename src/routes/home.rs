use crate::constants::MSG_HOME;

/// Home route
///
/// Plain-text greeting, usable as a liveness probe.
pub async fn home() -> &'static str {
    MSG_HOME
}
