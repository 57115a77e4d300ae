use log::debug;
use std::env;

/// Pick the remote-control socket: an explicit value wins, then `KITTY_LISTEN_ON`.
/// `None` means kitten should talk to the kitty instance it is running inside.
pub fn resolve_socket(explicit: Option<&str>) -> Option<String> {
    if let Some(socket) = explicit.filter(|s| !s.is_empty()) {
        debug!("Using configured kitty socket: {socket}");
        return Some(socket.to_string());
    }

    match env::var("KITTY_LISTEN_ON") {
        Ok(socket) if !socket.is_empty() => {
            debug!("Using KITTY_LISTEN_ON environment variable: {socket}");
            Some(socket)
        }
        _ => {
            debug!("No kitty socket configured, using the enclosing kitty instance");
            None
        }
    }
}
