//! Network graph accessors: where the player stands and what is one hop away

use crate::error::StateError;
use crate::world::{GameState, Host};
use crate::{slog_error, slog_warn};
use serde_json::json;

/// The host the player is connected to
pub fn current_host<S: GameState + ?Sized>(state: &S) -> Result<&Host, StateError> {
    let hostname = state.current_hostname();
    state.server(hostname).ok_or_else(|| {
        slog_error!(
            "NETWORK",
            "dangling_current_host",
            json!({ "hostname": hostname })
        );
        StateError::DanglingCurrentHost {
            hostname: hostname.to_string(),
        }
    })
}

/// Hostnames directly connected to `host`, in adjacency order.
/// Links to servers that are no longer registered are skipped.
pub fn connectable_neighbors<S: GameState + ?Sized>(state: &S, host: &Host) -> Vec<String> {
    host.servers_on_network
        .iter()
        .filter(|name| {
            let known = state.server(name).is_some();
            if !known {
                slog_warn!(
                    "NETWORK",
                    "dangling_neighbor",
                    json!({ "host": host.hostname, "neighbor": name })
                );
            }
            known
        })
        .cloned()
        .collect()
}

/// Targets for commands that send files elsewhere: `home` first, then the
/// neighbours of the host the player is on
pub fn remote_targets<S: GameState + ?Sized>(state: &S, host: &Host, home: &str) -> Vec<String> {
    let mut targets = vec![home.to_string()];
    targets.extend(connectable_neighbors(state, host));
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;

    fn triangle_free_world() -> World {
        let mut world = World::with_home("home");
        world.add_host(Host::new("near"));
        world.add_host(Host::new("far"));
        world.connect_hosts("home", "near");
        world.connect_hosts("near", "far");
        world
    }

    #[test]
    fn test_current_host() {
        let world = triangle_free_world();
        assert_eq!(current_host(&world).unwrap().hostname, "home");
    }

    #[test]
    fn test_dangling_current_host_is_error() {
        let mut world = triangle_free_world();
        world.player.current_server = "vanished".to_string();
        assert_eq!(
            current_host(&world).unwrap_err(),
            StateError::DanglingCurrentHost {
                hostname: "vanished".to_string()
            }
        );
    }

    #[test]
    fn test_neighbors_are_one_hop() {
        let world = triangle_free_world();
        let home = world.host("home").unwrap();
        let near = world.host("near").unwrap();
        assert_eq!(connectable_neighbors(&world, home), vec!["near"]);
        assert_eq!(connectable_neighbors(&world, near), vec!["home", "far"]);
    }

    #[test]
    fn test_removed_neighbor_is_skipped() {
        let mut world = triangle_free_world();
        world.remove_host("far");
        let near = world.host("near").unwrap();
        assert_eq!(connectable_neighbors(&world, near), vec!["home"]);
    }

    #[test]
    fn test_remote_targets_start_with_home() {
        let world = triangle_free_world();
        let home = world.host("home").unwrap();
        assert_eq!(remote_targets(&world, home, "home"), vec!["home", "near"]);
    }
}
