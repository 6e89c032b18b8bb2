//! Decides which imports stay out of every bundle.

use std::sync::Arc;

use serde::{Serialize, Serializer};
use tetrad_config::PeerDependencySet;

/// Classifies module names as external (referenced by name) or bundled.
///
/// Cloning is cheap and every clone reads the same peer set, so all targets
/// built from one generator agree on what is external.
#[derive(Debug, Clone)]
pub struct ExternalClassifier {
    peers: Arc<PeerDependencySet>,
}

impl ExternalClassifier {
    pub fn new(peers: PeerDependencySet) -> Self {
        Self {
            peers: Arc::new(peers),
        }
    }

    /// True iff `module_name` is exactly a declared peer dependency.
    ///
    /// Subpaths (`solid-js/web`) and near-misses are bundled.
    pub fn is_external(&self, module_name: &str) -> bool {
        self.peers.contains(module_name)
    }

    /// Peer name to global symbol mapping, used by the UMD targets.
    pub fn globals(&self) -> &PeerDependencySet {
        &self.peers
    }

    /// True when both classifiers read the same peer set allocation.
    pub fn shares_peers_with(&self, other: &ExternalClassifier) -> bool {
        Arc::ptr_eq(&self.peers, &other.peers)
    }
}

impl Serialize for ExternalClassifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            external: Vec<&'a str>,
            globals: &'a PeerDependencySet,
        }

        View {
            external: self.peers.names().collect(),
            globals: &self.peers,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ExternalClassifier {
        ExternalClassifier::new(
            PeerDependencySet::new()
                .with("solid-js", "Solid")
                .with("core-runtime", "RangerCore"),
        )
    }

    #[test]
    fn declared_peers_are_external() {
        let external = classifier();
        assert!(external.is_external("solid-js"));
        assert!(external.is_external("core-runtime"));
    }

    #[test]
    fn unknown_and_partial_names_are_bundled() {
        let external = classifier();
        assert!(!external.is_external("left-pad"));
        assert!(!external.is_external("solid-js/web"));
        assert!(!external.is_external("solid"));
        assert!(!external.is_external(""));
    }

    #[test]
    fn empty_peer_set_bundles_everything() {
        let external = ExternalClassifier::new(PeerDependencySet::new());
        assert!(!external.is_external("solid-js"));
    }

    #[test]
    fn clones_share_the_peer_set() {
        let a = classifier();
        let b = a.clone();
        assert!(a.shares_peers_with(&b));
        assert!(!a.shares_peers_with(&classifier()));
    }

    #[test]
    fn serializes_names_and_globals() {
        let value = serde_json::to_value(classifier()).unwrap();
        assert_eq!(value["external"], serde_json::json!(["solid-js", "core-runtime"]));
        assert_eq!(value["globals"]["solid-js"], "Solid");
    }
}
