//! World object registry
//!
//! The central store for active game entities: a string-keyed map from
//! signature to game object. The object type is supplied by the game as
//! a tagged capability enum, so a lookup that expects a particular kind
//! of object is checked by pattern matching rather than downcasting.
//!
//! Scene nodes record the signatures they register and remove exactly
//! those on `leave`; a removal of an unknown signature is therefore a
//! scene-sequencing bug and surfaces as [`WorldError::MissingObject`].
//!
//! Access is confined to the game-loop thread. A multi-threaded caller
//! must provide its own synchronization; the registry does not.

use std::collections::HashMap;
use thiserror::Error;

/// Errors from registry operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// No object is registered under the given signature
    #[error("no game object registered under signature '{0}'")]
    MissingObject(String),

    /// An object is already registered under the given signature
    #[error("a game object is already registered under signature '{0}'")]
    DuplicateObject(String),
}

/// String-keyed registry of active game objects
///
/// `O` is the game's object type, typically an enum over the fixed set
/// of object kinds the game knows about. Signatures are case-sensitive
/// ASCII strings; the registry lives for the process.
pub struct World<O> {
    objects: HashMap<String, O>,
}

impl<O> Default for World<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> World<O> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Register an object under a signature
    ///
    /// Fails with [`WorldError::DuplicateObject`] if the signature is
    /// already taken; registering over a live object would orphan it.
    pub fn add(&mut self, signature: impl Into<String>, object: O) -> Result<(), WorldError> {
        let signature = signature.into();
        if self.objects.contains_key(&signature) {
            return Err(WorldError::DuplicateObject(signature));
        }
        log::debug!("Registering game object '{}'", signature);
        self.objects.insert(signature, object);
        Ok(())
    }

    /// Look up an object by signature
    pub fn get(&self, signature: &str) -> Option<&O> {
        self.objects.get(signature)
    }

    /// Look up an object by signature, mutably
    pub fn get_mut(&mut self, signature: &str) -> Option<&mut O> {
        self.objects.get_mut(signature)
    }

    /// Remove and return the object registered under a signature
    ///
    /// Fails with [`WorldError::MissingObject`] if the signature is not
    /// present.
    pub fn remove(&mut self, signature: &str) -> Result<O, WorldError> {
        log::debug!("Removing game object '{}'", signature);
        self.objects
            .remove(signature)
            .ok_or_else(|| WorldError::MissingObject(signature.to_owned()))
    }

    /// Check whether a signature is registered
    pub fn contains(&self, signature: &str) -> bool {
        self.objects.contains_key(signature)
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over the registered signatures (arbitrary order)
    pub fn signatures(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut world: World<u32> = World::new();
        world.add("Bird", 7).unwrap();

        assert_eq!(world.get("Bird"), Some(&7));
        assert!(world.contains("Bird"));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_add_duplicate_signature_fails() {
        let mut world: World<u32> = World::new();
        world.add("Floor", 1).unwrap();

        let err = world.add("Floor", 2).unwrap_err();
        assert_eq!(err, WorldError::DuplicateObject("Floor".to_owned()));
        // The first registration is untouched
        assert_eq!(world.get("Floor"), Some(&1));
    }

    #[test]
    fn test_remove_returns_object() {
        let mut world: World<u32> = World::new();
        world.add("ScoreBoard", 42).unwrap();

        assert_eq!(world.remove("ScoreBoard"), Ok(42));
        assert!(!world.contains("ScoreBoard"));
        assert!(world.is_empty());
    }

    #[test]
    fn test_remove_missing_signature_fails() {
        let mut world: World<u32> = World::new();

        let err = world.remove("Pipe1").unwrap_err();
        assert_eq!(err, WorldError::MissingObject("Pipe1".to_owned()));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut world: World<u32> = World::new();
        world.add("Bird", 1).unwrap();

        assert!(!world.contains("bird"));
        assert!(world.remove("bird").is_err());
    }
}
