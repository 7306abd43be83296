//! Face lookups: the named face registry and the host's actor and party faces.

use crate::{error::ConfigError, record::FaceImage};

use std::collections::HashMap;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Faces registered under a name, for recurring speakers.
///
/// Used by the `[DFace]` and `[FName]` tags.
///
/// # Examples
/// ```
/// # use external_text::{FaceImage, FaceRegistry};
/// let faces = FaceRegistry::new().with_face("Ralph", "Actor1", 0);
///
/// assert_eq!(faces.get("Ralph").unwrap(), &FaceImage::new("Actor1", 0));
/// ```
pub struct FaceRegistry {
    faces: HashMap<String, FaceImage>,
}

impl FaceRegistry {
    pub fn new() -> Self {
        FaceRegistry::default()
    }

    /// Builder-style insertion of a face.
    pub fn with_face<S, T>(mut self, name: S, file: T, index: u32) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.insert(name, FaceImage::new(file, index));
        self
    }

    /// Register a face under a name, replacing any earlier face with the name.
    pub fn insert<T: Into<String>>(&mut self, name: T, face: FaceImage) {
        self.faces.insert(name.into(), face);
    }

    pub fn get(&self, name: &str) -> Option<&FaceImage> {
        self.faces.get(name)
    }

    /// Get a face which must exist.
    ///
    /// # Errors
    /// *   [`UnknownFace`][crate::error::ConfigError::UnknownFace]: if no face is
    ///     registered under the name.
    pub fn require(&self, name: &str) -> Result<&FaceImage, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::UnknownFace {
            name: name.to_string(),
        })
    }
}

/// Host lookup of faces that depend on game state.
///
/// Implemented by the host to resolve `[AFace]` and `[PFace]` records when a message
/// is laid out.
pub trait FaceLookup {
    /// Face of the actor with the given id.
    fn actor_face(&self, actor_id: u32) -> Option<FaceImage>;
    /// Face of the party member in the given slot, counted from 0.
    fn party_face(&self, slot: u32) -> Option<FaceImage>;
}

/// Lookup for hosts without actors. Every actor and party face is missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFaces;

impl FaceLookup for NoFaces {
    fn actor_face(&self, _: u32) -> Option<FaceImage> {
        None
    }

    fn party_face(&self, _: u32) -> Option<FaceImage> {
        None
    }
}
