use std::{error::Error, fmt};

#[derive(Clone, Debug, PartialEq)]
/// A reference to configured or host-provided data could not be resolved.
///
/// These are fatal at the point of use: during parsing for named faces, during layout
/// for faces and choice settings, or during lookup for key references.
pub enum ConfigError {
    /// A `[DFace]` or `[FName]` tag named a face which is not in the face registry.
    UnknownFace { name: String },
    /// An override refers to a key which does not exist in the loaded text.
    UnknownKeyReference { key: String },
    /// The host could not provide a face for an actor.
    UnknownActor { actor_id: u32 },
    /// The host could not provide a face for a party slot.
    UnknownPartyMember { slot: u32 },
    /// A choice set has a default choice beyond the synthetic cancel branch.
    DefaultChoiceOutOfRange { value: u32, num_choices: usize },
    /// A language was requested which is not in the configured language list.
    UnknownLanguage { name: String },
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ConfigError::*;

        match self {
            UnknownFace { name } => write!(
                f,
                "No face named '{}' exists in the face registry",
                name
            ),
            UnknownKeyReference { key } => write!(
                f,
                "Override refers to key '{}' but no text with that key exists",
                key
            ),
            UnknownActor { actor_id } => {
                write!(f, "Could not find a face for actor with id {}", actor_id)
            }
            UnknownPartyMember { slot } => write!(
                f,
                "Could not find a face for party member in slot {}",
                slot
            ),
            DefaultChoiceOutOfRange { value, num_choices } => write!(
                f,
                "Default choice {} is out of range for a set of {} choices \
                 (valid values are 0 to {})",
                value,
                num_choices,
                num_choices + 1
            ),
            UnknownLanguage { name } => write!(f, "Language '{}' is not available", name),
        }
    }
}
