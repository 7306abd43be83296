//! Overrides for game database fields.
//!
//! Database entries such as actor names or item descriptions can be replaced by text
//! records. The host asks for a field through [`get_field`] with the value from its
//! database as the default. The record with the generated key replaces the value if
//! it exists:
//!
//! ```text
//! [Key] Actor_1_name
//! Eric
//!
//! [Key] Map_display_name
//! Riverside
//! ```
//!
//! The key is the entity name, the entry id (if the entity has one) and the field name
//! joined by underscores. See [`override_key`].

use crate::{error::ConfigError, overrides::OverrideResolver, session::Session};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Entities and the fields of theirs which are looked up in the text.
///
/// Hosts can look up any field with [`get_field`], this table lists the fields which
/// are overridable by default.
pub const DEFAULT_OVERRIDES: &[(&str, &[&str])] = &[
    ("RPG::Actor", &["name", "nickname", "description"]),
    ("RPG::Class", &["name"]),
    ("RPG::Skill", &["name", "description", "message1", "message2"]),
    ("RPG::Item", &["name", "description"]),
    ("RPG::Weapon", &["name", "description"]),
    ("RPG::Armor", &["name", "description"]),
    ("RPG::Enemy", &["name"]),
    (
        "RPG::State",
        &["name", "message1", "message2", "message3", "message4"],
    ),
    ("RPG::Map", &["display_name"]),
];

/// Keys of the basic vocabulary, in the order of [`Terms::basic`].
pub const BASIC_TERM_KEYS: [&str; 8] = [
    "System_Level",
    "System_Level_short",
    "System_HP",
    "System_HP_short",
    "System_MP",
    "System_MP_short",
    "System_TP",
    "System_TP_short",
];

/// Keys of the parameter names, in the order of [`Terms::params`].
pub const PARAM_TERM_KEYS: [&str; 8] = [
    "System_MHP",
    "System_MMP",
    "System_ATK",
    "System_DEF",
    "System_MAT",
    "System_MDF",
    "System_AGI",
    "System_LUK",
];

/// Keys of the equipment type names, in the order of [`Terms::etypes`].
pub const ETYPE_TERM_KEYS: [&str; 5] = [
    "System_etype_0",
    "System_etype_1",
    "System_etype_2",
    "System_etype_3",
    "System_etype_4",
];

/// Keys of the command names, in the order of [`Terms::commands`].
pub const COMMAND_TERM_KEYS: [&str; 23] = [
    "System_Fight",
    "System_Escape",
    "System_Attack",
    "System_Defend",
    "System_Item",
    "System_Skill",
    "System_Equip",
    "System_Status",
    "System_Sort",
    "System_Save",
    "System_Exit_Game",
    "System_(not_used)",
    "System_Weapon",
    "System_Armor",
    "System_Key_Item",
    "System_Change_Equipment",
    "System_Ultimate_Equipment",
    "System_Remove_All",
    "System_New_Game",
    "System_Continue",
    "System_Shut_Down",
    "System_Go_to_Title",
    "System_Cancel",
];

/// Name of an entity without its path: `RPG::Actor` is `Actor`.
pub fn entity_name(entity: &str) -> &str {
    entity.rsplit("::").next().unwrap_or(entity)
}

/// Generate the key which overrides a database field.
///
/// # Examples
/// ```
/// # use external_text::database::override_key;
/// assert_eq!(override_key("RPG::Actor", Some(1), "name"), "Actor_1_name");
/// assert_eq!(override_key("Game_Party", None, "name"), "Game_Party_name");
/// ```
pub fn override_key(entity: &str, id: Option<u32>, field: &str) -> String {
    match id {
        Some(id) => format!("{}_{}_{}", entity_name(entity), id, field),
        None => format!("{}_{}", entity_name(entity), field),
    }
}

/// Get the value of a database field: the current text of its override key if that
/// key exists, otherwise the default.
///
/// # Errors
/// *   [`UnknownKeyReference`][crate::error::ConfigError::UnknownKeyReference]: if
///     the override key is overridden by a key which does not exist.
pub fn get_field(
    session: &Session,
    entity: &str,
    id: Option<u32>,
    field: &str,
    default: &str,
) -> Result<String, ConfigError> {
    let key = override_key(entity, id, field);

    Ok(session
        .get_text(&key)?
        .unwrap_or_else(|| default.to_string()))
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// System vocabulary of a game.
pub struct Terms {
    /// Level, HP, MP and TP, each followed by its short form.
    pub basic: Vec<String>,
    pub params: Vec<String>,
    /// Equipment types.
    pub etypes: Vec<String>,
    /// Menu and battle commands.
    pub commands: Vec<String>,
}

impl Terms {
    /// Replace every term which has text under its `System_*` key.
    ///
    /// Defaults with fewer terms than there are keys get only the keys up to their
    /// length. Extra defaults are kept as they are.
    pub fn resolve(resolver: &OverrideResolver, defaults: &Terms) -> Result<Terms, ConfigError> {
        Ok(Terms {
            basic: resolve_terms(resolver, &BASIC_TERM_KEYS, &defaults.basic)?,
            params: resolve_terms(resolver, &PARAM_TERM_KEYS, &defaults.params)?,
            etypes: resolve_terms(resolver, &ETYPE_TERM_KEYS, &defaults.etypes)?,
            commands: resolve_terms(resolver, &COMMAND_TERM_KEYS, &defaults.commands)?,
        })
    }
}

fn resolve_terms(
    resolver: &OverrideResolver,
    keys: &[&str],
    defaults: &[String],
) -> Result<Vec<String>, ConfigError> {
    defaults
        .iter()
        .enumerate()
        .map(|(i, default)| match keys.get(i) {
            Some(key) => Ok(resolver.resolve(key)?.unwrap_or_else(|| default.clone())),
            None => Ok(default.clone()),
        })
        .collect()
}
