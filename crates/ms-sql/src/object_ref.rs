//! Recognition of the database objects a statement creates or drops
//!
//! Matching is regex-based and unanchored: the first CREATE/DROP/CONSTRAINT
//! shape found anywhere in the statement is used. Names may be wrapped in
//! one layer of backtick, double or single quotes and are compared
//! case-insensitively (they are returned lowercased). A statement that does
//! not match cleanly yields `None`, never an error.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Kinds of objects tracked for create/drop pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectKind {
    Table,
    Index,
    Type,
    Function,
    Procedure,
    Trigger,
    Sequence,
    View,
}

impl ObjectKind {
    /// Parse a type keyword (any case) into an object kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "TABLE" => Some(ObjectKind::Table),
            "INDEX" => Some(ObjectKind::Index),
            "TYPE" => Some(ObjectKind::Type),
            "FUNCTION" => Some(ObjectKind::Function),
            "PROCEDURE" => Some(ObjectKind::Procedure),
            "TRIGGER" => Some(ObjectKind::Trigger),
            "SEQUENCE" => Some(ObjectKind::Sequence),
            "VIEW" => Some(ObjectKind::View),
            _ => None,
        }
    }

    /// The SQL keyword for this kind.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            ObjectKind::Table => "TABLE",
            ObjectKind::Index => "INDEX",
            ObjectKind::Type => "TYPE",
            ObjectKind::Function => "FUNCTION",
            ObjectKind::Procedure => "PROCEDURE",
            ObjectKind::Trigger => "TRIGGER",
            ObjectKind::Sequence => "SEQUENCE",
            ObjectKind::View => "VIEW",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}

/// An object a statement acts on, used only to find cancelling pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectReference {
    /// A schema object named by a CREATE or DROP.
    Object { kind: ObjectKind, name: String },
    /// A constraint named by ALTER TABLE ... ADD/DROP CONSTRAINT.
    Constraint { table: String, name: String },
}

const KINDS: &str = "TABLE|INDEX|TYPE|FUNCTION|PROCEDURE|TRIGGER|SEQUENCE|VIEW";
const IDENT: &str = r#"[`"']?([a-zA-Z_][a-zA-Z0-9_]*)[`"']?"#;

static CREATE_RE: OnceLock<Regex> = OnceLock::new();
static DROP_RE: OnceLock<Regex> = OnceLock::new();
static ADD_CONSTRAINT_RE: OnceLock<Regex> = OnceLock::new();
static ADD_FOREIGN_KEY_RE: OnceLock<Regex> = OnceLock::new();
static DROP_CONSTRAINT_RE: OnceLock<Regex> = OnceLock::new();

fn build(pattern: String) -> Regex {
    Regex::new(&pattern).expect("valid regex literal")
}

fn create_re() -> &'static Regex {
    CREATE_RE.get_or_init(|| {
        build(format!(
            r"(?i)CREATE\s+({KINDS})\s+(?:IF\s+NOT\s+EXISTS\s+)?{IDENT}"
        ))
    })
}

fn drop_re() -> &'static Regex {
    DROP_RE.get_or_init(|| build(format!(r"(?i)DROP\s+({KINDS})\s+(?:IF\s+EXISTS\s+)?{IDENT}")))
}

fn add_constraint_re() -> &'static Regex {
    ADD_CONSTRAINT_RE
        .get_or_init(|| build(format!(r"(?i)ALTER\s+TABLE\s+{IDENT}\s+ADD\s+CONSTRAINT\s+{IDENT}")))
}

fn add_foreign_key_re() -> &'static Regex {
    ADD_FOREIGN_KEY_RE.get_or_init(|| {
        build(format!(
            r"(?i)ALTER\s+TABLE\s+{IDENT}\s+ADD\s+FOREIGN\s+KEY\s+{IDENT}"
        ))
    })
}

fn drop_constraint_re() -> &'static Regex {
    DROP_CONSTRAINT_RE.get_or_init(|| {
        build(format!(
            r"(?i)ALTER\s+TABLE\s+{IDENT}\s+DROP\s+CONSTRAINT\s+{IDENT}"
        ))
    })
}

fn object_from(caps: &Captures<'_>) -> Option<ObjectReference> {
    let kind = ObjectKind::from_keyword(caps.get(1)?.as_str())?;
    let name = caps.get(2)?.as_str().to_lowercase();
    Some(ObjectReference::Object { kind, name })
}

fn constraint_from(caps: &Captures<'_>) -> Option<ObjectReference> {
    let table = caps.get(1)?.as_str().to_lowercase();
    let name = caps.get(2)?.as_str().to_lowercase();
    Some(ObjectReference::Constraint { table, name })
}

/// The object created by a `CREATE <KIND> [IF NOT EXISTS] <name>` statement.
pub fn create_target(sql: &str) -> Option<ObjectReference> {
    object_from(&create_re().captures(sql)?)
}

/// The object removed by a `DROP <KIND> [IF EXISTS] <name>` statement.
pub fn drop_target(sql: &str) -> Option<ObjectReference> {
    object_from(&drop_re().captures(sql)?)
}

/// The `(table, constraint)` added by `ADD CONSTRAINT` (including the named
/// CHECK form) or `ADD FOREIGN KEY <name>`.
pub fn constraint_added(sql: &str) -> Option<ObjectReference> {
    add_constraint_re()
        .captures(sql)
        .or_else(|| add_foreign_key_re().captures(sql))
        .and_then(|caps| constraint_from(&caps))
}

/// The `(table, constraint)` removed by `ALTER TABLE ... DROP CONSTRAINT`.
pub fn constraint_dropped(sql: &str) -> Option<ObjectReference> {
    constraint_from(&drop_constraint_re().captures(sql)?)
}

#[cfg(test)]
#[path = "object_ref_test.rs"]
mod tests;
