#![forbid(unsafe_code)]

//! Pane identifiers.
//!
//! Hosts may name panes with text or with numbers. Identity is value
//! equality on the variant: `Number(0)` is a real id, distinct from both
//! `Text("0")` and "no active pane" (`Option::None` at the call sites).

use std::fmt;

/// Identifier of a single pane.
///
/// When the host gives no explicit name, the registry assigns the pane's
/// zero-based registration position rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum PaneId {
    /// Textual name supplied by the host, or a positional fallback.
    Text(String),
    /// Numeric name supplied by the host.
    Number(i64),
}

impl PaneId {
    /// Positional fallback id for a pane registered without a name.
    #[must_use]
    pub fn positional(index: usize) -> Self {
        Self::Text(index.to_string())
    }

    /// The textual form, if this id is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// The numeric form, if this id is numeric.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Text(_) => None,
            Self::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for PaneId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PaneId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for PaneId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::PaneId;

    #[test]
    fn numeric_zero_is_not_textual_zero() {
        assert_ne!(PaneId::Number(0), PaneId::Text("0".into()));
        assert_ne!(PaneId::Number(0), PaneId::positional(0));
    }

    #[test]
    fn numeric_zero_is_distinguishable_from_unset() {
        let active: Option<PaneId> = Some(PaneId::Number(0));
        assert_eq!(active, Some(PaneId::from(0)));
        assert_ne!(active, None);
    }

    #[test]
    fn positional_ids_render_as_index_text() {
        assert_eq!(PaneId::positional(3), PaneId::from("3"));
        assert_eq!(PaneId::positional(3).to_string(), "3");
    }

    #[test]
    fn display_renders_bare_value() {
        assert_eq!(PaneId::from("settings").to_string(), "settings");
        assert_eq!(PaneId::from(42).to_string(), "42");
    }
}
