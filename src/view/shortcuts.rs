use crate::config::ShortcutConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A key plus modifier state, written as `"alt+g"` or `"ctrl+shift+k"`.
///
/// Matching is exact: `alt+g` does not fire for `alt+shift+g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: char,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut chord = KeyChord::default();
        let mut key = None;

        for part in text.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "alt" | "option" => chord.alt = true,
                "ctrl" | "control" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "meta" | "cmd" | "super" => chord.meta = true,
                "" => return Err(format!("'{text}' has an empty key")),
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next(), key) {
                        (Some(c), None, None) => key = Some(c),
                        (Some(_), None, Some(_)) => {
                            return Err(format!("'{text}' names more than one key"))
                        }
                        _ => return Err(format!("'{other}' is not a modifier or single key")),
                    }
                }
            }
        }

        chord.key = key.ok_or_else(|| format!("'{text}' has no key"))?;
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (on, name) in [
            (self.ctrl, "ctrl"),
            (self.alt, "alt"),
            (self.shift, "shift"),
            (self.meta, "meta"),
        ] {
            if on {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortcutAction {
    /// Select threshold 0
    ShowAll,
    /// Move focus to the chart
    JumpToChart,
}

impl ShortcutAction {
    /// Threshold this action selects, if it filters at all
    pub fn threshold(&self) -> Option<u32> {
        match self {
            Self::ShowAll => Some(0),
            Self::JumpToChart => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutMap {
    bindings: Vec<(KeyChord, ShortcutAction)>,
}

impl ShortcutMap {
    pub fn from_config(config: &ShortcutConfig) -> Result<Self, String> {
        Ok(Self {
            bindings: vec![
                (KeyChord::parse(&config.show_all)?, ShortcutAction::ShowAll),
                (KeyChord::parse(&config.jump_to_chart)?, ShortcutAction::JumpToChart),
            ],
        })
    }

    pub fn action_for(&self, pressed: &KeyChord) -> Option<ShortcutAction> {
        self.bindings
            .iter()
            .find(|(chord, _)| chord == pressed)
            .map(|(_, action)| *action)
    }
}
