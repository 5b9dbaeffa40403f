//! Keyboard shortcuts.
//!
//! A shortcut is one chord (modifiers plus a key) bound to a [`Command`].
//! Letters are stored lowercase so Ctrl+Shift+S matches whether the
//! toolkit reports `s` or `S`.

use crate::command::Command;
use crate::config::Config;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, Win elsewhere
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Self::NONE
    };
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Self::CTRL
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Parses `"ctrl+shift"` style lists. Unknown names give `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut mods = Self::NONE;
        for name in s.split('+').map(str::trim).filter(|n| !n.is_empty()) {
            let flag = match name.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => &mut mods.ctrl,
                "alt" | "option" => &mut mods.alt,
                "shift" => &mut mods.shift,
                "meta" | "cmd" | "super" | "win" => &mut mods.meta,
                _ => return None,
            };
            *flag = true;
        }
        Some(mods)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = if cfg!(target_os = "macos") { "Cmd" } else { "Win" };
        let names = [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, meta),
        ];
        let shown: Vec<&str> = names
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect();
        f.write_str(&shown.join("+"))
    }
}

/// Keys a shortcut can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    Escape,
    /// Function key F1..=F24
    F(u8),
}

impl Key {
    const NAMED: [(&'static str, Key); 6] = [
        ("Enter", Key::Enter),
        ("Tab", Key::Tab),
        ("Space", Key::Space),
        ("Backspace", Key::Backspace),
        ("Delete", Key::Delete),
        ("Escape", Key::Escape),
    ];

    /// Parses `"s"`, `"F5"`, `"Enter"` and friends, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some((_, key)) = Self::NAMED.iter().find(|(name, _)| name.eq_ignore_ascii_case(s)) {
            return Some(*key);
        }
        match s.to_ascii_lowercase().as_str() {
            "esc" => return Some(Key::Escape),
            "del" => return Some(Key::Delete),
            "return" => return Some(Key::Enter),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Key::Char(c).normalized()),
            (Some('f' | 'F'), Some(_)) => s[1..]
                .parse()
                .ok()
                .filter(|n| (1..=24).contains(n))
                .map(Key::F),
            _ => None,
        }
    }

    fn normalized(self) -> Self {
        match self {
            Key::Char(c) => Key::Char(c.to_lowercase().next().unwrap_or(c)),
            other => other,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::F(n) => write!(f, "F{n}"),
            named => {
                let name = Self::NAMED
                    .iter()
                    .find(|(_, key)| key == named)
                    .map_or("?", |(name, _)| *name);
                f.write_str(name)
            }
        }
    }
}

/// A chord: modifiers plus one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key: key.normalized(),
            modifiers,
        }
    }

    /// Parses `"ctrl+s"`, `"Ctrl+Shift+S"` or `"ctrl++"` (the plus key).
    pub fn parse(s: &str) -> Option<Self> {
        let (mods, key) = match s.rsplit_once('+') {
            Some((mods, "")) => (mods.strip_suffix('+')?, "+"),
            Some(split) => split,
            None => ("", s),
        };
        Some(Self::new(Key::parse(key)?, Modifiers::parse(mods)?))
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Chord to command table.
#[derive(Debug, Clone)]
pub struct Keymap {
    commands: HashMap<KeyPress, Command>,
    /// Chord shown next to each command in the menus, by command name
    labels: HashMap<&'static str, KeyPress>,
}

impl Keymap {
    /// The built-in Ctrl shortcuts.
    pub fn new() -> Self {
        let mut keymap = Self {
            commands: HashMap::new(),
            labels: HashMap::new(),
        };

        let ctrl = |c| KeyPress::new(Key::Char(c), Modifiers::CTRL);
        keymap.bind(ctrl('n'), Command::NewFile);
        keymap.bind(ctrl('o'), Command::OpenFile { path: None });
        keymap.bind(ctrl('s'), Command::Save);
        keymap.bind(
            KeyPress::new(Key::Char('s'), Modifiers::CTRL_SHIFT),
            Command::SaveAs { path: None },
        );
        keymap.bind(ctrl('q'), Command::Exit);
        keymap.bind(ctrl('z'), Command::Undo);
        keymap.bind(ctrl('y'), Command::Redo);
        keymap.bind(ctrl('x'), Command::Cut);
        keymap.bind(ctrl('c'), Command::Copy);
        keymap.bind(ctrl('v'), Command::Paste);
        keymap.bind(ctrl('a'), Command::SelectAll);
        keymap.bind(
            ctrl('f'),
            Command::FindReplace {
                find: None,
                replacement: None,
            },
        );
        keymap
    }

    /// Built-in shortcuts overlaid with `[keyboard.bindings]`. Entries that
    /// don't parse are logged and skipped.
    pub fn from_config(config: &Config) -> Self {
        let mut keymap = Self::new();

        for (chord, name) in &config.keyboard.bindings {
            match (KeyPress::parse(chord), Command::from_name(name)) {
                (Some(keys), Some(command)) => keymap.bind(keys, command),
                _ => tracing::warn!("Ignoring key binding {:?} = {:?}", chord, name),
            }
        }
        keymap
    }

    /// Binds `keys` to `command`, taking the chord away from whatever
    /// held it before.
    pub fn bind(&mut self, keys: KeyPress, command: Command) {
        if let Some(previous) = self.commands.insert(keys, command.clone()) {
            if self.labels.get(previous.name()) == Some(&keys) {
                self.labels.remove(previous.name());
            }
        }
        self.labels.entry(command.name()).or_insert(keys);
    }

    pub fn lookup(&self, keys: &KeyPress) -> Option<&Command> {
        self.commands.get(keys)
    }

    /// Chord to print next to `command` in a menu.
    pub fn shortcut_for(&self, command: &Command) -> Option<&KeyPress> {
        self.labels.get(command.name())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
