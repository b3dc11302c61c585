//! Chorded hotkeys.
//!
//! The dispatcher tracks which keys are held and, on every key-down, fires
//! each binding whose chord is fully held. `FireMode::Once` bindings fire at
//! most once per unbroken hold; releasing any key re-arms all of them.

use fnv::{FnvHashMap, FnvHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Mac,
    Windows,
    Linux,
    WindowsPhone,
    Android,
    Ios,
    Unknown,
}

impl Platform {
    /// Classify a browser user-agent string. The checks run in a fixed order,
    /// so e.g. Android agents (which mention Linux) report `Linux`.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let has_any = |needles: &[&str]| needles.iter().any(|n| user_agent.contains(n));
        let lower = user_agent.to_ascii_lowercase();
        if has_any(&["Macintosh", "MacIntel", "MacPPC", "Mac68K"]) {
            Platform::Mac
        } else if has_any(&["Win32", "Win64", "Windows", "WinCE"]) {
            Platform::Windows
        } else if user_agent.contains("Linux") {
            Platform::Linux
        } else if lower.contains("windows phone") {
            Platform::WindowsPhone
        } else if lower.contains("android") {
            Platform::Android
        } else if has_any(&["iPad", "iPhone", "iPod"]) {
            Platform::Ios
        } else {
            Platform::Unknown
        }
    }

    /// Platform of the compile target, for native front-ends.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Unknown
        }
    }

    #[inline]
    pub fn is_mac(self) -> bool {
        matches!(self, Platform::Mac)
    }
}

/// Map the names different event sources use for the same physical modifier
/// onto the names produced by alias resolution.
#[inline]
pub fn canonical_key_name(raw: &str) -> &str {
    if raw.eq_ignore_ascii_case("control") || raw.eq_ignore_ascii_case("ctrl") {
        "Ctrl"
    } else if ["os", "super", "meta"].iter().any(|m| raw.eq_ignore_ascii_case(m)) {
        "Meta"
    } else {
        raw
    }
}

/// Key identity used for matching: canonical name, ASCII case folded, so
/// `"Shift"` from an event matches `"shift"` in a chord string.
#[inline]
fn match_key(raw: &str) -> String {
    canonical_key_name(raw).to_ascii_lowercase()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyToken {
    /// `Meta` on Mac, `Ctrl` everywhere else.
    Mod,
    Key(String),
}

impl KeyToken {
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("mod") {
            KeyToken::Mod
        } else {
            KeyToken::Key(canonical_key_name(token).to_owned())
        }
    }

    pub fn resolve(&self, platform: Platform) -> &str {
        match self {
            KeyToken::Mod if platform.is_mac() => "Meta",
            KeyToken::Mod => "Ctrl",
            KeyToken::Key(k) => k,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyChord {
    tokens: SmallVec<[KeyToken; 4]>,
}

impl KeyChord {
    pub fn from_keys(keys: &[&str]) -> Self {
        Self {
            tokens: keys.iter().map(|k| KeyToken::parse(k)).collect(),
        }
    }

    /// Parse `"mod+shift+s"` style strings. A bare `+` (or an empty segment,
    /// as in `"mod++"`) denotes the plus key itself.
    pub fn parse(chord: &str) -> Self {
        if chord.is_empty() {
            return Self::default();
        }
        let mut tokens: SmallVec<[KeyToken; 4]> = SmallVec::new();
        let mut wants_plus = false;
        for part in chord.split('+') {
            if part.is_empty() {
                wants_plus = true;
            } else {
                tokens.push(KeyToken::parse(part));
            }
        }
        if wants_plus {
            tokens.push(KeyToken::Key("+".to_owned()));
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn resolve(&self, platform: Platform) -> SmallVec<[String; 4]> {
        self.tokens
            .iter()
            .map(|t| t.resolve(platform).to_owned())
            .collect()
    }
}

impl From<&str> for KeyChord {
    fn from(chord: &str) -> Self {
        KeyChord::parse(chord)
    }
}

impl From<&[&str]> for KeyChord {
    fn from(keys: &[&str]) -> Self {
        KeyChord::from_keys(keys)
    }
}

/// Display label for a chord, e.g. `⌘+C` on Mac and `Ctrl+C` elsewhere.
pub fn hotkey_label(chord: &KeyChord, platform: Platform) -> String {
    let pretty = |key: &str| -> Option<&'static str> {
        let lower = key.to_ascii_lowercase();
        let per_os = match (platform, lower.as_str()) {
            (Platform::Mac, "meta") => Some("\u{2318}"),
            (Platform::Mac, "alt" | "option") => Some("\u{2325}"),
            (Platform::Linux, "meta") => Some("Alt"),
            (Platform::Windows, "meta") => Some("Win"),
            _ => None,
        };
        per_os.or(match lower.as_str() {
            "shift" => Some("\u{21E7}"),
            _ => None,
        })
    };
    chord
        .resolve(platform)
        .iter()
        .map(|k| pretty(k).map(str::to_owned).unwrap_or_else(|| k.clone()))
        .collect::<Vec<_>>()
        .join("+")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireMode {
    /// Fire on every qualifying key-down, key repeat included.
    #[default]
    Continuous,
    /// Fire once per unbroken hold.
    Once,
}

struct Binding<A> {
    chord: KeyChord,
    resolved: SmallVec<[String; 4]>,
    id: String,
    action: A,
    mode: FireMode,
}

pub struct HotkeyDispatcher<A> {
    platform: Platform,
    bindings: Vec<Binding<A>>,
    /// Held keys, from the source that pressed them (a physical key code,
    /// or the key identity itself when no code is known) to key identity.
    held: FnvHashMap<String, String>,
    fired: FnvHashSet<String>,
}

impl<A> HotkeyDispatcher<A> {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            bindings: Vec::new(),
            held: FnvHashMap::default(),
            fired: FnvHashSet::default(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Register a binding. Empty chords are accepted and never fire.
    pub fn bind(&mut self, chord: impl Into<KeyChord>, action: A, mode: FireMode) {
        let chord = chord.into();
        let resolved: SmallVec<[String; 4]> = chord
            .resolve(self.platform)
            .iter()
            .map(|k| match_key(k))
            .collect();
        let id = resolved.join("+");
        self.bindings.push(Binding {
            chord,
            resolved,
            id,
            action,
            mode,
        });
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&KeyChord, &A, FireMode)> {
        self.bindings.iter().map(|b| (&b.chord, &b.action, b.mode))
    }

    fn is_held(&self, identity: &str) -> bool {
        self.held.values().any(|k| k == identity)
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.is_held(&match_key(key))
    }

    pub fn pressed_count(&self) -> usize {
        self.held.len()
    }

    /// Whether every key of `chord` is currently held.
    pub fn is_active(&self, chord: &KeyChord) -> bool {
        !chord.is_empty()
            && chord
                .tokens()
                .iter()
                .all(|t| self.is_held(&match_key(t.resolve(self.platform))))
    }

    pub fn key_down(&mut self, key: &str, on_fire: impl FnMut(&A)) {
        self.press(key);
        self.dispatch(on_fire);
    }

    /// Key-down from a source that reports the physical key as well. The key
    /// is later released by `code` alone, so a symbol that changes while held
    /// (`+` pressed, `=` released once Shift is up) cannot get stuck.
    pub fn key_down_code(&mut self, code: &str, key: &str, on_fire: impl FnMut(&A)) {
        self.held.insert(code.to_owned(), match_key(key));
        log::trace!("[keys] down {key} ({code})");
        self.dispatch(on_fire);
    }

    /// Key-downs delivered in the same tick: all keys are inserted before a
    /// single evaluation pass.
    pub fn key_downs<'k>(&mut self, keys: impl IntoIterator<Item = &'k str>, on_fire: impl FnMut(&A)) {
        for key in keys {
            self.press(key);
        }
        self.dispatch(on_fire);
    }

    pub fn key_up(&mut self, key: &str) {
        let identity = match_key(key);
        self.held.retain(|source, k| *source != identity && *k != identity);
        self.fired.clear();
        log::trace!("[keys] up {key}");
    }

    /// Release whatever the physical key `code` pressed.
    pub fn key_up_code(&mut self, code: &str) {
        if let Some(key) = self.held.remove(code) {
            log::trace!("[keys] up {key} ({code})");
        }
        self.fired.clear();
    }

    /// Treat as all keys released, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        if !self.held.is_empty() {
            log::debug!("[keys] releasing {} held keys", self.held.len());
        }
        self.held.clear();
        self.fired.clear();
    }

    fn press(&mut self, key: &str) {
        let identity = match_key(key);
        self.held.insert(identity.clone(), identity);
        log::trace!("[keys] down {key}");
    }

    fn dispatch(&mut self, mut on_fire: impl FnMut(&A)) {
        for binding in &self.bindings {
            let held = !binding.resolved.is_empty()
                && binding
                    .resolved
                    .iter()
                    .all(|k| self.is_held(k));
            if !held {
                continue;
            }
            if binding.mode == FireMode::Once && self.fired.contains(&binding.id) {
                continue;
            }
            log::debug!("[keys] fire {}", binding.id);
            on_fire(&binding.action);
            if binding.mode == FireMode::Once {
                self.fired.insert(binding.id.clone());
            }
        }
    }
}
