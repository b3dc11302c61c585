// Host-side tests for chord parsing, alias resolution and dispatch.

use cranium::hotkeys::{canonical_key_name, KeyToken};
use cranium::{hotkey_label, FireMode, HotkeyDispatcher, KeyChord, Platform};

fn fired(d: &mut HotkeyDispatcher<&'static str>, key: &str) -> Vec<&'static str> {
    let mut out = Vec::new();
    d.key_down(key, |a| out.push(*a));
    out
}

#[test]
fn mod_resolves_to_meta_on_mac_and_ctrl_elsewhere() {
    let chord = KeyChord::parse("mod+c");
    assert_eq!(chord.resolve(Platform::Mac).as_slice(), ["Meta", "c"]);
    assert_eq!(chord.resolve(Platform::Windows).as_slice(), ["Ctrl", "c"]);
    assert_eq!(chord.resolve(Platform::Linux).as_slice(), ["Ctrl", "c"]);
    assert_eq!(chord.resolve(Platform::Ios).as_slice(), ["Ctrl", "c"]);
}

#[test]
fn mod_chord_fires_with_control_on_linux() {
    let mut d = HotkeyDispatcher::new(Platform::Linux);
    d.bind("mod+c", "copy", FireMode::Continuous);
    assert!(fired(&mut d, "Control").is_empty());
    assert_eq!(fired(&mut d, "c"), vec!["copy"]);
}

#[test]
fn mod_chord_ignores_control_on_mac() {
    let mut d = HotkeyDispatcher::new(Platform::Mac);
    d.bind("mod+c", "copy", FireMode::Continuous);
    fired(&mut d, "Control");
    assert!(fired(&mut d, "c").is_empty());
    d.release_all();
    fired(&mut d, "Meta");
    assert_eq!(fired(&mut d, "c"), vec!["copy"]);
}

#[test]
fn once_fires_a_single_time_per_hold() {
    let mut d = HotkeyDispatcher::new(Platform::Linux);
    d.bind("mod+e", "export", FireMode::Once);
    fired(&mut d, "Control");
    assert_eq!(fired(&mut d, "e"), vec!["export"]);
    // Key repeat while the chord stays held.
    assert!(fired(&mut d, "e").is_empty());
    assert!(fired(&mut d, "e").is_empty());
    d.key_up("e");
    assert_eq!(fired(&mut d, "e"), vec!["export"]);
}

#[test]
fn any_key_up_rearms_once_bindings() {
    let mut d = HotkeyDispatcher::new(Platform::Linux);
    d.bind("mod+e", "export", FireMode::Once);
    fired(&mut d, "Control");
    fired(&mut d, "e");
    fired(&mut d, "x");
    // Releasing an unrelated key clears the fired set.
    d.key_up("x");
    assert_eq!(fired(&mut d, "e"), vec!["export"]);
}

#[test]
fn continuous_fires_on_every_key_down() {
    let mut d = HotkeyDispatcher::new(Platform::Windows);
    d.bind("a", "left", FireMode::Continuous);
    assert_eq!(fired(&mut d, "a"), vec!["left"]);
    assert_eq!(fired(&mut d, "a"), vec!["left"]);
}

#[test]
fn same_tick_key_downs_are_evaluated_once() {
    let mut d = HotkeyDispatcher::new(Platform::Linux);
    d.bind("mod+s", "save", FireMode::Continuous);
    let mut out = Vec::new();
    d.key_downs(["Control", "s"], |a| out.push(*a));
    assert_eq!(out, vec!["save"]);
    assert_eq!(d.pressed_count(), 2);
}

#[test]
fn empty_chord_never_fires() {
    let mut d = HotkeyDispatcher::new(Platform::Linux);
    d.bind("", "nothing", FireMode::Continuous);
    d.bind(KeyChord::from_keys(&[]), "nothing", FireMode::Once);
    assert!(fired(&mut d, "a").is_empty());
    assert!(!d.is_active(&KeyChord::default()));
}

#[test]
fn releasing_a_chord_key_deactivates_it() {
    let mut d: HotkeyDispatcher<&str> = HotkeyDispatcher::new(Platform::Mac);
    let chord = KeyChord::parse("mod+shift+s");
    d.key_downs(["Meta", "Shift", "s"], |_| {});
    assert!(d.is_active(&chord));
    d.key_up("Shift");
    assert!(!d.is_active(&chord));
    assert!(d.is_pressed("Meta"));
}

#[test]
fn key_case_does_not_matter() {
    let mut d = HotkeyDispatcher::new(Platform::Linux);
    d.bind("shift+e", "shout", FireMode::Continuous);
    fired(&mut d, "Shift");
    assert_eq!(fired(&mut d, "E"), vec!["shout"]);
}

#[test]
fn release_all_clears_held_keys() {
    let mut d: HotkeyDispatcher<&str> = HotkeyDispatcher::new(Platform::Linux);
    d.key_downs(["a", "b", "Control"], |_| {});
    d.release_all();
    assert_eq!(d.pressed_count(), 0);
}

#[test]
fn plus_key_parses_as_itself() {
    assert_eq!(KeyChord::parse("+").tokens(), [KeyToken::Key("+".into())]);
    assert_eq!(
        KeyChord::parse("mod++").tokens(),
        [KeyToken::Mod, KeyToken::Key("+".into())]
    );
}

#[test]
fn labels_use_platform_symbols() {
    let chord = KeyChord::parse("mod+shift+alt+c");
    assert_eq!(hotkey_label(&chord, Platform::Mac), "\u{2318}+\u{21E7}+\u{2325}+c");
    assert_eq!(hotkey_label(&chord, Platform::Windows), "Ctrl+\u{21E7}+alt+c");
    assert_eq!(hotkey_label(&KeyChord::parse("meta+k"), Platform::Linux), "Alt+k");
    assert_eq!(hotkey_label(&KeyChord::parse("meta+k"), Platform::Windows), "Win+k");
}

#[test]
fn user_agents_classify_in_order() {
    let mac = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15";
    let win = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
    let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8)";
    let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
    assert_eq!(Platform::from_user_agent(mac), Platform::Mac);
    assert_eq!(Platform::from_user_agent(win), Platform::Windows);
    // Android agents mention Linux first.
    assert_eq!(Platform::from_user_agent(android), Platform::Linux);
    assert_eq!(Platform::from_user_agent(iphone), Platform::Ios);
    assert_eq!(Platform::from_user_agent(""), Platform::Unknown);
}

#[test]
fn modifier_names_are_canonicalized() {
    assert_eq!(canonical_key_name("Control"), "Ctrl");
    assert_eq!(canonical_key_name("OS"), "Meta");
    assert_eq!(canonical_key_name("Super"), "Meta");
    assert_eq!(canonical_key_name("control"), "Ctrl");
    assert_eq!(canonical_key_name("a"), "a");
}

#[test]
fn shifted_symbol_is_released_by_its_code() {
    let mut d = HotkeyDispatcher::new(Platform::Linux);
    d.bind("+", "zoom", FireMode::Continuous);
    let mut out = Vec::new();
    d.key_down_code("ShiftLeft", "Shift", |a| out.push(*a));
    d.key_down_code("Equal", "+", |a| out.push(*a));
    assert_eq!(out, vec!["zoom"]);
    // Shift comes up first, so the same key now reports "=".
    d.key_up_code("ShiftLeft");
    d.key_up_code("Equal");
    assert_eq!(d.pressed_count(), 0);
    assert!(!d.is_pressed("+"));
    out.clear();
    d.key_down_code("KeyA", "a", |a| out.push(*a));
    assert!(out.is_empty());
}

#[test]
fn plain_key_up_releases_a_coded_press() {
    let mut d: HotkeyDispatcher<&str> = HotkeyDispatcher::new(Platform::Linux);
    d.key_down_code("KeyW", "w", |_| {});
    d.key_up("W");
    assert_eq!(d.pressed_count(), 0);
}

#[test]
fn both_shift_keys_are_tracked_separately() {
    let mut d: HotkeyDispatcher<&str> = HotkeyDispatcher::new(Platform::Linux);
    d.key_down_code("ShiftLeft", "Shift", |_| {});
    d.key_down_code("ShiftRight", "Shift", |_| {});
    d.key_up_code("ShiftLeft");
    assert!(d.is_pressed("Shift"));
    d.key_up_code("ShiftRight");
    assert!(!d.is_pressed("Shift"));
}
