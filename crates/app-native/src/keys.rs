use winit::keyboard::{Key, NamedKey, PhysicalKey};

/// Name a logical key the way browsers report `KeyboardEvent.key`, so the
/// same bindings work on both front-ends. Keys we never bind map to `None`.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(s) => Some(s.to_string()),
        Key::Named(named) => {
            let name = match named {
                NamedKey::Control => "Control",
                NamedKey::Shift => "Shift",
                NamedKey::Alt => "Alt",
                NamedKey::Super | NamedKey::Meta => "Meta",
                NamedKey::Space => " ",
                NamedKey::Enter => "Enter",
                NamedKey::Escape => "Escape",
                NamedKey::Tab => "Tab",
                NamedKey::Backspace => "Backspace",
                NamedKey::ArrowUp => "ArrowUp",
                NamedKey::ArrowDown => "ArrowDown",
                NamedKey::ArrowLeft => "ArrowLeft",
                NamedKey::ArrowRight => "ArrowRight",
                _ => return None,
            };
            Some(name.to_owned())
        }
        _ => None,
    }
}

/// Stable name of the physical key, used to release exactly what a key-down
/// pressed even when the logical key changed in between (Shift released first).
pub fn physical_code(key: &PhysicalKey) -> Option<String> {
    match key {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(_) => None,
    }
}
