//! Static per-layout character tables.
//!
//! Every table is aligned to [`PHYSICAL_KEYS`]: the character at index `i`
//! is what the layout produces on the same physical key as `PHYSICAL_KEYS[i]`.
//! Unshifted slots come first, then the shifted row, so uppercase and
//! lowercase letters occupy distinct positions and case survives conversion
//! without any separate restoration step.

/// Canonical physical key sequence (US QWERTY, unshifted then shifted).
pub const PHYSICAL_KEYS: &str =
    "`1234567890-=qwertyuiop[]\\asdfghjkl;'zxcvbnm,./~!@#$%^&*()_+QWERTYUIOP{}|ASDFGHJKL:\"ZXCVBNM<>?";

/// One keyboard layout: a family token plus the characters it produces at
/// each slot of [`PHYSICAL_KEYS`], in the same order and of the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDefinition {
    pub family: &'static str,
    pub chars: &'static str,
}

pub const QWERTY_US: LayoutDefinition = LayoutDefinition {
    family: "us",
    chars: PHYSICAL_KEYS,
};

/// Russian ЙЦУКЕН, same physical keys as US QWERTY.
pub const RUSSIAN: LayoutDefinition = LayoutDefinition {
    family: "russian",
    chars: "ё1234567890-=йцукенгшщзхъ\\фывапролджэячсмитьбю.Ё!\"№;%:?*()_+ЙЦУКЕНГШЩЗХЪ/ФЫВАПРОЛДЖЭЯЧСМИТЬБЮ,",
};

pub const UKRAINIAN: LayoutDefinition = LayoutDefinition {
    family: "ukrainian",
    chars: "'1234567890-=йцукенгшщзхї\\фівапролджєячсмитьбю.₴!\"№;%:?*()_+ЙЦУКЕНГШЩЗХЇ/ФІВАПРОЛДЖЄЯЧСМИТЬБЮ,",
};

/// German QWERTZ.
pub const GERMAN: LayoutDefinition = LayoutDefinition {
    family: "german",
    chars: "^1234567890ß´qwertzuiopü+#asdfghjklöäyxcvbnm,.-°!\"§$%&/()=?`QWERTZUIOPÜ*'ASDFGHJKLÖÄYXCVBNM;:_",
};

/// French AZERTY.
pub const FRENCH: LayoutDefinition = LayoutDefinition {
    family: "french",
    chars: "²&é\"'(-è_çà)=azertyuiop^$*qsdfghjklmùwxcvbn,;:!³1234567890°+AZERTYUIOP¨£µQSDFGHJKLM%WXCVBN?./§",
};

pub const SPANISH: LayoutDefinition = LayoutDefinition {
    family: "spanish",
    chars: "º1234567890'¡qwertyuiop`+çasdfghjklñ´zxcvbnm,.-ª!\"·$%&/()=?¿QWERTYUIOP^*ÇASDFGHJKLÑ¨ZXCVBNM;:_",
};

/// Ordered (token, definition) resolution list, evaluated top to bottom by
/// lowercase substring containment.
///
/// Ordering invariant: `"us"` is a substring of `"russian"`, so the QWERTY
/// aliases (`british`, `abc`, `us`) must come after every specific family
/// token. Pinned by `registry_resolution_order_is_collision_free`.
pub const RESOLUTION_ORDER: &[(&str, &LayoutDefinition)] = &[
    ("russian", &RUSSIAN),
    ("ukrainian", &UKRAINIAN),
    ("german", &GERMAN),
    ("french", &FRENCH),
    ("spanish", &SPANISH),
    ("british", &QWERTY_US),
    ("abc", &QWERTY_US),
    ("us", &QWERTY_US),
];
