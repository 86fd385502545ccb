//! Name normalization into base tokens.

/// Base slug used when a name has nothing transliterable.
pub const SLUG_FALLBACK: &str = "producto";

/// Base SKU used when a name has nothing transliterable.
pub const SKU_FALLBACK: &str = "PRODUCTO";

/// Maximum length of a SKU base, before any numeric suffix.
pub const SKU_BASE_LEN: usize = 8;

/// Transliterates `name` to lowercase ASCII words joined by `separator`.
///
/// ASCII letters and digits are kept. Non-ASCII letters and digits are
/// transliterated with `deunicode`; everything else (punctuation, symbols,
/// emoji, whitespace) only separates words. Separators never lead, trail or
/// repeat.
#[must_use]
pub fn slugify(name: &str, separator: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending = false;

    let mut push = |ch: char, out: &mut String| {
        if ch.is_ascii_alphanumeric() {
            if pending && !out.is_empty() {
                out.push_str(separator);
            }
            pending = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending = true;
        }
    };

    for ch in name.chars() {
        if ch.is_ascii() || !ch.is_alphanumeric() {
            push(ch, &mut out);
            continue;
        }
        match deunicode::deunicode_char(ch) {
            Some(ascii) => {
                for tc in ascii.chars() {
                    push(tc, &mut out);
                }
            }
            None => push(' ', &mut out),
        }
    }
    out
}

/// Base slug for `name`: hyphen-joined lowercase words, or
/// [`SLUG_FALLBACK`] when there are none.
#[must_use]
pub fn slug_base(name: &str) -> String {
    let base = slugify(name, "-");
    if base.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        base
    }
}

/// Base SKU for `name`: the separator-free slug uppercased, restricted to
/// `[A-Z0-9]` and cut to [`SKU_BASE_LEN`] characters, or [`SKU_FALLBACK`]
/// when nothing is left.
#[must_use]
pub fn sku_base(name: &str) -> String {
    let base: String = slugify(name, "")
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .take(SKU_BASE_LEN)
        .collect();
    if base.is_empty() {
        SKU_FALLBACK.to_string()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slug_base("Mesa de Pino"), "mesa-de-pino");
        assert_eq!(slug_base("  Silla   gamer  "), "silla-gamer");
    }

    #[test]
    fn slug_collapses_punctuation_runs() {
        assert_eq!(slug_base("Café -- Deluxe!!"), "cafe-deluxe");
        assert_eq!(slug_base("--Caja/Grande_(XL)--"), "caja-grande-xl");
    }

    #[test]
    fn slug_transliterates_accents() {
        assert_eq!(slug_base("Ñandú Azúcar"), "nandu-azucar");
        assert_eq!(slug_base("Crème brûlée"), "creme-brulee");
    }

    #[test]
    fn emoji_and_symbols_only_separate() {
        assert_eq!(slug_base("Taza☕Grande"), "taza-grande");
        assert_eq!(slugify("🔥🔥", "-"), "");
    }

    #[test]
    fn empty_slug_falls_back_to_placeholder() {
        assert_eq!(slug_base("!!!"), SLUG_FALLBACK);
        assert_eq!(slug_base(""), SLUG_FALLBACK);
    }

    #[test]
    fn sku_strips_and_truncates() {
        assert_eq!(sku_base("Café Deluxe!!"), "CAFEDELU");
        assert_eq!(sku_base("Mesa"), "MESA");
        assert_eq!(sku_base("Lámpara LED 40w"), "LAMPARAL");
        assert_eq!(sku_base("A1 b2"), "A1B2");
    }

    #[test]
    fn sku_falls_back_when_nothing_survives() {
        assert_eq!(sku_base("¡¿?!"), SKU_FALLBACK);
        assert_eq!(sku_base("🎉🎉"), SKU_FALLBACK);
    }
}
