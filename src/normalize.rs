use regex::Regex;
use std::sync::LazyLock;

// Fixed code-point ranges: emoticons, symbols & pictographs, transport & map
// symbols, flag indicators, dingbats, and the wide enclosed/CJK symbol span.
// This is a character-class strip, not a blocklist of known emoji.
static RE_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "[\u{1F600}-\u{1F64F}\
          \u{1F300}-\u{1F5FF}\
          \u{1F680}-\u{1F6FF}\
          \u{1F1E0}-\u{1F1FF}\
          \u{2702}-\u{27B0}\
          \u{24C2}-\u{1F251}]+",
    )
    .unwrap()
});

static RE_SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static RE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub fn strip_emojis(text: &str) -> String {
    RE_EMOJI.replace_all(text, "").into_owned()
}

/// Emoji strip, then drop everything that is not a word character, whitespace
/// or hyphen, then collapse whitespace runs and trim. Idempotent.
pub fn clean_name(name: &str) -> String {
    let name = strip_emojis(name);
    let name = RE_SYMBOL.replace_all(&name, "");
    let name = RE_WS.replace_all(&name, " ");
    name.trim().to_string()
}

/// Literal table substitution over a fixed set of accented Latin letters,
/// case-preserving. Anything outside the table passes through unchanged; this
/// is deliberately not a general Unicode decomposition.
pub fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' | 'à' | 'ã' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'õ' | 'ô' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            'ñ' => 'n',
            'ç' => 'c',
            'Á' | 'À' | 'Ã' | 'Â' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Õ' | 'Ô' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'Ý' => 'Y',
            'Ñ' => 'N',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}

/// Keep only ASCII digits and `+`, in original order.
pub fn clean_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
