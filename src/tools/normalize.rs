//! Key normalization for lookup tables
//!
//! Every table applies the same function on insert and on query, so user
//! input casing and surrounding whitespace never cause a miss.

/// Trim, then title-case each whitespace-delimited word.
///
/// `"new york"`, `"NEW YORK"` and `" New york "` all become `"New York"`.
/// Inner whitespace is kept as typed. A first letter whose upper-case form is
/// more than one character (`ß`) is left alone so the function stays
/// idempotent.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word_start = true;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => out.push(single),
                _ => out.push(ch),
            }
            word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

/// Trim and fully upper-case a code such as `"usd"`.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "lagos",
        "  nairobi  ",
        "NEW YORK",
        "new york",
        "san  francisco",
        "\tparis\n",
        "",
        "   ",
        "o'hare",
        "straße",
        "ßtraße",
        "élan VITAL",
        "İstanbul",
        "usd",
        " NgN ",
    ];

    #[test]
    fn test_normalize_name_title_cases_words() {
        assert_eq!(normalize_name("lagos"), "Lagos");
        assert_eq!(normalize_name("new york"), "New York");
        assert_eq!(normalize_name("  nairobi "), "Nairobi");
    }

    #[test]
    fn test_normalize_name_ignores_input_casing() {
        assert_eq!(normalize_name("LAGOS"), "Lagos");
        assert_eq!(normalize_name("nAiRoBi"), "Nairobi");
        assert_eq!(normalize_name("NEW YORK"), normalize_name("new york"));
    }

    #[test]
    fn test_normalize_name_keeps_inner_whitespace() {
        assert_eq!(normalize_name("san  francisco"), "San  Francisco");
    }

    #[test]
    fn test_normalize_name_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_normalize_name_multi_char_uppercase() {
        assert_eq!(normalize_name("ßtraße"), "ßtraße");
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("usd"), "USD");
        assert_eq!(normalize_code(" NgN "), "NGN");
        assert_eq!(normalize_code("EUR"), "EUR");
    }

    #[test]
    fn test_normalize_name_idempotent() {
        for sample in SAMPLES {
            let once = normalize_name(sample);
            assert_eq!(normalize_name(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_normalize_code_idempotent() {
        for sample in SAMPLES {
            let once = normalize_code(sample);
            assert_eq!(normalize_code(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
