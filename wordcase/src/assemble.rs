use crate::style::{CaseStyle, WordTransform};

/// Cases and joins words according to a style.
pub(crate) fn assemble(words: &[String], style: &CaseStyle) -> String {
    let mut buf = [0; 4];
    let glue_str: &str = match style.glue {
        Some(glue) => glue.encode_utf8(&mut buf),
        None => "",
    };

    let joined = match style.transform {
        WordTransform::Lowercase => words
            .iter()
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join(glue_str),
        WordTransform::LowercaseJoined => words.join(glue_str).to_lowercase(),
        WordTransform::Camel => words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == 0 {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            })
            .collect::<Vec<_>>()
            .join(glue_str),
    };

    match style.glue {
        Some(glue) => collapse_glue(&joined, glue),
        None => joined,
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(word.len());
    result.extend(first.to_uppercase());
    result.push_str(&chars.as_str().to_lowercase());
    result
}

/// Collapses runs of `glue` into one and trims it from both ends.
fn collapse_glue(text: &str, glue: char) -> String {
    let mut result = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch == glue && (result.is_empty() || result.ends_with(glue)) {
            continue;
        }
        result.push(ch);
    }

    if result.ends_with(glue) {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn camel() {
        assert_eq!(
            assemble(&words(&["USER", "iD", "v2"]), &CaseStyle::CAMEL),
            "userIdV2"
        );
        assert_eq!(assemble(&words(&["single"]), &CaseStyle::CAMEL), "single");
    }

    #[test]
    fn capitalize_handles_unicode() {
        assert_eq!(capitalize("éCOLE"), "École");
        assert_eq!(capitalize("ßig"), "SSig");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn delimited() {
        let input = words(&["User", "ID", "v2"]);
        assert_eq!(assemble(&input, &CaseStyle::KEBAB), "user-id-v2");
        assert_eq!(assemble(&input, &CaseStyle::SNAKE), "user_id_v2");
        assert_eq!(assemble(&input, &CaseStyle::DOT), "user.id.v2");
    }

    #[test]
    fn collapses_and_trims_glue() {
        assert_eq!(collapse_glue("--a---b--", '-'), "a-b");
        assert_eq!(collapse_glue("___", '_'), "");
        assert_eq!(collapse_glue("a.b", '.'), "a.b");
        assert_eq!(collapse_glue("a-b", '.'), "a-b");
    }

    #[test]
    fn no_words() {
        assert_eq!(assemble(&[], &CaseStyle::KEBAB), "");
        assert_eq!(assemble(&[], &CaseStyle::DOLLAR_CAMEL), "");
    }
}
