//! Text helpers for log and error messages

/// Strips the module path (and any generic arguments) from a type name,
/// leaving the bare type: `app::commands::SignUpCommand` -> `SignUpCommand`.
pub(crate) fn simple_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Lowercases a type name into words: `CreateUserCommand` -> "create user
/// command". Runs of capitals stay together, so `HTTPCommand` -> "http
/// command".
pub(crate) fn humanize(type_name: &str) -> String {
    let name = simple_type_name(type_name);
    let chars: Vec<char> = name.chars().collect();
    let mut words = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            words.push(' ');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let after_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
            let ends_run = chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if after_lower || ends_run {
                words.push(' ');
            }
        }
        words.extend(c.to_lowercase());
    }

    words
}

/// Formats a count with a correctly pluralized noun: "1 failure", "3 failures"
pub(crate) fn count_of(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_type_name_strips_path_and_generics() {
        assert_eq!(simple_type_name("app::commands::SignUpCommand"), "SignUpCommand");
        assert_eq!(simple_type_name("SignUpCommand"), "SignUpCommand");
        assert_eq!(simple_type_name("app::Wrapper<app::Inner>"), "Wrapper");
    }

    #[test]
    fn test_humanize_splits_camel_case() {
        assert_eq!(humanize("CreateUserCommand"), "create user command");
        assert_eq!(humanize("RegisterUser"), "register user");
        assert_eq!(humanize("command"), "command");
    }

    #[test]
    fn test_humanize_keeps_capital_runs_together() {
        assert_eq!(humanize("HTTPCommand"), "http command");
        assert_eq!(humanize("ParseURL"), "parse url");
    }

    #[test]
    fn test_humanize_treats_underscores_as_spaces() {
        assert_eq!(humanize("create_user_command"), "create user command");
    }

    #[test]
    fn test_count_of_pluralizes() {
        assert_eq!(count_of(1, "failure"), "1 failure");
        assert_eq!(count_of(2, "failure"), "2 failures");
        assert_eq!(count_of(0, "failure"), "0 failures");
    }
}
