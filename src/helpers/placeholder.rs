//! `$N` placeholder handling for fix and auto-fix templates.
//!
//! A placeholder is a `$` followed by one or more ASCII digits and refers to
//! the N-th capture group (1-based). Substitution is a single left-to-right
//! pass; replaced text is never rescanned. A placeholder whose index is 0 or
//! past the captured groups is copied through verbatim.

/// Replaces `$N` tokens in `template` with `groups[N - 1]`.
pub fn substitute(template: &str, groups: &[String]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        output.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if digits == 0 {
            output.push('$');
            rest = after;
            continue;
        }

        match after[..digits].parse::<usize>() {
            Ok(index) if (1..=groups.len()).contains(&index) => output.push_str(&groups[index - 1]),
            _ => output.push_str(&rest[dollar..=dollar + digits]),
        }
        rest = &after[digits..];
    }

    output.push_str(rest);
    output
}

/// Highest placeholder index referenced by `template`, or 0 when there is none.
pub fn highest_index(template: &str) -> usize {
    let mut highest = 0;
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        let after = &rest[dollar + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if let Ok(index) = after[..digits].parse::<usize>() {
            highest = highest.max(index);
        }
        rest = &after[digits..];
    }

    highest
}
