//! Positional announcement templates.
//!
//! Announcement strings are configured as templates with `%s`
//! placeholders. Each placeholder is substituted, in strict left-to-right
//! order, with the next argument: subject text, then subject position,
//! then total count. Arguments are positional, not named; supplying the
//! right number is the caller's responsibility.
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | More placeholders than arguments | Remaining `%s` left as-is |
//! | More arguments than placeholders | Extra arguments ignored |

/// Substitute `%s` placeholders left-to-right with `args`.
///
/// ```
/// use rowlift::template::interpolate;
///
/// assert_eq!(interpolate("%s grabbed.", &["Task 1", "0", "3"]), "Task 1 grabbed.");
/// assert_eq!(interpolate("%s is now item %s of %s", &["X", "2", "5"]), "X is now item 2 of 5");
/// ```
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(ch) = chars.next() {
        if ch == '%' && chars.peek() == Some(&'s') {
            chars.next();
            if let Some(arg) = args.get(next_arg) {
                result.push_str(arg);
                next_arg += 1;
            } else {
                // Out of arguments: leave the token as-is.
                result.push_str("%s");
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_in_order() {
        assert_eq!(
            interpolate("%s grabbed.", &["Task 1", "0", "3"]),
            "Task 1 grabbed."
        );
        assert_eq!(
            interpolate("%s is now item %s of %s", &["X", "2", "5"]),
            "X is now item 2 of 5"
        );
    }

    #[test]
    fn missing_arguments_leave_placeholders() {
        assert_eq!(interpolate("%s of %s", &["1"]), "1 of %s");
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(interpolate("%s dropped.", &["B", "1", "3"]), "B dropped.");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(interpolate("The list changed.", &["x"]), "The list changed.");
    }

    #[test]
    fn lone_percent_is_literal() {
        assert_eq!(interpolate("100% of %s", &["them"]), "100% of them");
    }

    #[test]
    fn empty_template_stays_empty() {
        assert_eq!(interpolate("", &["x"]), "");
    }
}
