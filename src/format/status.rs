use crate::consts::STATUS_SEPARATOR;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusClassOptions {
    /// Strip surrounding whitespace before collapsing. Off by default, so
    /// `" Done "` becomes `-done-`.
    pub trim: bool,
}

/// Turn a status label into a CSS class token: `"In Progress"` -> `"in-progress"`.
pub fn status_class(input: Option<&str>) -> String {
    status_class_with(input, &StatusClassOptions::default())
}

/// [`status_class`] with explicit options.
pub fn status_class_with(input: Option<&str>, options: &StatusClassOptions) -> String {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return String::new();
    };
    let label = if options.trim {
        raw.trim_matches(is_separator_space)
    } else {
        raw
    };

    let lowered = label.to_lowercase();
    let mut token = String::with_capacity(lowered.len());
    let mut in_run = false;
    for c in lowered.chars() {
        if is_separator_space(c) {
            if !in_run {
                token.push(STATUS_SEPARATOR);
                in_run = true;
            }
        } else {
            token.push(c);
            in_run = false;
        }
    }
    token
}

// Unicode White_Space plus BOM, minus NEL: the set an ECMAScript `\s` matches.
fn is_separator_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}
