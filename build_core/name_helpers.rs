//! Name transformation helpers used to name the generated tables.
//==================================================================================NAME_HELPERS
/// Convert a free-form table name (`"go reserved"`, `"commonInitialisms"`)
/// into a `SCREAMING_SNAKE_CASE` constant name.
pub(crate) fn to_screaming_snake_case(name: &str) -> String {
    let mut buffer = String::new();
    let mut previous_lower = false;

    for c in name.chars() {
        match c {
            ' ' | '-' | '_' | '.' => {
                if !buffer.is_empty() && !buffer.ends_with('_') {
                    buffer.push('_');
                }
                previous_lower = false;
            }
            _ if c.is_ascii_alphanumeric() => {
                if c.is_ascii_uppercase() && previous_lower {
                    buffer.push('_');
                }
                buffer.push(c.to_ascii_uppercase());
                previous_lower = c.is_ascii_lowercase();
            }
            _ => {}
        }
    }

    while buffer.ends_with('_') {
        buffer.pop();
    }
    buffer
}
