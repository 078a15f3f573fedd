use std::collections::HashMap;

use crate::codegen::ident::{NameIssue, sanitize_name, validate_name};

/// Name of the generated Java class.
pub const TRAJ_NAMES_CLASS: &str = "TrajNames";

/// Renders the Java source file binding each trajectory name to a sanitized
/// constant identifier.
///
/// Duplicate sanitized identifiers get a numeric suffix in first-seen order;
/// the first occurrence keeps the bare name. Identifiers that survive
/// sanitization but are still unusable (an all-invalid name, or one that
/// collapses onto a Java keyword) get a `_` to keep the file compiling.
pub fn gen_traj_names_file<'a>(
    traj_names: impl IntoIterator<Item = &'a str>,
    package_name: &str,
) -> String {
    let mut content = Vec::new();
    let mut used: HashMap<String, usize> = HashMap::new();

    content.push(format!("package {package_name};"));
    content.push(format!(
        "
/**
 * A class containing the names of all trajectories created in the GUI.
 * This allows for references of non-existent or deleted trajectories
 * to be caught at compile time. DO NOT MODIFY THIS FILE YOURSELF!
 */
public class {TRAJ_NAMES_CLASS} {{"
    ));

    for traj_name in traj_names {
        let base = emit_safe(sanitize_name(traj_name));
        let seen = used.entry(base.clone()).or_insert(0);
        let var_name = if *seen == 0 {
            base.clone()
        } else {
            format!("{base}_{seen}")
        };
        *seen += 1;
        content.push(format!(
            "    public static final String {var_name} = \"{traj_name}\";"
        ));
    }

    content.push(String::new());
    content.push(format!("    private {TRAJ_NAMES_CLASS}() {{}}"));
    content.push("}".to_owned());
    content.join("\n")
}

/// Sanitized output is validated once more before emission; a sanitized name
/// can still collide with a keyword or be empty.
fn emit_safe(sanitized: String) -> String {
    match validate_name(&sanitized, &[] as &[&str]) {
        None | Some(NameIssue::StartsWithNumber { .. }) => sanitized,
        Some(NameIssue::Empty) => "_".to_owned(),
        Some(_) => format!("{sanitized}_"),
    }
}
