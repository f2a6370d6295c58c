use crate::model::path_selection::Role;
use std::path::{Component, Path};

const INDENT: &str = "    ";

/// Renders a chosen folder as an indented list of its segments with a caret
/// line under the last one.
pub fn folder_structure(role: Role, path: Option<&Path>) -> String {
    let mut text = format!("{} Folder Structure:\n", role.title());

    let segments: Vec<String> = path
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let Some(last) = segments.last() else {
        return text;
    };

    for (depth, segment) in segments.iter().enumerate() {
        text.push_str(&INDENT.repeat(depth));
        text.push_str("-> ");
        text.push_str(segment);
        text.push('\n');
    }
    text.push_str(&INDENT.repeat(segments.len()));
    text.push_str(&"^".repeat(last.chars().count()));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_segments_are_indented() {
        let text = folder_structure(Role::Source, Some(Path::new("/home/user/data")));

        assert_eq!(
            text,
            concat!(
                "Source Folder Structure:\n",
                "-> home\n",
                "    -> user\n",
                "        -> data\n",
                "            ^^^^",
            )
        );
    }

    #[test]
    fn empty_selection_shows_heading_only() {
        assert_eq!(
            folder_structure(Role::Destination, None),
            "Destination Folder Structure:\n"
        );
    }
}
