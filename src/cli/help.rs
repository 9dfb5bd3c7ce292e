// ABOUTME: Renders the function listing printed by --functions
// ABOUTME: Groups documented function sets by category in registration order

use std::fmt::Write as _;

use crate::function::Library;

pub fn function_listing(library: &Library) -> String {
    let mut text = String::new();
    for group in library.by_category() {
        let _ = writeln!(text, "{} functions\n", group.category);
        for set in &group.sets {
            let _ = writeln!(text, "  {}", set.syntax);
            for line in &set.description {
                let _ = writeln!(text, "    {}", line);
            }
        }
        text.push('\n');
    }
    text
}
