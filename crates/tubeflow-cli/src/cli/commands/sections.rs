//! Sections command handler.

use tubeflow_core::strategy::Section;

/// Prints each section id and its tab label, in display order.
pub fn list() {
    let width = Section::all()
        .iter()
        .map(|s| s.id().len())
        .max()
        .unwrap_or(0);
    for section in Section::all() {
        println!("{:<width$}  {}", section.id(), section.label());
    }
}
