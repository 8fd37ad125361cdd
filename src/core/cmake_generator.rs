use crate::domain::models::{Category, Layout, Listing, RootDir};
use log::debug;
use std::path::{Path, PathBuf};

pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Renders one `set(<NAME>_FILES ...)` block, terminated by a blank line.
pub fn render(files: &[PathBuf], variable_name: &str) -> String {
    let variable = format!("{}_FILES", variable_name.to_uppercase());
    debug!("Rendering {} with {} files", variable, files.len());

    let mut block = format!("set({}\n", variable);
    for file in files {
        block.push_str(&format!("\t\"{}\"\n", normalize_path(file)));
    }
    block.push_str(")\n\n");
    block
}

/// Assembles the whole artifact from the per-root listings, in root order.
pub fn build_cmake_output(listings: &[(RootDir, Listing)], layout: Layout) -> String {
    let mut output = String::new();

    match layout {
        Layout::Merged => {
            let merged = listings
                .iter()
                .fold(Listing::default(), |acc, (_, listing)| acc.merge(listing.clone()));
            for category in Category::ALL {
                output.push_str(&render(&merged.of(category), category.variable_name()));
            }
        }
        Layout::PerRoot => {
            for (root, listing) in listings {
                output.push_str(&render(&listing.paths(), &root.variable_name));
            }
        }
    }

    output
}
