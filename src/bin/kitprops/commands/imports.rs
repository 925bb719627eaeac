//! `kitprops imports` command

use anyhow::{Context, Result};

use crate::cli::ImportsArgs;
use kitprops::core::parse_imports;
use kitprops::ui::ImportsPanel;

pub fn execute(args: ImportsArgs) -> Result<()> {
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut panel = ImportsPanel::new();
    panel.set_imports(&parse_imports(&source));

    if let Some(row) = args.remove {
        match panel.remove_import(row) {
            Some(removed) => tracing::info!("Removed {}", removed),
            None => tracing::warn!("row {} cannot be removed", row),
        }
    }

    let libraries = panel.imports().filter(|i| i.is_library()).count();
    let files = panel.imports().filter(|i| i.is_file()).count();
    tracing::debug!("{} module imports, {} file imports", libraries, files);

    if panel.is_empty() {
        println!("No imports.");
    } else {
        print!("{}", panel.render());
    }

    Ok(())
}
