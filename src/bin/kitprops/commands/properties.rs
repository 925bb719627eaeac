//! `kitprops properties` command

use anyhow::{bail, Result};

use crate::cli::PropertiesArgs;
use kitprops::provider::{DefaultPropertyProvider, PropertyProvider};
use kitprops::util::GlobalContext;

pub fn execute(args: PropertiesArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let kits = ctx.load_kits(args.kit_file.as_deref())?;
    let kit = kits.select(args.kit.as_deref())?;

    let mut base = kits.base.clone();
    for assignment in &args.set {
        let Some((key, value)) = assignment.split_once('=') else {
            bail!(
                "invalid property assignment `{}`\n\
                 help: Use --set KEY=VALUE",
                assignment
            );
        };
        base.insert(key.trim(), value.trim());
    }

    tracing::debug!("deriving properties for kit `{}`", kit.name);
    let properties = DefaultPropertyProvider::new().properties(kit, &base);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&properties)?);
    } else {
        print!("{}", properties);
    }

    Ok(())
}
