//! `kitprops kit` command

use anyhow::Result;

use crate::cli::{KitArgs, KitCommands, KitShowArgs};
use kitprops::core::KitError;
use kitprops::util::{GlobalContext, KitConfig};

pub fn execute(args: KitArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let kits = ctx.load_kits(args.kit_file.as_deref())?;

    match args.command {
        KitCommands::List => list_kits(&kits),
        KitCommands::Show(show_args) => show_kit(&kits, show_args),
    }
}

fn list_kits(kits: &KitConfig) -> Result<()> {
    if kits.kits.is_empty() {
        println!("No kits configured.");
        return Ok(());
    }

    for kit in &kits.kits {
        let marker = if kits.default.as_deref() == Some(kit.name.as_str()) {
            " (default)"
        } else {
            ""
        };
        let toolchain = kit
            .toolchain()
            .map(|tc| format!("{} {}", tc.kind, tc.target_abi))
            .unwrap_or_else(|| "no toolchain".to_string());
        println!("{}{}: {}", kit.name, marker, toolchain);
    }

    Ok(())
}

fn show_kit(kits: &KitConfig, args: KitShowArgs) -> Result<()> {
    let kit = kits.find(&args.name).ok_or_else(|| KitError::KitNotFound {
        name: args.name.clone(),
        available: kits.names(),
    })?;

    println!("Kit: {}", kit.name);
    println!();
    println!("  Device:    {}", kit.device_type);
    match kit.sysroot() {
        Some(sysroot) => println!("  Sysroot:   {}", sysroot.display()),
        None => println!("  Sysroot:   none"),
    }

    match kit.toolchain() {
        Some(tc) => {
            println!("  Toolchain: {}", tc.kind);
            println!("    ABI:      {}", tc.target_abi);
            println!("    Compiler: {}", tc.compiler_command.display());
            match tc.locate_compiler() {
                Some(path) => println!("    Found:    {}", path.display()),
                None => println!("    Found:    not found"),
            }
        }
        None => println!("  Toolchain: none"),
    }

    Ok(())
}
