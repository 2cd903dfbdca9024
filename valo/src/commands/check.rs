use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use valo_codegen::{Assembler, BuiltinTemplates, Severity};
use valo_manifest::ValoToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to valo.toml (defaults to ./valo.toml)
    #[arg(short, long, default_value = "valo.toml")]
    pub config: PathBuf,

    /// Print the resolved work items as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let valo_toml = ValoToml::open(&self.config).unwrap_or_exit();
        let resolved = valo_toml.resolve().unwrap_or_exit();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
            return Ok(());
        }

        // Dry-assemble every declaration to surface generation diagnostics
        // without writing anything.
        let store = BuiltinTemplates::new();
        let assembler = Assembler::new(&store);
        let mut has_errors = false;
        for entry in &resolved {
            if let Err(diag) = assembler.assemble(&entry.work_item, &entry.declaration) {
                match diag.severity {
                    Severity::Error => {
                        has_errors = true;
                        eprintln!("{diag}");
                    }
                    Severity::Warning => eprintln!("{diag}"),
                }
            }
        }

        if has_errors {
            std::process::exit(1);
        }

        println!("✓ {} is valid\n", self.config.display());
        println!(
            "  {} value object{}:",
            resolved.len(),
            if resolved.len() == 1 { "" } else { "s" }
        );
        for entry in &resolved {
            let item = &entry.work_item;
            let qualified = if item.full_namespace.is_empty() {
                item.vo_type_name.clone()
            } else {
                format!("{}.{}", item.full_namespace, item.vo_type_name)
            };
            println!("    {} ({})", qualified, item.underlying.full_name);
        }

        Ok(())
    }
}
