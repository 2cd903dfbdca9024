use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};
use valo_codegen::{Assembler, BuiltinTemplates, GeneratedSource, Severity};
use valo_manifest::ValoToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to valo.toml (defaults to ./valo.toml)
    #[arg(short, long, default_value = "valo.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let valo_toml = ValoToml::open(&self.config).unwrap_or_exit();
        let resolved = valo_toml.resolve().unwrap_or_exit();

        let store = BuiltinTemplates::new();
        let assembler = Assembler::new(&store);

        // Declarations do not share fate: a diagnostic on one is reported
        // and the rest still generate.
        let mut sources = Vec::with_capacity(resolved.len());
        let mut error_count = 0usize;
        for entry in &resolved {
            match assembler.assemble(&entry.work_item, &entry.declaration) {
                Ok(source) => sources.push(source),
                Err(diag) => {
                    if diag.severity == Severity::Error {
                        error_count += 1;
                    }
                    eprintln!("{diag}");
                }
            }
        }

        if self.dry_run {
            self.run_preview(&sources)?;
        } else {
            self.write_sources(&sources)?;
        }

        if error_count > 0 {
            bail!(
                "{error_count} declaration{} failed to generate",
                if error_count == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }

    fn write_sources(&self, sources: &[GeneratedSource]) -> Result<()> {
        std::fs::create_dir_all(&self.output)
            .wrap_err_with(|| format!("Failed to create {}", self.output.display()))?;

        for source in sources {
            let path = self.output.join(&source.hint_name);
            std::fs::write(&path, &source.text)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        }

        println!(
            "Generated {} file{} in {}",
            sources.len(),
            if sources.len() == 1 { "" } else { "s" },
            self.output.display()
        );
        Ok(())
    }

    fn run_preview(&self, sources: &[GeneratedSource]) -> Result<()> {
        for source in sources {
            println!("── {} ──", source.hint_name);
            println!("{}", source.text);
        }

        println!("── Summary ──");
        println!("{} files would be generated", sources.len());
        Ok(())
    }
}
