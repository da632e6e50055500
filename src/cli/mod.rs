use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use crate::config::Settings;
use crate::export::{self, ExportFormat};
use crate::presets::PresetRegistry;
use crate::query::DateRange;
use crate::search::{GenerateRequest, Generator};

mod args;

pub use args::{Cli, EngineArg};

/// Entry point for the CLI binary.
pub fn run(cli: Cli, settings: Settings) -> Result<()> {
    let registry = settings.preset_registry()?;

    if cli.list_presets {
        let stdout = io::stdout();
        print_presets(stdout.lock(), &registry)?;
        return Ok(());
    }

    let engine = match cli.engine {
        Some(engine) => engine.into(),
        None => settings.default_engine()?,
    };

    let presets = if cli.presets.is_empty() {
        settings.search.default_presets.clone()
    } else {
        cli.presets
    };

    // Reject a bad export suffix before anything is printed.
    if let Some(ref path) = cli.out {
        ExportFormat::from_path(path)?;
    }

    let request = GenerateRequest {
        org: cli.org.unwrap_or_default(),
        domain: cli.domain.unwrap_or_default(),
        presets,
        custom: cli.custom,
        dates: DateRange::new(cli.after, cli.before),
        engine,
    };
    debug!("Generating with {:?}", request);

    let records = Generator::new(registry).generate(&request)?;

    let stdout = io::stdout();
    export::write_console(stdout.lock(), &request.engine, &records)?;

    if let Some(path) = cli.out {
        let count = export::export_to_file(&records, &path)?;
        println!("[+] Exported {} queries to {}", count, path.display());
    }

    Ok(())
}

/// Print each preset followed by its templates.
pub fn print_presets<W: Write>(mut out: W, registry: &PresetRegistry) -> io::Result<()> {
    for preset in registry.iter() {
        if preset.builtin {
            writeln!(out, "{}", preset.name)?;
        } else {
            writeln!(out, "{} (user)", preset.name)?;
        }
        for template in &preset.templates {
            writeln!(out, "  {}", template)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn print_presets_marks_user_presets() {
        let mut user = HashMap::new();
        user.insert("jobs".to_string(), vec!["{org} jobs".to_string()]);
        let registry = PresetRegistry::with_user_presets(&user).unwrap();

        let mut buf = Vec::new();
        print_presets(&mut buf, &registry).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("quick\n  site:{domain}\n"));
        assert!(text.ends_with("jobs (user)\n  {org} jobs\n"));
    }
}
