//! Shell completion support for the datestride CLI

use anyhow::{bail, Context, Result};
use clap::Command;
use clap_complete::{generate, Generator, Shell};
use std::io;
use std::path::{Path, PathBuf};

/// Write a completion script for `generator` to stdout
pub fn generate_completion<G: Generator>(generator: G, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
}

/// File name conventionally used for each shell's completion script
pub fn completion_file_name(shell: Shell) -> Result<&'static str> {
    Ok(match shell {
        Shell::Bash => "datestride.bash",
        Shell::Zsh => "_datestride",
        Shell::Fish => "datestride.fish",
        Shell::PowerShell => "_datestride.ps1",
        Shell::Elvish => "datestride.elv",
        other => bail!("Unsupported shell: {}", other),
    })
}

/// Generate a completion script into `output_dir`, returning the written path
pub fn save_completions(shell: Shell, cmd: &mut Command, output_dir: &Path) -> Result<PathBuf> {
    let output_path = output_dir.join(completion_file_name(shell)?);
    let mut file = std::fs::File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;

    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut file);

    Ok(output_path)
}
