use crate::core::cmake_generator::normalize_path;
use crate::domain::models::{Listing, RootDir};
use anyhow::Context;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

/// Replaces the file at `path` with the generated content.
pub struct FileWriter {
    path: String,
}

impl FileWriter {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        let path = Path::new(&self.path);
        remove_previous_output(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        debug!("Writing output to file: {}", self.path);
        fs::write(path, content).with_context(|| format!("failed to write {}", self.path))?;
        info!("Output written to file: {}", self.path);
        Ok(())
    }
}

/// Deletes an artifact left by an earlier run, if any.
pub fn remove_previous_output(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        debug!("Removing previous output: {}", path.display());
        fs::remove_file(path)
            .with_context(|| format!("failed to remove previous output {}", path.display()))?;
    }
    Ok(())
}

pub struct ConsoleWriter;

impl OutputWriter for ConsoleWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to console");
        io::stdout().write_all(content.as_bytes())?;
        Ok(())
    }
}

pub fn create_writer(output_path: &Option<String>) -> Box<dyn OutputWriter> {
    match output_path {
        Some(path) => Box::new(FileWriter::new(path.clone())),
        None => Box::new(ConsoleWriter),
    }
}

pub fn write_output(content: &str, output_path: Option<String>) -> anyhow::Result<()> {
    let writer = create_writer(&output_path);
    writer.write(content)?;

    if let Some(path) = output_path {
        let mut stdout = io::stdout();
        stdout.execute(SetForegroundColor(Color::Green))?;
        writeln!(stdout, "✓ Wrote {}", path)?;
        stdout.execute(ResetColor)?;
    }

    Ok(())
}

/// Where the progress listing goes: stderr when the artifact itself is on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTarget {
    Stdout,
    Stderr,
}

impl ProgressTarget {
    pub fn for_output(output_path: &Option<String>) -> Self {
        match output_path {
            Some(_) => ProgressTarget::Stdout,
            None => ProgressTarget::Stderr,
        }
    }

    pub fn writer(self) -> Box<dyn Write> {
        match self {
            ProgressTarget::Stdout => Box::new(io::stdout()),
            ProgressTarget::Stderr => Box::new(io::stderr()),
        }
    }
}

/// Prints the files discovered under one root. Informational only.
pub fn print_discovered<W: Write>(out: &mut W, root: &RootDir, listing: &Listing) -> io::Result<()> {
    out.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(out, "Adding files from {}", root.path.display())?;
    out.execute(ResetColor)?;

    for path in listing.paths() {
        writeln!(out, "\t - {}", normalize_path(&path))?;
    }
    out.flush()
}
