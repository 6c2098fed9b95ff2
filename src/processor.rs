//! Core generation orchestration.
//! Creates the template's directories, asks the completion client for every
//! file and the README, and writes what comes back.

use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    client::CompletionClient,
    config::Config,
    error::{Error, Result},
    prompt::{file_prompt, readme_prompt},
    summary::{write_summary, RunStatus},
    template::{lookup, FileKind, Template},
};

/// README file name, relative to the output root.
pub const README_FILE: &str = "README.md";

/// What ended up in a generated file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The completion text was written verbatim.
    Generated,
    /// The placeholder stub was written because generation failed.
    Stub(Error),
}

/// Placeholder written when a file could not be generated.
pub fn stub_content(path: &str) -> String {
    format!("// Generated file: {path}\n// TODO: Implement functionality\n")
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Drives generation for one configuration into one output root.
pub struct Processor<'a> {
    client: &'a dyn CompletionClient,
    config: &'a Config,
    output_root: PathBuf,
}

impl<'a> Processor<'a> {
    pub fn new<P: AsRef<Path>>(
        client: &'a dyn CompletionClient,
        config: &'a Config,
        output_root: P,
    ) -> Self {
        Self {
            client,
            config,
            output_root: output_root.as_ref().to_path_buf(),
        }
    }

    /// Creates every directory listed by the template.
    ///
    /// Existing directories are left alone, so running this twice is harmless.
    ///
    /// # Errors
    /// * `Error::IoError` if a directory cannot be created
    pub fn generate_structure(&self, template: &Template) -> Result<()> {
        for directory in &template.structure {
            let target = self.output_root.join(directory);
            debug!("Creating directory: {}", target.display());
            fs::create_dir_all(&target)?;
        }
        Ok(())
    }

    fn try_generate(&self, path: &str, kind: FileKind) -> Result<()> {
        let content = self.client.complete(&file_prompt(self.config, path, kind))?;
        write_file(&self.output_root.join(path), &content)
    }

    /// Generates one file, falling back to the stub when generation fails.
    ///
    /// # Errors
    /// Only a failure to write the stub itself is returned.
    pub fn generate_file(&self, path: &str, kind: FileKind) -> Result<FileOutcome> {
        match self.try_generate(path, kind) {
            Ok(()) => {
                info!("Generated: {path}");
                Ok(FileOutcome::Generated)
            }
            Err(err) => {
                warn!("Error generating {path}: {err}");
                write_file(&self.output_root.join(path), &stub_content(path))?;
                Ok(FileOutcome::Stub(err))
            }
        }
    }

    /// Generates every template file in template order.
    ///
    /// A failed file gets a stub and the loop moves on.
    pub fn generate_files(&self, template: &Template) -> Result<()> {
        for (path, kind) in &template.files {
            if let FileOutcome::Stub(_) = self.generate_file(path, *kind)? {
                debug!("Wrote stub for {path}");
            }
        }
        Ok(())
    }

    /// Generates the project README.
    ///
    /// Unlike source files there is no stub: on failure the error is logged
    /// and no README is written.
    pub fn generate_documentation(&self) -> Result<()> {
        let target = self.output_root.join(README_FILE);
        match self.client.complete(&readme_prompt(self.config)) {
            Ok(content) => match write_file(&target, &content) {
                Ok(()) => info!("Generated: {README_FILE}"),
                Err(err) => warn!("Error generating README: {err}"),
            },
            Err(err) => warn!("Error generating README: {err}"),
        }
        Ok(())
    }

    fn generate_all(&self) -> Result<()> {
        println!("Generating project structure...");
        let template = lookup(&self.config.project_type);
        self.generate_structure(&template)?;

        println!("Generating files...");
        self.generate_files(&template)?;

        println!("Generating documentation...");
        self.generate_documentation()?;

        write_summary(&self.output_root, self.config, &RunStatus::Success)?;
        Ok(())
    }

    /// Runs the whole pipeline and records the outcome in the summary file.
    ///
    /// # Errors
    /// Any error that escaped per-file handling. The failure summary has
    /// already been written when this returns `Err`.
    pub fn run(&self) -> Result<()> {
        match self.generate_all() {
            Ok(()) => {
                println!("Project generation completed!");
                Ok(())
            }
            Err(err) => {
                let status = RunStatus::Failed(err.to_string());
                if let Err(summary_err) = write_summary(&self.output_root, self.config, &status) {
                    warn!("Could not write failure summary: {summary_err}");
                }
                Err(err)
            }
        }
    }
}
