//! Prompt construction for the completion service.
//! Both prompts embed the run configuration; the file prompt also names the
//! target path and its kind.

use crate::config::Config;
use crate::template::FileKind;

fn settings_block(config: &Config) -> String {
    format!(
        "Project settings:\n\
         - Type: {}\n\
         - Tech stack: {}\n\
         - Requirements: {}\n\
         - Features: {}\n",
        config.project_type,
        config.tech_stack,
        config.requirements,
        config.features_list()
    )
}

/// Prompt asking for the full contents of one project file.
pub fn file_prompt(config: &Config, path: &str, kind: FileKind) -> String {
    format!(
        "{settings}\n\
         Generate the following file: {path}\n\
         File type: {kind}\n\
         \n\
         Requirements:\n\
         1. Produce code that actually works\n\
         2. Follow best practices\n\
         3. Include comments\n\
         4. Reflect the configured features\n\
         5. Include error handling\n\
         \n\
         Return only the file contents. No explanation is needed.\n",
        settings = settings_block(config),
    )
}

/// Prompt asking for the project README in markdown.
pub fn readme_prompt(config: &Config) -> String {
    format!(
        "Generate a detailed README.md file for the following project.\n\
         \n\
         {settings}\n\
         The README.md must include:\n\
         1. Project overview\n\
         2. Setup instructions\n\
         3. Usage\n\
         4. Feature descriptions\n\
         5. Development guide\n\
         6. License information\n\
         \n\
         Return it in markdown format.\n",
        settings = settings_block(config),
    )
}
