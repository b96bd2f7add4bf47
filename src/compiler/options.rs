use std::path::PathBuf;

use crate::parser::parser::ParseOptions;

/// Settings for one compile run, shared by every file in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Directory generated files are written to.
    pub output_dir: PathBuf,
    /// Appended to the input file stem, `foo` becomes `foo_result`.
    pub result_suffix: String,
    /// Extension of the generated files.
    pub extension: String,
    pub parse: ParseOptions,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            output_dir: PathBuf::from("outputs"),
            result_suffix: String::from("_result"),
            extension: String::from("py"),
            parse: ParseOptions::default(),
        }
    }
}
