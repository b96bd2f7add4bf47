use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    ast::statements::DefNode,
    errors::errors::Error,
    generator::generator::generate,
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse_with,
};

use super::options::CompilerOptions;

/// Everything one compile produced.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub ast: DefNode,
    pub code: String,
}

/// Compiles a source that is already in memory.
///
/// Each phase finishes before the next one starts, and the first error from
/// any phase ends the compile.
pub fn compile_source(source: String, file: &str, options: &CompilerOptions) -> Result<Compilation, Error> {
    let start = Instant::now();
    let tokens = tokenize(source, Some(String::from(file)))?;
    debug!("{}: tokenized {} tokens in {:?}", file, tokens.len(), start.elapsed());

    let parse_start = Instant::now();
    let ast = parse_with(tokens.clone(), Arc::new(String::from(file)), options.parse)?;
    debug!("{}: parsed in {:?}", file, parse_start.elapsed());

    let generate_start = Instant::now();
    let code = generate(&ast);
    debug!("{}: generated {} bytes in {:?}", file, code.len(), generate_start.elapsed());

    Ok(Compilation { tokens, ast, code })
}

/// Reads `path` and compiles it, handing back the source alongside the
/// outcome so a rejected source can still be shown in a diagnostic.
///
/// Only failing to read the file is an `Err`. The file is read completely
/// and closed before tokenizing begins.
pub fn read_and_compile(
    path: &Path,
    options: &CompilerOptions,
) -> Result<(String, Result<Compilation, Error>)> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;

    let compilation = compile_source(source.clone(), &file_name(path), options);

    Ok((source, compilation))
}

/// Reads `path` and compiles it.
pub fn compile_file(path: &Path, options: &CompilerOptions) -> Result<Compilation> {
    let (_, compilation) = read_and_compile(path, options)?;

    compilation.with_context(|| format!("failed to compile '{}'", path.display()))
}

/// The name positions refer to: the final path component.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Where the generated code for `input` goes: the final extension is
/// replaced by the result suffix and the target extension, inside the
/// output directory. `src/foo.js` becomes `outputs/foo_result.py`.
pub fn output_path(input: &Path, options: &CompilerOptions) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    options
        .output_dir
        .join(format!("{}{}.{}", stem, options.result_suffix, options.extension))
}

/// Writes generated code for `input`, creating the output directory when
/// needed. Returns the path written to.
pub fn write_output(code: &str, input: &Path, options: &CompilerOptions) -> Result<PathBuf> {
    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            options.output_dir.display()
        )
    })?;

    let path = output_path(input, options);
    fs::write(&path, code).with_context(|| format!("failed to write '{}'", path.display()))?;

    info!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::compiler::options::CompilerOptions;

    use super::{compile_source, output_path, read_and_compile};

    #[test]
    fn test_output_path_replaces_extension() {
        let options = CompilerOptions::default();

        assert_eq!(
            output_path(Path::new("src/test1.js"), &options),
            PathBuf::from("outputs/test1_result.py")
        );
        assert_eq!(
            output_path(Path::new("foo.srclang"), &options),
            PathBuf::from("outputs/foo_result.py")
        );
        // only the final extension is stripped
        assert_eq!(
            output_path(Path::new("a.b.js"), &options),
            PathBuf::from("outputs/a.b_result.py")
        );
    }

    #[test]
    fn test_output_path_uses_options() {
        let options = CompilerOptions {
            output_dir: PathBuf::from("build"),
            result_suffix: String::from("_out"),
            extension: String::from("txt"),
            ..CompilerOptions::default()
        };

        assert_eq!(
            output_path(Path::new("prog"), &options),
            PathBuf::from("build/prog_out.txt")
        );
    }

    #[test]
    fn test_compile_source_keeps_every_phase() {
        let compilation =
            compile_source(String::from("def id(x) x end"), "id.js", &CompilerOptions::default()).unwrap();

        assert_eq!(compilation.tokens.len(), 7);
        assert_eq!(compilation.ast.name, "id");
        assert_eq!(compilation.code, "def id(x): return x");
    }

    #[test]
    fn test_read_and_compile_returns_source_with_error() {
        let work = tempfile::TempDir::new().unwrap();
        let input = work.path().join("nested").join("bad.js");
        std::fs::create_dir_all(input.parent().unwrap()).unwrap();
        std::fs::write(&input, "def f(x x end").unwrap();

        let (source, compilation) = read_and_compile(&input, &CompilerOptions::default()).unwrap();
        let error = compilation.unwrap_err();

        assert_eq!(source, "def f(x x end");
        assert_eq!(error.get_error_name(), "UnexpectedToken");
        assert_eq!(error.get_position().1.as_str(), "bad.js");
    }
}
