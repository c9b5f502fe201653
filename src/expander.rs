//! Expansion of one template into a Java source file per primitive type.

use crate::context::RunContext;
use crate::descriptor::{DESCRIPTORS, TypeDescriptor};
use crate::error::{Error, Result};
use crate::placeholder::Substitutions;
use crate::template::Template;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Marker in the template file name replaced by the capitalized type name.
pub const NAME_MARKER: &str = "Type";
pub const TEMPLATE_SUFFIX: &str = ".template";
pub const OUTPUT_SUFFIX: &str = ".java";

/// Derive an output name from a template name: the first `Type` becomes the
/// capitalized type name and a trailing `.template` becomes `.java`. Either
/// step is a no-op when its marker is absent.
pub fn output_name(template_name: &str, descriptor: &TypeDescriptor) -> String {
    let renamed = template_name.replacen(NAME_MARKER, &descriptor.capitalized(), 1);
    match renamed.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stem) => format!("{stem}{OUTPUT_SUFFIX}"),
        None => renamed,
    }
}

/// Output path for `descriptor`, derived textually from the template path.
pub fn output_path(template_path: &Path, descriptor: &TypeDescriptor) -> Result<PathBuf> {
    let name = template_path.to_str().ok_or_else(|| Error::Configuration {
        path: template_path.to_path_buf(),
        reason: "template path is not valid UTF-8".to_string(),
    })?;
    Ok(PathBuf::from(output_name(name, descriptor)))
}

/// Substitute every line of `template` for one descriptor.
pub fn expand(template: &Template, descriptor: &TypeDescriptor, ctx: &RunContext) -> Vec<String> {
    let substitutions = Substitutions::new(descriptor, ctx);
    let mut replaced = 0;
    let lines = template
        .lines()
        .iter()
        .map(|line| {
            let (line, count) = substitutions.apply(line);
            replaced += count;
            line
        })
        .collect();
    log::debug!(
        "Expanded {} for {}: {} placeholders replaced",
        template.path().display(),
        descriptor.short_name,
        replaced
    );
    lines
}

/// Generate the source file for one descriptor and return its path.
pub fn generate_one(
    template: &Template,
    descriptor: &TypeDescriptor,
    ctx: &RunContext,
) -> Result<PathBuf> {
    let output = output_path(template.path(), descriptor)?;

    println!();
    println!("{}", progress_message(&output, descriptor, template.path()));
    println!();

    let lines = expand(template, descriptor, ctx);
    write_lines(&output, &lines)?;
    Ok(output)
}

fn progress_message(output: &Path, descriptor: &TypeDescriptor, template: &Path) -> String {
    format!(
        "Generating {} for data type {} from input {}",
        output.display(),
        descriptor.short_name,
        template.display()
    )
}

/// Generate the source files for every descriptor, in table order. Stops at
/// the first failure; files already written are left in place.
pub fn generate_all(template_path: &Path, ctx: &RunContext) -> Result<Vec<PathBuf>> {
    for descriptor in &DESCRIPTORS {
        if output_path(template_path, descriptor)? == template_path {
            return Err(Error::Configuration {
                path: template_path.to_path_buf(),
                reason: format!(
                    "file name contains neither `{NAME_MARKER}` nor a `{TEMPLATE_SUFFIX}` suffix, \
                     output would overwrite the template"
                ),
            });
        }
    }

    let template = Template::load(template_path)?;
    DESCRIPTORS
        .iter()
        .map(|descriptor| generate_one(&template, descriptor, ctx))
        .collect()
}

/// Write `lines` to `path`, truncating any existing file. There is no
/// temp-file swap, so a failure part way leaves a partial file.
fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let write_error = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    for line in lines {
        writer.write_all(line.as_bytes()).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}
