//! End-to-end generation: metadata file in, Markdown pages out.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::api::ApiModel;
use crate::inherit::ExpansionStats;
use crate::metadata::{MetadataError, MetadataTree};
use crate::model::Definition;
use crate::options::{Level, Options};
use crate::render::MarkdownRenderer;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The metadata document could not be loaded.
    #[error("failed to load metadata: {0}")]
    Metadata(#[from] MetadataError),

    /// A page or the output directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The options file could not be read.
    #[error("failed to read options from {}: {source}", .path.display())]
    Options {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Load [`Options`] from a JSON file.
pub fn load_options(path: impl AsRef<Path>) -> Result<Options, GenerateError> {
    Options::read_from_file(path.as_ref()).map_err(|source| GenerateError::Options {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Summary of one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub class_pages: usize,
    pub function_pages: usize,
    /// Member pages written at component level.
    pub component_pages: usize,
    /// Every file written, index last.
    pub written: Vec<PathBuf>,
    pub expansion: ExpansionStats,
}

/// Runs the pipeline: parse, extract, expand, render, write.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    options: Options,
}

impl Generator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Generate documentation for `input` into `output_dir`.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<GenerationReport, GenerateError> {
        let tree = MetadataTree::read_from_file(input.as_ref())?;
        let model = ApiModel::from_tree(&tree);
        self.write_model(&model, output_dir.as_ref())
    }

    /// Write every page of an already-built model.
    pub fn write_model(
        &self,
        model: &ApiModel,
        output_dir: &Path,
    ) -> Result<GenerationReport, GenerateError> {
        std::fs::create_dir_all(output_dir).map_err(|e| GenerateError::io(output_dir, e))?;

        let renderer = MarkdownRenderer::new(model, &self.options);
        let mut report = GenerationReport {
            expansion: model.expansion(),
            ..GenerationReport::default()
        };

        for class in model.classes().values() {
            let path = output_dir.join(class.file_name());
            let content = match self.options.level {
                Level::Class => renderer.render_class(class),
                Level::Component => renderer.render_class_summary(class),
            };
            write_page(&path, &content)?;
            report.class_pages += 1;
            report.written.push(path);

            if self.options.level == Level::Component {
                for component in renderer.render_components(class) {
                    let path = output_dir.join(&component.file_name);
                    write_page(&path, &component.content)?;
                    report.component_pages += 1;
                    report.written.push(path);
                }
            }
        }

        for file in model.functions().values() {
            let path = output_dir.join(file.file_name());
            write_page(&path, &renderer.render_functions(file))?;
            report.function_pages += 1;
            report.written.push(path);
        }

        let index = output_dir.join(&self.options.index_file);
        let index_page = match self.options.level {
            Level::Class => renderer.render_index(),
            Level::Component => renderer.render_component_index(),
        };
        write_page(&index, &index_page)?;
        report.written.push(index);

        tracing::info!(
            "Generated {} class pages, {} member pages and {} function pages in {} ({} level)",
            report.class_pages,
            report.component_pages,
            report.function_pages,
            output_dir.display(),
            self.options.level
        );
        Ok(report)
    }
}

fn write_page(path: &Path, content: &str) -> Result<(), GenerateError> {
    std::fs::write(path, content).map_err(|e| GenerateError::io(path, e))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
