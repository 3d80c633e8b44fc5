use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_ir::ast;
use libgraphql_ir::file_reader;
use libgraphql_ir::ir::IrForest;
use libgraphql_ir::operation::FragmentTableBuilder;
use libgraphql_ir::rewrite::IrForestBuilder;
use libgraphql_ir::schema::Schema;
use libgraphql_ir::schema::SchemaBuilder;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct RewriteCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Only print the operation with this name.",
        long,
        short='o',
    )]
    operation: Option<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing schema files.",
        long="schema",
        num_args=1..,
        required=true,
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more executable GraphQL documents (or \
             directories containing them) to rewrite. Fragments defined in \
             any of them may be spread from any other.",
        name="DOCUMENT_PATHS",
        required=true,
    )]
    document_paths: Vec<PathBuf>,
}

impl RewriteCmd {
    /// Normalize the set of file extensions to filter with.
    fn file_exts(&self) -> HashSet<String> {
        self.graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }

    fn load_schema(schema_files: &[PathBuf]) -> anyhow::Result<Schema> {
        log::debug!("Loading schema from {} files...", schema_files.len());
        let schema = SchemaBuilder::new()
            .load_files(schema_files)
            .context("Failed to load the schema")?
            .build()
            .context("Failed to build the schema")?;
        log::debug!("Loaded {} schema types.", schema.defined_types().len());
        Ok(schema)
    }

    fn parse_documents(
        document_files: &[PathBuf],
    ) -> anyhow::Result<Vec<(PathBuf, ast::operation::Document)>> {
        document_files.iter()
            .map(|file_path| -> anyhow::Result<_> {
                let document = file_reader::read_executable_document(file_path)
                    .context("Failed to load an executable document")?;
                Ok((file_path.to_owned(), document))
            })
            .collect()
    }

    fn render_forests(
        &self,
        forests: &[(&Path, IrForest<'_, '_>)],
    ) -> anyhow::Result<String> {
        if let Some(operation_name) = &self.operation {
            return forests.iter()
                .find_map(|(_, forest)| forest.operation(operation_name))
                .map(|document| document.to_string())
                .with_context(|| format!(
                    "No operation named `{operation_name}` was found",
                ));
        }

        Ok(forests.iter()
            .map(|(file_path, forest)| format!("# {}\n{forest}", file_path.display()))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Find all GraphQL files recursively located at or under each of `paths`.
fn find_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
    errors: &mut Vec<Box<dyn Error>>,
) -> Vec<PathBuf> {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }
                    log::trace!("Found file at {path:#?}.");
                    let matches_ext = path.extension()
                        .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
                    if matches_ext {
                        file_paths.push(path.to_path_buf());
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    errors.push(Box::new(e));
                },
            }
        }
    }

    // A single file passed explicitly is loaded even if its extension isn't
    // one of `graphql_file_exts`.
    if file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file() {
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any \
            of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(only_path.to_owned());
    }

    file_paths
}

fn format_errors(errors: &[Box<dyn Error>]) -> String {
    errors.iter()
        .map(|err| format!("  * {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[inherent::inherent]
impl RunnableCommand for RewriteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graphql_file_exts = self.file_exts();
        let mut errors: Vec<Box<dyn Error>> = vec![];

        let schema_files = find_graphql_files(&self.schema_paths, &graphql_file_exts, &mut errors);
        let document_files = find_graphql_files(&self.document_paths, &graphql_file_exts, &mut errors);
        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while finding GraphQL files:\n{}",
                output_utils::RED_X,
                format_errors(&errors),
            ));
        }

        let schema = match Self::load_schema(&schema_files) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let documents = match Self::parse_documents(&document_files) {
            Ok(documents) => documents,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Parsed {} executable documents.", documents.len());

        let mut fragments = FragmentTableBuilder::new();
        for (file_path, document) in &documents {
            if let Err(errs) = fragments.add_from_document_ast(document, Some(file_path.as_path())) {
                errors.extend(errs.into_iter().map(|err| Box::new(err) as Box<dyn Error>));
            }
        }
        let fragments = fragments.build();
        log::debug!("Collected {} fragment definitions.", fragments.len());

        let mut forests = vec![];
        for (file_path, document) in &documents {
            let file_path = file_path.as_path();
            match IrForestBuilder::from_ast(&schema, &fragments, document, Some(file_path)) {
                Ok(forest) => forests.push((file_path, forest)),
                Err(errs) => errors.extend(
                    errs.into_iter().map(|err| Box::new(err) as Box<dyn Error>),
                ),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} errors while rewriting:\n{}",
                output_utils::RED_X,
                errors.len(),
                format_errors(&errors),
            ));
        }

        let num_operations: usize = forests.iter().map(|(_, forest)| forest.len()).sum();
        log::info!(
            "{} Rewrote {num_operations} operations from {} documents.",
            output_utils::GREEN_CHECK,
            documents.len(),
        );

        match self.render_forests(&forests) {
            Ok(rendered) => CommandResult::stdout(format_args!("{rendered}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
