use clap::{Args, Parser, Subcommand};
use folio::outline::build_groups;
use folio::{
    Document, DomNode, ExportOptions, FontFamily, PageWidth, PipelineBuilder, PipelineError,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exports report documents to PDF and maintains their section outline.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document to PDF.
    Export(ExportArgs),
    /// Print the normalized section outline.
    Outline { document: PathBuf },
    /// Normalize section order and parent references.
    Normalize {
        document: PathBuf,
        /// Rewrite the file instead of printing to stdout.
        #[arg(long)]
        in_place: bool,
    },
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Document JSON (`{id, title, sections, tagValues}`).
    document: PathBuf,
    /// Already-rendered XHTML content to export instead of the document's sections.
    #[arg(long)]
    html: Option<PathBuf>,
    #[arg(long, value_parser = parse_page_width)]
    page_width: Option<PageWidth>,
    #[arg(long, value_parser = parse_font_family)]
    font: Option<FontFamily>,
    /// Output directory.
    #[arg(long, default_value = ".")]
    out: PathBuf,
    /// Options JSON (`{"pageWidth": ..., "fontFamily": ...}`); flags take precedence.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Directory relative image paths are resolved against. Defaults to the
    /// directory of the content file.
    #[arg(long)]
    resources: Option<PathBuf>,
}

fn parse_page_width(s: &str) -> Result<PageWidth, String> {
    s.parse()
}

fn parse_font_family(s: &str) -> Result<FontFamily, String> {
    s.parse()
}

fn read_document(path: &Path) -> Result<Document, PipelineError> {
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read document from '{}': {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&source)?)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

async fn export(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ExportArgs {
        document,
        html,
        page_width,
        font,
        out,
        options,
        resources,
    } = args;
    let doc = read_document(&document)?;
    let mut export_options = match options {
        Some(path) => folio::pipeline::load_options(path)?,
        None => ExportOptions::default(),
    };
    if let Some(page_width) = page_width {
        export_options.page_width = page_width;
    }
    if let Some(font) = font {
        export_options.font_family = font;
    }

    let content_file = html.as_deref().unwrap_or(&document);
    let resource_dir = resources.unwrap_or_else(|| parent_dir(content_file));
    let pipeline = PipelineBuilder::new()
        .with_options(export_options)
        .with_resource_dir(&resource_dir)?
        .with_output_dir(&out)
        .build()?;

    let summary = match html {
        Some(path) => {
            let root =
                DomNode::from_xhtml(&fs::read_to_string(&path)?).map_err(PipelineError::from)?;
            pipeline.export(&doc, Some(&root)).await?
        }
        None => pipeline.export_document(&doc).await?,
    };
    println!(
        "{} ({} pages)",
        out.join(&summary.filename).display(),
        summary.pages
    );
    Ok(())
}

fn print_outline(path: &Path) -> Result<(), PipelineError> {
    let doc = read_document(path)?;
    println!("{}", doc.title);
    for (i, group) in build_groups(&doc.sections).iter().enumerate() {
        println!("{}. {}", i + 1, group.parent.title);
        for (j, child) in group.children.iter().enumerate() {
            println!("   {}.{} {}", i + 1, j + 1, child.title);
        }
    }
    Ok(())
}

fn normalize(path: &Path, in_place: bool) -> Result<(), PipelineError> {
    let mut doc = read_document(path)?;
    doc.sections = folio::outline::normalize(&doc.sections);
    let json = serde_json::to_string_pretty(&doc)?;
    if in_place {
        fs::write(path, json)?;
        log::info!("Normalized {} sections in {}", doc.sections.len(), path.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Command::Export(args) => export(args).await,
        Command::Outline { document } => print_outline(&document).map_err(Into::into),
        Command::Normalize { document, in_place } => {
            normalize(&document, in_place).map_err(Into::into)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
