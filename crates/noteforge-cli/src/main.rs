use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use noteforge_config::Config;
use noteforge_render::{HtmlRenderer, MarkupMode, NoteDocument, render_keyed};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

/// Render a NoteForge note body to HTML or JSON.
#[derive(Debug, Parser)]
#[command(name = "noteforge", version)]
struct Cli {
    /// Note file to render. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Inject inline markup without escaping. Only for trusted notes.
    #[arg(long)]
    trusted: bool,

    /// Wrap the output in a note page with this title.
    #[arg(long)]
    title: Option<String>,

    /// Treat the input as a stored note document (JSON) and render its body.
    #[arg(long)]
    document: bool,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;

    let source = read_input(cli.file.as_deref(), &config)?;
    check_size(&source, config.max_note_bytes)?;

    let body = if cli.document {
        NoteDocument::from_json(&source)
            .context("Input is not a note document")?
            .body()
            .to_string()
    } else {
        source
    };

    let mut options = config.html;
    if cli.trusted {
        options.markup = MarkupMode::Trusted;
    }
    log::debug!("Rendering with {options:?}");

    match cli.format {
        OutputFormat::Html => {
            let renderer = HtmlRenderer::new(options);
            Ok(match &cli.title {
                Some(title) => renderer.render_note(Some(title), &body),
                None => renderer.render_markdown(&body),
            })
        }
        OutputFormat::Json => {
            if cli.title.is_some() {
                log::warn!("--title is ignored for JSON output");
            }
            serde_json::to_string_pretty(&render_keyed(&body))
                .context("Failed to serialize rendered blocks")
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if explicit.is_some() => {
            bail!("Config file not found: {}", config_path.display())
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_input(file: Option<&Path>, config: &Config) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            let path = config.resolve_note_path(path);
            log::info!("Reading note from {}", path.display());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read note at {}", path.display()))
        }
        _ => {
            log::info!("Reading note from stdin");
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read note from stdin")?;
            Ok(source)
        }
    }
}

fn check_size(source: &str, max_note_bytes: usize) -> Result<()> {
    if source.len() > max_note_bytes {
        bail!(
            "Note is {} bytes, over the configured limit of {} bytes",
            source.len(),
            max_note_bytes
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("noteforge").chain(args.iter().copied())).unwrap()
    }

    /// Writes a note and an empty config into a temp dir, returning both paths.
    fn setup(note: &str) -> (TempDir, String, String) {
        let dir = TempDir::new().unwrap();
        let note_path = dir.path().join("note.md");
        let config_path = dir.path().join("config.toml");
        std::fs::write(&note_path, note).unwrap();
        std::fs::write(&config_path, "").unwrap();
        let note_path = note_path.to_string_lossy().into_owned();
        let config_path = config_path.to_string_lossy().into_owned();
        (dir, note_path, config_path)
    }

    #[test]
    fn parses_defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.format, OutputFormat::Html);
        assert!(cli.file.is_none());
        assert!(!cli.trusted);
    }

    #[test]
    fn renders_file_to_html() {
        let (_dir, note, config) = setup("# Hi\n<b>x</b>");
        let out = run(&cli(&[note.as_str(), "--config", config.as_str()])).unwrap();
        assert_eq!(
            out,
            "<h1 class=\"text-2xl font-bold my-2\">Hi</h1>\n<p class=\"my-1\">&lt;b&gt;x&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn trusted_flag_overrides_config() {
        let (_dir, note, config) = setup("<b>x</b>");
        let out = run(&cli(&[
            note.as_str(),
            "--config",
            config.as_str(),
            "--trusted",
        ]))
        .unwrap();
        assert_eq!(out, "<p class=\"my-1\"><b>x</b></p>");
    }

    #[test]
    fn renders_document_json() {
        let doc = NoteDocument::from_body("- a").to_json().unwrap();
        let (_dir, note, config) = setup(&doc);
        let out = run(&cli(&[
            note.as_str(),
            "--config",
            config.as_str(),
            "--document",
            "--format",
            "json",
        ]))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["key"], 0);
        assert_eq!(value[0]["block"]["type"], "list");
        assert_eq!(value[0]["block"]["items"][0]["text"], "a");
    }

    #[test]
    fn title_wraps_note_page() {
        let (_dir, note, config) = setup("body");
        let out = run(&cli(&[
            note.as_str(),
            "--config",
            config.as_str(),
            "--title",
            "T",
        ]))
        .unwrap();
        assert!(out.starts_with("<article class=\"note\">"));
        assert!(out.contains(">T</h1>"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let (_dir, note, _config) = setup("x");
        let err = run(&cli(&[
            note.as_str(),
            "--config",
            "/nonexistent/noteforge.toml",
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn oversized_note_is_rejected() {
        assert!(check_size("abc", 3).is_ok());
        let err = check_size("abcd", 3).unwrap_err();
        assert!(err.to_string().contains("over the configured limit"));
    }
}
