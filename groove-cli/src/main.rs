//! Groove CLI
//!
//! Render and inspect dancing avatars from the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use groove_core::{derive_seed, Avatar};
use groove_visual::{AvatarRenderer, RenderConfig};

#[derive(Parser)]
#[command(name = "groove")]
#[command(about = "Groove - a unique dancing avatar for every identifier")]
#[command(version)]
struct Cli {
    /// JSON render config (GROOVE_* env vars override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an avatar to SVG
    Render {
        /// Any identifier, e.g. a ULID
        identifier: String,

        /// Width and height in pixels
        #[arg(short, long)]
        size: Option<u32>,

        /// Output SVG file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the derived parameters and keyframes as JSON
    Summary {
        identifier: String,

        #[arg(long)]
        pretty: bool,
    },

    /// Print the seed of each identifier
    Seed {
        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// Render several avatars into one HTML page
    Gallery {
        #[arg(required = true)]
        identifiers: Vec<String>,

        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("groove=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { identifier, size, output } => {
            cmd_render(&config, &identifier, size, output.as_deref())
        }
        Commands::Summary { identifier, pretty } => cmd_summary(&identifier, pretty),
        Commands::Seed { identifiers } => cmd_seed(&identifiers),
        Commands::Gallery { identifiers, output } => cmd_gallery(&config, &identifiers, &output),
    }
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let config = match path {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    }
    .with_env();

    config.validate()?;
    Ok(config)
}

fn render_to_string(config: &RenderConfig, identifier: &str, size: Option<u32>) -> Result<String> {
    if size == Some(0) {
        anyhow::bail!("Size must be at least 1 pixel");
    }
    let renderer = AvatarRenderer::new(config.clone())?;
    let avatar = Avatar::new(identifier);
    Ok(renderer.render_svg_at(&avatar, size.unwrap_or(config.size)))
}

fn cmd_render(config: &RenderConfig, identifier: &str, size: Option<u32>, output: Option<&Path>) -> Result<()> {
    let svg = render_to_string(config, identifier, size)?;

    match output {
        Some(path) => {
            std::fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "SVG written");
        }
        None => print!("{}", svg),
    }
    Ok(())
}

fn cmd_summary(identifier: &str, pretty: bool) -> Result<()> {
    let summary = Avatar::new(identifier).summary();
    println!("{}", summary.to_json(pretty)?);
    Ok(())
}

fn cmd_seed(identifiers: &[String]) -> Result<()> {
    for identifier in identifiers {
        println!("{}\t{}", derive_seed(identifier), identifier);
    }
    Ok(())
}

fn cmd_gallery(config: &RenderConfig, identifiers: &[String], output: &Path) -> Result<()> {
    let renderer = AvatarRenderer::new(config.clone())?;
    let avatars: Vec<Avatar> = identifiers.iter().map(|id| Avatar::new(id)).collect();
    let page = renderer.render_gallery(&avatars);

    std::fs::write(output, page).with_context(|| format!("writing {}", output.display()))?;
    tracing::info!(count = avatars.len(), path = %output.display(), "gallery written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["groove", "render", "abc", "--size", "128"]).unwrap();
        match cli.command {
            Commands::Render { identifier, size, output } => {
                assert_eq!(identifier, "abc");
                assert_eq!(size, Some(128));
                assert!(output.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_seed_requires_identifier() {
        assert!(Cli::try_parse_from(["groove", "seed"]).is_err());
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.svg");
        cmd_render(&RenderConfig::default(), "01ARZ3NDEKTSV4RRFFQ69G5FAV", Some(96), Some(path.as_path())).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"96\""));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(render_to_string(&RenderConfig::default(), "x", Some(0)).is_err());
    }

    #[test]
    fn test_gallery_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gallery.html");
        let ids = vec!["one".to_string(), "two".to_string()];
        cmd_gallery(&RenderConfig::default(), &ids, &path).unwrap();

        let page = std::fs::read_to_string(&path).unwrap();
        assert_eq!(page.matches("<svg").count(), 2);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groove.json");
        std::fs::write(&path, r#"{"bpm": 60}"#).unwrap();

        let config = RenderConfig::load(&path).unwrap();
        assert_eq!(config.cycle_seconds(), 8.0);
        assert!(load_config(Some(dir.path().join("missing.json").as_path())).is_err());
    }
}
