//! `mdpress build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdpress_config::{CliSettings, Config};
use mdpress_site::{copy_static, generate_pages};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover mdpress.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// HTML template file (overrides config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Static asset directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Enable verbose output (show per-page generation logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the site cannot be built.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            template_path: self.template,
            output_dir: self.output_dir,
            static_dir: self.static_dir,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = &config.site;

        // Print build info
        output.info(&format!(
            "Content directory: {}",
            site.content_dir.display()
        ));
        output.info(&format!("Output directory: {}", site.output_dir.display()));
        if !site.static_dir.exists() {
            output.warning(&format!(
                "Static directory {} does not exist, skipping asset copy",
                site.static_dir.display()
            ));
        }

        copy_static(&site.static_dir, &site.output_dir)?;
        let count = generate_pages(&site.content_dir, &site.template_path, &site.output_dir)?;

        output.success(&format!("Generated {count} pages"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_build_generates_full_site() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("content").join("blog")).unwrap();
        fs::create_dir_all(root.join("static")).unwrap();
        fs::write(root.join("static").join("main.css"), "body {}").unwrap();
        fs::write(
            root.join("template.html"),
            "<title>{{ Title }}</title>{{ Content }}",
        )
        .unwrap();
        fs::write(root.join("content").join("index.md"), "# Home\n\nWelcome").unwrap();
        fs::write(
            root.join("content").join("blog").join("post.md"),
            "# Post\n\n> quoted",
        )
        .unwrap();

        let args = BuildArgs {
            config: None,
            content_dir: Some(root.join("content")),
            template: Some(root.join("template.html")),
            output_dir: Some(root.join("public")),
            static_dir: Some(root.join("static")),
            verbose: false,
        };
        args.execute().unwrap();

        assert!(root.join("public").join("main.css").exists());
        let index = fs::read_to_string(root.join("public").join("index.html")).unwrap();
        assert_eq!(
            index,
            "<title>Home</title><div><h1>Home</h1><p>Welcome</p></div>"
        );
        let post = fs::read_to_string(root.join("public").join("blog").join("post.html")).unwrap();
        assert_eq!(
            post,
            "<title>Post</title><div><h1>Post</h1><blockquote>quoted</blockquote></div>"
        );
    }
}
