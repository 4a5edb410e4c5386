use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::authors::DEFAULT_AUTHOR;

//----- Command line parameters

/// Generate the front matter block of a blog post
#[derive(Parser, Debug)]
#[clap(name = "frontmatter-gen", version)]
pub struct RootCommand {
    /// Path to the config file [default: frontmatter.yml]
    #[clap(global = true, long)]
    pub config: Option<PathBuf>,

    /// Log debug information to stderr
    #[clap(global = true, short, long)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

impl RootCommand {
    // Avoids importing clap::Parser in main
    pub fn read() -> RootCommand {
        RootCommand::parse()
    }
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the front matter for a post
    Generate {
        /// Main title
        #[clap(long)]
        title: Option<String>,
        /// Short summary of the post
        #[clap(long)]
        excerpt: Option<String>,
        /// Banner image URL
        #[clap(long)]
        image_url: Option<String>,
        /// Author key (see the `authors` command)
        #[clap(long)]
        author: Option<String>,
        /// Publication time as a Unix timestamp, instead of the current time
        #[clap(long)]
        publish_on: Option<i64>,
        /// Also copy the front matter to the clipboard
        #[clap(long)]
        copy: bool,
    },

    /// Print the slug of a title
    Slug {
        title: String,
    },

    /// List the author keys and names
    Authors,
}

//----- Config file

pub const DEFAULT_CONFIG_PATH: &str = "frontmatter.yml";

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Author key used when none is given on the command line
    pub default_author: Option<String>,
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let text = fs::read_to_string(path).with_context(|| format!("Failed to open {:?}", path))?;
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        let config = serde_yaml::from_str(&text).with_context(|| format!("Failed to read {:?}", path))?;
        Ok(config)
    }

    /// Reads the config file at `path`, or at the default location in the current directory if
    /// `None`. A missing file is only an error if its path was given explicitly.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        Config::load_from(Path::new("."), path)
    }

    /// Same as `load`, with relative paths resolved against `dir`.
    pub fn load_from(dir: &Path, path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => Config::read(&dir.join(path)),
            None => {
                let path = dir.join(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Config::read(&path)
                } else {
                    tracing::debug!("No config file at {:?}, using defaults", path);
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn default_author(&self) -> &str {
        self.default_author.as_deref().unwrap_or(DEFAULT_AUTHOR)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use testresult::TestResult;

    #[test]
    fn test_read_config() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("frontmatter.yml");
        fs::write(&path, "default_author: tr\n")?;

        let config = Config::read(&path)?;
        assert_eq!(Some("tr".to_string()), config.default_author);
        assert_eq!("tr", config.default_author());
        Ok(())
    }

    #[test]
    fn test_empty_config() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("frontmatter.yml");
        fs::write(&path, "\n")?;

        let config = Config::read(&path)?;
        assert_eq!(Config::default(), config);
        assert_eq!(DEFAULT_AUTHOR, config.default_author());
        Ok(())
    }

    #[test]
    fn test_missing_explicit_config() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nope.yml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open"));
        Ok(())
    }

    #[test]
    fn test_default_config_location() -> TestResult {
        let dir = tempfile::tempdir()?;

        let config = Config::load_from(dir.path(), None)?;
        assert_eq!(Config::default(), config);
        assert_eq!(DEFAULT_AUTHOR, config.default_author());

        fs::write(dir.path().join(DEFAULT_CONFIG_PATH), "default_author: tr\n")?;
        let config = Config::load_from(dir.path(), None)?;
        assert_eq!("tr", config.default_author());
        Ok(())
    }

    #[test]
    fn test_explicit_config_is_relative_to_dir() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("other.yml"), "default_author: tr\n")?;

        let config = Config::load_from(dir.path(), Some(Path::new("other.yml")))?;
        assert_eq!("tr", config.default_author());
        Ok(())
    }

    #[test]
    fn test_parse_generate_command() {
        let args = RootCommand::parse_from([
            "frontmatter-gen", "generate",
            "--title", "Hello", "--image-url", "https://example.com/a.jpg",
            "--publish-on", "1672531200", "--copy",
        ]);

        match args.command {
            Commands::Generate { title, excerpt, image_url, author, publish_on, copy } => {
                assert_eq!(Some("Hello".to_string()), title);
                assert_eq!(None, excerpt);
                assert_eq!(Some("https://example.com/a.jpg".to_string()), image_url);
                assert_eq!(None, author);
                assert_eq!(Some(1672531200), publish_on);
                assert!(copy);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }
}
