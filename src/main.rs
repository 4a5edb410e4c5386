use std::io::{self, Write};
use std::process;

use frontmatter_gen::config::Commands::*;
use frontmatter_gen::config::{Config, RootCommand};
use frontmatter_gen::{authors, error, slug};
use frontmatter_gen::clipboard::SystemClipboard;
use frontmatter_gen::clock::{Clock, FixedClock, SystemClock};
use frontmatter_gen::form::{Field, FormState};

fn main() -> anyhow::Result<()> {
    let args = RootCommand::read();

    let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Err(err) => match error::missing_fields(&err) {
            // Validation messages, one per line, like the form shows them
            Some(fields) => {
                for field in fields {
                    eprintln!("{} is required", field.label());
                }
                process::exit(2);
            }
            None => Err(err),
        },
        ok => ok,
    }
}

fn run(args: RootCommand) -> anyhow::Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let mut out = io::stdout().lock();

    match args.command {
        Generate { title, excerpt, image_url, author, publish_on, copy } => {
            let mut form = FormState::with_default_author(config.default_author());
            let fields = [
                (Field::Title, title),
                (Field::Excerpt, excerpt),
                (Field::ImageUrl, image_url),
                (Field::Author, author),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    form.set(field, value);
                }
            }

            match publish_on {
                Some(time) => submit(&mut form, FixedClock(time))?,
                None => submit(&mut form, SystemClock)?,
            };

            if copy {
                form.copy(&mut SystemClipboard::new()?)?;
            }
            writeln!(out, "{}", form.result())?;
        }

        Slug { title } => {
            writeln!(out, "{}", slug(&title))?;
        }

        Authors => {
            authors::write_list(&mut out)?;
        }
    }

    Ok(())
}

fn submit(form: &mut FormState, clock: impl Clock) -> anyhow::Result<()> {
    form.submit(&clock)?;
    Ok(())
}
