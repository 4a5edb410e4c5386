//! Generation of the front matter block prepended to a blog post.

use anyhow::Result;
use indoc::formatdoc;
use maplit::btreemap;

use crate::authors;
use crate::clock::Clock;
use crate::error::FormError;

/// The validated content of the post form. All fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    /// Short key in the author directory, e.g. "hn"
    pub author_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub image_url: String,
    /// Author display name, "Name, Role"
    pub author: String,
    /// Unix timestamp, in seconds
    pub publish_on: i64,
}

impl FrontMatter {
    /// Builds the front matter of a post. The clock is read once, when this function is called.
    pub fn new(payload: &FormPayload, clock: &impl Clock) -> Result<FrontMatter, FormError> {
        let author = authors::lookup(&payload.author_key)?;

        let slug = slug(&payload.title);
        if slug.is_empty() {
            return Err(FormError::EmptySlug { title: payload.title.clone() });
        }

        Ok(FrontMatter {
            title: payload.title.clone(),
            slug,
            excerpt: payload.excerpt.clone(),
            image_url: payload.image_url.clone(),
            author: author.to_string(),
            publish_on: clock.now(),
        })
    }

    /// Renders the block: the `---` delimiters around one `key: value` line per field.
    /// There is no trailing newline.
    pub fn render(&self) -> Result<String> {
        let text = formatdoc! {"
            ---
            title: {title}
            slug: {slug}
            excerpt: {excerpt}
            imageUrl: {image_url}
            author: {author}
            publishOn: {publish_on}
            ---",
            title = yaml_scalar(&self.title)?,
            slug = yaml_scalar(&self.slug)?,
            excerpt = yaml_scalar(&self.excerpt)?,
            image_url = yaml_scalar(&self.image_url)?,
            author = yaml_scalar(&self.author)?,
            publish_on = self.publish_on,
        };

        tracing::debug!(slug = %self.slug, publish_on = self.publish_on, "Rendered front matter");

        Ok(text)
    }
}

/// Generates the front matter block for a post.
pub fn generate(payload: &FormPayload, clock: &impl Clock) -> Result<String> {
    FrontMatter::new(payload, clock)?.render()
}

/// Derives the URL slug of a title: non-ASCII characters are transliterated, everything is
/// lowercased and runs of other characters become a single `-`.
pub fn slug(title: &str) -> String {
    ::slug::slugify(title.trim())
}

/// Renders a string as a YAML scalar that fits on a single line.
///
/// Values are left plain unless YAML would read them differently (e.g. "true", "a: b").
/// Values that the YAML emitter would spread over several lines (line breaks, folding) are
/// written as double-quoted JSON strings, which are also valid YAML.
fn yaml_scalar(value: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(&btreemap! { "v" => value })?;
    let scalar = yaml.strip_prefix("v: ").unwrap_or(yaml.as_str()).trim_end_matches('\n');

    let has_break = |c: char| matches!(c, '\r' | '\u{85}' | '\u{2028}' | '\u{2029}');
    if scalar.contains('\n') || value.contains(has_break) {
        let json = serde_json::to_string(value)?
            .replace('\u{85}', "\\u0085")
            .replace('\u{2028}', "\\u2028")
            .replace('\u{2029}', "\\u2029");
        Ok(json)
    } else {
        Ok(scalar.to_string())
    }
}
