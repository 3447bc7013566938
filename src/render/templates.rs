//! Template loading and rendering.

use minijinja::{path_loader, Environment};
use serde::Serialize;
use thiserror::Error;

use crate::config::TemplateConfig;
use crate::render::pages::{ArtistPage, ArtistsPage};

/// Errors raised while producing a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template is missing or does not parse.
    #[error("template '{name}' could not be loaded: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The template loaded but failed while rendering.
    #[error("template '{name}' failed to render: {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Renders the list and detail pages from a template directory.
pub struct PageRenderer {
    env: Environment<'static>,
    artists_template: String,
    artist_template: String,
}

impl PageRenderer {
    pub fn new(config: &TemplateConfig) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(&config.dir));

        tracing::debug!(dir = %config.dir, "Template loader configured");

        Self {
            env,
            artists_template: config.artists.clone(),
            artist_template: config.artist.clone(),
        }
    }

    /// Render the artist list.
    pub fn artists_page(&self, page: &ArtistsPage<'_>) -> Result<String, RenderError> {
        self.render(&self.artists_template, page)
    }

    /// Render the artist detail page.
    pub fn artist_page(&self, page: &ArtistPage<'_>) -> Result<String, RenderError> {
        self.render(&self.artist_template, page)
    }

    /// Render any named template with a serializable context.
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|source| RenderError::Template {
                name: name.to_string(),
                source,
            })?;

        template.render(context).map_err(|source| RenderError::Render {
            name: name.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("artists_template", &self.artists_template)
            .field("artist_template", &self.artist_template)
            .finish()
    }
}
