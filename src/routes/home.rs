//! Handler for the version page.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::{render_index, IndexPage};

/// Renders the page for the configured version label, stamped with this host and the current time.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexPage::now(&state.config.version);
    tracing::debug!(label = %page.label, hostname = %page.hostname, "Rendering index page");

    let html = render_index(&state.tera, &page)?;
    Ok(Html(html))
}
