use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use tera::Tera;

use crate::error::AppError;
use crate::version::VersionLabel;

/// Name the index page is registered under; the `.html` suffix enables autoescaping.
pub const INDEX_TEMPLATE: &str = "index.html";

/// Locale-style wall clock, e.g. `10/17/2026, 3:04:05 PM`
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Initialize the Tera template engine with the templates compiled into the binary
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}

/// Everything the index page shows.
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    /// Upper-cased version label
    pub label: String,
    /// CSS background value
    pub gradient: &'static str,
    pub hostname: String,
    pub rendered_at: String,
}

impl IndexPage {
    pub fn new<Tz>(version: &VersionLabel, hostname: impl Into<String>, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            label: version.display_name(),
            gradient: version.gradient().css(),
            hostname: hostname.into(),
            rendered_at: format_timestamp(now),
        }
    }

    /// Page for the current moment on this machine.
    pub fn now(version: &VersionLabel) -> Self {
        Self::new(version, current_hostname(), &Local::now())
    }
}

/// Render the index page.
pub fn render_index(tera: &Tera, page: &IndexPage) -> Result<String, AppError> {
    let context = tera::Context::from_serialize(page)?;
    Ok(tera.render(INDEX_TEMPLATE, &context)?)
}

pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

pub fn current_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}
