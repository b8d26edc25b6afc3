pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod view;

use errors::CoreError;
use models::settings::Settings;
use providers::http_backend::HttpBackendClient;
use view::tracker::TrackerView;

pub use view::render::Screen;
pub use view::state::TrackerState;

/// Main entry point for the Crypto Tracker core library:
/// the tracker screen wired to the HTTP backend.
pub type CryptoTracker = TrackerView<HttpBackendClient>;

impl TrackerView<HttpBackendClient> {
    /// Build a tracker talking to the backend configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        let client = HttpBackendClient::new(settings)?;
        Ok(Self::new(client, settings))
    }
}
