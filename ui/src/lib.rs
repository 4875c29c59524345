use payloads::JsonClient;
use yew::prelude::*;

pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;

use pages::ProfilePage;

/// Id of the element the app is mounted into, see `index.html`.
pub const MOUNT_ELEMENT_ID: &str = "root";

const DEFAULT_PROFILE_URL: &str = "https://api.github.com/users/kedoska";

/// The profile to display. Override at build time with `PROFILE_URL`.
pub fn profile_url() -> &'static str {
    option_env!("PROFILE_URL").unwrap_or(DEFAULT_PROFILE_URL)
}

pub fn get_fetch_client() -> JsonClient {
    JsonClient::new()
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Mount point #{0} not found")]
    MissingMountPoint(String),
}

/// Mount the app into the element with id `element_id`.
///
/// Nothing is rendered if the element can't be found.
pub fn start(element_id: &str) -> Result<(), StartupError> {
    let document = web_sys::window()
        .ok_or(StartupError::NoWindow)?
        .document()
        .ok_or(StartupError::NoDocument)?;
    let root = document
        .get_element_by_id(element_id)
        .ok_or_else(|| StartupError::MissingMountPoint(element_id.into()))?;

    mount(root);
    Ok(())
}

/// Mount the app into `root`. The app stays mounted for the lifetime of the
/// page.
pub fn mount(root: web_sys::Element) {
    tracing::debug!("Mounting app");
    yew::Renderer::<App>::with_root(root).render();
}

#[function_component]
pub fn App() -> Html {
    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <ProfilePage />
            </main>
        </div>
    }
}
