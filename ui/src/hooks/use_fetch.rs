use payloads::{FetchError, JsonClient};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::future::Future;
use yew::prelude::*;

use super::{FetchState, RequestTicket, RequestTracker};
use crate::get_fetch_client;

/// Options for [`use_fetch`].
#[derive(Clone, Debug, PartialEq)]
pub struct FetchOptions {
    pub url: AttrValue,
}

impl FetchOptions {
    pub fn new(url: impl Into<AttrValue>) -> Self {
        Self { url: url.into() }
    }
}

/// The state to show as soon as `url` takes effect. Anything other than
/// `Loading` means no request should be made.
pub fn pending_state<T>(url: &str) -> FetchState<T> {
    if url.is_empty() {
        FetchState::Failure(FetchError::MissingUrl.to_string())
    } else {
        FetchState::Loading
    }
}

/// Perform one request and return the state it should commit, or `None` if
/// a newer request was started while this one was in flight.
pub async fn run_request<T: DeserializeOwned>(
    client: &JsonClient,
    url: &str,
    tracker: &RequestTracker,
    ticket: RequestTicket,
) -> Option<FetchState<T>> {
    let result = client.get_json::<T>(url).await;

    if !tracker.is_current(ticket) {
        tracing::debug!("Discarding superseded response from {url}");
        return None;
    }
    if let Err(e) = &result {
        tracing::warn!("Fetching {url} failed: {e}");
    }
    Some(FetchState::from_result(result))
}

/// Request bookkeeping for one [`use_fetch`] instance, kept across renders.
///
/// Every state change goes through `commit`. The driver remembers the last
/// url it was given, so applying the same url again is a no-op.
pub struct FetchDriver<T> {
    client: JsonClient,
    tracker: RequestTracker,
    last_url: RefCell<Option<AttrValue>>,
    commit: Callback<FetchState<T>>,
}

impl<T> FetchDriver<T>
where
    T: DeserializeOwned + 'static,
{
    pub fn new(client: JsonClient, commit: Callback<FetchState<T>>) -> Self {
        Self {
            client,
            tracker: RequestTracker::default(),
            last_url: RefCell::new(None),
            commit,
        }
    }

    /// Switch to `url`, committing the pending state right away.
    ///
    /// Returns the request to run, which commits its outcome when it
    /// resolves unless a later call has superseded it. Returns `None` when
    /// `url` is unchanged or empty.
    pub fn set_url(
        &self,
        url: &AttrValue,
    ) -> Option<impl Future<Output = ()> + use<T>> {
        if self.last_url.borrow().as_ref() == Some(url) {
            return None;
        }
        *self.last_url.borrow_mut() = Some(url.clone());

        // Supersede whatever is still in flight, even when not fetching
        let ticket = self.tracker.begin();

        let next = pending_state::<T>(url);
        let should_fetch = next.is_loading();
        self.commit.emit(next);
        if !should_fetch {
            tracing::warn!("Fetch skipped: {}", FetchError::MissingUrl);
            return None;
        }

        tracing::debug!("Fetching {url}");
        let client = self.client.clone();
        let tracker = self.tracker.clone();
        let commit = self.commit.clone();
        let url = url.clone();
        Some(async move {
            if let Some(next) =
                run_request::<T>(&client, &url, &tracker, ticket).await
            {
                commit.emit(next);
            }
        })
    }
}

/// Fetch a JSON document and track it through `Idle -> Loading ->
/// Success | Failure`.
///
/// A request is made on mount and whenever `options.url` changes; rendering
/// again with the same url does not refetch. An empty url fails immediately
/// with "No url provided" and makes no request. Requests are never
/// cancelled, but a response that arrives after a newer request has started
/// is dropped.
///
/// # Example
///
/// ```ignore
/// #[function_component]
/// fn Repo() -> Html {
///     let state = use_fetch::<Value>(&FetchOptions::new(
///         "https://api.github.com/repos/yewstack/yew",
///     ));
///     match state.data() {
///         Some(repo) => html! { <p>{repo["full_name"].to_string()}</p> },
///         None => html! {},
///     }
/// }
/// ```
#[hook]
pub fn use_fetch<T>(options: &FetchOptions) -> FetchState<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let state = use_state(|| FetchState::<T>::Idle);

    let driver = {
        let setter = state.setter();
        use_memo((), move |_| {
            FetchDriver::new(
                get_fetch_client(),
                Callback::from(move |next| setter.set(next)),
            )
        })
    };

    use_effect_with(options.url.clone(), move |url| {
        if let Some(request) = driver.set_url(url) {
            yew::platform::spawn_local(request);
        }
    });

    (*state).clone()
}
