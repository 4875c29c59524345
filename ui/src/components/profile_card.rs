use payloads::GithubUser;
use yew::prelude::*;

use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    /// Where the profile is being fetched from, shown while loading.
    pub url: AttrValue,
    pub state: FetchState<GithubUser>,
}

/// Renders a fetched GitHub profile, or whichever of loading / error /
/// no data applies instead. Missing name or bio render as empty text.
#[function_component]
pub fn ProfileCard(props: &ProfileCardProps) -> Html {
    match &props.state {
        FetchState::Loading => html! {
            <div class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                {format!("loading from {}", props.url)}
            </div>
        },
        FetchState::Failure(error) => html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 text-sm \
                        text-red-700 dark:text-red-400">
                {format!("error: {error}")}
            </div>
        },
        FetchState::Idle => html! {
            <div class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                {"no data"}
            </div>
        },
        FetchState::Success(user) => html! {
            <div class="space-y-2">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {user.name_or_empty().to_owned()}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {user.bio_or_empty().to_owned()}
                </p>
            </div>
        },
    }
}
