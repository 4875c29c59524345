use payloads::GithubUser;
use yew::prelude::*;

use crate::components::ProfileCard;
use crate::hooks::{FetchOptions, use_fetch};
use crate::profile_url;

fn default_url() -> AttrValue {
    AttrValue::from(profile_url())
}

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    #[prop_or_else(default_url)]
    pub url: AttrValue,
}

#[function_component]
pub fn ProfilePage(props: &ProfilePageProps) -> Html {
    let state = use_fetch::<GithubUser>(&FetchOptions::new(props.url.clone()));

    html! {
        <ProfileCard url={props.url.clone()} {state} />
    }
}
