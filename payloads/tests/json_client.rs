use payloads::{FetchError, GithubUser};
use serde_json::Value;
use test_helpers::{ADA, ADA_BIO, BLANK, closed_port_url, spawn_stub_server};

#[tokio::test]
async fn fetch_user_profile() -> anyhow::Result<()> {
    let server = spawn_stub_server().await;

    let user: GithubUser = server.client.get_json(&server.user_url(ADA)).await?;
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert_eq!(user.bio.as_deref(), Some(ADA_BIO));
    assert_eq!(server.hits(), 1);

    Ok(())
}

#[tokio::test]
async fn empty_object_is_a_blank_profile() -> anyhow::Result<()> {
    let server = spawn_stub_server().await;

    let user: GithubUser =
        server.client.get_json(&server.user_url(BLANK)).await?;
    assert_eq!(user, GithubUser::default());

    Ok(())
}

#[tokio::test]
async fn empty_url_makes_no_request() {
    let server = spawn_stub_server().await;

    let result = server.client.get_json::<GithubUser>("").await;
    match result {
        Err(FetchError::MissingUrl) => {}
        _ => panic!("Expected MissingUrl"),
    }
    assert_eq!(
        FetchError::MissingUrl.to_string(),
        "No url provided",
    );
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = spawn_stub_server().await;

    let result = server
        .client
        .get_json::<GithubUser>(&server.url("/not-json"))
        .await;
    match result {
        Err(FetchError::Decode(_)) => {}
        other => panic!("Expected Decode error, got {:?}", other.map(|_| ())),
    }
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn status_is_not_checked() -> anyhow::Result<()> {
    let server = spawn_stub_server().await;

    // A 404 with a JSON body decodes like any other response
    let body: Value =
        server.client.get_json(&server.user_url("nobody")).await?;
    assert_eq!(body["message"], "Not Found");

    let user: GithubUser =
        server.client.get_json(&server.user_url("nobody")).await?;
    assert_eq!(user, GithubUser::default());

    Ok(())
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() -> anyhow::Result<()> {
    let server = spawn_stub_server().await;

    let result = server
        .client
        .get_json::<GithubUser>(&closed_port_url()?)
        .await;
    match result {
        Err(e @ FetchError::Network(_)) => {
            assert!(e.to_string().starts_with("Network error"));
        }
        other => panic!("Expected Network error, got {:?}", other.map(|_| ())),
    }

    Ok(())
}
