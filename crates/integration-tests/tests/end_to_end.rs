//! Full wiring against a mock HTTP backend: real adapters, real services,
//! real validation — only the server is fake.

use std::sync::Arc;
use std::time::Duration;

use domains::{CmsGateway, MediaProbe, MessageDraft};
use gateway_adapters::{HttpMediaProbe, RestCmsGateway};
use mockito::Matcher;
use services::{Catalog, DraftValidator, MediaRules, MessageService};
use url::Url;

fn rules() -> MediaRules {
    MediaRules {
        allowed_image_formats: vec!["image/png".into(), "image/jpeg".into()],
        allowed_video_formats: vec!["video/mp4".into()],
        max_image_size_mb: 5,
        probe: true,
    }
}

fn client(server: &mockito::ServerGuard) -> (MessageService, Arc<Catalog>) {
    let base = Url::parse(&server.url()).unwrap();
    let timeout = Duration::from_secs(5);
    let gateway: Arc<dyn CmsGateway> =
        Arc::new(RestCmsGateway::new(base, timeout).unwrap());
    let probe: Arc<dyn MediaProbe> = Arc::new(HttpMediaProbe::new(timeout).unwrap());
    let catalog = Arc::new(Catalog::new());
    let service = MessageService::new(
        gateway,
        DraftValidator::new(rules(), probe),
        Arc::clone(&catalog),
    );
    (service, catalog)
}

#[tokio::test]
async fn create_probes_the_thumbnail_submits_and_refreshes_once() {
    let mut server = mockito::Server::new_async().await;

    let probe_mock = server
        .mock("GET", "/cover.png")
        .with_header("content-type", "image/png")
        .with_body(vec![0u8; 512])
        .expect(1)
        .create_async()
        .await;
    let post_mock = server
        .mock("POST", "/messages")
        .match_body(Matcher::PartialJson(serde_json::json!({"title": "Launch"})))
        .with_status(201)
        .with_body(r#"{"msg": "Message added successfully: Launch"}"#)
        .expect(1)
        .create_async()
        .await;
    let refresh_mock = server
        .mock("GET", "/messages")
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data": [{"id": 1, "title": "Launch", "description": "body",
                "thumbnail": "x", "tags": ["press"]}]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let (service, catalog) = client(&server);
    let draft = MessageDraft {
        title: "Launch".into(),
        description: "body".into(),
        thumbnail: Some(format!("{}/cover.png", server.url())),
        tags: vec!["press".into()],
        ..MessageDraft::default()
    };
    service.create(draft).await.unwrap();

    probe_mock.assert_async().await;
    post_mock.assert_async().await;
    refresh_mock.assert_async().await;
    assert_eq!(catalog.messages().await[0].title, "Launch");
}

#[tokio::test]
async fn syntactically_invalid_thumbnail_generates_no_traffic_at_all() {
    let mut server = mockito::Server::new_async().await;
    let any_get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (service, catalog) = client(&server);
    let draft = MessageDraft {
        title: "Launch".into(),
        description: "body".into(),
        thumbnail: Some("not a url".into()),
        ..MessageDraft::default()
    };
    service.create(draft).await.unwrap_err();

    any_get.assert_async().await;
    any_post.assert_async().await;
    assert!(catalog.messages().await.is_empty());
}

#[tokio::test]
async fn tag_filtering_the_cached_list_returns_the_intersecting_subset() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/messages")
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data": [
                {"id": 1, "title": "A", "description": "a", "thumbnail": null, "tags": ["rust", "news"]},
                {"id": 2, "title": "B", "description": "b", "thumbnail": null, "tags": ["video"]},
                {"id": 3, "title": "C", "description": "c", "thumbnail": null, "tags": []}
            ]}"#,
        )
        .create_async()
        .await;

    let (service, catalog) = client(&server);
    service.refresh().await.unwrap();

    let hits = catalog.filter_by_tags(&["news".to_string()]).await;
    assert_eq!(hits.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1]);
    assert!(catalog.filter_by_tags(&[]).await.is_empty());
}
