#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use dashboard::{AdminClient, Browser};
use s3_connection::ConnectionConfig;
use tokio::net::TcpListener;

pub const ADMIN_TOKEN: &str = "test-admin-token";

pub const METRICS: &str = "\
# TYPE cluster_connected_nodes gauge
cluster_connected_nodes 2
garage_data_dir_used_space_bytes{volume=\"/data\"} 2147483648
";

const LIST_BUCKETS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Owner><ID>GK31c2f218a2e44f485b94239e</ID><DisplayName>garage</DisplayName></Owner>
  <Buckets>
    <Bucket><Name>media</Name><CreationDate>2024-01-02T03:04:05.000Z</CreationDate></Bucket>
    <Bucket><Name>scratch</Name><CreationDate>2024-03-04T05:06:07.000Z</CreationDate></Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;

const LIST_MEDIA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>media</Name>
  <Prefix></Prefix>
  <KeyCount>2</KeyCount>
  <MaxKeys>1000</MaxKeys>
  <IsTruncated>false</IsTruncated>
  <Contents>
    <Key>photos/cat.jpg</Key>
    <LastModified>2024-02-03T04:05:06.000Z</LastModified>
    <ETag>"3858f62230ac3c915f300c664312c11f"</ETag>
    <Size>3584</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
  <Contents>
    <Key>readme.txt</Key>
    <LastModified>2024-02-03T04:05:07.000Z</LastModified>
    <ETag>"9a0364b9e99bb480dd25e1f0284c8555"</ETag>
    <Size>12</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
</ListBucketResult>"#;

const LIST_SCRATCH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>scratch</Name>
  <Prefix></Prefix>
  <KeyCount>0</KeyCount>
  <MaxKeys>1000</MaxKeys>
  <IsTruncated>false</IsTruncated>
</ListBucketResult>"#;

const NO_SUCH_BUCKET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchBucket</Code><Message>Bucket not found</Message><Resource>/missing</Resource><RequestId>1</RequestId></Error>"#;

fn xml(status: StatusCode, body: &'static str) -> impl IntoResponse {
    (status, [(header::CONTENT_TYPE, "application/xml")], body)
}

async fn list_buckets() -> impl IntoResponse {
    xml(StatusCode::OK, LIST_BUCKETS)
}

async fn list_objects(Path(bucket): Path<String>) -> impl IntoResponse {
    match bucket.as_str() {
        "media" => xml(StatusCode::OK, LIST_MEDIA),
        "scratch" => xml(StatusCode::OK, LIST_SCRATCH),
        _ => xml(StatusCode::NOT_FOUND, NO_SUCH_BUCKET),
    }
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn metrics(headers: HeaderMap) -> impl IntoResponse {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {ADMIN_TOKEN}").as_str());

    if authorized {
        (StatusCode::OK, METRICS)
    } else {
        (StatusCode::FORBIDDEN, "")
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{addr}")
}

/// Fake Garage admin API
pub async fn spawn_admin_api() -> String {
    serve(
        Router::new()
            .route("/health", get(health))
            .route("/metrics", get(metrics)),
    )
    .await
}

/// Fake path-style S3 API that answers bucket and object listings
pub async fn spawn_s3_api() -> String {
    serve(
        Router::new()
            .route("/", get(list_buckets))
            .route("/{bucket}", get(list_objects))
            // Path-style listings are requested as `/{bucket}/?list-type=2`
            .route("/{bucket}/", get(list_objects)),
    )
    .await
}

/// Base URL of a port nothing listens on
pub async fn unused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

pub fn admin_client(endpoint: &str) -> AdminClient {
    AdminClient::new(endpoint).expect("Failed to create admin client")
}

pub async fn browser(endpoint: &str) -> Browser {
    let config = ConnectionConfig::new(
        endpoint,
        "garage",
        "GK31c2f218a2e44f485b94239e",
        "b892c0665f0ada8a4755dae98baa3b13",
    )
    .expect("valid test credentials");

    Browser::new(Arc::new(config.s3_client().await))
}
