use crate::{
    ProxmoxError,
    tests::{client_without_session, create_authenticated_client},
};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_storages_list_success() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/storage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "storage": "local",
                    "type": "dir",
                    "content": "iso,vztmpl,backup",
                    "shared": 0,
                    "active": 1,
                    "enabled": 1,
                    "path": "/var/lib/vz"
                },
                {
                    "storage": "local-lvm",
                    "type": "lvmthin",
                    "content": "images,rootdir",
                    "shared": 0
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let storages = client.storages().await.unwrap();
    assert_eq!(storages.len(), 2);
    assert_eq!(storages[0].storage, "local");
    assert_eq!(storages[0].storage_type, "dir");
    assert_eq!(storages[0].content, "iso,vztmpl,backup");
    assert!(storages[0].is_active());
    assert!(!storages[0].is_shared());
    assert_eq!(storages[1].storage_type, "lvmthin");
    assert_eq!(storages[1].active, 0);
}

#[tokio::test]
async fn test_storage_content_success() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/storage/local-lvm/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "volid": "local-lvm:vm-100-disk-0",
                    "format": "raw",
                    "size": 34359738368_i64,
                    "used": 1073741824,
                    "vmid": "100",
                    "ctime": 1700000000,
                    "content": "images"
                },
                {
                    "volid": "local:iso/debian-12.iso",
                    "format": "iso",
                    "size": 658505728
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let contents = client.storage_content("pve1", "local-lvm").await.unwrap();
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0].volid, "local-lvm:vm-100-disk-0");
    assert_eq!(contents[0].size, 34359738368);
    assert_eq!(contents[0].vmid, 100);
    assert_eq!(contents[0].ctime, 1700000000);
    assert_eq!(contents[1].format, "iso");
    assert_eq!(contents[1].vmid, 0);
}

#[tokio::test]
async fn test_storages_list_invalid_json() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/storage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&mock_server)
        .await;

    let result = client.storages().await;
    assert!(matches!(result, Err(ProxmoxError::Decode(_))));
}

#[tokio::test]
async fn test_storage_content_rejects_non_numeric_size() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/storage/local/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"volid": "local:iso/a.iso", "size": "big"}]
        })))
        .mount(&mock_server)
        .await;

    let result = client.storage_content("pve1", "local").await;
    assert!(matches!(result, Err(ProxmoxError::Decode(_))));
}

#[tokio::test]
async fn test_storage_content_unknown_storage() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/storage/missing/content"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("storage 'missing' does not exist"),
        )
        .mount(&mock_server)
        .await;

    let result = client.storage_content("pve1", "missing").await;
    assert!(matches!(result, Err(ProxmoxError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_storage_without_session_makes_no_request() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = client_without_session(&dir);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    assert!(matches!(
        client.storages().await,
        Err(ProxmoxError::SessionMissing { .. })
    ));
    assert!(matches!(
        client.storage_content("pve1", "local").await,
        Err(ProxmoxError::SessionMissing { .. })
    ));
}
