use crate::{
    ProxmoxError,
    tests::{TEST_TICKET_COOKIE, client_without_session, create_authenticated_client},
};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn test_nodes_list_success() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .and(header("Cookie", TEST_TICKET_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "node": "pve1",
                    "status": "online",
                    "cpu": 0.15,
                    "maxcpu": 8,
                    "mem": 8589934592_i64,
                    "maxmem": 17179869184_i64,
                    "uptime": 1234567,
                    "level": "c",
                    "id": "node/pve1",
                    "ssl_fingerprint": "AA:BB:CC:DD:EE:FF"
                },
                {
                    "node": "pve2",
                    "status": "offline",
                    "maxcpu": 16,
                    "id": "node/pve2"
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let nodes = client.nodes().await.unwrap();
    assert_eq!(nodes.len(), 2);

    let node1 = &nodes[0];
    assert_eq!(node1.node, "pve1");
    assert_eq!(node1.status, "online");
    assert_eq!(node1.cpu, 0.15);
    assert_eq!(node1.maxcpu, 8);
    assert_eq!(node1.mem, 8589934592);
    assert_eq!(node1.maxmem, 17179869184);
    assert_eq!(node1.uptime, 1234567);
    assert_eq!(node1.level, "c");

    // Absent fields decode to zero values.
    let node2 = &nodes[1];
    assert_eq!(node2.node, "pve2");
    assert_eq!(node2.cpu, 0.0);
    assert_eq!(node2.mem, 0);
    assert_eq!(node2.uptime, 0);
    assert_eq!(node2.level, "");
}

#[tokio::test]
async fn test_nodes_list_invalid_json() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
        .mount(&mock_server)
        .await;

    let result = client.nodes().await;
    assert!(matches!(result, Err(ProxmoxError::Decode(_))));
}

#[tokio::test]
async fn test_nodes_list_wrong_envelope() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"node": "pve1"}])),
        )
        .mount(&mock_server)
        .await;

    let result = client.nodes().await;
    assert!(matches!(result, Err(ProxmoxError::Decode(_))));
}

#[tokio::test]
async fn test_nodes_list_api_error() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(401).set_body_string("authentication failure"))
        .mount(&mock_server)
        .await;

    match client.nodes().await {
        Err(ProxmoxError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "authentication failure");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_nodes_without_session_makes_no_request() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = client_without_session(&dir);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client.nodes().await;
    assert!(matches!(result, Err(ProxmoxError::SessionMissing { .. })));
    assert!(client.session_path().exists());
}

#[tokio::test]
async fn test_node_lookup_by_name() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"node": "pve1", "status": "online"},
                {"node": "pve2", "status": "online"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let node = client.node("pve2").await.unwrap();
    assert_eq!(node.node, "pve2");

    let missing = client.node("pve9").await;
    assert!(matches!(missing, Err(ProxmoxError::NotFound(msg)) if msg.contains("pve9")));
}

#[tokio::test]
async fn test_node_status_success() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "cpu": 0.05,
                "wait": 0.001,
                "uptime": 86400,
                "loadavg": ["0.12", "0.08", "0.05"],
                "kversion": "Linux 6.8.12-4-pve #1 SMP PREEMPT_DYNAMIC",
                "pveversion": "pve-manager/8.3.0/abc",
                "cpuinfo": {
                    "cpus": 8,
                    "model": "Intel(R) Xeon(R) CPU E5-2680 v4",
                    "sockets": 1,
                    "mhz": "2400.000"
                },
                "memory": {"used": 4294967296_i64, "total": 17179869184_i64, "free": 12884901888_i64},
                "swap": {"used": 0, "total": 8589934592_i64, "free": 8589934592_i64},
                "rootfs": {"used": 10737418240_i64, "total": 107374182400_i64, "avail": 96636764160_i64},
                "ksm": {"shared": 0}
            }
        })))
        .mount(&mock_server)
        .await;

    let status = client.node_status("pve1").await.unwrap();
    assert_eq!(status.cpu, 0.05);
    assert_eq!(status.uptime, 86400);
    assert_eq!(status.loadavg, vec![0.12, 0.08, 0.05]);
    assert_eq!(status.cpuinfo.cpus, 8);
    assert_eq!(status.cpuinfo.model, "Intel(R) Xeon(R) CPU E5-2680 v4");
    assert_eq!(status.memory.total, 17179869184);
    assert_eq!(status.swap.used, 0);
    assert_eq!(status.rootfs.avail, 96636764160);
    assert_eq!(status.pveversion, "pve-manager/8.3.0/abc");
}

#[tokio::test]
async fn test_node_version_success() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"version": "8.3.0", "release": "8.3", "repoid": "c1689ccb1065a83b"}
        })))
        .mount(&mock_server)
        .await;

    let version = client.node_version("pve1").await.unwrap();
    assert_eq!(version.version, "8.3.0");
    assert_eq!(version.release, "8.3");
    assert_eq!(version.repoid, "c1689ccb1065a83b");
}
