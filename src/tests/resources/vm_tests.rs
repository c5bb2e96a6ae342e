use crate::{
    ProxmoxError, VmAction,
    tests::{TEST_CSRF, TEST_TICKET_COOKIE, client_without_session, create_authenticated_client},
};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

const UPID: &str = "UPID:pve1:00001234:00ABCDEF:65A1B2C3:qmstart:100:testuser@pam:";

#[tokio::test]
async fn test_vms_list_success() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu"))
        .and(header("Cookie", TEST_TICKET_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "vmid": 100,
                    "name": "ubuntu-vm",
                    "status": "running",
                    "cpu": 0.23,
                    "cpus": 4,
                    "maxcpu": 4,
                    "mem": 4294967296_i64,
                    "maxmem": 8589934592_i64,
                    "disk": 21474836480_i64,
                    "maxdisk": 42949672960_i64,
                    "uptime": 123456,
                    "node": "pve1",
                    "tags": "ubuntu;production"
                },
                {
                    "vmid": "101",
                    "name": "windows-vm",
                    "status": "stopped",
                    "maxmem": 17179869184_i64
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let vms = client.vms("pve1").await.unwrap();
    assert_eq!(vms.len(), 2);

    let vm1 = &vms[0];
    assert_eq!(vm1.vmid, 100);
    assert_eq!(vm1.name, "ubuntu-vm");
    assert_eq!(vm1.status, "running");
    assert_eq!(vm1.cpu, 0.23);
    assert_eq!(vm1.cpus, 4);
    assert_eq!(vm1.mem, 4294967296);
    assert_eq!(vm1.maxdisk, 42949672960);
    assert_eq!(vm1.uptime, 123456);
    assert_eq!(vm1.node, "pve1");

    let vm2 = &vms[1];
    assert_eq!(vm2.vmid, 101);
    assert_eq!(vm2.status, "stopped");
    assert_eq!(vm2.cpu, 0.0);
    assert_eq!(vm2.uptime, 0);
    assert_eq!(vm2.maxmem, 17179869184);
    assert_eq!(vm2.node, "");
}

#[tokio::test]
async fn test_vms_list_empty() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let vms = client.vms("pve1").await.unwrap();
    assert!(vms.is_empty());
}

#[tokio::test]
async fn test_vm_status_success() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu/100/status/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "vmid": 100,
                "status": "running",
                "name": "ubuntu-vm",
                "cpu": 0.15,
                "cpus": 4,
                "mem": 4294967296_i64,
                "maxmem": 8589934592_i64,
                "uptime": 123456,
                "qmpstatus": "running",
                "balloon": 8589934592_i64,
                "ha": {"managed": 0}
            }
        })))
        .mount(&mock_server)
        .await;

    let status = client.vm_status("pve1", 100).await.unwrap();
    assert_eq!(status.vmid, 100);
    assert_eq!(status.status, "running");
    assert_eq!(status.name, "ubuntu-vm");
    assert_eq!(status.cpu, 0.15);
    assert_eq!(status.cpus, 4);
    assert_eq!(status.maxmem, 8589934592);
    assert_eq!(status.qmpstatus, "running");
}

#[tokio::test]
async fn test_vm_config_success() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu/100/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "name": "ubuntu-vm",
                "memory": "4096",
                "cores": 2,
                "sockets": 1,
                "ostype": "l26",
                "boot": "order=scsi0;net0",
                "scsi0": "local-lvm:vm-100-disk-0,size=32G",
                "digest": "0123abcd"
            }
        })))
        .mount(&mock_server)
        .await;

    let config = client.vm_config("pve1", 100).await.unwrap();
    assert_eq!(config.name, "ubuntu-vm");
    assert_eq!(config.memory, 4096);
    assert_eq!(config.cores, 2);
    assert_eq!(config.sockets, 1);
    assert_eq!(config.ostype, "l26");
    assert_eq!(config.boot, "order=scsi0;net0");
    assert_eq!(config.bootdisk, "");
}

#[tokio::test]
async fn test_start_vm_returns_task_id_unmodified() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("POST"))
        .and(path("/api2/json/nodes/pve1/qemu/100/status/start"))
        .and(header("Cookie", TEST_TICKET_COOKIE))
        .and(header("CSRFPreventionToken", TEST_CSRF))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": UPID
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let task = client.start_vm("pve1", 100).await.unwrap();
    assert_eq!(task, UPID);
}

#[tokio::test]
async fn test_every_power_action_hits_its_route() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    let actions = [
        VmAction::Start,
        VmAction::Stop,
        VmAction::Shutdown,
        VmAction::Reboot,
        VmAction::Reset,
        VmAction::Suspend,
        VmAction::Resume,
    ];
    for action in actions {
        Mock::given(method("POST"))
            .and(path(format!("/api2/json/nodes/pve1/qemu/101/status/{}", action)))
            .and(header("CSRFPreventionToken", TEST_CSRF))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": format!("UPID:pve1:1:2:3:qm{}:101:testuser@pam:", action)
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    assert!(client.start_vm("pve1", 101).await.unwrap().contains("qmstart"));
    assert!(client.stop_vm("pve1", 101).await.unwrap().contains("qmstop"));
    assert!(client.shutdown_vm("pve1", 101).await.unwrap().contains("qmshutdown"));
    assert!(client.reboot_vm("pve1", 101).await.unwrap().contains("qmreboot"));
    assert!(client.reset_vm("pve1", 101).await.unwrap().contains("qmreset"));
    assert!(client.suspend_vm("pve1", 101).await.unwrap().contains("qmsuspend"));
    assert!(client.resume_vm("pve1", 101).await.unwrap().contains("qmresume"));
}

#[tokio::test]
async fn test_delete_vm_sends_csrf_header() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("DELETE"))
        .and(path("/api2/json/nodes/pve1/qemu/100"))
        .and(header("Cookie", TEST_TICKET_COOKIE))
        .and(header("CSRFPreventionToken", TEST_CSRF))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": "UPID:pve1:00001234:00ABCDEF:65A1B2C3:qmdestroy:100:testuser@pam:"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let task = client.delete_vm("pve1", 100).await.unwrap();
    assert_eq!(
        task,
        "UPID:pve1:00001234:00ABCDEF:65A1B2C3:qmdestroy:100:testuser@pam:"
    );
}

#[tokio::test]
async fn test_vm_action_forbidden_is_api_error() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = create_authenticated_client(&mock_server, &dir).await;

    Mock::given(method("POST"))
        .and(path("/api2/json/nodes/pve1/qemu/100/status/stop"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Permission check failed"))
        .mount(&mock_server)
        .await;

    let result = client.stop_vm("pve1", 100).await;
    assert!(matches!(result, Err(ProxmoxError::Api { status: 403, .. })));
}

#[tokio::test]
async fn test_vm_action_without_session_makes_no_request() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let client = client_without_session(&dir);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client.start_vm("pve1", 100).await;
    assert!(matches!(result, Err(ProxmoxError::SessionMissing { .. })));
}
