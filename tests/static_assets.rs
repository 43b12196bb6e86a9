//! Static asset namespace behavior: serving, misses, traversal.

mod common;

use std::fs;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use chess_gateway::upstream::Subsystems;

/// Lay out the three namespace roots plus a file outside all of them.
fn seed_assets(root: &std::path::Path) {
    fs::create_dir_all(root.join("static/css")).unwrap();
    fs::create_dir_all(root.join("gameon")).unwrap();
    fs::create_dir_all(root.join("transient")).unwrap();
    fs::write(root.join("static/css/app.css"), "body{}").unwrap();
    fs::write(root.join("gameon/engine.js"), "// engine").unwrap();
    fs::write(root.join("transient/replay.json"), "{}").unwrap();
    fs::write(root.join("secret.txt"), "do not serve").unwrap();
}

#[tokio::test]
async fn each_namespace_serves_its_own_root() {
    let assets = tempfile::tempdir().unwrap();
    seed_assets(assets.path());
    let (addr, _shutdown) =
        common::spawn_gateway(common::test_config(assets.path()), Subsystems::detached()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/static/css/app.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "body{}");

    let res = client
        .get(format!("http://{addr}/gameon/static/engine.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let res = client
        .get(format!("http://{addr}/transient/replay.json"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn missing_files_are_not_found_with_no_fallback() {
    let assets = tempfile::tempdir().unwrap();
    seed_assets(assets.path());
    let (addr, _shutdown) =
        common::spawn_gateway(common::test_config(assets.path()), Subsystems::detached()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{addr}/static/css/missing.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn namespaces_do_not_leak_into_each_other() {
    let assets = tempfile::tempdir().unwrap();
    seed_assets(assets.path());
    let (addr, _shutdown) =
        common::spawn_gateway(common::test_config(assets.path()), Subsystems::detached()).await;
    let client = common::client();

    // engine.js lives in the game namespace only.
    let res = client
        .get(format!("http://{addr}/static/engine.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn traversal_cannot_escape_a_namespace_root() {
    let assets = tempfile::tempdir().unwrap();
    seed_assets(assets.path());
    let (addr, _shutdown) =
        common::spawn_gateway(common::test_config(assets.path()), Subsystems::detached()).await;

    // A raw socket keeps the ../ segments that an HTTP client would
    // normalize away before sending.
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "GET /static/../secret.txt HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(
        !response.contains("do not serve"),
        "traversal escaped the namespace root"
    );
}
