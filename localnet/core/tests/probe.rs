use std::time::{Duration, Instant};

use localnet_core::http_probe;
use tokio::{io::AsyncWriteExt as _, net::TcpListener};

const CANNED_RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]";

#[tokio::test]
async fn probe_succeeds_against_local_http_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("local addr").port();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let _ = stream.write_all(CANNED_RESPONSE).await;
            let _ = stream.shutdown().await;
        }
    });

    http_probe::wait_for_mirror_node(
        "127.0.0.1",
        port,
        Duration::from_secs(10),
        Duration::from_millis(50),
    )
    .await
    .expect("listener should be reported ready");
}

#[tokio::test]
async fn probe_fails_within_bound_for_dead_port() {
    // Bind and drop to learn a port that refuses connections.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let bound = Duration::from_secs(2);
    let started = Instant::now();
    let err = http_probe::wait_for_mirror_node(
        "127.0.0.1",
        port,
        bound,
        Duration::from_millis(50),
    )
    .await
    .expect_err("dead port should time out");

    assert_eq!(err.port(), port);
    assert_eq!(err.timeout(), bound);
    assert!(
        started.elapsed() < Duration::from_secs(30),
        "probe must give up near its bound instead of hanging"
    );
}
