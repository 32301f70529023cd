use std::process::Output;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// Grab an ephemeral port that nothing listens on once we return.
#[allow(dead_code)]
pub fn reserve_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().unwrap().port()
}

// Run the built binary against host:port and wait for it to exit, capturing
// stdout and stderr.
#[allow(dead_code)]
pub async fn run_linecat(host: &str, port: u16) -> Output {
    let exe = env!("CARGO_BIN_EXE_linecat");

    tokio::process::Command::new(exe)
        .arg(host)
        .arg(port.to_string())
        .output()
        .await
        .expect("run linecat")
}

#[allow(dead_code)]
pub async fn bind_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

// One-shot server: accept a single client, read its request line, send
// `body`, close. Resolves to the bytes the client sent.
#[allow(dead_code)]
pub fn oneshot_server(listener: TcpListener, body: Vec<u8>) -> JoinHandle<Vec<u8>> {
    tokio::spawn(async move {
        let (mut peer, _) = listener.accept().await.expect("accept");

        let mut request = Vec::new();
        let mut chunk = [0u8; 256];
        loop {
            let n = peer.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.ends_with(b"\r\n") {
                break;
            }
        }

        peer.write_all(&body).await.expect("send body");
        request
    })
}
