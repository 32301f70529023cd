mod support;

#[tokio::test]
async fn refused_connection_exits_nonzero_with_empty_stdout() {
    let port = support::reserve_port();

    let output = support::run_linecat("127.0.0.1", port).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("connect"),
        "diagnostics should mention the connect failure: {stderr}"
    );
}

#[tokio::test]
async fn unresolvable_host_exits_nonzero() {
    // .invalid is reserved and never resolves
    let output = support::run_linecat("no-such-host.invalid", 60000).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
