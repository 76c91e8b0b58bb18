//! Integration tests for the Helius fetcher against a local stand-in server
//!
//! Each test binds a local HTTP responder on 127.0.0.1, points the fetcher
//! at it through `HELIUS_API_URL`, and checks both the request that arrived and
//! how the response was classified.

#[cfg(test)]
mod helius_fetcher_tests {
    use solparse::{
        config::Config,
        fetcher::{HeliusFetcher, TransactionSource},
        get_transaction_summary, SummaryError,
    };
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::{Duration, Instant},
    };
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::oneshot,
    };

    const SIGNATURE: &str =
        "4jzQxVTaJ4Fe4Fct9y1aaT9hmVyEjpCqE2bL8JMnuLZbzHZwaL4kZZvNEZ6bEj6fGmiAdCPjmNQHCf8v994PAgDf";

    const RECORD: &str = r#"[{
        "signature": "4jzQxVTaJ4Fe4Fct9y1aaT9hmVyEjpCqE2bL8JMnuLZbzHZwaL4kZZvNEZ6bEj6fGmiAdCPjmNQHCf8v994PAgDf",
        "timestamp": 1700000000,
        "fee": 5000,
        "feePayer": "8cRrU1NzNpjL3k2BwjW3VixAcX6VFc29KHr4KZg8cs2Y",
        "nativeTransfers": [
            {"fromUserAccount": "8cRrU1NzNpjL3k2BwjW3VixAcX6VFc29KHr4KZg8cs2Y", "toUserAccount": "2uySTNgvGT2kwqpfgLiSgeBLR3wQyye1i1A2iQWoPiFr", "amount": 250000000}
        ],
        "tokenTransfers": [
            {"mint": "So11111111111111111111111111111111111111112", "tokenAmount": 0.25, "fromUserAccount": "8cRrU1NzNpjL3k2BwjW3VixAcX6VFc29KHr4KZg8cs2Y", "toUserAccount": "2uySTNgvGT2kwqpfgLiSgeBLR3wQyye1i1A2iQWoPiFr", "fromTokenAccount": "a1", "toTokenAccount": "b1"},
            {"mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "tokenAmount": 12.5, "fromUserAccount": "2uySTNgvGT2kwqpfgLiSgeBLR3wQyye1i1A2iQWoPiFr", "toUserAccount": "8cRrU1NzNpjL3k2BwjW3VixAcX6VFc29KHr4KZg8cs2Y", "fromTokenAccount": "a2", "toTokenAccount": "b2"}
        ]
    }]"#;

    /// Answer every connection with the given status line and body.
    /// Resolves to the raw text of the first request; the counter tracks how
    /// many connections were accepted, so a retry shows up as a second one.
    async fn serve_json(
        status: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        let accepted = Arc::new(AtomicUsize::new(0));
        let accepted_clone = accepted.clone();

        tokio::spawn(async move {
            let mut first_request = Some(tx);
            while let Ok((mut socket, _)) = listener.accept().await {
                accepted_clone.fetch_add(1, Ordering::SeqCst);
                let request = read_request(&mut socket).await;

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.ok();
                socket.shutdown().await.ok();
                if let Some(tx) = first_request.take() {
                    let _ = tx.send(request);
                }
            }
        });

        (format!("http://{}/v0/transactions", addr), rx, accepted)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&buf).into_owned()
    }

    fn config_for(api_url: String) -> Config {
        config_with_timeout(api_url, "5")
    }

    fn config_with_timeout(api_url: String, timeout_secs: &'static str) -> Config {
        Config::from_lookup(move |key| match key {
            "HELIUS_API_KEY" => Some("test-key".to_string()),
            "HELIUS_API_URL" => Some(api_url.clone()),
            "REQUEST_TIMEOUT_SECS" => Some(timeout_secs.to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_single_post_with_key_and_body() {
        let (url, request_rx, _accepted) = serve_json("200 OK", RECORD).await;
        let fetcher = HeliusFetcher::new(&config_for(url)).unwrap();

        let raw = fetcher.fetch(SIGNATURE).await.unwrap();
        assert_eq!(raw.fee, 5000);
        assert_eq!(raw.token_transfers.len(), 2);

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("POST /v0/transactions?api-key=test-key HTTP/1.1"));
        assert!(request.contains(&format!(r#"{{"transactions":["{}"]}}"#, SIGNATURE)));
    }

    #[tokio::test]
    async fn test_summary_end_to_end() {
        let (url, _request_rx, _accepted) = serve_json("200 OK", RECORD).await;
        let fetcher = HeliusFetcher::new(&config_for(url)).unwrap();

        let summary = get_transaction_summary(&fetcher, SIGNATURE).await.unwrap();

        assert_eq!(summary.fee_decimal, 0.000005);
        assert_eq!(summary.native_transfers[0].amount, 0.25);
        assert_eq!(summary.token_transfers.len(), 1);
        assert_eq!(summary.token_transfers[0].mint, "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
        assert_eq!(summary.token_transfers[0].amount, 12.5);
    }

    #[tokio::test]
    async fn test_empty_array_is_fetch_error() {
        let (url, _request_rx, _accepted) = serve_json("200 OK", "[]").await;
        let fetcher = HeliusFetcher::new(&config_for(url)).unwrap();

        let result = get_transaction_summary(&fetcher, SIGNATURE).await;
        assert!(matches!(result, Err(SummaryError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_error_status_is_fetch_error() {
        let (url, _request_rx, accepted) =
            serve_json("401 Unauthorized", r#"{"error":"invalid api key provided"}"#).await;
        let fetcher = HeliusFetcher::new(&config_for(url)).unwrap();

        let err = fetcher.fetch(SIGNATURE).await.unwrap_err();
        match err {
            SummaryError::Fetch(e) => assert!(e.reason().contains("401")),
            other => panic!("expected fetch error, got {:?}", other),
        }

        // Give a retry, if any, time to connect
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(accepted.load(Ordering::SeqCst), 1, "failed lookup must not be retried");
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_error() {
        let (url, _request_rx, _accepted) = serve_json("200 OK", "[{\"timestamp\": 17").await;
        let fetcher = HeliusFetcher::new(&config_for(url)).unwrap();

        assert!(matches!(fetcher.fetch(SIGNATURE).await, Err(SummaryError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        // Bind then drop to get a port nobody is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = HeliusFetcher::new(&config_for(format!("http://{}/v0/transactions", addr))).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(10), fetcher.fetch(SIGNATURE))
            .await
            .unwrap();
        assert!(matches!(result, Err(SummaryError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_blank_id_makes_no_request() {
        // Nothing listens here; a request would be a fetch error, not invalid input
        let fetcher = HeliusFetcher::new(&config_for("http://127.0.0.1:9/v0/transactions".to_string())).unwrap();

        let result = fetcher.fetch("   ").await;
        assert!(matches!(result, Err(SummaryError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_timeout_is_fetch_error() {
        // Accept the connection, then never answer
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let fetcher = HeliusFetcher::new(&config_with_timeout(
            format!("http://{}/v0/transactions", addr),
            "1",
        ))
        .unwrap();

        let started = Instant::now();
        let result = tokio::time::timeout(Duration::from_secs(5), fetcher.fetch(SIGNATURE))
            .await
            .expect("request deadline did not fire");

        assert!(matches!(result, Err(SummaryError::Fetch(_))));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_not_sent() {
        let (url, request_rx, accepted) = serve_json("200 OK", RECORD).await;
        let fetcher = HeliusFetcher::new(&config_for(url)).unwrap();

        let padded = format!("  {}\n", SIGNATURE);
        get_transaction_summary(&fetcher, &padded).await.unwrap();

        let request = request_rx.await.unwrap();
        assert!(request.contains(&format!(r#"{{"transactions":["{}"]}}"#, SIGNATURE)));
        assert_eq!(accepted.load(Ordering::SeqCst), 1);
    }
}
