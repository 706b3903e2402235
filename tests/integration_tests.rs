//! Integration tests for the silly walks client.
//!
//! These run the real `HttpTransport` against a local mockito server.

use std::time::Duration;

use sillywalks::{Error, SillyWalksClient, TransportError, WalksConfig};

const WALKS: &str = r#"[{"name": "unsilly", "silliness":0}, {"name": "very silly", "silliness": 9}]"#;

/// Build a client pointed at the mock server's `/walks`.
fn client_for(server: &mockito::Server) -> SillyWalksClient {
    let config = WalksConfig::default()
        .with_walks_url(&format!("{}/walks", server.url()))
        .with_timeout(Duration::from_secs(5));
    SillyWalksClient::new(config).expect("Client creation should succeed")
}

mod list_walks {
    use super::*;

    #[test]
    fn test_returns_only_silly_walks() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/walks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(WALKS)
            .create();

        let walks = client_for(&server)
            .walks()
            .list_walks()
            .expect("list_walks should succeed");

        mock.assert();
        let rendered: Vec<String> = walks.iter().map(ToString::to_string).collect();
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("very silly"));
        assert!(!rendered[0].contains("unsilly"));
    }

    #[test]
    fn test_empty_list() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/walks").with_status(200).with_body("[]").create();

        let walks = client_for(&server).walks().list_walks().expect("list_walks should succeed");

        mock.assert();
        assert!(walks.is_empty());
    }

    #[test]
    fn test_extra_fields_survive() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/walks")
            .with_status(200)
            .with_body(r#"[{"name": "gambol", "silliness": 11, "minister": "Teabag"}]"#)
            .create();

        let walks = client_for(&server).walks().list_walks().expect("list_walks should succeed");

        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].extra["minister"], "Teabag");
        assert!(walks[0].to_string().contains("Teabag"));
    }

    #[test]
    fn test_one_request_per_call() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/walks")
            .with_status(200)
            .with_body(WALKS)
            .expect(2)
            .create();
        let client = client_for(&server);

        let first = client.walks().list_walks().expect("first call should succeed");
        let second = client.walks().list_walks().expect("second call should succeed");

        mock.assert();
        assert_eq!(first, second);
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_malformed_body_is_parse_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/walks")
            .with_status(200)
            .with_body("<html>Out of cheese</html>")
            .create();

        let error = client_for(&server).walks().list_walks().unwrap_err();

        assert!(error.is_parse(), "unexpected error: {error}");
    }

    #[test]
    fn test_server_error_is_transport_status() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/walks").with_status(503).create();

        let error = client_for(&server).walks().list_walks().unwrap_err();

        match error {
            Error::Transport(TransportError::Status { status, url }) => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/walks"));
            }
            other => panic!("Expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_is_not_retried() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/walks").with_status(404).expect(1).create();

        let error = client_for(&server).walks().list_walks().unwrap_err();

        mock.assert();
        assert!(error.is_transport());
    }

    #[test]
    fn test_unreachable_host_is_connection_error() {
        let config = WalksConfig::default()
            .with_walks_url("http://127.0.0.1:1/walks")
            .with_timeout(Duration::from_secs(5));
        let client = SillyWalksClient::new(config).expect("Client creation should succeed");

        let error = client.walks().list_walks().unwrap_err();

        assert!(matches!(error, Error::Transport(TransportError::Connection(_))));
    }
}
