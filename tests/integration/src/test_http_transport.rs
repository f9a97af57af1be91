//! HTTP transport tests against a local wiremock server.

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use ebaylink_core::config::ConnectorConfig;
    use ebaylink_core::normalize::ListingNormalizer;
    use ebaylink_core::transport::{HttpTransport, TransportClient, TransportError};
    use ebaylink_core::writer::{BatchWriter, WriteError};
    use ebaylink_model::{Credentials, Value};

    use crate::{error_response, init_tracing, sample_defaults, sample_listing, success_response};

    fn test_config() -> ConnectorConfig {
        ConnectorConfig {
            dev_id: "dev-key".to_owned(),
            app_id: "app-key".to_owned(),
            cert_id: "cert-key".to_owned(),
            auth_token: "auth-token".to_owned(),
            site_id: 0,
            ..ConnectorConfig::default()
        }
    }

    fn mock_transport(server: &MockServer) -> HttpTransport {
        HttpTransport::new(&test_config()).with_endpoint(format!("{}/ws/api.dll", server.uri()))
    }

    #[tokio::test]
    async fn test_should_post_with_trading_api_headers() {
        init_tracing();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ws/api.dll"))
            .and(header("X-EBAY-API-CALL-NAME", "AddItems"))
            .and(header("X-EBAY-API-DEV-NAME", "dev-key"))
            .and(header("X-EBAY-API-APP-NAME", "app-key"))
            .and(header("X-EBAY-API-CERT-NAME", "cert-key"))
            .and(header("X-EBAY-API-SITEID", "0"))
            .and(header("X-EBAY-API-COMPATIBILITY-LEVEL", "971"))
            .and(body_string_contains("<AddItemsRequest"))
            .respond_with(ResponseTemplate::new(200).set_body_string(success_response()))
            .expect(1)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let response = transport
            .send("<AddItemsRequest/>", "AddItems")
            .await
            .unwrap();

        assert!(response.contains("<Ack>Success</Ack>"));
    }

    #[tokio::test]
    async fn test_should_fail_on_http_error_status() {
        init_tracing();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let err = transport
            .send("<AddItemsRequest/>", "AddItems")
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn test_should_run_batch_write_over_http() {
        init_tracing();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("X-EBAY-API-CALL-NAME", "AddItems"))
            .respond_with(ResponseTemplate::new(200).set_body_string(success_response()))
            .expect(2)
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let normalizer = ListingNormalizer::new(sample_defaults());
        let writer = BatchWriter::new(&transport).with_normalizer(&normalizer);

        let items: Vec<Value> = (0..7).map(|n| Value::record(sample_listing(n))).collect();
        let summary = writer
            .submit(&items, &Credentials::new("auth-token"))
            .await
            .unwrap();

        assert_eq!(summary.submitted, 7);
        assert_eq!(summary.envelopes, 2);
    }

    #[tokio::test]
    async fn test_should_surface_remote_rejection_over_http() {
        init_tracing();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(error_response("Bad SKU")))
            .mount(&server)
            .await;

        let transport = mock_transport(&server);
        let normalizer = ListingNormalizer::new(sample_defaults());
        let writer = BatchWriter::new(&transport).with_normalizer(&normalizer);

        let items = vec![Value::record(sample_listing(1))];
        let err = writer
            .submit(&items, &Credentials::new("auth-token"))
            .await
            .unwrap_err();

        let WriteError::Remote { messages } = err else {
            panic!("expected a remote failure");
        };
        assert_eq!(messages, ["Bad SKU"]);
    }
}
