//! End-to-end batch writes: listings through the normalizer, encoder, and
//! writer against a scripted transport.

#[cfg(test)]
mod tests {
    use ebaylink_core::normalize::ListingNormalizer;
    use ebaylink_core::writer::{BatchWriter, WriteError};
    use ebaylink_model::{Credentials, Value};

    use crate::{
        RecordingTransport, error_response, init_tracing, sample_defaults, sample_listing,
        warning_response,
    };

    fn listings(count: usize) -> Vec<Value> {
        (0..count).map(|n| Value::record(sample_listing(n))).collect()
    }

    #[tokio::test]
    async fn test_should_encode_normalized_listings_into_envelope() {
        init_tracing();
        let transport = RecordingTransport::new();
        let normalizer = ListingNormalizer::new(sample_defaults());
        let writer = BatchWriter::new(&transport).with_normalizer(&normalizer);

        writer
            .submit(&listings(2), &Credentials::new("tok"))
            .await
            .unwrap();

        let body = transport.request_body(0);
        assert!(body.contains("<AddItemsRequest xmlns=\"urn:ebay:apis:eBLBaseComponents\">"));
        assert!(body.contains("<Title>Vintage camera #0</Title>"));
        // HTML descriptions ride in CDATA.
        assert!(body.contains("<Description><![CDATA[Working <b>1960s</b> rangefinder, lot 0]]></Description>"));
        assert!(body.contains("<SKU>CAM-000</SKU>"));
        assert!(body.contains("<CategoryMappingAllowed>1</CategoryMappingAllowed>"));
        assert!(body.contains("<PostalCode>95125</PostalCode>"));
        assert!(
            body.contains("<ItemSpecifics><NameValueList><Name>Brand</Name><Value>Canonet</Value></NameValueList></ItemSpecifics>")
        );
        assert!(body.contains("<RequesterCredentials><eBayAuthToken>tok</eBayAuthToken></RequesterCredentials>"));
    }

    #[tokio::test]
    async fn test_should_split_twelve_listings_into_three_envelopes() {
        init_tracing();
        let transport = RecordingTransport::new();
        let normalizer = ListingNormalizer::new(sample_defaults());
        let writer = BatchWriter::new(&transport).with_normalizer(&normalizer);

        let summary = writer
            .submit(&listings(12), &Credentials::new("tok"))
            .await
            .unwrap();

        assert_eq!(summary.submitted, 12);
        assert_eq!(summary.envelopes, 3);
        assert_eq!(transport.request_count(), 3);
        assert_eq!(transport.call_name(0), "AddItems");

        for (index, expected) in [(0_usize, 5_usize), (1, 5), (2, 2)] {
            let body = transport.request_body(index);
            assert_eq!(
                body.matches("<AddItemRequestContainer>").count(),
                expected,
                "envelope {index} should carry {expected} containers"
            );
            assert!(body.contains("<MessageID>1</MessageID>"));
        }
    }

    #[tokio::test]
    async fn test_should_accept_batch_with_warning_response() {
        init_tracing();
        let transport =
            RecordingTransport::with_responses(vec![warning_response("picture quality is low")]);
        let normalizer = ListingNormalizer::new(sample_defaults());
        let writer = BatchWriter::new(&transport).with_normalizer(&normalizer);

        let summary = writer
            .submit(&listings(3), &Credentials::new("tok"))
            .await
            .unwrap();

        assert_eq!(summary.submitted, 3);
    }

    #[tokio::test]
    async fn test_should_fail_batch_with_fatal_response() {
        init_tracing();
        let transport = RecordingTransport::with_responses(vec![error_response("Bad SKU")]);
        let normalizer = ListingNormalizer::new(sample_defaults());
        let writer = BatchWriter::new(&transport).with_normalizer(&normalizer);

        let err = writer
            .submit(&listings(3), &Credentials::new("tok"))
            .await
            .unwrap_err();

        let WriteError::Remote { messages } = err else {
            panic!("expected a remote failure");
        };
        assert_eq!(messages, ["Bad SKU"]);
    }

    #[tokio::test]
    async fn test_should_keep_submitting_after_fatal_chunk() {
        init_tracing();
        let transport = RecordingTransport::with_responses(vec![
            error_response("Bad SKU"),
            warning_response("minor"),
            error_response("Duplicate listing"),
        ]);
        let normalizer = ListingNormalizer::new(sample_defaults());
        let writer = BatchWriter::new(&transport).with_normalizer(&normalizer);

        let err = writer
            .submit(&listings(12), &Credentials::new("tok"))
            .await
            .unwrap_err();

        assert_eq!(transport.request_count(), 3);
        let WriteError::Remote { messages } = err else {
            panic!("expected a remote failure");
        };
        assert_eq!(messages, ["Bad SKU", "Duplicate listing"]);
    }

    #[tokio::test]
    async fn test_should_surface_normalizer_rejection() {
        init_tracing();
        let transport = RecordingTransport::new();
        let normalizer = ListingNormalizer::new(sample_defaults());
        let writer = BatchWriter::new(&transport).with_normalizer(&normalizer);

        let mut untitled = sample_listing(9);
        untitled.title.clear();
        let items = vec![Value::record(untitled)];

        let err = writer
            .submit(&items, &Credentials::new("tok"))
            .await
            .unwrap_err();

        assert!(matches!(err, WriteError::Encode(_)));
        assert!(err.to_string().contains("CAM-009"));
        assert_eq!(transport.request_count(), 0);
    }
}
