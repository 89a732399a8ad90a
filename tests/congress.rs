#![allow(clippy::unwrap_used, reason = "tests can panic on unwrap")]

mod common;

mod current_congress {
    use congress_gov_client::types::request::CurrentCongressRequest;
    use congress_gov_client::types::response::CurrentCongressResponse;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    fn body() -> serde_json::Value {
        json!({
            "congress": {
                "endYear": "2024",
                "name": "118th Congress",
                "number": 118,
                "sessions": [
                    {
                        "chamber": "House of Representatives",
                        "endDate": "2024-01-03",
                        "number": 1,
                        "startDate": "2023-01-03",
                        "type": "R"
                    },
                    {
                        "chamber": "Senate",
                        "number": 2,
                        "startDate": "2024-01-03",
                        "type": "R"
                    }
                ],
                "startYear": "2023",
                "updateDate": "2023-01-03T17:43:32Z",
                "url": "https://api.congress.gov/v3/congress/current?format=json"
            },
            "request": { "contentType": "application/json", "format": "json" }
        })
    }

    #[tokio::test]
    async fn current_congress_detailed_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/congress/current")
                .query_param("format", "json");
            then.status(StatusCode::OK)
                .header(common::RATE_LIMIT_HEADER, "4999")
                .json_body(body());
        });

        let request = CurrentCongressRequest::builder().format("json").build();
        let response = client.current_congress_detailed(&request).await?;

        assert_eq!(response.status_code, StatusCode::OK);
        assert!(response.parsed.is_none());
        assert_eq!(response.headers[common::RATE_LIMIT_HEADER], "4999");
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&response.content)?,
            body()
        );

        let current: CurrentCongressResponse = response.json()?;
        assert_eq!(current.congress.number, 118);
        assert_eq!(current.congress.name, "118th Congress");
        assert_eq!(current.congress.sessions.len(), 2);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn current_congress_without_parameters_should_send_empty_query() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/congress/current")
                .query_param_missing("format")
                .query_param_missing("offset")
                .query_param_missing("limit");
            then.status(StatusCode::OK).json_body(body());
        });

        let parsed = client
            .current_congress(&CurrentCongressRequest::default())
            .await?;

        assert!(parsed.is_none());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn current_congress_raw_content_is_unaltered() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create(&server)?;

        let xml = "<api-root><congress><number>118</number></congress></api-root>";
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/congress/current")
                .query_param("format", "xml");
            then.status(StatusCode::OK)
                .header("content-type", "application/xml")
                .body(xml);
        });

        let request = CurrentCongressRequest::builder().format("xml").build();
        let response = client.current_congress_detailed(&request).await?;

        assert_eq!(response.content.as_ref(), xml.as_bytes());
        assert_eq!(response.headers["content-type"], "application/xml");
        response.json::<CurrentCongressResponse>().unwrap_err();
        mock.assert();

        Ok(())
    }
}
