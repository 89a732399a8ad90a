#![allow(clippy::unwrap_used, reason = "tests can panic on unwrap")]

mod common;

mod house_communications_by_committee {
    use congress_gov_client::types::request::HouseCommunicationsByCommitteeRequest;
    use congress_gov_client::types::response::{
        CommunicationType, HouseCommunication, HouseCommunicationsResponse,
    };
    use congress_gov_client::types::NaiveDate;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn house_communications_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/committee/house/hspw00/house-communication")
                .query_param("format", "json")
                .query_param("offset", "0")
                .query_param("limit", "2");
            then.status(StatusCode::OK).json_body(json!({
                "houseCommunications": [
                    {
                        "chamber": "House",
                        "communicationType": {
                            "code": "EC",
                            "name": "Executive Communication"
                        },
                        "congress": 114,
                        "number": 3262,
                        "referralDate": "2015-10-27",
                        "updateDate": "2018-02-02",
                        "url": "https://api.congress.gov/v3/house-communication/114/ec/3262?format=json"
                    }
                ],
                "pagination": {
                    "count": 408,
                    "next": "https://api.congress.gov/v3/committee/house/hspw00/house-communication?offset=2&limit=2&format=json"
                }
            }));
        });

        let request = HouseCommunicationsByCommitteeRequest::builder()
            .chamber("house")
            .committee_code("hspw00")
            .format("json")
            .offset(0)
            .limit(2)
            .build();
        let response = client
            .house_communications_by_committee_detailed(&request)
            .await?;

        assert_eq!(response.status_code, StatusCode::OK);
        assert!(response.parsed.is_none());

        let body: HouseCommunicationsResponse = response.json()?;
        let expected = HouseCommunication::builder()
            .chamber("House")
            .communication_type(
                CommunicationType::builder()
                    .code("EC")
                    .name("Executive Communication")
                    .build(),
            )
            .congress(114)
            .number(3262)
            .referral_date(NaiveDate::from_ymd_opt(2015, 10, 27).unwrap())
            .update_date(NaiveDate::from_ymd_opt(2018, 2, 2).unwrap())
            .url("https://api.congress.gov/v3/house-communication/114/ec/3262?format=json")
            .build();
        assert_eq!(body.house_communications, vec![expected]);
        assert_eq!(body.pagination.unwrap().count, 408);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn house_communications_bad_request_should_not_raise() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::create_raising(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/committee/house/nope00/house-communication");
            then.status(StatusCode::BAD_REQUEST).json_body(json!({
                "error": "Unknown committee code"
            }));
        });

        let request = HouseCommunicationsByCommitteeRequest::builder()
            .chamber("house")
            .committee_code("nope00")
            .build();
        let response = client
            .house_communications_by_committee_detailed(&request)
            .await?;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert!(response.parsed.is_none());
        assert_eq!(
            response.json::<serde_json::Value>()?,
            json!({ "error": "Unknown committee code" })
        );
        mock.assert();

        Ok(())
    }
}
