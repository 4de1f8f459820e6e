//! Address lookup and cost calculation endpoints.

mod common;

use checkout_client::{Calculation, ClientError, PostcodeQuery};
use common::{client, mount_ticket, ticket_requests, API_KEY, TICKET};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_places_sends_ticket_and_returns_suggestions() {
    let server = MockServer::start().await;
    mount_ticket(&server, API_KEY).await;
    Mock::given(method("GET"))
        .and(path("/service/checkout/getPlacesByQuery/"))
        .and(query_param("ticket", TICKET))
        .and(query_param("place", "Test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestions": [{"id": "place-1", "fullName": "г. Тест"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let suggestions = client(&server).get_places("Test").await.unwrap();

    assert_eq!(suggestions, Some(json!([{"id": "place-1", "fullName": "г. Тест"}])));
    assert_eq!(ticket_requests(&server).await, 1);
}

#[tokio::test]
async fn lookups_reuse_one_ticket() {
    let server = MockServer::start().await;
    mount_ticket(&server, API_KEY).await;
    Mock::given(method("GET"))
        .and(path("/service/checkout/getStreetsByQuery/"))
        .and(query_param("placeId", "place-1"))
        .and(query_param("street", "Твер"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"suggestions": ["Тверская"]})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client.get_streets("place-1", "Твер").await.unwrap();
    let streets = client.get_streets("place-1", "Твер").await.unwrap();

    assert_eq!(streets, Some(json!(["Тверская"])));
    assert_eq!(ticket_requests(&server).await, 1);
}

#[tokio::test]
async fn get_postcode_sends_optional_parts_only_when_set() {
    let server = MockServer::start().await;
    mount_ticket(&server, API_KEY).await;
    Mock::given(method("GET"))
        .and(path("/service/checkout/getPostalCodeByAddress/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"postindex": "125009"})))
        .mount(&server)
        .await;

    let query = PostcodeQuery::new("street-9", "12").with_housing("1");
    let postcode = client(&server).get_postcode(&query).await.unwrap();
    assert_eq!(postcode, Some(json!("125009")));

    let requests = server.received_requests().await.unwrap();
    let lookup = requests
        .iter()
        .find(|r| r.url.path() == "/service/checkout/getPostalCodeByAddress/")
        .unwrap();
    let params: Vec<(String, String)> = lookup.url.query_pairs().into_owned().collect();
    assert!(params.contains(&("streetId".to_string(), "street-9".to_string())));
    assert!(params.contains(&("house".to_string(), "12".to_string())));
    assert!(params.contains(&("housing".to_string(), "1".to_string())));
    assert!(!params.iter().any(|(k, _)| k == "building"));
}

#[tokio::test]
async fn missing_sub_field_is_none() {
    let server = MockServer::start().await;
    mount_ticket(&server, API_KEY).await;
    Mock::given(method("GET"))
        .and(path("/service/checkout/getPostalCodeByAddress/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let postcode = client(&server)
        .get_postcode(&PostcodeQuery::new("street-9", "12"))
        .await
        .unwrap();
    assert_eq!(postcode, None);
}

#[tokio::test]
async fn get_place_by_postcode_returns_full_response() {
    let server = MockServer::start().await;
    mount_ticket(&server, API_KEY).await;
    let body = json!({"place": {"id": "place-1", "fullName": "г. Москва"}});
    Mock::given(method("GET"))
        .and(path("/service/checkout/getPlaceByPostalCode/"))
        .and(query_param("postIndex", "101000"))
        .and(query_param("ticket", TICKET))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let place = client(&server).get_place_by_postcode("101000").await.unwrap();
    assert_eq!(place, body);
}

#[tokio::test]
async fn calculation_defaults_assessed_sum_to_total() {
    let server = MockServer::start().await;
    mount_ticket(&server, API_KEY).await;
    let offers = json!({"postamat": [], "express": [{"deliveryId": 7, "cost": 350}]});
    Mock::given(method("GET"))
        .and(path("/service/checkout/calculation/"))
        .and(query_param("placeId", "place-1"))
        .and(query_param("totalSum", "1500.5"))
        .and(query_param("assessedSum", "1500.5"))
        .and(query_param("totalWeight", "1.25"))
        .and(query_param("itemsCount", "3"))
        .and(query_param("ticket", TICKET))
        .respond_with(ResponseTemplate::new(200).set_body_json(offers.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .calculation(&Calculation::new("place-1", 1500.5, 1.25, 3))
        .await
        .unwrap();
    assert_eq!(result, offers);
}

#[tokio::test]
async fn calculation_sends_explicit_assessed_sum() {
    let server = MockServer::start().await;
    mount_ticket(&server, API_KEY).await;
    Mock::given(method("GET"))
        .and(path("/service/checkout/calculation/"))
        .and(query_param("assessedSum", "99.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .calculation(&Calculation::new("place-1", 1500.5, 1.25, 3).with_assessed_sum(99.5))
        .await
        .unwrap();
}

#[tokio::test]
async fn lookup_fails_when_ticket_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(common::ticket_path(API_KEY)))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let err = client(&server).get_places("Test").await.unwrap_err();

    assert!(matches!(err, ClientError::Transport { status: 403, ref body } if body == "forbidden"));
    // Only the ticket request went out.
    assert_eq!(common::total_requests(&server).await, 1);
}
