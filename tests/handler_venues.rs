mod common;

use serde_json::Value;

fn saloon_ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|s| s["saloonId"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_saloons_by_city() {
    let server = common::create_test_server();

    let response = server.get("/api/movie/saloons/getByCityId/2").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(saloon_ids(&json), vec![3, 4]);
    assert_eq!(json[0]["saloonName"], "Lotte Cinema");
    assert_eq!(json[0]["cityId"], 2);
}

#[tokio::test]
async fn test_saloons_by_city_alias() {
    let server = common::create_test_server();

    let response = server.get("/api/movie/saloons/getSaloonsByCityId/3").await;

    response.assert_status_ok();
    assert_eq!(saloon_ids(&response.json::<Value>()), vec![5]);
}

#[tokio::test]
async fn test_saloons_unknown_city_falls_back_to_first_two() {
    let server = common::create_test_server();

    let response = server.get("/api/movie/saloons/getByCityId/42").await;

    response.assert_status_ok();
    assert_eq!(saloon_ids(&response.json::<Value>()), vec![1, 2]);
}

#[tokio::test]
async fn test_saloons_non_numeric_city_falls_back_to_first_three() {
    let server = common::create_test_server();

    let response = server.get("/api/movie/saloons/getByCityId/hanoi").await;

    response.assert_status_ok();
    assert_eq!(saloon_ids(&response.json::<Value>()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_saloons_nested_city_path_is_not_a_city_id() {
    let server = common::create_test_server();

    let response = server.get("/api/movie/saloons/getByCityId/1/2").await;

    response.assert_status_ok();
    assert_eq!(saloon_ids(&response.json::<Value>()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_saloons_getall_lists_first_three() {
    let server = common::create_test_server();

    let response = server.get("/api/movie/saloons/getall").await;

    response.assert_status_ok();
    assert_eq!(saloon_ids(&response.json::<Value>()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_cities_getall() {
    let server = common::create_test_server();

    let response = server.get("/api/movie/cities/getall").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["cityId"], 1);
    assert_eq!(json[0]["cityName"], "Hà Nội");
    assert_eq!(json[2]["cityName"], "Đà Nẵng");
}

#[tokio::test]
async fn test_cities_by_movie_ignores_movie_id() {
    let server = common::create_test_server();

    let first = server
        .get("/api/movie/cities/getCitiesByMovieId/1")
        .await
        .json::<Value>();
    let other = server
        .get("/api/movie/cities/getCitiesByMovieId/8")
        .await
        .json::<Value>();

    assert_eq!(first, other);
    let ids: Vec<i64> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["cityId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}
