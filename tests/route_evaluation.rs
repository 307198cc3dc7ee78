//! End-to-end route evaluation against a mock weather service
//!
//! The client is blocking, so every evaluation runs on a blocking thread
//! while the mock server lives on the test runtime.

use serde_json::json;
use tokio::task::spawn_blocking;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use routecast::models::Horizon;
use routecast::route::{RouteError, RouteEvaluator};
use routecast::translate::{GoogleTranslator, IdentityTranslator, Translate};
use routecast::{LocationResolver, RoutecastConfig, RoutecastError, WeatherApiClient, normalize};

fn test_config(base_url: &str) -> RoutecastConfig {
    let mut config = RoutecastConfig::with_api_key("test-key");
    config.weather_base_url = base_url.to_string();
    config.translate_base_url = base_url.to_string();
    config
}

fn city_match(key: &str, name: &str, lat: f64, lon: f64) -> serde_json::Value {
    json!([{
        "Key": key,
        "LocalizedName": name,
        "EnglishName": name,
        "GeoPosition": { "Latitude": lat, "Longitude": lon }
    }])
}

async fn mount_search(server: &MockServer, query: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/locations/v1/cities/search"))
        .and(query_param("q", query))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, endpoint: &str, key: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/forecasts/v1/{endpoint}/{key}")))
        .and(query_param("metric", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn hourly_record_keeps_sentinels_and_classifies_bad() {
    let server = MockServer::start().await;
    mount_search(&server, "Paris", city_match("123", "Paris", 48.8566, 2.3522)).await;
    // Hourly payload without the wind and humidity blocks
    mount_forecast(
        &server,
        "hourly/1hour",
        "123",
        json!([{
            "DateTime": "2026-08-07T14:00:00+02:00",
            "Temperature": { "Value": 20.0, "Unit": "C" },
            "PrecipitationProbability": 10
        }]),
    )
    .await;

    let config = test_config(&server.uri());
    let records = spawn_blocking(move || {
        let api = WeatherApiClient::new(&config)?;
        let resolver = LocationResolver::new(&api, &IdentityTranslator);
        let city = resolver.resolve("Paris")?;
        assert_eq!(city.location_key, "123");
        assert!((city.geo.latitude - 48.8566).abs() < 1e-9);

        let payload = api.forecast(&city.location_key, Horizon::Hourly)?;
        normalize(&payload)
    })
    .await
    .expect("blocking task")
    .expect("resolution and fetch");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.temperature, Some(20.0));
    assert_eq!(record.wind_speed, None);
    assert_eq!(record.precipitation_probability, Some(10.0));
    assert_eq!(record.humidity, None);

    // The missing wind reading alone makes the verdict bad
    let classifier = routecast::WeatherClassifier::default();
    assert!(classifier.is_bad(record));
}

#[tokio::test(flavor = "multi_thread")]
async fn route_aborts_on_first_failing_city() {
    let server = MockServer::start().await;

    mount_search(&server, "A", city_match("1", "A", 50.0, 10.0)).await;
    mount_forecast(
        &server,
        "hourly/1hour",
        "1",
        json!([{ "Temperature": { "Value": 15.0 } }]),
    )
    .await;

    // B resolves to an empty result set
    mount_search(&server, "B", json!([])).await;

    // Nothing for C may ever be requested
    Mock::given(method("GET"))
        .and(path("/locations/v1/cities/search"))
        .and(query_param("q", "C"))
        .respond_with(ResponseTemplate::new(200).set_body_json(city_match("3", "C", 52.0, 13.0)))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let result = spawn_blocking(move || {
        let evaluator = RouteEvaluator::with_translator(&config, Box::new(IdentityTranslator))?;
        Ok::<_, RoutecastError>(evaluator.evaluate(&["A", "B", "C"], Horizon::Hourly))
    })
    .await
    .expect("blocking task")
    .expect("evaluator construction");

    match result {
        Err(RouteError::City { city, source }) => {
            assert_eq!(city, "B");
            assert!(matches!(source, RoutecastError::NotFound { .. }));
        }
        other => panic!("expected a city error for B, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn five_day_route_reports_all_cities_in_order() {
    let server = MockServer::start().await;

    let daily_body = |base_temp: f64| {
        let days: Vec<_> = (0..5)
            .map(|i| {
                json!({
                    "Date": format!("2026-08-{:02}T07:00:00+03:00", 7 + i),
                    "Temperature": {
                        "Minimum": { "Value": base_temp },
                        "Maximum": { "Value": base_temp + 10.0 }
                    },
                    "Day": {
                        "Wind": { "Speed": { "Value": 12.0 } },
                        "PrecipitationProbability": 20,
                        "PrecipitationIntensity": "Light",
                        "RelativeHumidity": { "Average": 55 }
                    }
                })
            })
            .collect();
        json!({ "DailyForecasts": days })
    };

    mount_search(&server, "Moscow", city_match("294021", "Moscow", 55.7558, 37.6173)).await;
    mount_search(
        &server,
        "Saint Petersburg",
        city_match("295212", "Saint Petersburg", 59.9343, 30.3351),
    )
    .await;
    mount_forecast(&server, "daily/5day", "294021", daily_body(10.0)).await;
    mount_forecast(&server, "daily/5day", "295212", daily_body(12.0)).await;

    let config = test_config(&server.uri());
    let report = spawn_blocking(move || {
        let evaluator = RouteEvaluator::with_translator(&config, Box::new(IdentityTranslator))?;
        evaluator
            .evaluate(&["Moscow", "Saint Petersburg"], Horizon::Daily5)
            .map_err(|e| RoutecastError::unexpected(e.to_string()))
    })
    .await
    .expect("blocking task")
    .expect("route evaluation");

    assert_eq!(report.cities.len(), 2);
    assert_eq!(report.cities[0].city.query_name, "Moscow");
    assert_eq!(report.cities[1].city.query_name, "Saint Petersburg");

    for city_report in &report.cities {
        assert_eq!(city_report.conditions.len(), 5);
        assert!(!city_report.bad_weather, "all readings are benign");
    }
    assert_eq!(report.cities[0].conditions[0].temperature, Some(15.0));

    // Moscow to Saint Petersburg is roughly 635 km
    let legs = report.leg_distances_km();
    assert_eq!(legs.len(), 1);
    assert!(legs[0] > 600.0 && legs[0] < 680.0);
    assert!(report.all_clear());
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_key_field_is_malformed_location() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "Nowhere",
        json!([{ "LocalizedName": "Nowhere", "GeoPosition": { "Latitude": 0.0, "Longitude": 0.0 } }]),
    )
    .await;

    let config = test_config(&server.uri());
    let err = spawn_blocking(move || {
        let api = WeatherApiClient::new(&config)?;
        let resolver = LocationResolver::new(&api, &IdentityTranslator);
        resolver.resolve("Nowhere").map(|_| ())
    })
    .await
    .expect("blocking task")
    .unwrap_err();

    assert!(matches!(err, RoutecastError::MalformedLocation { .. }));
    assert!(err.to_string().contains("Key"));
}

#[tokio::test(flavor = "multi_thread")]
async fn upstream_failure_surfaces_as_connectivity_with_status() {
    let server = MockServer::start().await;
    mount_search(&server, "Moscow", city_match("294021", "Moscow", 55.7558, 37.6173)).await;
    Mock::given(method("GET"))
        .and(path("/forecasts/v1/hourly/1hour/294021"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let err = spawn_blocking(move || {
        let api = WeatherApiClient::new(&config)?;
        api.forecast("294021", Horizon::Hourly).map(|_| ())
    })
    .await
    .expect("blocking task")
    .unwrap_err();

    match err {
        RoutecastError::Connectivity { message } => assert!(message.contains("503")),
        other => panic!("expected connectivity error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn whitespace_city_resolves_to_not_found() {
    let server = MockServer::start().await;
    mount_search(&server, "   ", json!([])).await;

    let config = test_config(&server.uri());
    let err = spawn_blocking(move || {
        let api = WeatherApiClient::new(&config)?;
        let resolver = LocationResolver::new(&api, &IdentityTranslator);
        resolver.resolve("   ").map(|_| ())
    })
    .await
    .expect("blocking task")
    .unwrap_err();

    assert!(matches!(err, RoutecastError::NotFound { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn translator_decodes_gtx_segments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "ru"))
        .and(query_param("tl", "en"))
        .and(query_param("q", "Москва"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [["Moscow", "Москва", null, null, 1]],
            null,
            "ru"
        ])))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let translated = spawn_blocking(move || {
        let translator = GoogleTranslator::new(&config)?;
        translator.translate("Москва")
    })
    .await
    .expect("blocking task")
    .expect("translation");

    assert_eq!(translated, "Moscow");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_translator_is_a_connectivity_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let err = spawn_blocking(move || {
        let translator = GoogleTranslator::new(&config)?;
        translator.translate("Москва").map(|_| ())
    })
    .await
    .expect("blocking task")
    .unwrap_err();

    assert!(matches!(err, RoutecastError::Connectivity { .. }));
}
