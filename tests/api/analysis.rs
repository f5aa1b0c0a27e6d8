use crate::helpers::{spawn_app, spawn_app_with_mock_distance};
use actix_web::http::StatusCode;
use nearest_branch::domain::Outcome;
use nearest_branch::routes::analysis::{CityEntry, ClosestResponse};

const CITIES: [&str; 3] = ["Reggio Emilia", "Ferrara", "Cesena"];

#[tokio::test]
async fn index_redirects_to_the_analysis_page() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_index().await;

    // Assert
    assert_eq!(StatusCode::SEE_OTHER.as_u16(), response.status().as_u16());
    assert_eq!(
        response.headers().get("Location").unwrap().to_str().unwrap(),
        "/analysis"
    );
}

#[tokio::test]
async fn cities_are_listed_in_selector_order() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_cities().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let cities: Vec<CityEntry> = response
        .json()
        .await
        .expect("Failed to parse response as JSON.");

    let names = cities.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, CITIES);
    assert_eq!(cities[1].coordinates.latitude, 44.5968);
    assert_eq!(cities[1].coordinates.longitude, 11.2186);
}

#[tokio::test]
async fn closest_returns_the_nearest_branch_for_every_city() {
    // Arrange
    let app = spawn_app().await;
    let mock_range = app.configuration.mock.min_km..=app.configuration.mock.max_km;

    for city in CITIES {
        // Act
        let response = app.get_closest(Some(city)).await;

        // Assert
        assert_eq!(200, response.status().as_u16(), "for {}", city);
        let body: ClosestResponse = response
            .json()
            .await
            .expect("Failed to parse response as JSON.");

        assert_eq!(body.city, city);
        assert!(body.closest_distance_km > 0.0);
        assert!(
            mock_range.contains(&body.chosen_branch_distance_km),
            "mock distance {} out of range",
            body.chosen_branch_distance_km
        );
        let expected = if body.chosen_branch_distance_km > body.closest_distance_km {
            Outcome::Farther
        } else {
            Outcome::Nearest
        };
        assert_eq!(body.outcome, expected);
        assert!(body.message.contains(&body.closest_address));
    }
}

#[tokio::test]
async fn closest_distance_does_not_depend_on_the_mock() {
    // Arrange
    let near = spawn_app_with_mock_distance(0.0).await;
    let far = spawn_app_with_mock_distance(500.0).await;

    for city in CITIES {
        // Act
        let a: ClosestResponse = near.get_closest(Some(city)).await.json().await.unwrap();
        let b: ClosestResponse = far.get_closest(Some(city)).await.json().await.unwrap();

        // Assert
        assert_eq!(a.closest_distance_km, b.closest_distance_km);
        assert_eq!(a.closest_address, b.closest_address);
        assert_eq!(a.outcome, Outcome::Nearest);
        assert_eq!(b.outcome, Outcome::Farther);
    }
}

#[tokio::test]
async fn ferrara_is_pointed_to_pilastro() {
    // Arrange
    let app = spawn_app_with_mock_distance(0.0).await;

    // Act
    let body: ClosestResponse = app.get_closest(Some("Ferrara")).await.json().await.unwrap();

    // Assert
    assert_eq!(body.closest_address, "Via Pirandello, 22/C - Villaggio Pilastro");
    assert!(body.message.starts_with("Distanza dalla tua città (Ferrara)"));
}

#[tokio::test]
async fn closest_without_city_uses_the_default_selection() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_closest(None).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: ClosestResponse = response.json().await.unwrap();
    assert_eq!(body.city, "Reggio Emilia");
}

#[tokio::test]
async fn closest_returns_400_for_unknown_cities() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("Bologna", "city outside the selector"),
        ("", "empty city"),
        ("Reggio", "partial name"),
    ];

    for (city, description) in test_cases {
        // Act
        let response = app.get_closest(Some(city)).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn analysis_page_renders_the_reminder_when_the_chosen_branch_is_farther() {
    // Arrange
    let app = spawn_app_with_mock_distance(99.0).await;

    // Act
    let response = app.get_analysis_page(Some("Ferrara")).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert!(
        response
            .headers()
            .get("Content-Type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let html = response.text().await.unwrap();
    assert!(html.contains("Mappa degli utenti non 100% digital"));
    assert!(html.contains("La distanza da Ferrara alla Filiale scelta è 99.00 km"));
    assert!(html.contains("Gentile Cliente,"));
    assert!(html.contains(r#"value="Ferrara" onchange="this.form.submit()" checked>"#));
}

#[tokio::test]
async fn analysis_page_renders_the_plain_distance_when_the_chosen_branch_is_nearest() {
    // Arrange
    let app = spawn_app_with_mock_distance(10.0).await;

    // Act
    let html = app.get_analysis_page(None).await.text().await.unwrap();

    // Assert
    assert!(html.contains("Distanza dalla tua città (Reggio Emilia) alla filiale più vicina"));
    assert!(!html.contains("Gentile Cliente,"));
}

#[tokio::test]
async fn analysis_page_returns_400_for_unknown_cities() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_analysis_page(Some("Modena")).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains("Unknown city: Modena"));
}
