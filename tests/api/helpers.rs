use nearest_branch::{
    configuration::{Settings, get_configuration},
    domain::{FixedMock, MockDistance},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use std::sync::Arc;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`,
    // so each branch builds and installs its own subscriber.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub configuration: Settings,
    pub api_client: reqwest::Client,
}
impl TestApp {
    pub async fn get_health_check(&self) -> reqwest::Response {
        self.get("/health_check").await
    }

    pub async fn get_index(&self) -> reqwest::Response {
        self.get("/").await
    }

    pub async fn get_analysis_page(&self, city: Option<&str>) -> reqwest::Response {
        self.get_with_city("/analysis", city).await
    }

    pub async fn get_cities(&self) -> reqwest::Response {
        self.get("/api/cities").await
    }

    pub async fn get_closest(&self, city: Option<&str>) -> reqwest::Response {
        self.get_with_city("/api/closest", city).await
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    async fn get_with_city(&self, path: &str, city: Option<&str>) -> reqwest::Response {
        let url = format!("{}{}", self.address, path);
        let url = match city {
            Some(city) => reqwest::Url::parse_with_params(&url, &[("city", city)]),
            None => reqwest::Url::parse(&url),
        }
        .expect("Failed to build request url.");

        self.api_client
            .get(url)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Launch the application in the background with the configured random
/// chosen-branch distance.
pub async fn spawn_app() -> TestApp {
    spawn(None).await
}

/// Launch the application with a chosen-branch distance that never changes.
pub async fn spawn_app_with_mock_distance(distance_km: f64) -> TestApp {
    spawn(Some(Arc::new(FixedMock(distance_km)))).await
}

async fn spawn(mock: Option<Arc<dyn MockDistance>>) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.host = "127.0.0.1".to_string();
        // Random available port
        c.application.port = 0;

        c
    };

    let application = match mock {
        Some(mock) => Application::build_with_mock(configuration.clone(), mock).await,
        None => Application::build(configuration.clone()).await,
    }
    .expect("Failed to build application.");
    let application_port = application.port();

    // Launch the server as a background task
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        configuration,
        api_client,
    }
}
