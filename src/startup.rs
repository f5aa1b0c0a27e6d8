use crate::configuration::Settings;
use crate::domain::{MockDistance, UniformMock};
use crate::routes::{cities, closest, health_check, index, page};
use actix_web::{App, HttpServer, dev::Server, web, web::Data};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}
impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let mock = UniformMock::try_from(&configuration.mock)?;

        Self::build_with_mock(configuration, Arc::new(mock)).await
    }

    /// Same as [`Application::build`], with a caller-supplied source for the
    /// chosen-branch distance.
    pub async fn build_with_mock(
        configuration: Settings,
        mock: Arc<dyn MockDistance>,
    ) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", address, e))?;
        let port = listener.local_addr()?.port();

        let server = run(listener, configuration, mock)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    configuration: Settings,
    mock: Arc<dyn MockDistance>,
) -> Result<Server, anyhow::Error> {
    // Wrap shared state in a smart pointer
    let configuration = Data::new(configuration);
    let mock: Data<dyn MockDistance> = Data::from(mock);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/", web::get().to(index))
            .route("/analysis", web::get().to(page))
            .route("/api/cities", web::get().to(cities))
            .route("/api/closest", web::get().to(closest))
            .app_data(configuration.clone())
            .app_data(mock.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
