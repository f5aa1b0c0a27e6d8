use nearest_branch::configuration::get_configuration;
use nearest_branch::startup::Application;
use nearest_branch::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("nearest_branch".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Application started");
    application.run_until_stopped().await?;

    Ok(())
}
