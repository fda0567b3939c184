use festivo_api::Application;
use festivo_infra::FestivoContext;

pub struct TestApp {
    /// Shares repos, clock and mailer with the running server
    pub ctx: FestivoContext,
    pub address: String,
}

/// Boots the application on a random port with the given context.
///
/// Tests that need to swap in a stubbed mailer or clock must do so
/// on the context before calling this.
pub async fn spawn_app(mut ctx: FestivoContext) -> TestApp {
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application");
    let address = format!("http://localhost:{}/api/v1", application.port());

    actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp { ctx, address }
}
