use mazeroute::{
    app::{App, AppError},
    config::Config,
    logging,
};

fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let _guard = logging::init(&config).map_err(AppError::Logging)?;

    let app = App::new(config);
    match app.run(std::io::stdin().lock(), std::io::stdout()) {
        // Ctrl-D at a prompt simply ends the session
        Err(AppError::InputClosed) => {
            tracing::info!("Input closed, exiting");
            Ok(())
        }
        result => result,
    }
}
