use log::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = mandelbrot_explorer::RenderConfig::from_env().inspect_err(|e| {
        error!("Error: {e}");
    })?;
    let command = mandelbrot_explorer::RunGuiCommand::new(config);

    command.execute().inspect_err(|e| {
        error!("Error: {e}");
    })
}
