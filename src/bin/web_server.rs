use spath::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Environment first, then an optional port argument
    let mut config = ServerConfig::from_env();
    if let Some(port) = env::args().nth(1) {
        config.port = port.parse()?;
    }

    println!("Starting spath web server");
    println!("   Address: http://{}", config.address());
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max graphs: {}", config.max_graphs);
    println!();

    start_server(config).await?;

    Ok(())
}
