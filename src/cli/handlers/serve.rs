use crate::cli::{args::ServeArgs, global::GlobalArgs};
use name_viz::Settings;

pub fn handle(
    args: ServeArgs,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = args.addr.unwrap_or_else(|| settings.server.addr.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(name_viz::server::serve(&addr))
        .map_err(|e| format!("HTTP server on {} failed: {}", addr, e))?;

    Ok(())
}
