use std::sync::Arc;
use tokio::sync::Notify;

use stockroom::config::{AppState, Config};
use stockroom::error::ServeError;
use stockroom::logger;
use stockroom::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    // The only fatal condition once configuration has loaded
    let root = cfg.server.root.clone();
    if let Err(source) = std::env::set_current_dir(&root) {
        let err = ServeError::RootDirectory { path: root, source };
        logger::log_error(&err.to_string());
        return Err(err.into());
    }

    // Connections are served concurrently on one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr().map_err(ServeError::Address)?;
    let listener =
        server::create_listener(addr).map_err(|source| ServeError::Bind { addr, source })?;

    let state = Arc::new(AppState::new(&cfg, "."));
    logger::log_serving_directory(&std::env::current_dir()?);
    logger::log_server_start(&addr, server::lan_address(cfg.server.lan_host.as_deref()));

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown));

    let local = tokio::task::LocalSet::new();
    local.run_until(server::serve(listener, state, shutdown)).await;
    Ok(())
}
