use std::sync::Arc;

use cafe_server::config::{AppState, Config};
use cafe_server::logger;
use cafe_server::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // Runtime thread count follows the workers config when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(AppState::new(&cfg));
    logger::log_server_start(&addr, &cfg, state.directory.city_count());

    server::run_server(listener, state).await
}
