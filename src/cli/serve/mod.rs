//! Asset server: `GET /assets/<type>/<filename>` compiled on request.

mod lifecycle;
mod response;
mod route;

use crate::{asset::AssetPipeline, config::ServeConfig, debug, log};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
    workers: usize,
}

/// Bind the HTTP server and register it for Ctrl+C shutdown.
pub fn bind_server(config: &ServeConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.interface, config.port)?;
    let server = Arc::new(server);
    crate::core::register_server(Arc::clone(&server));

    log!("serve"; "http://{}/assets/", addr);

    Ok(BoundServer {
        server,
        addr,
        workers: config.workers,
    })
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking until shutdown).
    ///
    /// Returns only once every accepted request has been answered.
    pub fn run(self, pipeline: &AssetPipeline) -> Result<()> {
        // Compilation runs on the pool so one slow compiler never stalls the loop.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;

        pool.in_place_scope(|scope| {
            for request in self.server.incoming_requests() {
                scope.spawn(move |_| {
                    if let Err(e) = handle_request(request, pipeline) {
                        log!("serve"; "request error: {e}");
                    }
                });
            }
        });
        debug!("serve"; "request loop stopped");
        Ok(())
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, pipeline: &AssetPipeline) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let Some(filename) = route::asset_filename(request.url()) else {
        debug!("serve"; "404 {}", request.url());
        return response::respond_not_found(request);
    };

    match pipeline.fetch(&filename) {
        Ok(content) => response::respond_asset(request, &filename, content),
        Err(e) => {
            if e.is_unhandable() {
                debug!("serve"; "404 {}", request.url());
            } else {
                log!("error"; "{}: {:#}", filename, e);
            }
            response::respond_asset_error(request, &e)
        }
    }
}
