//! `deployurl serve`

use std::path::Path;

use anyhow::Result;

pub fn cmd_serve(addr: Option<String>, config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_config(config_path, json)?;
    let addr = addr.unwrap_or(config.server.addr);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(deployurl::server::serve(&addr))
}
