/*
 * Copyright 2025 Oxide Computer Company
 */

use std::process::exit;
use std::result::Result as SResult;
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use dropshot::{
    ApiDescription, ConfigDropshot, HttpError, HttpServerStarter,
};
use getopts::Options;
use portfolio_common::*;
#[allow(unused_imports)]
use slog::{error, info, o, warn, Logger};

mod api;
mod config;
mod projects;
mod templates;

struct Central {
    #[allow(dead_code)]
    config: config::ConfigFile,
    templates: templates::Templates,
}

pub(crate) trait MakeInternalError<T> {
    fn or_500(self) -> SResult<T, HttpError>;
}

impl<T> MakeInternalError<T> for std::result::Result<T, hyper::http::Error> {
    fn or_500(self) -> SResult<T, HttpError> {
        self.map_err(|e| {
            let msg = format!("internal error: {:?}", e);
            HttpError::for_internal_error(msg)
        })
    }
}

pub(crate) trait ApiResultEx {
    fn api_check(&self) -> Result<()>;
}

impl ApiResultEx for std::result::Result<(), String> {
    fn api_check(&self) -> Result<()> {
        self.as_ref()
            .map_err(|e| anyhow!("API registration failure: {}", e))?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut opts = Options::new();

    opts.optopt("b", "", "bind address:port", "BIND_ADDRESS");
    opts.optopt("f", "", "configuration file", "CONFIG");
    opts.optopt("S", "", "dump OpenAPI schema", "FILE");

    let p = match opts.parse(std::env::args().skip(1)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("ERROR: usage: {}", e);
            eprintln!("       {}", opts.usage("usage"));
            exit(1);
        }
    };

    let mut ad = ApiDescription::new();
    ad.register(api::public::home).api_check()?;
    ad.register(api::public::asset_main_js).api_check()?;
    ad.register(api::public::projects_list).api_check()?;

    if let Some(s) = p.opt_str("S") {
        let mut f =
            std::fs::OpenOptions::new().create_new(true).write(true).open(s)?;
        ad.openapi("Portfolio", "1.0").write(&mut f)?;
        return Ok(());
    }

    let bind_address =
        p.opt_str("b").as_deref().unwrap_or("127.0.0.1:8080").parse()?;

    let config = if let Some(f) = p.opt_str("f").as_deref() {
        config::load(f)?
    } else {
        config::ConfigFile::default()
    };

    let log = make_log("portfolio");

    let templates =
        templates::Templates::new(log.new(o!("component" => "templates")))?;

    let c = Arc::new(Central { config, templates });

    info!(log, "listening on {}", bind_address);

    let server = HttpServerStarter::new(
        #[allow(clippy::needless_update)]
        &ConfigDropshot { bind_address, ..Default::default() },
        ad,
        c,
        &log,
    )
    .map_err(|e| anyhow!("server startup failure: {:?}", e))?;

    if let Err(e) = server.start().await {
        bail!("server stopped early: {}", e);
    }

    Ok(())
}
