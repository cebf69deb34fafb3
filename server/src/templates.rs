/*
 * Copyright 2025 Oxide Computer Company
 */

use std::path::PathBuf;
use std::result::Result as SResult;

use anyhow::Result;
use dropshot::HttpError;
use slog::{error, Logger};

pub struct Templates {
    log: Logger,
    dir: Option<PathBuf>,
}

impl Templates {
    pub fn new(log: Logger) -> Result<Self> {
        /*
         * We deploy this program in "/opt/portfolio/lib" and the web assets,
         * if present, are alongside in "/opt/portfolio/share".
         */
        let dir = {
            let dir = std::env::current_exe()?;
            if let Some(lib) = dir.parent() {
                if lib.file_name() == Some(std::ffi::OsStr::new("lib")) {
                    Some(lib.parent().unwrap().join("share"))
                } else {
                    None
                }
            } else {
                None
            }
        };

        Ok(Self { log, dir })
    }

    pub fn load(&self, name: &str) -> SResult<String, HttpError> {
        let log = &self.log;

        if let Some(dir) = &self.dir {
            let file = dir.join(name);
            match std::fs::read_to_string(&file) {
                Ok(data) => return Ok(data),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => (),
                Err(e) => {
                    error!(log, "opening template {name:?}: {e}");
                }
            }
        }

        match name {
            "www/index.html" => Ok(include_str!("../www/index.html").into()),
            "www/js/main.js" => Ok(include_str!("../www/js/main.js").into()),
            _ => Err(HttpError::for_internal_error(format!(
                "could not locate template {name:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use slog::{o, Discard};

    fn log() -> Logger {
        Logger::root(Discard, o!())
    }

    #[test]
    fn embedded_assets_load() -> Result<()> {
        let t = Templates { log: log(), dir: None };

        let html = t.load("www/index.html").unwrap();
        assert!(html.contains("<canvas"));
        assert!(html.contains("/js/main.js"));

        let js = t.load("www/js/main.js").unwrap();
        assert!(js.contains("/api/projects"));
        Ok(())
    }

    #[test]
    fn unknown_asset_is_an_error() {
        let t = Templates { log: log(), dir: None };

        assert!(t.load("www/nope.css").is_err());
    }
}
