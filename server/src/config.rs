/*
 * Copyright 2025 Oxide Computer Company
 */

use std::path::Path;

use anyhow::Result;
use portfolio_common::*;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ConfigFile {
    #[allow(dead_code)]
    pub general: ConfigFileGeneral,
}

#[derive(Deserialize, Debug)]
pub struct ConfigFileGeneral {
    #[allow(dead_code)]
    pub baseurl: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            general: ConfigFileGeneral {
                baseurl: "http://127.0.0.1:8080".to_string(),
            },
        }
    }
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    read_toml(path.as_ref())
}
