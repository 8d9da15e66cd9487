//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub output: OutputCfg,
    #[serde(default)]
    pub coverage: CoverageCfg,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct OutputCfg {
    /// Report `latlon` results in degrees instead of radians
    #[serde(default)]
    pub degrees: bool,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct CoverageCfg {
    /// Site latitude in decimal degrees
    pub lat: Option<f64>,
    /// Site longitude in decimal degrees
    pub lon: Option<f64>,
    /// Radius around the site in meters
    pub radius: Option<f64>,
    pub maxzoom: Option<u8>,
}

/// Load and parse the config file into an config struct.
pub fn read_config<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
///
/// `{{env.VARNAME}}` expressions are replaced with environment variables.
pub fn parse_config<T: DeserializeOwned>(config_toml: String, path: &str) -> Result<T, String> {
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml::from_str::<T>(&toml).map_err(|err| format!("{} - {}", path, err))
}

/// Configuration template
pub fn gen_config() -> String {
    let toml = r#"
[output]
# Report lat/lon in degrees instead of radians
degrees = false

[coverage]
# Site in decimal degrees
#lat = 38.9
#lon = -77.0
# Radius around the site in meters
#radius = 230000.0
#maxzoom = 8
"#;
    toml.to_string()
}
