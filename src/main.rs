//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod config;

use crate::config::{gen_config, read_config, ApplicationCfg};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use pixel_mercator::{
    find_intersecting_tiles, ll_to_pixel_mercator, pixel_mercator_to_ll,
    pixel_mercator_to_ll_deg, Tile,
};
use std::env;
use std::io::Write;
use std::process;
use std::str::FromStr;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (Some(loglevel), _) => loglevel.to_string(),
        (None, Ok(rust_log_env)) => rust_log_env,
        (None, Err(_)) => "info".to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn load_config(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    match args.value_of("config") {
        Some(path) => {
            info!("Reading configuration from '{}'", path);
            read_config(path)
        }
        None => Ok(ApplicationCfg::default()),
    }
}

fn parse_value<T: FromStr>(
    args: &ArgMatches<'_>,
    name: &str,
    kind: &str,
) -> Result<Option<T>, String> {
    args.value_of(name)
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| format!("Error parsing '{}' as {}", name, kind))
        })
        .transpose()
}

fn parse_pair<T: FromStr>(
    args: &ArgMatches<'_>,
    name: &str,
    kind: &str,
) -> Result<Option<(T, T)>, String> {
    let numlist = match args.value_of(name) {
        Some(numlist) => numlist,
        None => return Ok(None),
    };
    let err = || format!("Error parsing '{}' as pair of {}", name, kind);
    let values = numlist
        .split(',')
        .map(|v| v.trim().parse::<T>().map_err(|_| err()))
        .collect::<Result<Vec<T>, String>>()?;
    let mut values = values.into_iter();
    match (values.next(), values.next(), values.next()) {
        (Some(a), Some(b), None) => Ok(Some((a, b))),
        _ => Err(err()),
    }
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("Missing '{}'", name))
}

fn tile(args: &ArgMatches<'_>) -> Result<String, String> {
    let lat = required(parse_value::<f64>(args, "lat", "float value")?, "lat")?;
    let lon = required(parse_value::<f64>(args, "lon", "float value")?, "lon")?;
    let zoom = required(parse_value::<u8>(args, "zoom", "integer value")?, "zoom")?;

    let ((tx, ty), (dx, dy)) = ll_to_pixel_mercator(lat, lon, zoom);
    debug!("{},{} -> tile {}/{}/{} offset {},{}", lat, lon, zoom, tx, ty, dx, dy);
    if !dx.is_finite() || !dy.is_finite() {
        warn!("Position {},{} is outside of the projectable range", lat, lon);
    }
    Ok(format!("{}/{}/{} {} {}", zoom, tx, ty, dx, dy))
}

fn latlon(args: &ArgMatches<'_>) -> Result<String, String> {
    let config = load_config(args)?;
    let (tx, ty) = required(parse_pair::<i64>(args, "tile", "integer values")?, "tile")?;
    let (dx, dy) = parse_pair::<f64>(args, "offset", "float values")?.unwrap_or((0.0, 0.0));
    let zoom = required(parse_value::<u8>(args, "zoom", "integer value")?, "zoom")?;
    let degrees =
        parse_value::<bool>(args, "degrees", "boolean value")?.unwrap_or(config.output.degrees);

    let (lat, lon) = if degrees {
        pixel_mercator_to_ll_deg(tx, ty, dx, dy, zoom)
    } else {
        pixel_mercator_to_ll(tx, ty, dx, dy, zoom)
    };
    debug!(
        "tile {}/{}/{} offset {},{} -> {},{} ({})",
        zoom,
        tx,
        ty,
        dx,
        dy,
        lat,
        lon,
        if degrees { "degrees" } else { "radians" }
    );
    Ok(format!("{} {}", lat, lon))
}

fn cover(args: &ArgMatches<'_>) -> Result<String, String> {
    let config = load_config(args)?.coverage;
    let lat = parse_value::<f64>(args, "lat", "float value")?.or(config.lat);
    let lon = parse_value::<f64>(args, "lon", "float value")?.or(config.lon);
    let radius = parse_value::<f64>(args, "radius", "float value")?.or(config.radius);
    let maxzoom = parse_value::<u8>(args, "maxzoom", "integer value")?.or(config.maxzoom);
    let (lat, lon) = (required(lat, "lat")?, required(lon, "lon")?);
    let (radius, maxzoom) = (required(radius, "radius")?, required(maxzoom, "maxzoom")?);

    info!(
        "Searching tiles within {} m around {},{} up to zoom level {}",
        radius, lat, lon, maxzoom
    );
    let tiles = find_intersecting_tiles(
        Tile::new(0, 0, 0),
        lat.to_radians(),
        lon.to_radians(),
        radius,
        maxzoom,
    );
    info!("{} tiles found", tiles.len());
    let lines: Vec<String> = tiles.iter().map(|tile| tile.to_string()).collect();
    Ok(lines.join("\n"))
}

fn app() -> App<'static, 'static> {
    // http://kbknapp.github.io/clap-rs/clap/
    App::new("tilecoord")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("lat/lon to pixel-Mercator tile coordinates and back")
        .subcommand(SubCommand::with_name("tile")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--lat=<DEG> 'Latitude in decimal degrees'
                                              --lon=<DEG> 'Longitude in decimal degrees'
                                              --zoom=<LEVEL> 'Zoom level'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Tile and pixel offset of a position"))
        .subcommand(SubCommand::with_name("latlon")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--tile=<X,Y> 'Tile column and row'
                                              --offset=[DX,DY] 'Pixel offset within tile (Default: 0,0)'
                                              --zoom=<LEVEL> 'Zoom level'
                                              --degrees=[true|false] 'Output decimal degrees instead of radians'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Position of a tile pixel (radians by default)"))
        .subcommand(SubCommand::with_name("cover")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--lat=[DEG] 'Site latitude in decimal degrees'
                                              --lon=[DEG] 'Site longitude in decimal degrees'
                                              --radius=[METERS] 'Radius around site'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Tiles intersecting a radius around a site"))
        .subcommand(SubCommand::with_name("genconfig")
                        .about("Generate configuration template"))
}

fn report(result: Result<String, String>) {
    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn main() {
    dotenv().ok();
    let mut app = app();

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("tile", Some(sub_m)) => {
                init_logger(sub_m);
                report(tile(sub_m));
            }
            ("latlon", Some(sub_m)) => {
                init_logger(sub_m);
                report(latlon(sub_m));
            }
            ("cover", Some(sub_m)) => {
                init_logger(sub_m);
                report(cover(sub_m));
            }
            ("genconfig", Some(_)) => {
                println!("{}", gen_config());
            }
            _ => {
                let _ = app.print_help();
                println!();
            }
        },
    }
}
