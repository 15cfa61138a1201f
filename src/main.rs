use geojson_overlays::load;
use geojson_overlays::output::Output;
use log::info;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "geojson_overlays",
    about = "Turns the GeoJSON features visible at a zoom level into map overlays"
)]
struct Opt {
    #[structopt(parse(from_os_str))]
    input: PathBuf,
    /// Map zoom level
    #[structopt(short, long, default_value = "18")]
    zoom: f64,
    /// Write a GeoJSON FeatureCollection instead of JSON lines
    #[structopt(short, long)]
    geojson: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let opt = Opt::from_args();
    let file = File::open(&opt.input)?;
    let document = load(BufReader::new(file))?;
    if let Some(bounds) = document.bounds() {
        let (sw, ne) = bounds.sw_ne();
        info!("bounds sw={:?} ne={:?}", sw, ne);
    }

    let overlays = document.overlays(opt.zoom);
    info!(
        "{} overlays from {} features at zoom {}",
        overlays.len(),
        document.features().len(),
        opt.zoom
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if opt.geojson {
        overlays.write_geojson(&mut handle)?;
    } else {
        overlays.write_json_lines(&mut handle)?;
    }
    Ok(())
}
