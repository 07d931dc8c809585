extern crate clap;
extern crate env_logger;
extern crate mandelcycle;

use clap::{App, Arg, ArgMatches};
use log::{error, info};
use mandelcycle::{window, Field, Mapping, Scene, Variant, TICK_MILLIS};
use std::str::FromStr;
use std::time::Duration;

const VARIANT: &str = "variant";
const MAPPING: &str = "mapping";
const STILL: &str = "still";

fn validate_name<T>(s: String) -> Result<(), String>
where
    T: FromStr,
    T::Err: ToString,
{
    T::from_str(&s).map(|_| ()).map_err(|e| e.to_string())
}

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelcycle")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Palette-cycling Mandelbrot viewer")
        .arg(
            Arg::with_name(VARIANT)
                .required(false)
                .long(VARIANT)
                .short("v")
                .takes_value(true)
                .default_value("classes")
                .validator(validate_name::<Variant>)
                .help("Field to compute: classes or grayscale"),
        )
        .arg(
            Arg::with_name(MAPPING)
                .required(false)
                .long(MAPPING)
                .short("m")
                .takes_value(true)
                .default_value("linear")
                .validator(validate_name::<Mapping>)
                .help("Pixel to plane mapping: linear, or legacy for the old unnormalized one"),
        )
        .arg(
            Arg::with_name(STILL)
                .required(false)
                .long(STILL)
                .short("s")
                .help("Hold the palette still instead of cycling it"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> mandelcycle::Result<()> {
    // Both were checked by the validators above.
    let variant = Variant::from_str(matches.value_of(VARIANT).unwrap_or("classes"))?;
    let mapping = Mapping::from_str(matches.value_of(MAPPING).unwrap_or("linear"))?;
    let interval = if matches.is_present(STILL) {
        None
    } else {
        Some(Duration::from_millis(TICK_MILLIS))
    };

    info!("computing {} field with {} mapping", variant, mapping);
    let field = Field::build(variant, mapping)?;
    let mut scene = Scene::new(field);
    window::run(&mut scene, interval)
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        error!("{}", e);
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
