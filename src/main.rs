use clap::{App, Arg, ArgMatches};
use gistlog::build::build_site;
use gistlog::config::{Config, Overrides};
use std::error::Error;
use std::path::PathBuf;
use tracing::Level;

fn main() {
    let matches = App::new("gistlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds a static blog from a directory of Markdown posts")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("The project file (default: the nearest gistlog.yaml)"),
        )
        .arg(
            Arg::with_name("posts")
                .long("posts")
                .value_name("DIR")
                .takes_value(true)
                .help("The directory containing the posts (default: posts)"),
        )
        .arg(
            Arg::with_name("site")
                .long("site")
                .value_name("DIR")
                .takes_value(true)
                .help("The output directory (default: site)"),
        )
        .arg(
            Arg::with_name("tags")
                .long("tags")
                .value_name("LIST")
                .takes_value(true)
                .help("Comma-separated tag vocabulary (default: java,jvm,lambda)"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Logs each discovered post"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_max_level(if matches.is_present("verbose") {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let overrides = Overrides {
        posts: matches.value_of("posts").map(PathBuf::from),
        site: matches.value_of("site").map(PathBuf::from),
        tags: matches.value_of("tags").map(String::from),
    };
    let config = match matches.value_of("config") {
        Some(path) => Config::from_project_file(&PathBuf::from(path), overrides)?,
        None => Config::from_directory(&std::env::current_dir()?, overrides)?,
    };
    build_site(&config)?;
    Ok(())
}
