use blogthumbs::config::{self, Overrides};
use blogthumbs::markup::MarkupStyle;
use blogthumbs::naming::is_beside_source;
use blogthumbs::output;
use blogthumbs::process::{self, ConversionRequest};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> String {
    format!("blogthumbs version {}", env!("CARGO_PKG_VERSION"))
}

#[derive(Parser)]
#[command(name = "blogthumbs")]
#[command(about = "Create thumbnails of blog images and print the snippet that links them")]
#[command(long_about = "\
Create thumbnails of blog images and print the snippet that links them

For every image a thumbnail is written in the image's own format (gif, jpeg or
png), scaled so its shorter side is SIZE pixels. One line of markup per image
is printed to stdout, in the order given:

  markdown  [![Title](photos/t_cat.jpg)](photos/cat.jpg)
  hugo      {{< figure src=\"photos/t_cat.jpg\" link=\"photos/cat.jpg\" title=\"\" >}}

Images that fail are reported on stderr and skipped; the exit status is 1 if
any image failed.")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Images to make thumbnails of (gif, jpeg, png)
    #[arg(value_name = "IMAGES", required_unless_present = "version")]
    images: Vec<PathBuf>,

    /// Destination directory; "." writes t_<name> next to each image [default: .]
    #[arg(short, long, value_name = "DIR")]
    dest: Option<PathBuf>,

    /// Size of the thumbnail's shorter side in pixels [default: 240]
    #[arg(short, long, value_name = "SIZE", value_parser = clap::value_parser!(u32).range(1..))]
    size: Option<u32>,

    /// Blog system to print markup for [default: markdown]
    #[arg(short = 't', long = "type", value_name = "TYPE", value_enum, ignore_case = true)]
    style: Option<MarkupStyle>,

    /// TOML file with defaults for dest, size and type
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_string());
        return Ok(ExitCode::SUCCESS);
    }

    let settings = config::resolve(
        cli.config.as_deref(),
        Overrides {
            dest: cli.dest,
            size: cli.size,
            style: cli.style,
        },
    )?;
    log::debug!("settings: {settings:?}");

    if !is_beside_source(&settings.dest) {
        std::fs::create_dir_all(&settings.dest)?;
    }

    let requests = cli
        .images
        .iter()
        .map(|image| ConversionRequest::new(image, &settings.dest, settings.size, settings.style))
        .collect();

    let report = process::process(requests);
    output::print_report(&report);

    Ok(if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
