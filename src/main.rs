use boxjoint::{
    generate_box_plans, init_logging, load_config, parse_dimensions, process_parameters,
    ConfigOverrides, BUILD_DATE, VERSION,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "boxjoint",
    version,
    about = "Generate SVG cut plans for open-topped finger-jointed boxes"
)]
struct Cli {
    /// Outside dimensions, e.g. 12x24x8
    #[arg(value_name = "LxWxH")]
    dimensions: String,
    /// Plan name, used as the file name prefix
    name: Option<String>,
    /// Config file (.toml or .json)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    thickness: Option<f64>,
    #[arg(long)]
    depth_offset: Option<f64>,
    #[arg(long)]
    length_offset: Option<f64>,
    /// Output units per dimension unit
    #[arg(long)]
    scale: Option<f64>,
    /// Cut nominal sizes without kerf compensation
    #[arg(long)]
    nominal: bool,
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    info!(version = VERSION, build_date = BUILD_DATE, "Starting boxjoint");

    let dimensions = parse_dimensions(&cli.dimensions)?;

    let mut config = load_config(cli.config.as_deref())?;
    ConfigOverrides {
        thickness: cli.thickness,
        depth_offset: cli.depth_offset,
        length_offset: cli.length_offset,
        scale: cli.scale,
        output_dir: cli.output_dir,
        name: cli.name,
    }
    .apply(&mut config);
    config.validate()?;

    let path = generate_box_plans(
        dimensions,
        &config.output.default_name,
        &process_parameters(&config),
        !cli.nominal,
        &config.output.output_dir,
    )?;
    println!("{}", path.display());

    Ok(())
}
