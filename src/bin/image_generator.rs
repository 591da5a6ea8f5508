use std::path::PathBuf;

use image::{Rgb, RgbImage};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use percolation::{GrowthConfig, LatticeGenerator, Site, SiteGrid};

#[derive(Debug, StructOpt)]
#[structopt(name = "image_generator", about = "Render a percolation lattice as a PNG")]
struct Args {
    /// output png file
    #[structopt(parse(from_os_str))]
    output: PathBuf,
    /// lattice side length
    #[structopt(short = "L", long, default_value = "100")]
    size: usize,
    /// occupation probability
    #[structopt(short, long, default_value = "0.59725")]
    p: f64,
    #[structopt(long, default_value = "0")]
    seed: u64,
    /// grow from the center instead of filling every site
    #[structopt(long)]
    growth: bool,
    #[structopt(long, default_value = "10000")]
    max_passes: usize,
    /// pixels per site
    #[structopt(long, default_value = "4")]
    scale: u32,
}

fn color(site: Site) -> Rgb<u8> {
    match site {
        Site::Occupied => Rgb([0, 0, 0]),
        Site::Vacant => Rgb([255, 255, 255]),
        Site::Undefined => Rgb([200, 30, 30]),
    }
}

fn render(grid: &SiteGrid, scale: u32) -> RgbImage {
    let side = grid.size() as u32 * scale;
    RgbImage::from_fn(side, side, |x, y| {
        color(grid[((y / scale) as usize, (x / scale) as usize)])
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::from_args();
    anyhow::ensure!(args.scale > 0, "scale must be positive");

    let mut rng = StdRng::seed_from_u64(args.seed);

    let grid = if args.growth {
        let config = GrowthConfig::default().max_passes(args.max_passes);
        let growth = LatticeGenerator::growth(args.size, args.p, &mut rng, config)?;
        info!(
            "growth {:?}: {} undefined sites left",
            growth.status(),
            growth.undefined_count()
        );
        growth.into_grid()
    } else {
        let lattice = LatticeGenerator::uniform(args.size, args.p, &mut rng)?;
        SiteGrid::from_fn(args.size, |row, col| Site::from(lattice.is_occupied((row, col))))
    };

    render(&grid, args.scale).save(&args.output)?;
    info!("saved {}", args.output.display());

    Ok(())
}
