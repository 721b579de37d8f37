#[macro_use]
extern crate log;

use env_logger::Env;
use structopt::StructOpt;

pub mod app;
pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod image_buffer;
pub mod math;
pub mod output;
pub mod present;
pub mod render;
pub mod scene;

use app::AppContext;
use config::Opt;
use error::Result;
use output::output_image;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn run(opt: Opt) -> Result<()> {
    let render_size = opt.render_size()?;
    let threads = opt.thread_count();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!(
        "rendering at {}x{} on {} threads",
        render_size.0, render_size.1, threads
    );

    let mut ctx = AppContext::default_viewer(render_size, opt.resolution_policy());
    if opt.headless {
        ctx.render();
        output_image(opt.output.as_ref(), &ctx.image)?;
    } else {
        present::run(&mut ctx)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();

    let opt = Opt::from_args();
    debug!("{:?}", opt);
    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
