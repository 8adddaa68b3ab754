use pixel_filter::config::load_config;
use pixel_filter::image::{load_rgb_image, save_rgb_image};
use std::path::PathBuf;
use std::process::ExitCode;

fn run(config_path: &PathBuf) -> Result<(), String> {
    let cfg = load_config(config_path)?;
    let mut img = load_rgb_image(&cfg.input)?;
    cfg.filter.apply(&mut img);
    save_rgb_image(&img, &cfg.output)?;
    println!(
        "{:?} {}x{} {} -> {}",
        cfg.filter,
        img.w,
        img.h,
        cfg.input.display(),
        cfg.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    // Single argument: path to a JSON config selecting input, filter, output
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("filter.json"), PathBuf::from);
    match run(&config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
