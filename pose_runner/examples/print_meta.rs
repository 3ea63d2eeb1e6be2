use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
struct Args {
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let script = pose_runner::load_script_json_from_path(args.path)?;
    println!("title={}", script.meta.title);
    println!("duration_ms={}", script.meta.duration_ms);
    println!("frames={}", script.frames.len());
    match script.meta.seed {
        Some(seed) => println!("seed={seed}"),
        None => println!("seed=none"),
    }
    Ok(())
}
