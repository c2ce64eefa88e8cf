use anyhow::Context;
use dippy_demo::app::DeeplyDippy;
use dippy_demo::DemoLauncher;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Deeply Dippy ===");
    println!("Each line is padded by a different dip expression.");
    println!("Set RUST_LOG=debug to trace every measured node.");
    println!();

    let launcher = DemoLauncher::new().with_size(360.0, 640.0).with_density(2.0);
    let layout = launcher
        .run(DeeplyDippy)
        .context("failed to lay out the Deeply Dippy screen")?;

    print!("{}", layout.dump());
    Ok(())
}
