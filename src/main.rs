use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = asset_copy::cli::parse();
    app::run(args)
}
