use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = tag_rename::cli::parse();
    app::run(args)
}
