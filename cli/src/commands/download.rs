use anyhow::Result;

use accessmap::download_tract_boundaries;

use crate::cli::{Cli, DownloadArgs};

pub fn run(_cli: &Cli, args: &DownloadArgs) -> Result<()> {
    let path = download_tract_boundaries(&args.state, args.year, &args.out, args.force)?;
    println!("{}", path.display());
    Ok(())
}
