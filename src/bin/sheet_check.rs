use std::io::{self, Write};

use stockroom::config::Config;
use stockroom::inventory::{self, Capabilities, OsProbe};
use stockroom::logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    let caps = Capabilities::detect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let table = inventory::run(&mut out, &OsProbe, &cfg.inventory, &caps)?;
    if table.is_none() {
        inventory::write_install_hint(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
