use anyhow::Result;
use folio_tui::run_tui;

pub fn main() -> Result<()> {
    env_logger::init();
    run_tui()
}
