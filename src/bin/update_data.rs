use optcg_data::Harvester;

fn run() -> optcg_data::Result<()> {
    let harvester = Harvester::builder().build()?;
    harvester.update_prices()?;
    harvester.update_cards()?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
