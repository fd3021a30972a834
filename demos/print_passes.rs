use log::{info, LevelFilter};
use lsd_radix::observers::LogObserver;
use lsd_radix::utils::format_array;
use lsd_radix::RadixSort;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder().filter_level(LevelFilter::Debug).init();

    let mut inputs = vec![19, 48, 99, 71, 13, 52, 96, 73, 86, 7];

    println!("{}\n", format_array(&inputs));
    inputs.radix_sort_builder().with_printing().sort()?;
    println!("\n{}", format_array(&inputs));

    let mut inputs: Vec<u64> = vec![170, 45, 75, 90, 802, 24, 2, 66];
    info!("sorting {} values with a log observer", inputs.len());
    inputs
        .radix_sort_builder()
        .with_observer(LogObserver)
        .sort()?;

    Ok(())
}
