use lsd_radix::RadixSort;

fn main() {
    let mut inputs = Vec::new();
    inputs.extend_from_slice(&[55, 22, 73, 4, 89, 0, 100, 3]);

    match inputs.radix_sort() {
        Ok(()) => println!("{:?}", &inputs[..]),
        Err(e) => eprintln!("sort failed: {}", e),
    }
}
