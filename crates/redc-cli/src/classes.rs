//! List supported size classes.

use redc_bignum::{WORD_BITS, WORD_BYTES};
use redc_types::SizeClass;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{:8} {:>12} {:>12}", "class", "modulus bits", "input bytes");
    for class in SizeClass::ALL {
        println!(
            "{:8} {:>12} {:>12}",
            class.to_string(),
            class.words() * WORD_BITS,
            class.input_len(WORD_BYTES)
        );
    }
    Ok(())
}
