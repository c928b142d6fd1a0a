//! Corpus seed generation.

use crate::parse_classes;
use redc_harness::Operands;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

pub fn run(words: &str, count: usize, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    if count == 0 || count > 10_000 {
        return Err("count must be between 1 and 10000".into());
    }
    let classes = parse_classes(words)?;
    let dir = Path::new(output);
    fs::create_dir_all(dir)?;

    for class in classes {
        for i in 0..count {
            let seed = Operands::random(class)?;
            let bytes = Zeroizing::new(seed.to_bytes());
            let path = dir.join(format!("mp_redc_N{}_{i}.bin", class.words()));
            fs::write(&path, bytes.as_slice())?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redc_harness::{check, Verdict};
    use redc_types::SizeClass;

    #[test]
    fn test_cli_seed_writes_valid_inputs() {
        let dir = std::env::temp_dir().join(format!("redc_seed_{}", std::process::id()));
        let out = dir.to_string_lossy().into_owned();
        run("6", 2, &out).unwrap();

        for i in 0..2 {
            let data = fs::read(dir.join(format!("mp_redc_N6_{i}.bin"))).unwrap();
            assert_eq!(check(&data).unwrap(), Verdict::Agreed(SizeClass::W6));
        }
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_cli_seed_invalid_args() {
        let out = std::env::temp_dir().to_string_lossy().into_owned();
        assert!(run("12", 1, &out).is_err());
        assert!(run("4", 0, &out).is_err());
    }
}
