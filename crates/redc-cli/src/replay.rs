//! Replay saved fuzz inputs through the differential check.

use redc_harness::{check, Verdict};
use std::fs;

pub fn run(files: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0usize;

    for file in files {
        let data = fs::read(file)?;
        match check(&data) {
            Ok(Verdict::Skipped) => {
                println!("{file}: skipped ({} bytes match no size class)", data.len())
            }
            Ok(Verdict::Agreed(class)) => println!("{file}: ok {class}"),
            Err(fatal) => {
                eprintln!("{file}: {fatal}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} of {} input(s) failed", files.len()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use redc_bignum::WORD_BYTES;
    use std::path::PathBuf;

    fn temp_file(name: &str, data: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("redc_replay_{}_{name}", std::process::id()));
        fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_cli_replay_ok_and_skipped() {
        let ok = temp_file("ok.bin", &vec![0u8; 13 * WORD_BYTES]);
        let short = temp_file("short.bin", &[1, 2, 3]);
        let files = vec![
            ok.to_string_lossy().into_owned(),
            short.to_string_lossy().into_owned(),
        ];
        run(&files).unwrap();
        let _ = fs::remove_file(ok);
        let _ = fs::remove_file(short);
    }

    #[test]
    fn test_cli_replay_missing_file() {
        assert!(run(&["/nonexistent/redc/input.bin".to_string()]).is_err());
    }
}
