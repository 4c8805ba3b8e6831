#![doc = include_str!("../README.md")]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgGroup, Parser};

use static_huffman::{decode, encode, header_bytes, CodingError, Container};

/// File compressor built on static binary Huffman coding.
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(group = ArgGroup::new("direction").required(true))]
pub struct Conf {
    /// Compress ORIGINAL into COMPRESSED
    #[arg(short = 'c', group = "direction")]
    pub compress: bool,

    /// Restore ORIGINAL from COMPRESSED
    #[arg(short = 'd', group = "direction")]
    pub decompress: bool,

    /// The uncompressed file: input of -c, output of -d
    pub original: PathBuf,

    /// The compressed file: output of -c, input of -d
    pub compressed: PathBuf,
}

fn read_file(path: &PathBuf) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))
}

fn write_file(path: &PathBuf, bytes: &[u8]) -> Result<(), String> {
    fs::write(path, bytes).map_err(|e| format!("cannot write {}: {}", path.display(), e))
}

fn describe_decode_error(path: &Path, err: &CodingError) -> String {
    if err.is_malformed() {
        format!("{} is not a valid compressed file: {}", path.display(), err)
    } else {
        format!("decompressing {}: {}", path.display(), err)
    }
}

fn run_compress(conf: &Conf) -> Result<(), String> {
    let input = read_file(&conf.original)?;
    let start = Instant::now();
    let container = encode(&input)
        .map_err(|e| format!("compressing {}: {}", conf.original.display(), e))?;
    let mut bytes = Vec::with_capacity(container.write_bytes());
    container
        .write(&mut bytes)
        .map_err(|e| format!("serializing {}: {}", conf.compressed.display(), e))?;
    let elapsed = start.elapsed();
    write_file(&conf.compressed, &bytes)?;

    println!(
        "{} -> {}: {} -> {} bytes (ratio {:.3})",
        conf.original.display(),
        conf.compressed.display(),
        input.len(),
        bytes.len(),
        bytes.len() as f64 / input.len().max(1) as f64
    );
    if !input.is_empty() {
        let header = header_bytes(container.frequencies.number_of_occurring_values());
        let payload_bits = container.payload.len() * 8 - container.padding as usize;
        println!(
            "entropy {:.3} bits/byte, coded at {:.3} bits/byte plus a {} byte header",
            container.frequencies.entropy(),
            payload_bits as f64 / input.len() as f64,
            header
        );
    }
    println!("compression time: {:.4} s", elapsed.as_secs_f64());
    Ok(())
}

fn run_decompress(conf: &Conf) -> Result<(), String> {
    let input = read_file(&conf.compressed)?;
    let start = Instant::now();
    let output = Container::from_bytes(&input)
        .and_then(|container| decode(&container))
        .map_err(|e| describe_decode_error(&conf.compressed, &e))?;
    let elapsed = start.elapsed();
    write_file(&conf.original, &output)?;

    println!(
        "{} -> {}: {} -> {} bytes",
        conf.compressed.display(),
        conf.original.display(),
        input.len(),
        output.len()
    );
    println!("decompression time: {:.4} s", elapsed.as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    // clap exits with 2 on usage errors; this tool promises 1
    let conf = match Conf::try_parse() {
        Ok(conf) => conf,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };
    let result = if conf.compress { run_compress(&conf) } else { run_decompress(&conf) };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_exactly_one_direction() {
        assert!(Conf::try_parse_from(["huffzip", "-c", "in.txt", "out.hz"]).is_ok());
        assert!(Conf::try_parse_from(["huffzip", "-d", "in.txt", "out.hz"]).is_ok());
        assert!(Conf::try_parse_from(["huffzip", "in.txt", "out.hz"]).is_err());
        assert!(Conf::try_parse_from(["huffzip", "-c", "-d", "in.txt", "out.hz"]).is_err());
    }

    #[test]
    fn requires_both_paths() {
        assert!(Conf::try_parse_from(["huffzip", "-c", "in.txt"]).is_err());
        assert!(Conf::try_parse_from(["huffzip", "-c"]).is_err());
    }

    #[test]
    fn decode_errors_name_the_file() {
        let path = Path::new("broken.hz");
        let malformed = describe_decode_error(path, &CodingError::UnexpectedPayload);
        assert!(malformed.starts_with("broken.hz is not a valid compressed file"));
        let truncated = describe_decode_error(
            path,
            &CodingError::TruncatedStream { decoded: 1, expected: 2 },
        );
        assert!(truncated.starts_with("decompressing broken.hz"));
    }
}
