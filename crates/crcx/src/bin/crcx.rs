//! Compute CRCs of files or standard input.
//!
//! This binary is intentionally small and dependency-free:
//! - Parameters come from `--preset`, `--params`, or individual flags
//! - Without any of those it falls back to `CRCX_PARAMS`, then CRC-32/CKSUM
//! - Each input prints one `0x<crc> <name>` line

use std::{
  env,
  fs::File,
  io::{self, Read},
  process::ExitCode,
};

use crcx::{Crc, CrcParams, CrcTable, config, io::ChecksumReader};

#[derive(Clone, Debug, Default)]
struct Args {
  preset: Option<String>,
  params: Option<String>,
  width: Option<u8>,
  poly: Option<u64>,
  init: Option<u64>,
  xorout: Option<u64>,
  refin: bool,
  refout: bool,
  table: bool,
  verbose: bool,
  files: Vec<String>,
}

enum Failure {
  Help,
  Usage(String),
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args, Failure> {
  let mut args = Args::default();
  while let Some(arg) = it.next() {
    match arg.as_str() {
      "--" => {
        args.files.extend(it.by_ref());
        break;
      }
      "--preset" => args.preset = Some(value(&mut it, "--preset")?),
      "--params" => args.params = Some(value(&mut it, "--params")?),
      "--width" => {
        let v = parse_number("--width", &value(&mut it, "--width")?)?;
        args.width = Some(u8::try_from(v).map_err(|_| Failure::Usage(format!("Invalid value for --width: {v}")))?);
      }
      "--poly" => args.poly = Some(parse_number("--poly", &value(&mut it, "--poly")?)?),
      "--init" => args.init = Some(parse_number("--init", &value(&mut it, "--init")?)?),
      "--xorout" => args.xorout = Some(parse_number("--xorout", &value(&mut it, "--xorout")?)?),
      "--refin" => args.refin = true,
      "--refout" => args.refout = true,
      "--table" => args.table = true,
      "--verbose" | "-v" => args.verbose = true,
      "--help" | "-h" => return Err(Failure::Help),
      other if other.starts_with("--") => return Err(Failure::Usage(format!("Unknown arg: {other}"))),
      _ => args.files.push(arg),
    }
  }
  Ok(args)
}

fn value(it: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, Failure> {
  it.next().ok_or_else(|| Failure::Usage(format!("{flag} requires a value")))
}

fn parse_number(flag: &str, value: &str) -> Result<u64, Failure> {
  let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
    Some(hex) => u64::from_str_radix(hex, 16),
    None => value.parse::<u64>(),
  };
  parsed.map_err(|_| Failure::Usage(format!("Invalid value for {flag}: {value}")))
}

fn print_help() {
  eprintln!(
    "\
crcx: parameterized CRC calculator

USAGE:
  crcx [OPTIONS] [FILE...]

Reads standard input when no FILE is given (or FILE is `-`).

OPTIONS:
  --preset <name>     Named preset, e.g. CRC-16/XMODEM
  --params <text>     Catalogue line, e.g. \"width=16 poly=0x1021 init=0xffff\"
  --width <bits>      Width (multiple of 8, up to 64)
  --poly <value>      Polynomial, normal form
  --init <value>      Initial register value (default 0)
  --xorout <value>    Final XOR value (default 0)
  --refin             Reflect input bytes
  --refout            Reflect the result
  --table             Print the lookup table and exit
  -v, --verbose       Print the parameters in use to stderr

ENVIRONMENT:
  CRCX_PARAMS         Parameters used when no option selects any
"
  );
}

fn resolve(args: &Args) -> Result<CrcParams, String> {
  let flags = args.width.is_some() || args.poly.is_some();
  let selected = usize::from(args.preset.is_some()) + usize::from(args.params.is_some()) + usize::from(flags);
  if selected > 1 {
    return Err("--preset, --params and --width/--poly are mutually exclusive".to_owned());
  }

  if let Some(name) = &args.preset {
    return config::by_name(name).ok_or_else(|| format!("Unknown preset: {name}"));
  }
  if let Some(text) = &args.params {
    return text.parse().map_err(|e| format!("Invalid --params: {e}"));
  }
  if flags {
    let (Some(width), Some(polynomial)) = (args.width, args.poly) else {
      return Err("--width and --poly must be given together".to_owned());
    };
    let params = CrcParams {
      width,
      polynomial,
      initial: args.init.unwrap_or(0),
      xor_out: args.xorout.unwrap_or(0),
      reflect_in: args.refin,
      reflect_out: args.refout,
    };
    params.check().map_err(|e| e.to_string())?;
    return Ok(params);
  }
  if args.init.is_some() || args.xorout.is_some() || args.refin || args.refout {
    return Err("--init, --xorout, --refin and --refout need --width and --poly".to_owned());
  }

  Ok(config::from_env().unwrap_or(CrcParams::CRC32_CKSUM))
}

fn checksum_reader<R: Read>(crc: &Crc, input: R) -> io::Result<u64> {
  let mut reader = ChecksumReader::new(input, crc.clone());
  io::copy(&mut reader, &mut io::sink())?;
  Ok(reader.crc())
}

fn run(args: &Args, params: CrcParams) -> Result<(), String> {
  if args.table {
    let table = CrcTable::for_params(&params).map_err(|e| e.to_string())?;
    print!("{table}");
    return Ok(());
  }

  let crc = Crc::new(params).map_err(|e| e.to_string())?;
  let digits = usize::from(params.width / 4);

  let stdin_only = [String::from("-")];
  let inputs = if args.files.is_empty() {
    &stdin_only[..]
  } else {
    &args.files[..]
  };

  for name in inputs {
    let result = if name == "-" {
      checksum_reader(&crc, io::stdin().lock())
    } else {
      File::open(name).and_then(|file| checksum_reader(&crc, file))
    };
    let value = result.map_err(|e| format!("{name}: {e}"))?;
    println!("0x{value:0digits$x} {name}");
  }
  Ok(())
}

fn main() -> ExitCode {
  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(Failure::Help) => {
      print_help();
      return ExitCode::SUCCESS;
    }
    Err(Failure::Usage(msg)) => {
      eprintln!("crcx: {msg}");
      return ExitCode::from(2);
    }
  };

  let params = match resolve(&args) {
    Ok(params) => params,
    Err(msg) => {
      eprintln!("crcx: {msg}");
      return ExitCode::from(2);
    }
  };

  if args.verbose {
    let name = config::name_of(&params).unwrap_or("custom");
    eprintln!("crcx: {name}: {params}");
  }

  match run(&args, params) {
    Ok(()) => ExitCode::SUCCESS,
    Err(msg) => {
      eprintln!("crcx: {msg}");
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(list: &[&str]) -> Args {
    match parse_args(list.iter().map(|s| (*s).to_owned())) {
      Ok(args) => args,
      Err(_) => panic!("parse failed for {list:?}"),
    }
  }

  #[test]
  fn flags_build_params() {
    let a = args(&["--width", "16", "--poly", "0x1021", "--init", "0xffff"]);
    assert_eq!(resolve(&a).unwrap(), CrcParams::CRC16_IBM_3740);
  }

  #[test]
  fn preset_and_params() {
    assert_eq!(resolve(&args(&["--preset", "crc-8/darc"])).unwrap(), CrcParams::CRC8_DARC);
    let a = args(&["--params", "width=32 poly=0x04c11db7 xorout=0xffffffff"]);
    assert_eq!(resolve(&a).unwrap(), CrcParams::CRC32_CKSUM);
  }

  #[test]
  fn conflicting_sources_are_rejected() {
    assert!(resolve(&args(&["--preset", "crc-8/darc", "--width", "8"])).is_err());
    assert!(resolve(&args(&["--width", "8"])).is_err());
    assert!(resolve(&args(&["--refin"])).is_err());
    assert!(resolve(&args(&["--width", "12", "--poly", "7"])).is_err());
  }

  #[test]
  fn files_and_separator() {
    let a = args(&["-v", "a.bin", "--", "--weird-name"]);
    assert!(a.verbose);
    assert_eq!(a.files, ["a.bin", "--weird-name"]);
  }

  #[test]
  fn usage_errors() {
    assert!(matches!(parse_args(["--bogus".to_owned()].into_iter()), Err(Failure::Usage(_))));
    assert!(matches!(parse_args(["--poly".to_owned()].into_iter()), Err(Failure::Usage(_))));
    assert!(matches!(parse_args(["--width".to_owned(), "999".to_owned()].into_iter()), Err(Failure::Usage(_))));
    assert!(matches!(parse_args(["-h".to_owned()].into_iter()), Err(Failure::Help)));
  }

  #[test]
  fn reader_checksum() {
    let crc = Crc::new(CrcParams::CRC32_CKSUM).unwrap();
    assert_eq!(checksum_reader(&crc, &b"123456789"[..]).unwrap(), 0x765E_7680);
  }
}
