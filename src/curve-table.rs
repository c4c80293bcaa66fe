use bytemuck::cast_slice;
use curve_table::table::{entries, CurveTable};
use itertools::Itertools;
use parse_int::parse;
use std::fs::write;
use std::io::{Error, ErrorKind, Result};
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

fn parse_index(arg: &str) -> Result<u32> {
    parse::<u32>(arg).map_err(|err| Error::new(ErrorKind::Other, err))
}

/// Compares a loaded table against a freshly generated curve.
fn verify(table: &CurveTable) -> Result<()> {
    let mismatch = table
        .values()
        .iter()
        .copied()
        .zip(entries())
        .find_position(|&(actual, expected)| actual != expected);

    if let Some((index, (actual, expected))) = mismatch {
        println!(
            "[!] Mismatch at index {}: table has {}, curve gives {}.",
            index, actual, expected
        );

        return Err(Error::new(
            ErrorKind::Other,
            "table does not match the active curve",
        ));
    }

    println!("[+] Table matches the active curve.");

    Ok(())
}

fn run(args: Opt) -> Result<()> {
    println!("{}", ASCII_HEADER);

    let table = CurveTable::open(&args.table).map_err(|err| {
        println!("[!] Failed to load curve table!");
        err
    })?;

    println!("[+] Loaded table with {} entries.", table.values().len());

    if args.verify {
        println!("[-] Checking the table against a freshly generated curve.");

        verify(&table)?;
    }

    if let Some(path) = &args.binary {
        // Raw 16-bit words in native byte order.
        write(path, cast_slice(table.values()))?;

        println!(
            "[+] Wrote {} bytes of raw table data to {}.",
            2 * table.values().len(),
            path.display()
        );
    }

    for &index in &args.indices {
        match table.get(index) {
            Some(value) => println!("[+] table[{}] = {}", index, value),
            None => println!("[!] Index {} is out of range.", index),
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run(Opt::from_args()) {
        eprintln!("\nfatal error: {}", err);
        process::exit(1); // report failure
    }
}

#[derive(StructOpt)]
#[structopt(about)]
struct Opt {
    /// Check the table against a freshly generated curve
    #[structopt(long = "verify")]
    verify: bool,

    /// Write the table's values as raw 16-bit words to this file
    #[structopt(long = "binary", parse(from_os_str))]
    binary: Option<PathBuf>,

    /// Path to an emitted table in text form
    #[structopt(parse(from_os_str))]
    table: PathBuf,

    /// Indices to look up, decimal or 0x-prefixed
    #[structopt(parse(try_from_str = parse_index))]
    indices: Vec<u32>,
}

const ASCII_HEADER: &str = r#"
  ____  _   _  ____  __     __ _____    _____     _     ____   _      _____
 / ___|| | | ||  _ \ \ \   / /| ____|  |_   _|   / \   | __ ) | |    | ____|
| |    | | | || |_) | \ \ / / |  _|      | |    / _ \  |  _ \ | |    |  _|
| |___ | |_| ||  _ <   \ V /  | |___     | |   / ___ \ | |_) || |___ | |___
 \____| \___/ |_| \_\   \_/   |_____|    |_|  /_/   \_\|____/ |_____||_____|

              Saturating Transfer-Curve Table Inspection & Export
"#;
