use curve_table::table::write_table;
use std::io::{stdout, BufWriter, Write};

fn main() {
    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());

    write_table(&mut out).unwrap();

    out.flush().unwrap();
}
