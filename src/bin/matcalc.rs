//! Command-line front end for the matrix-algebra library.
//!
//! Operations take matrix literals in the canonical bracket format, e.g.
//! `matcalc add "[[1,2],[3,4]]" "[[5,6],[7,8]]"`, and print the result in
//! the same format.
use anyhow::{bail, Context, Result};

use matrix_algebra::{algebra, io, parse, Matrix};

const USAGE: &str = "usage: matcalc <operation> <args...>
  id <n>                  identity matrix
  zero <m> <n>            zero matrix
  value <m> <n> <v>       constant matrix
  scalar <s> <matrix>     scalar multiplication
  add <m1> <m2>           matrix addition
  subtract <m1> <m2>      matrix subtraction
  multiply <m1> <m2>      matrix multiplication
  dot <v1> <v2>           dot product of two row vectors
  augment <matrix> <v>    append a coefficient column
  csv <path>              load a matrix from a CSV file";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (operation, rest) = match args.split_first() {
        Some(split) => split,
        None => bail!("{}", USAGE),
    };

    match (operation.as_str(), rest) {
        ("id", [n]) => {
            let n = parse_dimension(n)?;
            println!("{}", Matrix::identity(n));
        }
        ("zero", [m, n]) => {
            let m = parse_dimension(m)?;
            let n = parse_dimension(n)?;
            println!("{}", Matrix::zeros(m, n));
        }
        ("value", [m, n, v]) => {
            let m = parse_dimension(m)?;
            let n = parse_dimension(n)?;
            let v: f64 = v
                .parse()
                .with_context(|| format!("cannot parse \"{}\" as a number", v))?;
            println!("{}", Matrix::from_elem(m, n, v));
        }
        ("scalar", [s, m]) => {
            let s: f64 = s
                .parse()
                .with_context(|| format!("cannot parse \"{}\" as a number", s))?;
            let m: Matrix = m.parse()?;
            println!("{}", algebra::scalar_multiply(&m, s));
        }
        ("add", [m1, m2]) => {
            let m1: Matrix = m1.parse()?;
            let m2: Matrix = m2.parse()?;
            println!("{}", algebra::add(&m1, &m2)?);
        }
        ("subtract", [m1, m2]) => {
            let m1: Matrix = m1.parse()?;
            let m2: Matrix = m2.parse()?;
            println!("{}", algebra::subtract(&m1, &m2)?);
        }
        ("multiply", [m1, m2]) => {
            let m1: Matrix = m1.parse()?;
            let m2: Matrix = m2.parse()?;
            println!("{}", algebra::multiply(&m1, &m2)?);
        }
        ("dot", [v1, v2]) => {
            let v1 = parse::vector_from_str(v1)?;
            let v2 = parse::vector_from_str(v2)?;
            println!("{}", algebra::dot_product(&v1, &v2)?);
        }
        ("augment", [m, c]) => {
            let m: Matrix = m.parse()?;
            let c = parse::vector_from_str(c)?;
            println!("{}", m.augment_column(&c)?);
        }
        ("csv", [path]) => {
            let matrix = io::read_matrix_strict(path)?;
            println!("{}", matrix);
        }
        _ => bail!("{}", USAGE),
    }

    Ok(())
}

fn parse_dimension(value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .with_context(|| format!("cannot parse \"{}\" as a dimension", value))
}
