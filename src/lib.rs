//! VNN-LIB parsing and property compilation.
//!
//! VNN-LIB is the subset of SMT-LIB used to describe neural network
//! verification properties: bounds on the input vector of a network and
//! linear constraints on its output vector. This crate reads such
//! specifications into a syntax tree and compiles them into a list of
//! input boxes paired with output polytopes.
//!
//! ```
//! let script = vnnlib::parse_str("
//!     (declare-const X_0 Real)
//!     (declare-const Y_0 Real)
//!     (assert (<= X_0 1))
//!     (assert (>= X_0 0))
//!     (assert (>= Y_0 0))
//! ", true).unwrap();
//!
//! let properties = vnnlib::compile(&script, vnnlib::Config::default()).unwrap();
//! assert_eq!(properties.len(), 1);
//! assert_eq!(properties[0].polytopes[0].matrix, vec![vec![-1.0]]);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use utf8_decode::UnsafeDecoder;

pub mod location;
pub use location::*;

pub mod error;
pub use error::{Error, Result};

pub mod syntax;
pub use syntax::{Lexer, Script};

pub mod transform;
pub use transform::{Transform, Transformer, Transformed};

pub mod compile;
pub use compile::{Config, Compiler, Property, InputBox, Interval, Polytope};

/// Character decoder over the bytes of a reader.
pub type Decoder<R> = UnsafeDecoder<io::Bytes<R>>;

/**
 * Printable list.
 */
pub(crate) struct PList<'a, T: 'a>(&'a Vec<T>);

impl<'a, T: 'a + fmt::Display> fmt::Display for PList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_first() {
            Some((e, list)) => {
                e.fmt(f)?;
                for e in list.iter() {
                    write!(f, " ")?;
                    e.fmt(f)?
                }
            },
            None => ()
        }

        Ok(())
    }
}

/**
 * Parse a specification from its text.
 *
 * In strict mode, numeric literals with an exponent are rejected.
 */
pub fn parse_str(text: &str, strict: bool) -> Result<Script> {
    Ok(syntax::parse(text, strict)?)
}

/**
 * Parse a specification read from the given reader.
 *
 * The input is decoded lazily as the parser consumes it.
 */
pub fn parse_reader<R: Read>(reader: R, strict: bool) -> Result<Script> {
    let decoder: Decoder<BufReader<R>> = UnsafeDecoder::new(BufReader::new(reader).bytes());
    Ok(syntax::Parser::new(Lexer::new(decoder, strict))?.parse_script()?)
}

/**
 * Parse the specification file at the given path.
 */
pub fn parse_file<P: AsRef<Path>>(path: P, strict: bool) -> Result<Script> {
    let file = File::open(path.as_ref())?;
    log::debug!("parsing {}", path.as_ref().display());
    parse_reader(file, strict)
}

/**
 * Compile a script into the disjunctive normal form of its assertions.
 */
pub fn compile(script: &Script, config: Config) -> Result<Vec<Property>> {
    Ok(compile::compile(script, config)?)
}

/**
 * Read the specification file at the given path and compile it with the usual
 * `X_i` input and `Y_i` output variable names.
 *
 * Exponent notation is accepted in numeric literals.
 */
pub fn read_vnnlib_simple<P: AsRef<Path>>(path: P, num_inputs: usize, num_outputs: usize) -> Result<Vec<Property>> {
    let script = parse_file(path, false)?;
    compile(&script, Config::default().with_input_size(num_inputs).with_output_size(num_outputs))
}
