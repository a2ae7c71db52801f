use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Graph traversal and rendering into memory are infallible: any value is a valid node key
/// and any function is a valid edge lookup. Errors only arise once output leaves the process,
/// e.g. when streaming DOT code into a writer.
///
/// # Examples
///
/// ```rust
/// use xykit::{graph::DotConfig, Error};
///
/// let mut out: Vec<u8> = Vec::new();
/// let nodes = ["a", "b"];
/// match DotConfig::new("g").write_to(&mut out, &nodes, |_| Vec::new(), |_| String::new()) {
///     Ok(()) => println!("wrote {} bytes", out.len()),
///     Err(Error::Io(err)) => eprintln!("I/O error: {err}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Writing rendered output failed.
    ///
    /// Wraps the underlying [`std::io::Error`] raised by the destination writer.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
