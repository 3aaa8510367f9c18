pub mod color;
pub mod context;
pub mod docx;
mod error;
pub mod mapping;
pub mod model;
pub mod package;
pub mod style;
pub mod units;
pub mod writer;

pub use color::{Color, HexColor, HighlightColor, ThemeColor};
pub use context::DocumentContext;
pub use docx::{ReadOptions, read_document, read_document_with};
pub use error::Error;
pub use mapping::{PropValue, PropertyBag};
pub use model::{Document, Node};
pub use package::Package;
pub use units::{Length, LengthUnit};
pub use writer::StyleWriterKind;

use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

pub fn read_docx(input: &Path) -> Result<Document, Error> {
    read_docx_with(input, &ReadOptions::default())
}

pub fn read_docx_with(input: &Path, options: &ReadOptions) -> Result<Document, Error> {
    let t0 = Instant::now();

    let package = Package::from_zip(File::open(input)?)?;
    let t_unzip = t0.elapsed();

    let doc = read_document_with(&package, options)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: unzip={:.1}ms, read={:.1}ms, total={:.1}ms ({} sections)",
        t_unzip.as_secs_f64() * 1000.0,
        (t_total - t_unzip).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        doc.sections.len(),
    );

    Ok(doc)
}

pub fn read_docx_bytes(input: &[u8]) -> Result<Document, Error> {
    read_docx_bytes_with(input, &ReadOptions::default())
}

pub fn read_docx_bytes_with(input: &[u8], options: &ReadOptions) -> Result<Document, Error> {
    let t0 = Instant::now();

    let package = Package::from_zip(Cursor::new(input))?;
    let t_unzip = t0.elapsed();

    let doc = read_document_with(&package, options)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: unzip={:.1}ms, read={:.1}ms, total={:.1}ms ({} sections)",
        t_unzip.as_secs_f64() * 1000.0,
        (t_total - t_unzip).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        doc.sections.len(),
    );

    Ok(doc)
}
