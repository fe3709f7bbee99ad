use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use noodles::{
    bam,
    sam::{self, alignment::io::Write},
};
use thiserror::Error;
use tracing::info;

use crate::{output, Direction};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Could not open {1}!")]
    Open(#[source] io::Error, PathBuf),
    #[error("could not create {1}")]
    Create(#[source] io::Error, PathBuf),
    #[error("I/O error")]
    Io(#[source] io::Error),
}

/// Copies the header and records of `src` into the opposite container format.
///
/// When `output_path` is `None`, the destination is derived from `src` via
/// [`output::derive`]. Records stream through one at a time, unmodified.
pub fn convert<P>(
    src: P,
    output_path: Option<&Path>,
    direction: Direction,
) -> Result<(), ConvertError>
where
    P: AsRef<Path>,
{
    let src = src.as_ref();

    let dst = output_path
        .map(PathBuf::from)
        .unwrap_or_else(|| output::derive(src, direction));

    info!(src = ?src, dst = ?dst, %direction, "converting");

    let record_count = match direction {
        Direction::SamToBam => sam_to_bam(src, &dst)?,
        Direction::BamToSam => bam_to_sam(src, &dst)?,
    };

    info!(record_count, "converted");

    Ok(())
}

fn sam_to_bam(src: &Path, dst: &Path) -> Result<u64, ConvertError> {
    let mut reader = crate::sam::open(src).map_err(|e| ConvertError::Open(e, src.into()))?;

    let header = reader
        .read_header()
        .map_err(|e| ConvertError::Open(e, src.into()))?;

    let mut writer = File::create(dst)
        .map(bam::io::Writer::new)
        .map_err(|e| ConvertError::Create(e, dst.into()))?;

    copy_records(&header, reader.records(), &mut writer).map_err(ConvertError::Io)
}

fn bam_to_sam(src: &Path, dst: &Path) -> Result<u64, ConvertError> {
    let mut reader = File::open(src)
        .map(bam::io::Reader::new)
        .map_err(|e| ConvertError::Open(e, src.into()))?;

    let header = reader
        .read_header()
        .map_err(|e| ConvertError::Open(e, src.into()))?;

    let mut writer = File::create(dst)
        .map(BufWriter::new)
        .map(sam::io::Writer::new)
        .map_err(|e| ConvertError::Create(e, dst.into()))?;

    copy_records(&header, reader.records(), &mut writer).map_err(ConvertError::Io)
}

fn copy_records<I, B, W>(header: &sam::Header, records: I, writer: &mut W) -> io::Result<u64>
where
    I: Iterator<Item = io::Result<B>>,
    B: sam::alignment::Record,
    W: Write,
{
    writer.write_alignment_header(header)?;

    let mut record_count = 0;

    for result in records {
        let record = result?;
        writer.write_alignment_record(header, &record)?;
        record_count += 1;
    }

    writer.finish(header)?;

    Ok(record_count)
}
