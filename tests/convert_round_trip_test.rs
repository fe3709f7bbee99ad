use std::{
    env,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use noodles::sam::{self, alignment::RecordBuf};
use samconv::{commands::convert, Direction};

fn read_sam<P>(src: P) -> anyhow::Result<(sam::Header, Vec<RecordBuf>)>
where
    P: AsRef<Path>,
{
    let mut reader = File::open(src)
        .map(BufReader::new)
        .map(sam::io::Reader::new)?;

    let header = reader.read_header()?;

    let records = reader
        .record_bufs(&header)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((header, records))
}

fn working_prefix(name: &str) -> anyhow::Result<PathBuf> {
    let prefix = env::temp_dir().join("samconv").join(name);
    std::fs::create_dir_all(&prefix)?;
    Ok(prefix)
}

#[test]
fn test_convert_round_trip() -> anyhow::Result<()> {
    let prefix = working_prefix("round_trip")?;

    let src = "tests/fixtures/sample.sam";
    let bam_dst = prefix.join("sample.bam");
    let sam_dst = prefix.join("sample.round-trip.sam");

    convert(src, Some(&bam_dst), Direction::SamToBam)?;
    convert(&bam_dst, Some(&sam_dst), Direction::BamToSam)?;

    let (expected_header, expected_records) = read_sam(src)?;
    let (actual_header, actual_records) = read_sam(&sam_dst)?;

    assert_eq!(actual_header, expected_header);
    assert_eq!(actual_records.len(), expected_records.len());
    assert_eq!(actual_records, expected_records);

    Ok(())
}

#[test]
fn test_convert_round_trip_with_gzipped_source() -> anyhow::Result<()> {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    let prefix = working_prefix("gzipped_source")?;

    let src = prefix.join("sample.sam.gz");

    let mut encoder =
        File::create(&src).map(|f| GzEncoder::new(f, Compression::default()))?;
    encoder.write_all(&std::fs::read("tests/fixtures/sample.sam")?)?;
    encoder.finish()?;

    let bam_dst = prefix.join("sample.bam");
    let sam_dst = prefix.join("sample.round-trip.sam");

    convert(&src, Some(&bam_dst), Direction::SamToBam)?;
    convert(&bam_dst, Some(&sam_dst), Direction::BamToSam)?;

    let (expected_header, expected_records) = read_sam("tests/fixtures/sample.sam")?;
    let (actual_header, actual_records) = read_sam(&sam_dst)?;

    assert_eq!(actual_header, expected_header);
    assert_eq!(actual_records, expected_records);

    Ok(())
}

#[test]
fn test_convert_with_derived_output_path() -> anyhow::Result<()> {
    let prefix = working_prefix("derived_output_path")?;

    let src = prefix.join("sample.sam");
    std::fs::copy("tests/fixtures/sample.sam", &src)?;

    convert(&src, None, Direction::SamToBam)?;

    let dst = prefix.join("sample.bam");

    let mut reader = File::open(dst).map(noodles::bam::io::Reader::new)?;
    let header = reader.read_header()?;

    assert_eq!(header.reference_sequences().len(), 2);

    let record_count = reader.records().count();
    assert_eq!(record_count, 5);

    Ok(())
}

#[test]
fn test_convert_with_a_missing_source() {
    let src = Path::new("/no/such/reads.sam");

    let err = convert(src, None, Direction::SamToBam).unwrap_err();

    assert_eq!(err.to_string(), "Could not open /no/such/reads.sam!");
}
