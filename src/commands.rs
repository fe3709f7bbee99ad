mod convert;

pub use self::convert::{convert, ConvertError};

use std::{error, fmt, str::FromStr};

/// Conversion direction
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// SAM input, BAM output
    SamToBam,
    /// BAM input, SAM output
    BamToSam,
}

impl Direction {
    /// The extension expected on the input path, without the leading `.`.
    pub fn src_extension(self) -> &'static str {
        match self {
            Self::SamToBam => "sam",
            Self::BamToSam => "bam",
        }
    }

    /// The extension appended to the output path, without the leading `.`.
    pub fn dst_extension(self) -> &'static str {
        match self {
            Self::SamToBam => "bam",
            Self::BamToSam => "sam",
        }
    }
}

impl clap::ValueEnum for Direction {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::SamToBam, Self::BamToSam]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        use clap::builder::PossibleValue;

        match self {
            Self::SamToBam => Some(PossibleValue::new("sam-to-bam")),
            Self::BamToSam => Some(PossibleValue::new("bam-to-sam")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SamToBam => "sam-to-bam".fmt(f),
            Self::BamToSam => "bam-to-sam".fmt(f),
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct ParseDirectionError(String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid direction: {}", self.0)
    }
}

impl error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sam-to-bam" => Ok(Self::SamToBam),
            "bam-to-sam" => Ok(Self::BamToSam),
            _ => Err(ParseDirectionError(s.into())),
        }
    }
}
