mod document;

use std::{
    convert::Infallible,
    io::Read,
    path::PathBuf,
    str::FromStr,
};

pub use self::document::parse_document;
use crate::{core::forecast::ForecastPoint, prelude::*};

/// Where the exported forecast document is read from.
#[derive(Clone, Debug, derive_more::Display)]
pub enum Source {
    #[display("stdin")]
    Stdin,

    #[display("{}", _0.display())]
    File(PathBuf),
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(if value == "-" { Self::Stdin } else { Self::File(PathBuf::from(value)) })
    }
}

impl Source {
    /// Load the forecast.
    ///
    /// # Returns
    ///
    /// [`None`] when the source is missing or unreadable as a whole.
    #[instrument(skip_all, fields(source = %self))]
    pub fn load(&self) -> Option<Vec<ForecastPoint>> {
        match self.read().and_then(|text| parse_document(&text)) {
            Ok(points) => Some(points),
            Err(error) => {
                error!("the forecast source is missing: {error:#}");
                None
            }
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
                Ok(text)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display())),
        }
    }
}
