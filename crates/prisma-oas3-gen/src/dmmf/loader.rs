use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use super::Datamodel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataModelFormat {
  #[default]
  Json,
  Yaml,
}

impl DataModelFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// Reads a DMMF document from disk.
pub struct DataModelLoader {
  file: AsyncMmapFile,
  format: DataModelFormat,
}

impl DataModelLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = DataModelFormat::from_path(path);
    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file, format })
  }

  #[must_use]
  pub const fn format(&self) -> DataModelFormat {
    self.format
  }

  pub fn parse(&self) -> anyhow::Result<Datamodel> {
    let content = std::str::from_utf8(self.file.as_slice())?;
    let datamodel = match self.format {
      DataModelFormat::Json => Datamodel::from_json(content)?,
      DataModelFormat::Yaml => Datamodel::from_yaml(content)?,
    };
    Ok(datamodel)
  }
}
