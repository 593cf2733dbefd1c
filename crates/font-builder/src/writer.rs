//! Font container serialization.

use std::{fs::write, path::Path};

use log::info;
use write_fonts::FontBuilder;

use crate::{Error, Result, assembler::FontTableSet};

impl FontTableSet {
    /// Serialize every table into a TrueType container.
    ///
    /// Output is a pure function of the table set: with a pinned timestamp,
    /// identical input yields identical bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut builder = FontBuilder::new();
        builder.add_table(&self.head)?;
        builder.add_table(&self.hhea)?;
        builder.add_table(&self.maxp)?;
        builder.add_table(&self.os2)?;
        builder.add_table(&self.hmtx)?;
        builder.add_table(&self.cmap)?;
        builder.add_table(&self.name)?;
        builder.add_table(&self.post)?;
        builder.add_table(&self.glyf)?;
        builder.add_table(&self.loca)?;
        Ok(builder.build())
    }

    /// Serialize fully in memory, then write `path` in one go.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_bytes()?;
        write(path, &data)
            .map_err(|source| Error::Write { path: path.to_path_buf(), source })?;
        info!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
