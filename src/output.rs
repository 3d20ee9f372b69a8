use log::info;
use std::path::Path;

use crate::error::ImportError;
use crate::model::RecipeRecord;

/// Write `record` as a one-row CSV table with a header, replacing whatever
/// `path` held before.
pub fn write_record(path: &Path, record: &RecipeRecord) -> Result<(), ImportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.serialize(record.to_row())?;
    writer.flush()?;
    info!("Wrote recipe record to {}", path.display());
    Ok(())
}
