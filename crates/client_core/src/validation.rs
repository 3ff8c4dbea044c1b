use shared::{domain::FileDescriptor, error::ValidationError};

/// Checks a picked file against the CSV and size rules, in that order.
///
/// Either the declared media type or the file name is enough to count as CSV.
pub fn validate_selection(
    file: &FileDescriptor,
    max_file_size: u64,
) -> Result<(), ValidationError> {
    if !file.has_csv_media_type() && !file.has_csv_extension() {
        return Err(ValidationError::NotCsv);
    }
    if file.size_bytes > max_file_size {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}
