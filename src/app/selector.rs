use crate::app::models::ScanConfig;

/// True if the lower-cased name ends with a configured extension or equals a configured literal name.
pub fn is_selected(file_name: &str, config: &ScanConfig) -> bool {
    let name = file_name.to_lowercase();

    config.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
        || config.literal_names.contains(&name)
}
