//! Display helpers for inventory widgets.

/// Asset path of an inventory icon.
///
/// Record icons name the source texture (`m\Tx_bonemeal_01.tga`); the
/// shipped icons are DDS files under `icons/`.
pub fn inventory_icon_path(icon: &str) -> String {
    if icon.is_empty() {
        return String::new();
    }

    let normalized = icon.replace('\\', "/");
    let file_start = normalized.rfind('/').map_or(0, |slash| slash + 1);
    let stem = match normalized[file_start..].rfind('.') {
        Some(dot) => &normalized[..file_start + dot],
        None => normalized.as_str(),
    };
    format!("icons/{stem}.dds")
}

/// Stack count overlay for an item slot. Single items show no label.
pub fn count_label(count: u32) -> String {
    if count == 1 {
        String::new()
    } else if count > 9999 {
        format!("{}k", count / 1000)
    } else {
        count.to_string()
    }
}
