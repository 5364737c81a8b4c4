//! Zero-padded track and disk positions.

use crate::metadata::{FilenameDerivedInfo, TrackMetadata};

/// Width used when no total is known (pads to two digits).
const DEFAULT_TOTAL: u32 = 10;

/// Number of characters in the decimal representation of `n`.
pub fn digit_count(n: u32) -> usize {
    n.to_string().len()
}

/// Left-pad `n` with zeros to at least `width` characters. Never truncates.
pub fn zero_pad(n: u32, width: usize) -> String {
    format!("{n:0>width$}")
}

/// `pos` padded to as many digits as `total` has.
pub fn pad_to_total(pos: u32, total: u32) -> String {
    zero_pad(pos, digit_count(total))
}

/// Position field for the file name, e.g. `03`, `1-03` or `02-007`.
///
/// The tag position wins; the file name is consulted only when the tag has no
/// usable track position. The disk part appears only for sets of two or more.
pub fn position_field(meta: &TrackMetadata, from_file_name: &FilenameDerivedInfo) -> Option<String> {
    if let Some(track_pos) = meta.track_pos() {
        let mut parts = Vec::with_capacity(2);
        if let (Some(disk_pos), Some(disk_total)) = (meta.disk_pos(), meta.disk_total())
            && disk_total >= 2
        {
            parts.push(pad_to_total(disk_pos, disk_total));
        }
        let total = meta.track_total().unwrap_or(DEFAULT_TOTAL);
        parts.push(pad_to_total(track_pos, total));
        return Some(parts.join("-"));
    }

    from_file_name
        .track_pos()
        .map(|pos| pad_to_total(pos, DEFAULT_TOTAL))
}

/// `Disk NN` directory component for multi-disk sets.
pub fn disk_folder(meta: &TrackMetadata) -> Option<String> {
    match (meta.disk_pos(), meta.disk_total()) {
        (Some(pos), Some(total)) if total >= 2 => Some(format!("Disk {}", pad_to_total(pos, total))),
        _ => None,
    }
}
