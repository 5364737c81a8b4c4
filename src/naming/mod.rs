//! Naming rule engine.
//!
//! Pure functions from already-extracted metadata to a [`RenameDecision`]:
//! - pre-filters (`desktop.ini`, `*.bak`, `*.tmp`) are checked first, in order;
//! - otherwise a new name is assembled from artist, album, position and title;
//! - with a distribution root, a relative directory is computed as well.
//!
//! Nothing here touches the filesystem; see `apply` for execution.

mod decision;
mod distribution;
mod name;
mod position;
mod rules;
mod sanitize;

pub use decision::{decide, RenameDecision};
pub use distribution::distribution_directory;
pub use name::assemble_name;
pub use position::{digit_count, disk_folder, pad_to_total, position_field, zero_pad};
pub use rules::{
    RuleConfig, COLLECTIONS_LABEL_DEFAULT, FIELD_SEPARATOR_DEFAULT, MISC_LABEL_DEFAULT,
    TITLE_SEPARATOR_DEFAULT,
};
pub use sanitize::{
    is_clean_directory_component, is_clean_file_component, valid_directory_name, valid_file_name,
};
