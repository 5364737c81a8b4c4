//! Metadata gathering: everything the naming engine reads about an item.

mod filename;
mod tags;
pub mod types;

pub use filename::parse_file_name;
pub use tags::{read_track_metadata, suitable_suffix, ParsedFile};
pub use types::{FileContext, FilenameDerivedInfo, TrackMetadata, COLLECTION_COMMENT};

use std::path::Path;
use tracing::debug;

/// All inputs for one item.
#[derive(Debug, Clone, Default)]
pub struct Gathered {
    pub context: FileContext,
    pub metadata: TrackMetadata,
    pub from_file_name: FilenameDerivedInfo,
}

/// Collect context, tags and file name fallbacks for `path`.
///
/// Directories are not probed. Files without readable tags get empty metadata
/// so the naming rules fall back to the file name.
pub fn gather(path: &Path) -> Gathered {
    let mut context = FileContext::from_path(path);
    if context.is_directory() {
        return Gathered {
            context,
            ..Default::default()
        };
    }

    let metadata = match read_track_metadata(path) {
        Ok(parsed) => {
            context.suitable_suffix = suitable_suffix(&parsed.file_type, &context.current_suffix);
            parsed.metadata
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No readable tags; using file name only");
            TrackMetadata::default()
        }
    };
    let from_file_name = parse_file_name(&context.current_base_name);

    Gathered {
        context,
        metadata,
        from_file_name,
    }
}
