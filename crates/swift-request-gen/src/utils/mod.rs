pub mod path;
pub mod refs;
pub mod spec;
pub mod text;


pub(crate) use path::{PATH_SEPARATOR, PathLookupError, object_by_path};
pub(crate) use refs::resolve_refs;
pub(crate) use text::doc_comment_lines;
