//! Folder listing: which entries of a folder are documents

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::ListingOrder;
use crate::consts::DOCUMENT_EXTENSION;
use crate::error::AppError;

/// A document found in the folder being accounted
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentPath {
    /// Bare file name, as written to the report
    pub(crate) filename: String,
    pub(crate) path: PathBuf,
}

pub(crate) fn is_document(filename: &str) -> bool {
    filename.ends_with(DOCUMENT_EXTENSION)
}

/// List documents directly inside `folder` (no recursion). Hidden files and
/// symlinks are not special-cased.
pub(crate) fn list_documents(
    folder: &Path,
    order: ListingOrder,
) -> Result<Vec<DocumentPath>, AppError> {
    if !folder.is_dir() {
        return Err(AppError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }

    let read_dir_error = |source| AppError::ReadDir {
        path: folder.to_path_buf(),
        source,
    };

    let mut documents = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        if is_document(&filename) {
            documents.push(DocumentPath {
                filename,
                path: entry.path(),
            });
        }
    }

    if order == ListingOrder::Name {
        documents.sort_by(|a, b| a.filename.cmp(&b.filename));
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "x").unwrap();
    }

    fn names(docs: &[DocumentPath]) -> Vec<&str> {
        docs.iter().map(|d| d.filename.as_str()).collect()
    }

    #[test]
    fn is_document_matches_suffix_only() {
        assert!(is_document("page.md"));
        assert!(is_document(".hidden.md"));
        assert!(is_document(".md"));
        assert!(!is_document("notes.txt"));
        assert!(!is_document("page.MD"));
        assert!(!is_document("page.md.bak"));
        assert!(!is_document("readme.markdown"));
    }

    #[test]
    fn lists_only_documents_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.md", "a.md", "notes.txt", "b.md", ".hidden.md"] {
            touch(dir.path(), name);
        }

        let docs = list_documents(dir.path(), ListingOrder::Name).unwrap();
        assert_eq!(names(&docs), vec![".hidden.md", "a.md", "b.md", "c.md"]);
        assert_eq!(docs[1].path, dir.path().join("a.md"));
    }

    #[test]
    fn listing_order_keeps_the_same_set() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.md", "a.md", "b.md"] {
            touch(dir.path(), name);
        }

        let mut docs = list_documents(dir.path(), ListingOrder::Listing).unwrap();
        assert_eq!(docs.len(), 3);
        docs.sort_by(|a, b| a.filename.cmp(&b.filename));
        assert_eq!(names(&docs), vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "top.md");
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "nested.md");

        let docs = list_documents(dir.path(), ListingOrder::Name).unwrap();
        assert_eq!(names(&docs), vec!["top.md"]);
    }

    #[test]
    fn missing_folder_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = list_documents(&missing, ListingOrder::Name).unwrap_err();
        assert!(matches!(err, AppError::NotADirectory { path } if path == missing));
    }

    #[test]
    fn file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.md");
        let err = list_documents(&dir.path().join("a.md"), ListingOrder::Name).unwrap_err();
        assert!(matches!(err, AppError::NotADirectory { .. }));
    }
}
