//! Layer copying with collision detection

use super::resolver::TemplateLayer;
use super::source::TemplateSource;
use crate::error::{Result, ScaffoldError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Copy one layer into `target`, refusing to overwrite any existing file
///
/// Returns the relative paths that were written. On a collision the files
/// written so far are left in place.
pub fn copy_layer(
    source: &TemplateSource,
    layer: &TemplateLayer,
    target: &Path,
) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();

    for file in source.layer_files(&layer.path)? {
        let dest = target.join(&file.path);
        // A file from an earlier layer may sit where this layer needs a directory
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| collision_or_io(e, layer.kind.to_string(), &file.path))?;
        }

        write_new(&dest, &file.contents)
            .map_err(|e| collision_or_io(e, layer.kind.to_string(), &file.path))?;

        tracing::trace!(layer = %layer.kind, file = %file.path.display(), "copied");
        copied.push(file.path);
    }

    Ok(copied)
}

/// Write a file the materializer generates itself, under the same no-clobber rule
pub fn write_generated(target: &Path, name: &str, contents: &[u8]) -> Result<()> {
    write_new(&target.join(name), contents)
        .map_err(|e| collision_or_io(e, name.to_string(), Path::new(name)))
}

fn collision_or_io(err: std::io::Error, layer: String, path: &Path) -> ScaffoldError {
    match err.kind() {
        ErrorKind::AlreadyExists | ErrorKind::NotADirectory => {
            ScaffoldError::CollisionOnMaterialize {
                layer,
                path: path.to_path_buf(),
            }
        }
        _ => ScaffoldError::Io(err),
    }
}

/// Write `contents` to a file that must not exist yet
pub fn write_new(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Language;
    use crate::templates::resolver::LayerKind;

    fn layer(kind: LayerKind, dir: &str) -> TemplateLayer {
        TemplateLayer {
            kind,
            path: PathBuf::from(dir),
        }
    }

    #[test]
    fn test_copies_nested_files() {
        let templates = tempfile::tempdir().unwrap();
        let common = templates.path().join("common");
        std::fs::create_dir_all(common.join("docs")).unwrap();
        std::fs::write(common.join("README.md"), "hello").unwrap();
        std::fs::write(common.join("docs").join("guide.md"), "guide").unwrap();

        let target = tempfile::tempdir().unwrap();
        let source = TemplateSource::local(templates.path());
        let copied = copy_layer(&source, &layer(LayerKind::Common, "common"), target.path()).unwrap();

        assert_eq!(copied.len(), 2);
        assert_eq!(
            std::fs::read_to_string(target.path().join("docs").join("guide.md")).unwrap(),
            "guide"
        );
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let templates = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(templates.path().join("common")).unwrap();
        std::fs::write(templates.path().join("common").join("a.txt"), "new").unwrap();

        let target = tempfile::tempdir().unwrap();
        std::fs::write(target.path().join("a.txt"), "old").unwrap();

        let source = TemplateSource::local(templates.path());
        let err = copy_layer(&source, &layer(LayerKind::Common, "common"), target.path())
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::CollisionOnMaterialize { .. }));
        assert_eq!(
            std::fs::read_to_string(target.path().join("a.txt")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_file_where_directory_is_needed_is_a_collision() {
        let templates = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(templates.path().join("typescript").join("data")).unwrap();
        std::fs::write(
            templates.path().join("typescript").join("data").join("x.ts"),
            "x",
        )
        .unwrap();

        let target = tempfile::tempdir().unwrap();
        std::fs::write(target.path().join("data"), "from common").unwrap();

        let source = TemplateSource::local(templates.path());
        let err = copy_layer(
            &source,
            &layer(LayerKind::LanguageBase(Language::TypeScript), "typescript"),
            target.path(),
        )
        .unwrap_err();

        match err {
            ScaffoldError::CollisionOnMaterialize { layer, path } => {
                assert_eq!(layer, "ts-base");
                assert_eq!(path, Path::new("data").join("x.ts"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(target.path().join("data").is_file());
    }

    #[test]
    fn test_directory_where_file_is_needed_is_a_collision() {
        let templates = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(templates.path().join("typescript")).unwrap();
        std::fs::write(templates.path().join("typescript").join("data"), "file").unwrap();

        let target = tempfile::tempdir().unwrap();
        std::fs::create_dir(target.path().join("data")).unwrap();

        let source = TemplateSource::local(templates.path());
        let err = copy_layer(
            &source,
            &layer(LayerKind::LanguageBase(Language::TypeScript), "typescript"),
            target.path(),
        )
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::CollisionOnMaterialize { .. }));
    }
}
