//! Where template layers are read from

use crate::error::Result;
use include_dir::{include_dir, Dir};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

static EMBEDDED_TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// A single file belonging to a template layer
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Path relative to the layer root
    pub path: PathBuf,
    pub contents: Cow<'static, [u8]>,
}

/// Template source - either compiled into the binary or a local directory
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Embedded(&'static Dir<'static>),
    Local(PathBuf),
}

impl TemplateSource {
    /// Templates bundled with this build
    pub fn embedded() -> Self {
        Self::Embedded(&EMBEDDED_TEMPLATES)
    }

    /// Templates read from a directory on disk (for template development)
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local(path.into())
    }

    /// Human readable description, used in log output
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded(_) => "built-in templates".to_string(),
            TemplateSource::Local(root) => format!("local templates from {}", root.display()),
        }
    }

    /// Location of a layer, as shown in error messages
    pub fn location(&self, layer: &Path) -> String {
        match self {
            TemplateSource::Embedded(_) => format!("<built-in>/{}", layer.display()),
            TemplateSource::Local(root) => root.join(layer).display().to_string(),
        }
    }

    /// Whether a layer directory exists in this source
    pub fn has_layer(&self, layer: &Path) -> bool {
        match self {
            TemplateSource::Embedded(dir) => dir.get_dir(layer).is_some(),
            TemplateSource::Local(root) => root.join(layer).is_dir(),
        }
    }

    /// Every file under a layer, sorted by relative path
    pub fn layer_files(&self, layer: &Path) -> Result<Vec<TemplateFile>> {
        let mut files = match self {
            TemplateSource::Embedded(dir) => {
                let mut files = Vec::new();
                if let Some(layer_dir) = dir.get_dir(layer) {
                    collect_embedded(layer_dir, layer, &mut files);
                }
                files
            }
            TemplateSource::Local(root) => collect_local(&root.join(layer))?,
        };

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }
}

fn collect_embedded(dir: &'static Dir<'static>, layer: &Path, out: &mut Vec<TemplateFile>) {
    for file in dir.files() {
        // Embedded paths are relative to the template root, not the layer
        let path = file
            .path()
            .strip_prefix(layer)
            .unwrap_or_else(|_| file.path())
            .to_path_buf();
        out.push(TemplateFile {
            path,
            contents: Cow::Borrowed(file.contents()),
        });
    }

    for sub in dir.dirs() {
        collect_embedded(sub, layer, out);
    }
}

fn collect_local(layer_root: &Path) -> Result<Vec<TemplateFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(layer_root).follow_links(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry
            .path()
            .strip_prefix(layer_root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        let contents = std::fs::read(entry.path())?;
        files.push(TemplateFile {
            path,
            contents: Cow::Owned(contents),
        });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_layers_exist() {
        let source = TemplateSource::embedded();
        for layer in [
            "common",
            "typescript",
            "javascript",
            "models/pom/typescript",
            "models/pom/javascript",
            "eslint/typescript/strict",
            "eslint/typescript/basic",
            "eslint/javascript/strict",
            "eslint/javascript/basic",
            "prettier/typescript",
            "prettier/javascript",
        ] {
            let path: PathBuf = layer.split('/').collect();
            assert!(source.has_layer(&path), "missing embedded layer {layer}");
        }
    }

    #[test]
    fn test_embedded_files_are_relative_to_layer() {
        let source = TemplateSource::embedded();
        let layer: PathBuf = ["models", "pom", "typescript"].iter().collect();
        let files = source.layer_files(&layer).unwrap();

        assert!(!files.is_empty());
        assert!(files
            .iter()
            .any(|f| f.path == Path::new("pages").join("login.page.ts")));
        assert!(files.iter().all(|f| !f.path.starts_with("models")));
    }

    #[test]
    fn test_local_layer_files_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let layer = tmp.path().join("common");
        std::fs::create_dir_all(layer.join("nested")).unwrap();
        std::fs::write(layer.join("b.txt"), "b").unwrap();
        std::fs::write(layer.join("a.txt"), "a").unwrap();
        std::fs::write(layer.join("nested").join("c.txt"), "c").unwrap();

        let source = TemplateSource::local(tmp.path());
        assert!(source.has_layer(Path::new("common")));
        assert!(!source.has_layer(Path::new("missing")));

        let files = source.layer_files(Path::new("common")).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                Path::new("nested").join("c.txt"),
            ]
        );
        assert_eq!(files[0].contents.as_ref(), b"a");
    }
}
