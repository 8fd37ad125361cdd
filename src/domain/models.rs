use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Header,
    Source,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Header, Category::Source];

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Category::Header => &[".hpp", ".h"],
            Category::Source => &[".cpp", ".c"],
        }
    }

    /// Variable name used for this category's block in the merged layout.
    pub fn variable_name(self) -> &'static str {
        match self {
            Category::Header => "header",
            Category::Source => "source",
        }
    }

    /// Case-sensitive suffix match of the file name against the extension table.
    pub fn classify(path: &Path) -> Option<Category> {
        let file_name = path.file_name()?.as_encoded_bytes();
        Category::ALL.into_iter().find(|category| {
            category
                .extensions()
                .iter()
                .any(|ext| file_name.ends_with(ext.as_bytes()))
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Header => write!(f, "header"),
            Category::Source => write!(f, "source"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub category: Category,
}

/// Files found under one root, in walk-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<FileEntry>,
}

impl Listing {
    pub fn push(&mut self, path: PathBuf, category: Category) {
        self.entries.push(FileEntry { path, category });
    }

    pub fn of(&self, category: Category) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .map(|entry| entry.path.clone())
            .collect()
    }

    pub fn headers(&self) -> Vec<PathBuf> {
        self.of(Category::Header)
    }

    pub fn sources(&self) -> Vec<PathBuf> {
        self.of(Category::Source)
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|entry| entry.path.clone()).collect()
    }

    pub fn merge(mut self, other: Listing) -> Listing {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDir {
    pub path: PathBuf,
    pub variable_name: String,
}

impl RootDir {
    pub fn new(path: impl Into<PathBuf>, variable_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            variable_name: variable_name.into(),
        }
    }
}

/// How listings from several roots are turned into `set()` blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// One block per category, combining every root.
    #[default]
    Merged,
    /// One block per root holding all of its recognized files.
    PerRoot,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub roots: Vec<RootDir>,
    pub output_path: Option<String>,
    pub layout: Layout,
}
