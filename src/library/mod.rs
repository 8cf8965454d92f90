//! # Library
//!
//! The library registry the evaluator depends on, plus its on-disk
//! implementation. A library is "installed" when its `.slib` descriptor
//! file exists under the registry root (`~/.sovy/libraries` by default)
//! and "loaded" once an include statement has loaded it into the running
//! evaluation. Loads are idempotent and additive; there is no unload.

pub mod smath;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::error::Error;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::object::BuiltinFn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryError {
    message: String,
}

impl LibraryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_installed(name: &str) -> Self {
        Self::new(format!(
            "biblioteca '{name}' não está instalada. Use: sovy install {name}"
        ))
    }

    pub fn unknown(name: &str) -> Self {
        Self::new(format!("biblioteca '{name}' não encontrada"))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for LibraryError {}

/// What the evaluator needs to know about libraries. The registry owns
/// the notion of "installed"; the evaluator only loads and asks for
/// bindings.
pub trait LibraryRegistry {
    fn is_installed(&self, name: &str) -> bool;

    fn is_loaded(&self, name: &str) -> bool;

    /// Mark an installed library as loaded. Loading twice is fine.
    fn load(&mut self, name: &str) -> Result<(), LibraryError>;

    /// The native bindings of a recognised library, or `None` when the
    /// library exposes no bindings.
    fn bindings_for(&self, name: &str) -> Option<HashMap<String, BuiltinFn>>;
}

/// The `.slib` descriptor persisted for an installed library.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LibraryDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub functions: BTreeMap<String, String>,
}

/// File-system backed registry. Presence of `<root>/<name>.slib` is the
/// sole installation criterion.
pub struct FsLibraryRegistry {
    library_path: PathBuf,
    loaded: HashSet<String>,
}

impl FsLibraryRegistry {
    /// Registry rooted at `<home>/.sovy/libraries`.
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_root(home.join(".sovy").join("libraries"))
    }

    /// Registry rooted at an explicit directory.
    pub fn with_root(library_path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: library_path.into(),
            loaded: HashSet::new(),
        }
    }

    fn library_file(&self, name: &str) -> PathBuf {
        self.library_path.join(format!("{name}.slib"))
    }

    /// Install a known library by writing its descriptor. Returns the
    /// path of the written `.slib` file.
    pub fn install(&self, name: &str) -> Result<PathBuf, LibraryError> {
        let descriptor = match name {
            "smath" => smath::descriptor(),
            _ => return Err(LibraryError::unknown(name)),
        };

        fs::create_dir_all(&self.library_path).map_err(|error| {
            LibraryError::new(format!("erro ao criar diretório de bibliotecas: {error}"))
        })?;

        let contents = serde_json::to_string_pretty(&descriptor).map_err(|error| {
            LibraryError::new(format!("erro ao serializar descritor de '{name}': {error}"))
        })?;

        let file = self.library_file(name);
        fs::write(&file, contents).map_err(|error| {
            LibraryError::new(format!("erro ao instalar biblioteca '{name}': {error}"))
        })?;

        debug!("biblioteca '{name}' instalada em {}", file.display());
        Ok(file)
    }

    /// The stems of every `.slib` file under the registry root, sorted.
    pub fn installed_libraries(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.library_path) else {
            return vec![];
        };

        let mut libraries: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "slib"))
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect();

        libraries.sort();
        libraries
    }

    pub fn root(&self) -> &Path {
        &self.library_path
    }
}

impl Default for FsLibraryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryRegistry for FsLibraryRegistry {
    fn is_installed(&self, name: &str) -> bool {
        self.library_file(name).exists()
    }

    fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }

    fn load(&mut self, name: &str) -> Result<(), LibraryError> {
        if !self.is_installed(name) {
            return Err(LibraryError::not_installed(name));
        }

        debug!("biblioteca '{name}' carregada");
        self.loaded.insert(name.to_string());
        Ok(())
    }

    fn bindings_for(&self, name: &str) -> Option<HashMap<String, BuiltinFn>> {
        match name {
            "smath" => Some(smath::bindings()),
            _ => None,
        }
    }
}
