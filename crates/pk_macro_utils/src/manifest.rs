use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

const FULL_KIT_NAME: &str = "persistkit";
const CORE_KIT_NAME: &str = "pk_core";
const SHORT_KIT_NAME: &str = "pk";
const KIT_PREFIX: &str = "pk_";

// Facade crates that re-export the workspace members under their short names,
// in resolution order.
const FACADES: [&str; 3] = [FULL_KIT_NAME, CORE_KIT_NAME, SHORT_KIT_NAME];

/// The parsed Cargo.toml of the crate a proc-macro is expanding in.
///
/// Generated code cannot assume how the invoking crate spells its dependency
/// on this workspace: it may depend on `pk_persist` directly, or on one of the
/// facade crates (`persistkit`, `pk_core`, `pk`) that re-export it. The
/// manifest decides which [`syn::Path`] is actually nameable from there.
///
/// # Example
///
/// ```rust
/// # use pk_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("pk_persist"));
/// ```
///
/// Reading and parsing the manifest is not cheap, so results are cached per
/// manifest path; still, call [`Manifest::shared`] once per derive invocation
/// and reuse the returned path.
///
/// # Resolution rules
///
/// For a requested crate `pk_*`, checked against `dependencies` first and
/// `dev-dependencies` second:
///
/// 1. A direct dependency resolves to `::pk_*`.
/// 2. A facade dependency resolves to `::facade::*` with the `pk_` prefix
///    stripped (e.g. `pk_persist` via `persistkit` becomes
///    `::persistkit::persist`). Facades are tried in the order `persistkit`,
///    `pk_core`, `pk`.
/// 3. Anything else falls back to the absolute path `::pk_*`.
///
/// ## Note
/// Inside a workspace member itself, library code spells the crate `crate::`
/// while its doctests spell it `::pk_persist`. Declaring
/// `extern crate self as pk_persist;` in the crate root lets the generated
/// absolute path work for both.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

impl Manifest {
    // Locate the caller's `Cargo.toml`.
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");

        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn get_manifest_modified_time(manifest_path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    // Parse a known-good path string into a syntax tree node.
    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    #[inline]
    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            // The crate is a direct dependency.
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(KIT_PREFIX)?;

        for facade in FACADES {
            if deps.contains_key(facade) {
                let mut path = Self::parse_str::<syn::Path>(&format!("::{facade}"));
                path.segments.push(Self::parse_str(module));
                return Some(path);
            }
        }

        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// this manifest. See the type-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(Item::Table(deps)) = self.manifest.get("dependencies")
            && let Some(path) = Self::find_in_deps(deps, name)
        {
            return path;
        }

        if let Some(Item::Table(deps)) = self.manifest.get("dev-dependencies")
            && let Some(path) = Self::find_in_deps(deps, name)
        {
            return path;
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Run `func` against the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Parsed manifests are cached globally and invalidated when the file's
    /// modified time changes, so repeated derive expansions in one crate only
    /// pay for the parse once.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = cache.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(cache);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn to_path_string(path: &syn::Path) -> String {
        let mut out = String::new();
        if path.leading_colon.is_some() {
            out.push_str("::");
        }
        for (index, segment) in path.segments.iter().enumerate() {
            if index > 0 {
                out.push_str("::");
            }
            out.push_str(&segment.ident.to_string());
        }
        out
    }

    fn manifest_from(text: &str) -> Manifest {
        Manifest {
            manifest: toml_edit::Document::parse(String::from(text).into_boxed_str()).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency_wins() {
        let manifest = manifest_from(
            r#"
            [dependencies]
            pk_persist = { path = "../pk_persist" }
            pk_core = { path = "../.." }
            "#,
        );

        let path = manifest.get_crate_path("pk_persist");
        assert_eq!(to_path_string(&path), "::pk_persist");
    }

    #[test]
    fn facade_dependency_appends_short_name() {
        let manifest = manifest_from(
            r#"
            [dependencies]
            pk_core = "0.0.1"
            "#,
        );

        let path = manifest.get_crate_path("pk_persist");
        assert_eq!(to_path_string(&path), "::pk_core::persist");
    }

    #[test]
    fn dev_dependencies_are_searched_second() {
        let manifest = manifest_from(
            r#"
            [dependencies]
            serde_json = "1"

            [dev-dependencies]
            persistkit = "0.0.1"
            "#,
        );

        let path = manifest.get_crate_path("pk_persist");
        assert_eq!(to_path_string(&path), "::persistkit::persist");
    }

    #[test]
    fn unknown_crate_falls_back_to_absolute_path() {
        let manifest = manifest_from("[dependencies]\n");

        let path = manifest.get_crate_path("pk_persist");
        assert_eq!(to_path_string(&path), "::pk_persist");
    }
}
