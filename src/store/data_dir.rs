//! The `.relais/` data directory layout.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let root = base_path.as_ref().join(".relais");
        Self { root }
    }

    pub fn initialize(&self) -> Result<()> {
        if self.root.exists() {
            bail!(".relais directory already exists");
        }

        fs::create_dir_all(&self.root).context("Failed to create .relais directory")?;
        fs::create_dir(self.reference_dir()).context("Failed to create reference directory")?;

        self.create_readme()?;

        Ok(())
    }

    pub fn load(&self) -> Result<()> {
        if !self.root.exists() {
            bail!(".relais directory does not exist. Run 'relais init' first.");
        }

        // Auto-create missing structure instead of failing
        if !self.reference_dir().exists() {
            fs::create_dir(self.reference_dir())
                .context("Failed to create missing reference directory")?;
        }

        Ok(())
    }

    fn create_readme(&self) -> Result<()> {
        let readme_content = r#"# relais Data Directory

This directory is managed by relais CLI and contains:

- `parcels.json` - The parcel collection (replaced as a whole on every write)
- `pipelines.json` - Pipeline and stage definitions
- `context.json` - Operator context (active pipeline)
- `reference/` - Read-only reference data (products, villes, quartiers, businesses)

Do not manually edit these files unless you know what you're doing.
"#;

        let readme_path = self.root.join("README.md");
        fs::write(readme_path, readme_content).context("Failed to create README.md")?;

        Ok(())
    }

    pub fn parcels_file(&self) -> PathBuf {
        self.root.join("parcels.json")
    }

    pub fn pipelines_file(&self) -> PathBuf {
        self.root.join("pipelines.json")
    }

    pub fn context_file(&self) -> PathBuf {
        self.root.join("context.json")
    }

    pub fn reference_dir(&self) -> PathBuf {
        self.root.join("reference")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
