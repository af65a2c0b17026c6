use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Where the CLI writes the rendered page.
#[derive(Debug, Clone)]
pub enum PageOutput {
    Stdout,
    File(String),
}

impl PageOutput {
    pub fn new(path: Option<String>) -> Self {
        path.map_or(PageOutput::Stdout, PageOutput::File)
    }

    pub fn write(&self, html: &str) -> Result<()> {
        match self {
            PageOutput::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
            PageOutput::File(path) => {
                let full_path = Path::new(path);
                if let Some(parent) = full_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(full_path, html)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/page.html");
        let output = PageOutput::new(Some(path.to_str().unwrap().to_string()));

        output.write("<main></main>").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "<main></main>");
    }
}
