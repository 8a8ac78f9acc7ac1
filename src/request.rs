use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

// One form submission. Built when the user clicks download, handed to the
// worker thread, and dropped once the result comes back.
#[derive(Debug, Clone)]
pub struct Request {
    pub page_url: String,
    pub directory: String,
    pub file_name: String,
}

impl Request {
    /// Builds a request from the raw form fields. All three fields must be
    /// non-empty; the page URL additionally has every whitespace character
    /// stripped, since URLs pasted from the site often carry stray spaces
    /// and line breaks.
    pub fn from_fields(page_url: &str, directory: &str, file_name: &str) -> Result<Self> {
        if page_url.trim().is_empty() || directory.trim().is_empty() || file_name.trim().is_empty()
        {
            return Err(anyhow!("Please fill in all fields."));
        }

        let page_url = page_url.chars().filter(|c| !c.is_whitespace()).collect();

        Ok(Self {
            page_url,
            directory: directory.to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// Where the transcoder should write the video. No overwrite check.
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.directory).join(format!("{}.mp4", self.file_name))
    }
}
