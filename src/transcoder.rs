use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use std::process::Command;

// The external tool that actually retrieves the stream and writes the
// file. ffmpeg handles the HTTP fetch itself, so all we pass is the
// source URL and the destination path.
#[derive(Debug, Clone)]
pub struct Transcoder {
    program: PathBuf,
}

impl Transcoder {
    /// Locates ffmpeg on the system, preferring whatever `which` reports
    /// and falling back to the usual install paths.
    pub fn locate() -> Result<Self> {
        if let Ok(output) = Command::new("which").arg("ffmpeg").output() {
            if output.status.success() {
                if let Ok(path) = String::from_utf8(output.stdout) {
                    return Ok(Self {
                        program: PathBuf::from(path.trim()),
                    });
                }
            }
        }

        for path in &["/usr/bin/ffmpeg", "/usr/local/bin/ffmpeg", "/bin/ffmpeg"] {
            if Path::new(path).exists() {
                return Ok(Self {
                    program: PathBuf::from(path),
                });
            }
        }

        Err(anyhow!("ffmpeg is not installed. Please install it."))
    }

    /// Uses an explicit program instead of searching the system. Lets
    /// tests substitute a stub executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs `ffmpeg -i <media_url> <output>` and waits for it to finish.
    /// A non-zero exit status is a failure; no cleanup of whatever partial
    /// file ffmpeg may have left behind.
    pub fn save(&self, media_url: &str, output: &Path) -> Result<()> {
        log::info!("running {} -i {} {}", self.program.display(), media_url, output.display());

        let status = Command::new(&self.program)
            .arg("-i")
            .arg(media_url)
            .arg(output)
            .status()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if !status.success() {
            return Err(anyhow!(
                "Error occurred while downloading the video: {} exited with {}",
                self.program.display(),
                status
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_succeeds_on_zero_exit() {
        let transcoder = Transcoder::with_program("true");
        assert!(
            transcoder
                .save("http://x/y.mp4", Path::new("/tmp/out.mp4"))
                .is_ok()
        );
    }

    #[test]
    fn test_save_fails_on_nonzero_exit() {
        let transcoder = Transcoder::with_program("false");
        let err = transcoder
            .save("http://x/y.mp4", Path::new("/tmp/out.mp4"))
            .unwrap_err();
        assert!(err.to_string().contains("downloading the video"));
    }

    #[test]
    fn test_save_fails_when_program_missing() {
        let transcoder = Transcoder::with_program("/nonexistent/ffmpeg");
        assert!(
            transcoder
                .save("http://x/y.mp4", Path::new("/tmp/out.mp4"))
                .is_err()
        );
    }
}
