// HTML → PDF conversion.
// The converter is an external program behind `DocumentConverter`. It either
// returns the PDF bytes or an error; nothing is retried and no partial output
// is ever handed back.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::render::PageGeometry;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("conversion workspace I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("converter produced no output")]
    EmptyOutput,
}

#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn convert(&self, html: &str) -> Result<Bytes, ConversionError>;
}

/// Runs a wkhtmltopdf-compatible binary as
/// `<program> --quiet <page flags> <in.html> <out.pdf>` inside a temp directory.
pub struct CommandConverter {
    program: String,
    geometry: PageGeometry,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>, geometry: PageGeometry) -> Self {
        Self {
            program: program.into(),
            geometry,
        }
    }

    async fn run(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        let result = Command::new(&self.program)
            .arg("--quiet")
            .args(self.geometry.converter_args())
            .arg("--encoding")
            .arg("utf-8")
            .arg(input)
            .arg(output)
            .output()
            .await
            .map_err(|source| ConversionError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(ConversionError::Failed {
                program: self.program.clone(),
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentConverter for CommandConverter {
    async fn convert(&self, html: &str) -> Result<Bytes, ConversionError> {
        // Removed with its contents when dropped.
        let workspace = tempfile::tempdir()?;
        let input = workspace.path().join("resume.html");
        let output = workspace.path().join("resume.pdf");

        tokio::fs::write(&input, html).await?;
        debug!("Converting {} bytes of HTML with {}", html.len(), self.program);

        self.run(&input, &output).await?;

        let pdf = match tokio::fs::read(&output).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConversionError::EmptyOutput)
            }
            Err(e) => return Err(e.into()),
        };
        if pdf.is_empty() {
            return Err(ConversionError::EmptyOutput);
        }

        info!("Converted document to PDF ({} bytes)", pdf.len());
        Ok(Bytes::from(pdf))
    }
}
