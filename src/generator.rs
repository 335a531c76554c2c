//! Writes the app icon set to disk
//!
//! One SVG file per entry of [`REFERENCE_SIZES`], named `<prefix>-<size>.svg`.
//! Progress lines go to a caller-supplied writer; the CLI passes stdout.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::error::GenerateError;
use crate::settings::{FailurePolicy, GeneratorSettings};
use crate::{render_icon_with_config, IconConfig};

/// Pixel sizes required by the app icon set, in generation order
pub const REFERENCE_SIZES: [u32; 9] = [20, 40, 58, 60, 80, 87, 120, 180, 1024];

/// File name of the icon for `size`
pub fn artifact_name(prefix: &str, size: u32) -> String {
    format!("{}-{}.svg", prefix, size)
}

/// Outcome of a generation run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Files written, in generation order
    pub written: Vec<PathBuf>,
    /// Sizes that could not be written (only with [`FailurePolicy::Continue`])
    pub failures: Vec<GenerateError>,
}

impl GenerationReport {
    /// True when every requested icon was written
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders and persists icons according to [`GeneratorSettings`]
#[derive(Debug, Clone)]
pub struct Generator {
    settings: GeneratorSettings,
    icon: IconConfig,
}

impl Generator {
    pub fn new(settings: GeneratorSettings) -> Self {
        let icon = IconConfig::new().with_svg(settings.svg.clone());
        Self { settings, icon }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Path the icon for `size` is written to
    pub fn artifact_path(&self, size: u32) -> PathBuf {
        self.settings
            .output_dir
            .join(artifact_name(&self.settings.prefix, size))
    }

    /// Render and write one file per size, reporting progress to `out`
    ///
    /// With [`FailurePolicy::Abort`] the first failed write is returned as
    /// the error. With [`FailurePolicy::Continue`] failed sizes are collected
    /// in the report and the remaining sizes are still written.
    pub fn generate<W: Write>(
        &self,
        sizes: &[u32],
        out: &mut W,
    ) -> Result<GenerationReport, GenerateError> {
        let dir = &self.settings.output_dir;
        fs::create_dir_all(dir).map_err(|e| GenerateError::create_dir(dir, e))?;

        writeln!(
            out,
            "Generating {} SVG icons in {}",
            sizes.len(),
            dir.display()
        )?;

        let mut report = GenerationReport::default();
        for &size in sizes {
            match self.write_icon(size) {
                Ok(path) => {
                    writeln!(out, "Created {}", artifact_name(&self.settings.prefix, size))?;
                    report.written.push(path);
                }
                Err(err) => match self.settings.failure_policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Continue => {
                        warn!("{}", err);
                        writeln!(out, "Failed {}", artifact_name(&self.settings.prefix, size))?;
                        report.failures.push(err);
                    }
                },
            }
        }

        if report.is_complete() {
            writeln!(out, "Done: {} SVG icons created", report.written.len())?;
        } else {
            writeln!(
                out,
                "Done: {} SVG icons created, {} failed",
                report.written.len(),
                report.failures.len()
            )?;
        }

        Ok(report)
    }

    fn write_icon(&self, size: u32) -> Result<PathBuf, GenerateError> {
        let path = self.artifact_path(size);
        let svg = render_icon_with_config(f64::from(size), &self.icon);
        debug!("rendered {} bytes for size {}", svg.len(), size);

        fs::write(&path, svg).map_err(|e| GenerateError::write(size, &path, e))?;
        info!("wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name() {
        assert_eq!(artifact_name("icon", 20), "icon-20.svg");
        assert_eq!(artifact_name("todo", 1024), "todo-1024.svg");
    }

    #[test]
    fn test_artifact_name_embeds_only_its_size() {
        let name = artifact_name("icon", 1024);
        assert!(name.contains("1024"));
        for other in REFERENCE_SIZES.iter().filter(|&&s| s != 1024) {
            assert!(!name.contains(&other.to_string()), "{} in {}", other, name);
        }
    }

    #[test]
    fn test_reference_sizes_are_unique() {
        let mut sizes = REFERENCE_SIZES.to_vec();
        sizes.sort_unstable();
        sizes.dedup();
        assert_eq!(sizes.len(), REFERENCE_SIZES.len());
    }

    #[test]
    fn test_artifact_path_uses_output_dir() {
        let generator = Generator::new(
            GeneratorSettings::new()
                .with_output_dir("AppIcon.appiconset")
                .with_prefix("todo"),
        );
        assert_eq!(
            generator.artifact_path(60),
            PathBuf::from("AppIcon.appiconset").join("todo-60.svg")
        );
    }
}
