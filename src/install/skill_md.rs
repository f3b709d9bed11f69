//! SKILL.md rendering for the simple install path.

use std::fmt::{self, Write};

use crate::catalog::{CatalogEntry, SkillSource};

/// File name of the skill descriptor.
pub const SKILL_MD: &str = "SKILL.md";

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the descriptor document for a catalog entry.
pub fn render(entry: &CatalogEntry) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_document(&mut out, entry);
    out
}

fn write_document(out: &mut String, entry: &CatalogEntry) -> fmt::Result {
    writeln!(out, "---")?;
    writeln!(out, "name: {}", entry.name)?;
    writeln!(out, "description: {}", entry.description)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out, "# {}", entry.name)?;
    writeln!(out)?;
    writeln!(out, "{}", entry.description)?;
    if let Some(localized) = &entry.description_localized {
        writeln!(out)?;
        writeln!(out, "{}", localized)?;
    }

    writeln!(out)?;
    writeln!(out, "## Capabilities")?;
    writeln!(out)?;
    writeln!(out, "{}", bullet_list(&entry.capabilities))?;

    writeln!(out)?;
    writeln!(out, "## Usage Scenarios")?;
    writeln!(out)?;
    writeln!(out, "{}", bullet_list(&entry.scenarios))?;

    if !entry.dependencies.is_empty() {
        writeln!(out)?;
        writeln!(out, "## Prerequisites")?;
        writeln!(out)?;
        writeln!(out, "{}", bullet_list(&entry.dependencies))?;
    }

    match &entry.source {
        SkillSource::Github { repo } => {
            writeln!(out)?;
            writeln!(out, "## Source")?;
            writeln!(out)?;
            writeln!(out, "- GitHub: https://github.com/{}", repo)?;
            writeln!(out, "- Type: github")?;
        }
        SkillSource::Other { .. } => {}
    }

    writeln!(out)?;
    writeln!(out, "## Quick Start")?;
    writeln!(out)?;
    writeln!(out, "```bash")?;
    writeln!(out, "# Installation handled by Skillio")?;
    writeln!(out, "skillio install {}", entry.name)?;
    writeln!(out, "```")?;

    writeln!(out)?;
    writeln!(out, "## Notes")?;
    writeln!(out)?;
    // Debug keeps the trailing ".0" on whole scores
    writeln!(out, "- Quality Score: {:?}/10", entry.quality_score)?;
    writeln!(
        out,
        "- License: {}",
        entry.license.as_deref().unwrap_or("Unknown")
    )?;

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(
        out,
        "*Generated by Skillio v{}*",
        env!("CARGO_PKG_VERSION")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github_entry() -> CatalogEntry {
        let mut entry = CatalogEntry::new("video-downloader", "Download videos");
        entry.capabilities = vec!["download youtube videos".to_string()];
        entry.scenarios = vec!["save a lecture".to_string()];
        entry.dependencies = vec!["ffmpeg".to_string()];
        entry.quality_score = 9.5;
        entry.license = Some("Unlicense".to_string());
        entry.source = SkillSource::Github {
            repo: "yt-dlp/yt-dlp".to_string(),
        };
        entry
    }

    #[test]
    fn starts_with_front_matter() {
        let md = render(&github_entry());
        assert!(md.starts_with("---\nname: video-downloader\ndescription: Download videos\n---\n"));
    }

    #[test]
    fn includes_metadata_sections() {
        let md = render(&github_entry());

        assert!(md.contains("## Capabilities\n\n- download youtube videos\n"));
        assert!(md.contains("## Usage Scenarios\n\n- save a lecture\n"));
        assert!(md.contains("## Prerequisites\n\n- ffmpeg\n"));
        assert!(md.contains("- GitHub: https://github.com/yt-dlp/yt-dlp"));
        assert!(md.contains("skillio install video-downloader"));
        assert!(md.contains("- Quality Score: 9.5/10"));
        assert!(md.contains("- License: Unlicense"));
    }

    #[test]
    fn omits_optional_sections() {
        let entry = CatalogEntry::new("git-helper", "Git tips");
        let md = render(&entry);

        assert!(!md.contains("## Prerequisites"));
        assert!(!md.contains("## Source"));
        assert!(md.contains("- License: Unknown"));
    }

    #[test]
    fn whole_quality_scores_keep_one_decimal() {
        let mut entry = CatalogEntry::new("git-helper", "Git tips");
        entry.quality_score = 8.0;

        assert!(render(&entry).contains("- Quality Score: 8.0/10"));
    }

    #[test]
    fn includes_localized_description() {
        let mut entry = CatalogEntry::new("pdf-toolkit", "PDF tools");
        entry.description_localized = Some("PDF 工具".to_string());

        assert!(render(&entry).contains("PDF tools\n\nPDF 工具\n"));
    }
}
