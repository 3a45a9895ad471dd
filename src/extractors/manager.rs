//! ExtractorManager - Public API for class metadata extraction
//!
//! Handles file parsing and delegates to the C# extractor. Single files return
//! `anyhow` errors; batches run in parallel and report failures per file so one
//! bad file never sinks the rest.

use crate::extractors::base::{ClassRecord, ExtractionOptions};
use crate::extractors::csharp::CSharpExtractor;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of extracting one file in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileExtraction {
    pub file_path: String,
    pub classes: Vec<ClassRecord>,
    /// Set when the file could not be extracted; `classes` is empty then
    pub error: Option<String>,
}

/// Manager for the structural extractor
#[derive(Debug, Clone, Default)]
pub struct ExtractorManager {
    options: ExtractionOptions,
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractionOptions) -> Self {
        Self { options }
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        crate::language::SUPPORTED_LANGUAGES.to_vec()
    }

    /// Extract every class declared in `content`
    ///
    /// The language is chosen from `file_path`'s extension. Syntax errors do not
    /// fail extraction; declarations tree-sitter could still recognize are kept.
    pub fn extract_classes(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<Vec<ClassRecord>, anyhow::Error> {
        let language = self.get_language_from_extension(file_path)?;
        let tree = crate::language::parse_source(&language, content)?;

        if tree.root_node().has_error() {
            debug!("Syntax errors in {}, extracting recoverable declarations", file_path);
        }

        let extractor = CSharpExtractor::with_options(
            file_path.to_string(),
            content.to_string(),
            self.options,
        );
        let classes = extractor.extract_classes(&tree);

        debug!(
            "Extracted {} classes from {} file: {}",
            classes.len(),
            language,
            file_path
        );
        Ok(classes)
    }

    /// Names of every interface declared in `content`
    pub fn extract_interface_names(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<Vec<String>, anyhow::Error> {
        let language = self.get_language_from_extension(file_path)?;
        let tree = crate::language::parse_source(&language, content)?;

        let extractor = CSharpExtractor::new(file_path.to_string(), content.to_string());
        Ok(extractor.extract_interface_names(&tree))
    }

    /// Extract classes from `(file_path, content)` pairs in parallel
    ///
    /// Results come back in input order. A failing file is logged and reported
    /// through `FileExtraction::error`.
    pub fn extract_files_batch(&self, files: &[(String, String)]) -> Vec<FileExtraction> {
        files
            .par_iter()
            .map(|(file_path, content)| match self.extract_classes(file_path, content) {
                Ok(classes) => FileExtraction {
                    file_path: file_path.clone(),
                    classes,
                    error: None,
                },
                Err(e) => {
                    warn!("Failed to extract classes from {}: {:#}", file_path, e);
                    FileExtraction {
                        file_path: file_path.clone(),
                        classes: Vec::new(),
                        error: Some(format!("{:#}", e)),
                    }
                }
            })
            .collect()
    }

    fn get_language_from_extension(&self, file_path: &str) -> Result<String, anyhow::Error> {
        let extension = Path::new(file_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let language = crate::language::detect_language_from_extension(extension)
            .ok_or_else(|| anyhow::anyhow!("Unsupported file extension: '{}'", extension))?;

        Ok(language.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::NestedMemberPolicy;

    const SERVICE: &str = r#"
/// <summary>Sends mail.</summary>
public class Mailer : Service
{
    public void Send() { Connect(); }
}
"#;

    #[test]
    fn test_extract_classes_from_cs_file() {
        let manager = ExtractorManager::new();
        let classes = manager.extract_classes("src/Mailer.cs", SERVICE).unwrap();

        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Mailer");
        assert_eq!(classes[0].file_path, "src/Mailer.cs");
        assert_eq!(classes[0].summary.as_deref(), Some("Sends mail."));
        assert_eq!(classes[0].methods[0].calls, vec!["Connect"]);
    }

    #[test]
    fn test_unsupported_extension_is_an_error() {
        let manager = ExtractorManager::new();
        let err = manager.extract_classes("main.rs", "fn main() {}").unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn test_empty_file_yields_no_classes() {
        let manager = ExtractorManager::new();
        assert!(manager.extract_classes("Empty.cs", "").unwrap().is_empty());
    }

    #[test]
    fn test_interface_names() {
        let manager = ExtractorManager::new();
        let names = manager
            .extract_interface_names("IRepo.cs", "public interface IRepo { void Save(); }")
            .unwrap();
        assert_eq!(names, vec!["IRepo"]);
    }

    #[test]
    fn test_options_reach_the_extractor() {
        let code = "class Outer { class Inner { void M() { } } }";

        let default = ExtractorManager::new().extract_classes("A.cs", code).unwrap();
        assert!(default[0].methods.is_empty());

        let include = ExtractorManager::with_options(ExtractionOptions {
            nested_members: NestedMemberPolicy::Include,
        })
        .extract_classes("A.cs", code)
        .unwrap();
        assert_eq!(include[0].methods.len(), 1);
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let files = vec![
            ("a/First.cs".to_string(), "class First { }".to_string()),
            ("notes.txt".to_string(), "not code".to_string()),
            ("b/Second.cs".to_string(), SERVICE.to_string()),
        ];

        let results = ExtractorManager::new().extract_files_batch(&files);

        let paths: Vec<&str> = results.iter().map(|r| r.file_path.as_str()).collect();
        assert_eq!(paths, vec!["a/First.cs", "notes.txt", "b/Second.cs"]);

        assert_eq!(results[0].classes[0].name, "First");
        assert!(results[0].error.is_none());

        assert!(results[1].classes.is_empty());
        assert!(results[1].error.as_deref().unwrap().contains("txt"));

        assert_eq!(results[2].classes[0].name, "Mailer");
    }

    #[test]
    fn test_supported_languages() {
        assert_eq!(ExtractorManager::new().supported_languages(), vec!["csharp"]);
    }
}
