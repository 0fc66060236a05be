//! Package metadata assembly

use crate::{
    config::PackageOptions,
    core::{
        package::PackageBackend,
        relation::{Relation, RelationParser, collect_relations},
    },
    error::Result,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything the package header describes apart from its files
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub version: String,
    pub release: String,
    pub arch: String,
    pub os: String,
    pub vendor: String,
    pub url: String,
    pub packager: String,
    pub group: String,
    pub licence: String,
    pub epoch: u32,
    pub provides: Vec<Relation>,
    pub requires: Vec<Relation>,
    pub conflicts: Vec<Relation>,
}

impl PackageMetadata {
    /// Build metadata from options, parsing the three relation lists
    #[instrument(skip_all, fields(name = %options.name))]
    pub fn from_options<P>(options: &PackageOptions, parser: &P) -> Result<Self>
    where
        P: RelationParser + ?Sized,
    {
        let provides = collect_relations(parser, "provides", &options.provides)?;
        let requires = collect_relations(parser, "requires", &options.requires)?;
        let conflicts = collect_relations(parser, "conflicts", &options.conflicts)?;

        debug!(
            "Relations: {} provides, {} requires, {} conflicts",
            provides.len(),
            requires.len(),
            conflicts.len()
        );

        Ok(Self {
            name: options.name.clone(),
            summary: options.summary.clone(),
            description: options.description.clone(),
            version: options.version.clone(),
            release: options.release.clone(),
            arch: options.arch.clone(),
            os: options.os.clone(),
            vendor: options.vendor.clone(),
            url: options.url.clone(),
            packager: options.packager.clone(),
            group: options.group.clone(),
            licence: options.licence.clone(),
            epoch: options.epoch,
            provides,
            requires,
            conflicts,
        })
    }

    /// Canonical artifact filename: `name-version-release.arch.rpm`
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-{}.{}.rpm",
            self.name, self.version, self.release, self.arch
        )
    }

    /// Hand the metadata to the backend and get a package to add files to
    #[instrument(skip_all, fields(package = %self.file_name()))]
    pub fn create_package<B>(&self, backend: &B) -> Result<B::Handle>
    where
        B: PackageBackend + ?Sized,
    {
        backend.new_package(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::relation::{Comparator, RegexRelationParser};
    use crate::error::AssemblerError;

    fn options() -> PackageOptions {
        PackageOptions {
            name: "hello".to_string(),
            version: "1.0".to_string(),
            release: "1".to_string(),
            arch: "noarch".to_string(),
            ..PackageOptions::default()
        }
    }

    #[test]
    fn test_from_options_copies_fields() {
        let opts = PackageOptions {
            summary: "greeter".to_string(),
            licence: "MIT".to_string(),
            epoch: 2,
            requires: vec!["glibc >= 2.28".to_string()],
            ..options()
        };
        let parser = RegexRelationParser::new().unwrap();
        let meta = PackageMetadata::from_options(&opts, &parser).unwrap();

        assert_eq!(meta.name, "hello");
        assert_eq!(meta.summary, "greeter");
        assert_eq!(meta.licence, "MIT");
        assert_eq!(meta.epoch, 2);
        assert_eq!(meta.requires.len(), 1);
        assert_eq!(meta.requires[0].comparator, Comparator::GreaterEq);
    }

    #[test]
    fn test_empty_relations_are_empty_lists() {
        let parser = RegexRelationParser::new().unwrap();
        let meta = PackageMetadata::from_options(&options(), &parser).unwrap();
        assert!(meta.provides.is_empty());
        assert!(meta.requires.is_empty());
        assert!(meta.conflicts.is_empty());
    }

    #[test]
    fn test_relation_error_names_category() {
        let opts = PackageOptions {
            provides: vec!["ok".to_string()],
            conflicts: vec!["broken <".to_string()],
            ..options()
        };
        let parser = RegexRelationParser::new().unwrap();
        let err = PackageMetadata::from_options(&opts, &parser).unwrap_err();
        assert!(matches!(
            err,
            AssemblerError::InvalidRelation {
                category: "conflicts",
                ..
            }
        ));
    }

    #[test]
    fn test_file_name() {
        let meta = PackageMetadata {
            name: "pkg".to_string(),
            version: "1.0".to_string(),
            release: "1".to_string(),
            arch: "noarch".to_string(),
            ..PackageMetadata::default()
        };
        assert_eq!(meta.file_name(), "pkg-1.0-1.noarch.rpm");
    }
}
