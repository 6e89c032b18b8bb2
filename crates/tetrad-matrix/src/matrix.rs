//! Matrix generation across every package of a release.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tetrad_config::{PackageDeclaration, PeerDependencySet, ReleaseConfig};

use crate::descriptor::BuildDescriptor;
use crate::error::Result;
use crate::external::ExternalClassifier;
use crate::format::Format;
use crate::targets::build_targets;

/// Ordered build descriptors for a whole release.
///
/// Grouped by package in declaration order, and within each group in
/// [`Format::ALL`] order. Consumers read it positionally.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Matrix {
    descriptors: Vec<BuildDescriptor>,
}

impl Matrix {
    pub fn descriptors(&self) -> &[BuildDescriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BuildDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The four descriptors of `package`, if it is part of the matrix.
    pub fn package(&self, package: &str) -> Option<&[BuildDescriptor]> {
        let start = self.descriptors.iter().position(|d| d.package == package)?;
        Some(&self.descriptors[start..start + Format::ALL.len()])
    }

    pub fn into_vec(self) -> Vec<BuildDescriptor> {
        self.descriptors
    }

    fn push_group(&mut self, group: [BuildDescriptor; 4]) {
        self.descriptors.extend(group);
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a BuildDescriptor;
    type IntoIter = std::slice::Iter<'a, BuildDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

/// Builds descriptors for a fixed peer set and banner organization.
///
/// Holds no global state; independent generators can run side by side with
/// different peer sets.
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    external: ExternalClassifier,
    organization: Arc<str>,
}

impl MatrixGenerator {
    pub fn new(peers: PeerDependencySet, organization: impl Into<String>) -> Self {
        Self {
            external: ExternalClassifier::new(peers),
            organization: Arc::from(organization.into()),
        }
    }

    /// Generator for a loaded release configuration.
    pub fn from_config(config: &ReleaseConfig) -> Self {
        Self::new(config.peers.clone(), config.organization.clone())
    }

    /// The classifier every descriptor from this generator shares.
    pub fn classifier(&self) -> &ExternalClassifier {
        &self.external
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// The four descriptors of one package, in [`Format::ALL`] order.
    pub fn build_targets(&self, package: &PackageDeclaration) -> Result<[BuildDescriptor; 4]> {
        build_targets(package, &self.external, &self.organization)
    }

    /// Lazily build each package's group in declaration order.
    ///
    /// A misconfigured package yields an `Err` item; groups already yielded
    /// are unaffected.
    pub fn targets<'a>(
        &'a self,
        packages: &'a [PackageDeclaration],
    ) -> impl Iterator<Item = Result<[BuildDescriptor; 4]>> + 'a {
        packages.iter().map(move |package| self.build_targets(package))
    }

    /// Build the whole matrix, stopping at the first misconfigured package.
    pub fn generate(&self, packages: &[PackageDeclaration]) -> Result<Matrix> {
        let mut matrix = Matrix::default();
        for group in self.targets(packages) {
            matrix.push_group(group?);
        }
        tracing::info!(
            packages = packages.len(),
            descriptors = matrix.len(),
            "generated build matrix"
        );
        Ok(matrix)
    }

    /// Like [`generate`](Self::generate), but packages are built on the rayon
    /// pool. Output order and the reported error (the first misconfigured
    /// package in declaration order) are the same.
    pub fn generate_parallel(&self, packages: &[PackageDeclaration]) -> Result<Matrix> {
        let groups: Vec<Result<[BuildDescriptor; 4]>> = packages
            .par_iter()
            .map(|package| self.build_targets(package))
            .collect();

        let mut matrix = Matrix::default();
        for group in groups {
            matrix.push_group(group?);
        }
        tracing::info!(
            packages = packages.len(),
            descriptors = matrix.len(),
            parallel = true,
            "generated build matrix"
        );
        Ok(matrix)
    }
}
