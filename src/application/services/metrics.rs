//! Metrics service
//!
//! Turns text into trees and trees into reports, picking the traversal and
//! diameter algorithm from [`Settings`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::{DiameterAlgorithm, InputFormat, Settings, Traversal};
use crate::domain::{metrics, metrics_stack, parse_bracket, parse_level, random_tree, Metrics, Tree};

/// Metrics of one tree together with how they were computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub height: usize,
    pub count: usize,
    pub sum: i64,
    pub diameter: usize,
    pub traversal: Traversal,
    pub diameter_algorithm: DiameterAlgorithm,
}

impl MetricsReport {
    pub fn metrics(&self) -> Metrics {
        Metrics {
            height: self.height,
            count: self.count,
            sum: self.sum,
            diameter: self.diameter,
        }
    }
}

/// Service computing tree metrics according to the configured strategy.
#[derive(Debug, Clone, Default)]
pub struct MetricsService {
    settings: Settings,
}

impl MetricsService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parse `input` in the given notation.
    #[instrument(level = "debug", skip(self, input))]
    pub fn parse(&self, input: &str, format: InputFormat) -> ApplicationResult<Tree> {
        let tree = match format {
            InputFormat::Bracket => parse_bracket(input)?,
            InputFormat::Level => parse_level(input)?,
        };
        Ok(tree)
    }

    /// Parse `input` in the configured notation.
    pub fn load(&self, input: &str) -> ApplicationResult<Tree> {
        self.parse(input, self.settings.input_format)
    }

    /// Read and parse a tree file in the configured notation.
    #[instrument(level = "debug", skip(self))]
    pub fn load_file(&self, path: &Path) -> ApplicationResult<Tree> {
        let content = fs::read_to_string(path).with_path_context("read tree", path)?;
        self.load(&content)
    }

    /// Generate a seeded random tree of `size` nodes.
    pub fn generate(&self, size: usize, seed: u64) -> Tree {
        random_tree(size, seed)
    }

    /// Compute all metrics of `tree`.
    #[instrument(level = "debug", skip_all, fields(traversal = %self.settings.traversal))]
    pub fn analyze(&self, tree: &Tree) -> MetricsReport {
        let root = tree.root();
        let mut measured = match self.settings.traversal {
            Traversal::Recursive => metrics::measure(root),
            Traversal::Iterative => metrics_stack::measure(root),
        };

        if self.settings.diameter == DiameterAlgorithm::Quadratic {
            debug!("recomputing diameter with quadratic reference algorithm");
            measured.diameter = metrics::diameter_quadratic(root);
        }

        info!(
            height = measured.height,
            count = measured.count,
            diameter = measured.diameter,
            "measured tree"
        );

        MetricsReport {
            height: measured.height,
            count: measured.count,
            sum: measured.sum,
            diameter: measured.diameter,
            traversal: self.settings.traversal,
            diameter_algorithm: self.settings.diameter,
        }
    }

    /// Compare the linear diameter with the quadratic reference.
    ///
    /// Returns `(linear, quadratic)`. The linear value uses the configured
    /// traversal; the quadratic one is always recursive.
    #[instrument(level = "debug", skip_all)]
    pub fn cross_check_diameter(&self, tree: &Tree) -> (usize, usize) {
        let root = tree.root();
        let linear = match self.settings.traversal {
            Traversal::Recursive => metrics::diameter(root),
            Traversal::Iterative => metrics_stack::diameter(root),
        };
        (linear, metrics::diameter_quadratic(root))
    }
}
