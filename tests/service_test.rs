//! Tests for MetricsService

use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use treemetrics::application::{ApplicationError, MetricsReport, MetricsService};
use treemetrics::config::{DiameterAlgorithm, InputFormat, Settings, Traversal};
use treemetrics::domain::{Metrics, Node, Tree};
use treemetrics::util::testing;

fn service(traversal: Traversal, diameter: DiameterAlgorithm) -> MetricsService {
    testing::init_test_setup();
    MetricsService::new(Settings {
        traversal,
        diameter,
        ..Settings::default()
    })
}

#[rstest]
#[case(Traversal::Recursive, DiameterAlgorithm::Linear)]
#[case(Traversal::Recursive, DiameterAlgorithm::Quadratic)]
#[case(Traversal::Iterative, DiameterAlgorithm::Linear)]
#[case(Traversal::Iterative, DiameterAlgorithm::Quadratic)]
fn given_any_strategy_when_analyzing_sample_then_reports_same_metrics(
    #[case] traversal: Traversal,
    #[case] diameter: DiameterAlgorithm,
) {
    // Arrange
    let service = service(traversal, diameter);
    let tree = service.load("1{2{4,5},3{6,7}}").unwrap();

    // Act
    let report = service.analyze(&tree);

    // Assert
    assert_eq!(
        report,
        MetricsReport {
            height: 3,
            count: 7,
            sum: 28,
            diameter: 5,
            traversal,
            diameter_algorithm: diameter,
        }
    );
    assert_eq!(report.metrics(), tree.metrics());
}

#[test]
fn given_empty_tree_when_analyzing_then_reports_zeros() {
    let service = service(Traversal::Iterative, DiameterAlgorithm::Linear);

    let report = service.analyze(&Tree::empty());

    assert_eq!(report.metrics(), Metrics::default());
}

#[test]
fn given_level_format_when_parsing_then_uses_requested_notation() {
    let service = service(Traversal::Iterative, DiameterAlgorithm::Linear);

    let tree = service.parse("10", InputFormat::Level).unwrap();
    assert_eq!(tree, Tree::new(Node::new(10)));

    let err = service.parse("1{2}", InputFormat::Level).unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
}

#[test]
fn given_configured_level_format_when_loading_then_parses_level_order() {
    testing::init_test_setup();
    let service = MetricsService::new(Settings {
        input_format: InputFormat::Level,
        ..Settings::default()
    });

    let tree = service.load("1,2,3,4,5,6,7").unwrap();

    assert_eq!(tree.count(), 7);
    assert_eq!(tree.diameter(), 5);
}

#[test]
fn given_tree_file_when_loading_then_parses_contents() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.txt");
    fs::write(&path, "1{2{4,5},3{6,7}}\n").unwrap();
    let service = service(Traversal::Recursive, DiameterAlgorithm::Linear);

    // Act
    let tree = service.load_file(&path).unwrap();

    // Assert
    assert_eq!(service.analyze(&tree).sum, 28);
}

#[test]
fn given_missing_file_when_loading_then_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let service = service(Traversal::Iterative, DiameterAlgorithm::Linear);

    let err = service.load_file(&dir.path().join("missing.txt")).unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("missing.txt"));
}

#[rstest]
#[case(Traversal::Recursive)]
#[case(Traversal::Iterative)]
fn given_random_tree_when_cross_checking_then_diameters_agree(#[case] traversal: Traversal) {
    let service = service(traversal, DiameterAlgorithm::Linear);
    let tree = service.generate(5_000, 99);

    let (linear, quadratic) = service.cross_check_diameter(&tree);

    assert_eq!(linear, quadratic);
    assert_eq!(service.analyze(&tree).count, 5_000);
}

#[test]
fn given_report_when_serialized_then_uses_lowercase_names() {
    let service = service(Traversal::Recursive, DiameterAlgorithm::Quadratic);
    let report = service.analyze(&Tree::new(Node::new(4)));

    let text = toml::to_string(&report).unwrap();

    assert!(text.contains("traversal = \"recursive\""));
    assert!(text.contains("diameter_algorithm = \"quadratic\""));
    assert!(text.contains("sum = 4"));
}
