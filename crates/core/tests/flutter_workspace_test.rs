//! End-to-end resolution against a Flutter workspace on disk

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use testscope_core::{
    Config, ConfigurationKind, ExecutionContext, Position, RunDescriptor, SourcePosition,
    TestConfigProducer, TestScope,
};

const CART_TEST: &str = r#"import 'package:flutter_test/flutter_test.dart';

void main() {
  group('cart', () {
    test('adds an item', () {
      expect(1 + 1, 2);
    });

    test('empty ' 'cart', () {
      expect(true, isTrue);
    });

    test('cart $suffix', () {});
  });
}
"#;

struct Workspace {
    _temp: TempDir,
    root: PathBuf,
}

impl Workspace {
    fn app(&self) -> PathBuf {
        self.root.join("packages/app")
    }

    fn cart_test(&self) -> PathBuf {
        self.app().join("test/cart_test.dart")
    }
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A Flutter app with tests next to a plain Dart package
fn workspace() -> Workspace {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("ws");
    write(
        &root.join("packages/app/pubspec.yaml"),
        "name: app\ndependencies:\n  flutter:\n    sdk: flutter\ndev_dependencies:\n  flutter_test:\n    sdk: flutter\n",
    );
    write(&root.join("packages/app/test/cart_test.dart"), CART_TEST);
    write(&root.join("packages/app/lib/cart.dart"), "class Cart {}\n");
    write(
        &root.join("packages/tool/pubspec.yaml"),
        "name: tool\ndependencies:\n  args: ^2.0.0\n",
    );
    write(
        &root.join("packages/tool/test/args_test.dart"),
        "void main() {\n  test('parses', () {});\n}\n",
    );
    Workspace { _temp: temp, root }
}

fn at(ws: &Workspace, file: &Path, line: u32, character: u32) -> ExecutionContext {
    let text = fs::read_to_string(file).unwrap();
    let position = SourcePosition::at(file, text, Position::new(line, character));
    ExecutionContext::source(&ws.root, position)
}

#[test]
fn test_position_inside_test_resolves_name() {
    let ws = workspace();
    let producer = TestConfigProducer::new();

    let descriptor = producer
        .setup_from_context(&at(&ws, &ws.cart_test(), 5, 6))
        .unwrap();
    assert_eq!(
        descriptor.scope(),
        &TestScope::for_test_name("adds an item", ws.cart_test())
    );
    assert_eq!(descriptor.name(), "adds an item");
}

#[test]
fn test_adjacent_literals_concatenate() {
    let ws = workspace();
    let producer = TestConfigProducer::new();

    let descriptor = producer
        .setup_from_context(&at(&ws, &ws.cart_test(), 8, 10))
        .unwrap();
    assert_eq!(descriptor.scope().test_name(), Some("empty cart"));
}

#[test]
fn test_interpolated_name_falls_back_to_file() {
    let ws = workspace();
    let producer = TestConfigProducer::new();

    let descriptor = producer
        .setup_from_context(&at(&ws, &ws.cart_test(), 12, 6))
        .unwrap();
    assert_eq!(descriptor.scope(), &TestScope::for_file(ws.cart_test()));
}

#[test]
fn test_position_in_group_resolves_file() {
    let ws = workspace();
    let producer = TestConfigProducer::new();

    let descriptor = producer
        .setup_from_context(&at(&ws, &ws.cart_test(), 3, 4))
        .unwrap();
    assert_eq!(descriptor.scope(), &TestScope::for_file(ws.cart_test()));
    assert_eq!(descriptor.name(), "tests in cart_test.dart");
}

#[test]
fn test_non_flutter_package_is_rejected() {
    let ws = workspace();
    let producer = TestConfigProducer::new();
    let file = ws.root.join("packages/tool/test/args_test.dart");

    assert!(producer.setup_from_context(&at(&ws, &file, 1, 4)).is_none());
}

#[test]
fn test_file_outside_test_dir_is_rejected() {
    let ws = workspace();
    let producer = TestConfigProducer::new();
    let file = ws.app().join("lib/cart.dart");

    assert!(producer.setup_from_context(&at(&ws, &file, 0, 0)).is_none());
}

#[test]
fn test_directory_contexts() {
    let ws = workspace();
    let producer = TestConfigProducer::new();

    let test_dir = ws.app().join("test");
    let descriptor = producer
        .setup_from_context(&ExecutionContext::directory(&ws.root, &test_dir))
        .unwrap();
    assert_eq!(descriptor.scope(), &TestScope::for_dir(&test_dir));

    // The package root holds test/ below it
    let descriptor = producer
        .setup_from_context(&ExecutionContext::directory(&ws.root, ws.app()))
        .unwrap();
    assert_eq!(descriptor.scope(), &TestScope::for_dir(ws.app()));

    // lib/ holds no tests
    let lib_dir = ws.app().join("lib");
    assert!(
        producer
            .setup_from_context(&ExecutionContext::directory(&ws.root, &lib_dir))
            .is_none()
    );
}

#[test]
fn test_existing_descriptor_is_reused_only_for_same_scope() {
    let ws = workspace();
    let producer = TestConfigProducer::new();

    let inside = at(&ws, &ws.cart_test(), 5, 6);
    let outside = at(&ws, &ws.cart_test(), 3, 4);
    let saved = vec![producer.setup_from_context(&inside).unwrap()];

    assert!(producer.is_configuration_from_context(&saved[0], &inside));
    assert!(!producer.is_configuration_from_context(&saved[0], &outside));

    let reused = producer.find_or_create(&saved, &inside).unwrap();
    assert_eq!(reused, saved[0]);

    let created = producer.find_or_create(&saved, &outside).unwrap();
    assert_eq!(created.scope(), &TestScope::for_file(ws.cart_test()));
}

#[test]
fn test_descriptor_survives_json() {
    let ws = workspace();
    let producer = TestConfigProducer::new();

    let descriptor = producer
        .setup_from_context(&at(&ws, &ws.cart_test(), 5, 6))
        .unwrap();
    let json = descriptor.to_json().unwrap();
    let restored = RunDescriptor::from_json(&json).unwrap();
    assert!(producer.is_configuration_from_context(&restored, &at(&ws, &ws.cart_test(), 6, 0)));
}

#[test]
fn test_command_runs_from_package_root() {
    let ws = workspace();
    let producer = TestConfigProducer::new();

    let descriptor = producer
        .setup_from_context(&at(&ws, &ws.cart_test(), 5, 6))
        .unwrap();
    let command = producer.command_for(&descriptor);
    assert_eq!(command.program, "flutter");
    assert_eq!(command.working_dir.as_deref(), Some(ws.app().as_path()));
    assert!(command.args.contains(&"adds an item".to_string()));
}

#[test]
fn test_config_changes_framework_dependency() {
    let ws = workspace();
    let config = Config {
        framework_dependency: Some("args".to_string()),
        ..Config::default()
    };
    let producer = TestConfigProducer::with_config(config);
    let file = ws.root.join("packages/tool/test/args_test.dart");

    let descriptor = producer.setup_from_context(&at(&ws, &file, 1, 4)).unwrap();
    assert_eq!(descriptor.scope().test_name(), Some("parses"));
    assert!(producer.setup_from_context(&at(&ws, &ws.cart_test(), 5, 6)).is_none());
}

#[test]
fn test_replaces_only_dart_test_configurations() {
    let producer = TestConfigProducer::new();
    assert!(producer.should_replace(&ConfigurationKind::DartTest));
    assert!(!producer.should_replace(&ConfigurationKind::FlutterTest));
    assert!(!producer.should_replace(&ConfigurationKind::Other("app".to_string())));
}
