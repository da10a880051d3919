use std::io::Write;
use std::path::Path;

use param_syntax_core::{
    AnalysisConfig, Category, CommandCatalog, CommandMetadata, Mode, ParameterDescriptor,
    ParameterSet, Request, StyledLine, SyntaxError, analyze, inspect,
};
use param_syntax_registry::{CommandRegistry, RegistryError, SyntaxConfig};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn deploy_metadata() -> CommandMetadata {
    CommandMetadata::new("Invoke-Deploy")
        .with_alias("deploy")
        .with_set(
            ParameterSet::new("ByName")
                .with_parameter(ParameterDescriptor::mandatory("Name"))
                .with_parameter(ParameterDescriptor::optional("Environment"))
                .with_parameter(ParameterDescriptor::switch("Force"))
                .with_parameter(ParameterDescriptor::switch("WhatIf")),
        )
        .with_set(
            ParameterSet::new("ById")
                .with_parameter(ParameterDescriptor::mandatory("Id").with_value_type("int"))
                .with_parameter(ParameterDescriptor::switch("Force")),
        )
}

fn write_catalog(path: &Path, commands: Vec<CommandMetadata>) {
    let mut catalog = CommandCatalog::new("1.0.0");
    catalog.commands = commands;
    let mut f = std::fs::File::create(path).unwrap();
    serde_json::to_writer_pretty(&mut f, &catalog).unwrap();
    f.flush().unwrap();
}

fn lines(registry: &CommandRegistry, text: &str, mode: Mode) -> Vec<String> {
    inspect(&Request::new(text, mode), registry, &AnalysisConfig::default())
        .unwrap()
        .iter()
        .map(StyledLine::text)
        .collect()
}

// ---------------------------------------------------------------------------
// Pipeline over a file-backed registry
// ---------------------------------------------------------------------------

#[test]
fn test_validate_against_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    write_catalog(&path, vec![deploy_metadata()]);

    let registry = CommandRegistry::from_catalog(&path).unwrap();
    let output = lines(&registry, "deploy -Id 7 -Force -Verbose -Region eu", Mode::Validate);

    assert_eq!(
        output,
        vec![
            "ParameterSet Name: ByName - Validated List",
            "Invoke-Deploy -Name <value> ✗ -Environment <value> -Force ✓",
            "",
            "ParameterSet Name: ById - Validated List",
            "Invoke-Deploy -Id <int> ✓ -Force ✓",
            "",
            "Parameters Not Found:",
            "  -Region",
        ]
    );
}

#[test]
fn test_show_parameters_against_directory() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = serde_yaml::to_string(&deploy_metadata()).unwrap();
    std::fs::write(dir.path().join("invoke-deploy.yaml"), yaml).unwrap();

    let registry = CommandRegistry::from_dir(dir.path()).unwrap();
    let output = lines(&registry, "Invoke-Deploy -Whatever", Mode::ShowParameters);

    assert_eq!(
        output,
        vec![
            "ParameterSet Name: ByName - Parameter List",
            "Invoke-Deploy -Name <value> -Environment <value> -Force",
            "",
            "ParameterSet Name: ById - Parameter List",
            "Invoke-Deploy -Id <int> -Force",
            "",
        ]
    );
}

#[test]
fn test_configured_common_parameters_are_respected() {
    let mut registry = CommandRegistry::new();
    registry.insert(deploy_metadata());

    let config = AnalysisConfig {
        common_parameters: vec!["Force".into()],
        ..AnalysisConfig::default()
    };
    let annotation = analyze(
        &Request::new("deploy -Name x -WhatIf", Mode::Validate),
        &registry,
        &config,
    )
    .unwrap();

    let by_name: Vec<(&str, Category)> = annotation.sets[0]
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.category))
        .collect();
    assert_eq!(
        by_name,
        vec![
            ("Name", Category::Matched),
            ("Environment", Category::OptionalAbsent),
            ("WhatIf", Category::Matched),
        ]
    );
    assert!(annotation.not_found.is_empty());
}

#[test]
fn test_unknown_command_through_registry() {
    let registry = CommandRegistry::new();
    let err = inspect(
        &Request::new("Get-Nothing -X", Mode::Validate),
        &registry,
        &AnalysisConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err, SyntaxError::CommandNotFound("Get-Nothing".into()));
}

// ---------------------------------------------------------------------------
// Configuration-driven loading
// ---------------------------------------------------------------------------

#[test]
fn test_config_builds_layered_registry() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("commands")).unwrap();
    let metadata_path = dir.path().join("commands").join("deploy.json");
    std::fs::write(
        &metadata_path,
        serde_json::to_string_pretty(&deploy_metadata()).unwrap(),
    )
    .unwrap();

    let config_path = dir.path().join("param-syntax.yaml");
    std::fs::write(
        &config_path,
        "version: \"1.0\"\nregistry:\n  include_builtin: false\n  paths:\n    - commands\n",
    )
    .unwrap();

    let config = SyntaxConfig::load(&config_path).unwrap();
    let registry = config.registry_builder().build().unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.contains("deploy"));
}

#[test]
fn test_invalid_catalog_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    write_catalog(
        &path,
        vec![
            CommandMetadata::new("Get-Item").with_alias("gi"),
            CommandMetadata::new("GI"),
        ],
    );

    let err = CommandRegistry::from_catalog(&path).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidCatalog { .. }));
}

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

#[cfg(feature = "builtin-catalog")]
#[test]
fn test_builtin_copy_item() {
    let registry = CommandRegistry::builtin().unwrap();
    let output = lines(
        &registry,
        "cp -Path a.txt -Destination b.txt -WhatIf -Bogus",
        Mode::Validate,
    );

    assert_eq!(output[0], "ParameterSet Name: Path - Validated List");
    assert!(output[1].starts_with("Copy-Item -Path <string[]> ✓ -Destination <string> ✓"));
    assert!(!output[1].contains("WhatIf"));
    assert_eq!(output[3], "ParameterSet Name: LiteralPath - Validated List");
    assert!(output[4].starts_with("Copy-Item -LiteralPath <string[]> ✗"));
    assert_eq!(&output[6..], ["Parameters Not Found:", "  -Bogus"]);
}
