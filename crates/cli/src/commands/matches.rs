use anyhow::{Context, Result};
use std::fs;
use testscope_core::{Config, RunDescriptor, TestConfigProducer};
use tracing::debug;

use crate::utils::{build_context, parse_location, resolve_project};

/// Print whether the saved descriptor was created for the location
pub fn matches_command(
    descriptor_path: &str,
    location_arg: &str,
    project: Option<&str>,
) -> Result<()> {
    let json = fs::read_to_string(descriptor_path)
        .with_context(|| format!("Failed to read descriptor {}", descriptor_path))?;
    let descriptor = RunDescriptor::from_json(&json)
        .with_context(|| format!("Invalid descriptor in {}", descriptor_path))?;
    debug!("Loaded descriptor '{}'", descriptor.name());

    let location = parse_location(location_arg);
    let project = resolve_project(project)?;
    let context = build_context(&location, &project)?;

    let config = Config::load_for(context.location())?;
    let producer = TestConfigProducer::with_config(config);

    let matched = producer.is_configuration_from_context(&descriptor, &context);
    println!("{}", matched);
    Ok(())
}
