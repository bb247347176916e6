use anyhow::Result;
use testscope_core::{Config, TestConfigProducer};
use tracing::debug;

use crate::display::{print_command, print_descriptor};
use crate::utils::{build_context, parse_location, resolve_project};

pub fn resolve_command(location_arg: &str, project: Option<&str>, json: bool) -> Result<()> {
    debug!("Resolving: {}", location_arg);

    let location = parse_location(location_arg);
    let project = resolve_project(project)?;
    let context = build_context(&location, &project)?;

    let config = Config::load_for(context.location())?;
    let producer = TestConfigProducer::with_config(config);

    let Some(descriptor) = producer.setup_from_context(&context) else {
        if json {
            println!("null");
        } else {
            println!("❌ No Flutter tests at {}", location_arg);
        }
        return Ok(());
    };

    if json {
        println!("{}", descriptor.to_json()?);
        return Ok(());
    }

    print_descriptor(&descriptor);
    print_command(&producer.command_for(&descriptor));
    Ok(())
}
