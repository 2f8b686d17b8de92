// ============================================================================
// mpf-component-cli/src/commands/describe.rs
// ============================================================================
//
// DESCRIBE COMMAND: Implementation of the 'describe' subcommand

use crate::cli::DescribeArgs;
use crate::components::ExampleComponent;
use crate::error::CliResult;
use crate::output;

use mpf_component_core::{AdapterConfig, ComponentType, DataType};
use serde::Serialize;

/// What a component detects and which media it accepts.
#[derive(Debug, Serialize)]
pub struct ComponentDescription {
    pub name: &'static str,
    pub component_type: ComponentType,
    pub detection_type: String,
    pub supports: Vec<DataType>,
}

pub fn execute(args: &DescribeArgs) -> CliResult<()> {
    let selected: Vec<ExampleComponent> = match args.component {
        Some(component) => vec![component],
        None => ExampleComponent::ALL.to_vec(),
    };
    let descriptions: Vec<ComponentDescription> = selected.into_iter().map(describe).collect();
    output::print_json(&descriptions)
}

pub fn describe(component: ExampleComponent) -> ComponentDescription {
    let instance = component.build(AdapterConfig::default());
    ComponentDescription {
        name: component.name(),
        component_type: instance.component_type(),
        detection_type: instance.detection_type().to_string(),
        supports: DataType::ALL
            .into_iter()
            .filter(|data_type| instance.supports(*data_type))
            .collect(),
    }
}
