pub mod config;
pub mod record;
pub mod report;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let definitions = record::definitions()
        .into_iter()
        .chain(report::definitions())
        .chain(config::definitions())
        .chain(system::definitions());
    for entry in definitions {
        registry.register(entry);
    }
}

/// Splits a trailing `--json` flag off the argument list.
pub(crate) fn take_json_flag<'a>(args: &[&'a str]) -> (bool, Vec<&'a str>) {
    let json = args.iter().any(|arg| arg.eq_ignore_ascii_case("--json"));
    let rest = args
        .iter()
        .copied()
        .filter(|arg| !arg.eq_ignore_ascii_case("--json"))
        .collect();
    (json, rest)
}
