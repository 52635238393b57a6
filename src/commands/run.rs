//! Hook execution entry point
//!
//! Resolves configuration once, runs the requested hook against stdin and
//! prints its output. Never returns an error: the host must always see a
//! successful exit.

use std::io;
use std::path::PathBuf;

use crate::config::{load_config_or_default, AriaPaths, HookConfig};
use crate::hooks::{HookContext, HookKind, HookOutput};
use crate::picker::RandomPicker;

/// Run `kind` with the given base directory override
pub fn execute(kind: HookKind, aria_dir: Option<PathBuf>) {
    let Some(paths) = AriaPaths::resolve(aria_dir) else {
        tracing::debug!(hook = kind.name(), "no home directory; nothing to do");
        return;
    };

    let config = load_config_or_default(&paths);
    let output = run_with(kind, &paths, &config, io::stdin().lock());

    if let Err(e) = output.write_to(io::stdout().lock()) {
        tracing::debug!(hook = kind.name(), "failed to write output: {e}");
    }
}

/// Run `kind` with explicit paths, config and input
pub fn run_with<R: io::Read>(
    kind: HookKind,
    paths: &AriaPaths,
    config: &HookConfig,
    stdin: R,
) -> HookOutput {
    let ctx = HookContext::new(paths, config);
    kind.run(&ctx, stdin, &mut RandomPicker)
}
