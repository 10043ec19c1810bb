//! Load pipeline: design source in, loaded workspace out.

use boardroute_core::{BootError, Catalog, DesignSource, Presenter, StartupConfiguration};

use crate::rules::{self, RulesImport};
use crate::workspace::{Workspace, WorkspaceFactory, WorkspaceSettings};

/// Create a workspace for `source` and feed it the design.
///
/// Steps, in order:
/// 1. open the design stream (`StreamUnavailable` on failure)
/// 2. derive the debug level
/// 3. construct the workspace
/// 4. load the stream (`LoadRejected` on failure; the workspace is dropped)
/// 5. text designs only: best-effort rules import, then refresh views
pub fn load<F: WorkspaceFactory>(
    source: &DesignSource,
    config: &StartupConfiguration,
    factory: &F,
    presenter: &mut dyn Presenter,
) -> Result<F::Workspace, BootError> {
    let mut stream = source.open_stream()?;

    let settings = WorkspaceSettings {
        auto_save_on_exit: config.auto_save_on_exit,
        debug_level: config.debug_level(),
        locale: config.locale,
    };
    let mut workspace = factory.create(source, settings);

    let is_text = source.is_text_interchange_format();
    let accepted = workspace.load(&mut stream, is_text);
    drop(stream);
    if !accepted {
        return Err(BootError::LoadRejected {
            name: source.display_name().to_string(),
        });
    }
    tracing::info!(design = %source.display_name(), text = is_text, "design loaded");

    if is_text {
        let outcome = import_companion_rules(source, &mut workspace, presenter, config);
        tracing::debug!(outcome = ?outcome, "rules import finished");
        workspace.refresh_views();
    }

    Ok(workspace)
}

fn import_companion_rules(
    source: &DesignSource,
    workspace: &mut dyn Workspace,
    presenter: &mut dyn Presenter,
    config: &StartupConfiguration,
) -> RulesImport {
    let catalog = Catalog::for_locale(config.locale);
    rules::import_rules(
        rules::base_name(source.display_name()),
        source.parent_directory(),
        workspace,
        presenter,
        catalog.confirm_import_rules,
    )
}
