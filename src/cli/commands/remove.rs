//! Remove command implementation.
//!
//! The `skillio remove` command deletes an installed skill and its registry
//! record after confirmation.

use crate::cli::args::RemoveArgs;
use crate::error::{ErrorKind, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand<'a> {
    ctx: &'a CommandContext,
    args: RemoveArgs,
}

impl<'a> RemoveCommand<'a> {
    /// Create a new remove command.
    pub fn new(ctx: &'a CommandContext, args: RemoveArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for RemoveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = &self.args.name;
        let installer = self.ctx.installer();

        if !installer.store().load()?.contains(name) {
            ui.error(&format!("Skill '{}' is not installed", name));
            return Ok(CommandResult::from_error_kind(ErrorKind::NotInstalled));
        }

        if !self.args.force {
            let question = format!("Are you sure you want to remove {}?", name);
            if !ui.confirm(&question, false)? {
                ui.message("Cancelled.");
                return Ok(CommandResult::success());
            }
        }

        match installer.remove(name) {
            Ok(path) => {
                ui.success(&format!("Removed {}", name));
                ui.message(&format!("  Deleted {}", path.display()));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::from_error_kind(e.kind()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::test_support::{test_context, TestContext};
    use crate::cli::commands::dispatcher::EXIT_NOT_FOUND;
    use crate::install::InstallOptions;
    use crate::ui::MockUI;

    fn installed_context() -> TestContext {
        let tc = test_context();
        let options = InstallOptions {
            use_external: false,
            ..Default::default()
        };
        tc.ctx.installer().install("git-helper", &options).unwrap();
        tc
    }

    fn args(name: &str, force: bool) -> RemoveArgs {
        RemoveArgs {
            name: name.to_string(),
            force,
        }
    }

    #[test]
    fn removes_after_confirmation() {
        let tc = installed_context();
        let skill_dir = tc.install_root().join("git-helper");
        assert!(skill_dir.exists());
        let mut ui = MockUI::new();
        ui.queue_confirm(true);

        let result = RemoveCommand::new(&tc.ctx, args("git-helper", false))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(
            ui.confirmations(),
            &["Are you sure you want to remove git-helper?".to_string()]
        );
        assert!(ui.has_success("Removed git-helper"));
        assert!(!skill_dir.exists());
        assert!(!tc.ctx.registry_store().load().unwrap().contains("git-helper"));
    }

    #[test]
    fn declined_confirmation_keeps_skill() {
        let tc = installed_context();
        let mut ui = MockUI::new();
        ui.queue_confirm(false);

        let result = RemoveCommand::new(&tc.ctx, args("git-helper", false))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Cancelled."));
        assert!(tc.install_root().join("git-helper").exists());
    }

    #[test]
    fn force_skips_confirmation() {
        let tc = installed_context();
        let mut ui = MockUI::new();

        let result = RemoveCommand::new(&tc.ctx, args("git-helper", true))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.confirmations().is_empty());
    }

    #[test]
    fn not_installed_exits_not_found() {
        let tc = test_context();
        let mut ui = MockUI::new();

        let result = RemoveCommand::new(&tc.ctx, args("git-helper", true))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, EXIT_NOT_FOUND);
        assert!(ui.has_error("not installed"));
    }
}
